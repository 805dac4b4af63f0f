//! Layout and tuning for the control overlay, loadable from TOML.
//!
//! Every field has a default, so a config file only needs to name the
//! values it changes.

use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct JoystickConfig {
    /// Distance of the base center from the left edge.
    pub inset_left: f32,
    /// Distance of the base center from the bottom edge.
    pub inset_bottom: f32,
    pub max_radius: f32,
    pub deadzone: f32,
    /// Touches this close to the base grab the stick. Larger than `max_radius`.
    pub activation_radius: f32,
    pub knob_radius: f32,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            inset_left: 100.0,
            inset_bottom: 100.0,
            max_radius: 60.0,
            deadzone: 10.0,
            activation_radius: 120.0,
            knob_radius: 30.0,
        }
    }
}

/// A round button anchored to the right edge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub inset_right: f32,
    pub inset_bottom: f32,
    pub radius: f32,
}

impl ButtonConfig {
    const fn new(inset_right: f32, inset_bottom: f32, radius: f32) -> Self {
        Self {
            inset_right,
            inset_bottom,
            radius,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new(80.0, 80.0, 50.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GunSwitchConfig {
    /// Absolute position from the top-left corner.
    pub left: [f32; 2],
    pub right: [f32; 2],
    pub hit_radius: f32,
    pub draw_radius: f32,
}

impl Default for GunSwitchConfig {
    fn default() -> Self {
        Self {
            left: [60.0, 60.0],
            right: [140.0, 60.0],
            hit_radius: 35.0,
            draw_radius: 30.0,
        }
    }
}

/// Thresholds turning stick angle/magnitude into on/off intents.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// `|cos(angle)|` must exceed this for any horizontal intent.
    pub horizontal_cos: f32,
    /// `sin(angle)` must exceed this for crouch.
    pub crouch_sin: f32,
    /// Normalized magnitude must exceed this for crouch.
    pub crouch_magnitude: f32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            horizontal_cos: 0.3,
            crouch_sin: 0.5,
            crouch_magnitude: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub enabled: bool,
    pub alpha: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            alpha: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub joystick: JoystickConfig,
    pub fire: ButtonConfig,
    pub field: ButtonConfig,
    pub jump: ButtonConfig,
    pub gun_switch: GunSwitchConfig,
    pub resolver: ResolverConfig,
    pub overlay: OverlayConfig,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            joystick: JoystickConfig::default(),
            fire: ButtonConfig::new(80.0, 80.0, 50.0),
            field: ButtonConfig::new(80.0, 180.0, 45.0),
            jump: ButtonConfig::new(80.0, 280.0, 40.0),
            gun_switch: GunSwitchConfig::default(),
            resolver: ResolverConfig::default(),
            overlay: OverlayConfig::default(),
        }
    }
}

impl ControlsConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: ControlsConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let txt = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&txt)?;
        info!("loaded controls config from {}", path.display());
        Ok(cfg)
    }

    /// Like [`ControlsConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            debug!("no controls config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        let radii = [
            ("joystick.max_radius", self.joystick.max_radius),
            ("joystick.activation_radius", self.joystick.activation_radius),
            ("joystick.knob_radius", self.joystick.knob_radius),
            ("fire.radius", self.fire.radius),
            ("field.radius", self.field.radius),
            ("jump.radius", self.jump.radius),
            ("gun_switch.hit_radius", self.gun_switch.hit_radius),
            ("gun_switch.draw_radius", self.gun_switch.draw_radius),
        ];
        for (name, r) in radii {
            if !r.is_finite() || r <= 0.0 {
                return Err(Error::Invalid(format!("{name} must be positive, got {r}")));
            }
        }
        let j = &self.joystick;
        if !j.deadzone.is_finite() || j.deadzone < 0.0 || j.deadzone >= j.max_radius {
            return Err(Error::Invalid(format!(
                "joystick.deadzone must be in [0, max_radius), got {}",
                j.deadzone
            )));
        }
        let thresholds = [
            ("resolver.horizontal_cos", self.resolver.horizontal_cos),
            ("resolver.crouch_sin", self.resolver.crouch_sin),
            ("resolver.crouch_magnitude", self.resolver.crouch_magnitude),
            ("overlay.alpha", self.overlay.alpha),
        ];
        for (name, t) in thresholds {
            if !(0.0..=1.0).contains(&t) {
                return Err(Error::Invalid(format!("{name} must be in [0, 1], got {t}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = ControlsConfig::from_toml_str("").expect("parse");
        assert_eq!(cfg, ControlsConfig::default());
        assert_eq!(cfg.field.radius, 45.0);
        assert_eq!(cfg.jump.inset_bottom, 280.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let src = r#"
            [joystick]
            deadzone = 4.0

            [fire]
            radius = 64.0

            [overlay]
            enabled = false
        "#;
        let cfg = ControlsConfig::from_toml_str(src).expect("parse");
        assert_eq!(cfg.joystick.deadzone, 4.0);
        assert_eq!(cfg.joystick.max_radius, 60.0);
        assert_eq!(cfg.fire.radius, 64.0);
        assert_eq!(cfg.fire.inset_right, 80.0);
        assert!(!cfg.overlay.enabled);
    }

    #[test]
    fn deadzone_at_max_radius_is_rejected() {
        let src = r#"
            [joystick]
            deadzone = 60.0
        "#;
        let err = ControlsConfig::from_toml_str(src).unwrap_err();
        assert!(matches!(err, Error::Invalid(_)), "{err}");
    }

    #[test]
    fn negative_radius_is_rejected() {
        let src = r#"
            [gun_switch]
            hit_radius = -1.0
        "#;
        assert!(matches!(
            ControlsConfig::from_toml_str(src),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            ControlsConfig::from_toml_str("joystick = 3"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = ControlsConfig::load_or_default("definitely/not/here.toml").expect("defaults");
        assert_eq!(cfg, ControlsConfig::default());
        assert!(matches!(
            ControlsConfig::load("definitely/not/here.toml"),
            Err(Error::Io { .. })
        ));
    }
}
