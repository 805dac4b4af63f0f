use macroquad::math::Vec2;

use crate::config::{JoystickConfig, ResolverConfig};

/// Directional intents derived from one joystick reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalIntent {
    pub left: bool,
    pub right: bool,
    pub down: bool,
}

impl DirectionalIntent {
    pub const NONE: DirectionalIntent = DirectionalIntent {
        left: false,
        right: false,
        down: false,
    };
}

/// 🧭 Turn a stick reading into discrete intents.
///
/// Pure: the result depends only on the arguments. Inside the deadzone no
/// intent is produced. Beyond `max_radius` the magnitude saturates at 1.0.
/// Screen-space y grows downward, so a positive `sin` means "toward the
/// bottom". There is no upward intent; jumping is a button.
pub fn resolve(
    base: Vec2,
    current: Vec2,
    deadzone: f32,
    max_radius: f32,
    thresholds: &ResolverConfig,
) -> DirectionalIntent {
    let delta = current - base;
    let distance = delta.length();
    if !distance.is_finite() || distance <= deadzone {
        return DirectionalIntent::NONE;
    }

    let angle = delta.y.atan2(delta.x);
    let magnitude = distance.min(max_radius) / max_radius;
    let (sin, cos) = angle.sin_cos();

    let horizontal = cos.abs() > thresholds.horizontal_cos;
    DirectionalIntent {
        left: horizontal && cos < 0.0,
        right: horizontal && cos > 0.0,
        down: sin > thresholds.crouch_sin && magnitude > thresholds.crouch_magnitude,
    }
}

/// 🕹️ Joystick state driven by a single contact.
#[derive(Debug, Clone)]
pub struct JoystickState {
    /// Center of the stick, follows the zone layout
    pub base: Vec2,
    /// Where the finger landed. Not used for resolution, which measures from
    /// `base`; kept for callers that want the grab point.
    pub origin: Vec2,
    /// Current finger position, unclamped
    pub current: Vec2,
    /// Is a contact holding the stick?
    pub active: bool,
    /// Max stick reach (radius)
    pub max_radius: f32,
    pub deadzone: f32,
}

impl JoystickState {
    pub fn new(cfg: &JoystickConfig) -> Self {
        Self {
            base: Vec2::ZERO,
            origin: Vec2::ZERO,
            current: Vec2::ZERO,
            active: false,
            max_radius: cfg.max_radius,
            deadzone: cfg.deadzone,
        }
    }

    /// 🖱️ Touch start - grab the stick at the touch position
    pub fn on_touch_start(&mut self, pos: Vec2) {
        self.origin = pos;
        self.current = pos;
        self.active = true;
    }

    /// 🖱️ Touch move - track the finger. Non-finite positions are dropped.
    pub fn on_touch_move(&mut self, pos: Vec2) {
        if !self.active || !pos.is_finite() {
            return;
        }
        self.current = pos;
    }

    /// 🖱️ Touch end - release the stick
    pub fn on_touch_end(&mut self) {
        self.active = false;
        self.current = self.base;
    }

    pub fn resolve(&self, thresholds: &ResolverConfig) -> DirectionalIntent {
        if !self.active {
            return DirectionalIntent::NONE;
        }
        resolve(
            self.base,
            self.current,
            self.deadzone,
            self.max_radius,
            thresholds,
        )
    }

    /// Where the knob is drawn: the finger position clamped to the ring.
    pub fn knob_position(&self) -> Vec2 {
        let mut delta = self.current - self.base;

        // Keep knob inside circle
        if delta.length() > self.max_radius {
            delta = delta.normalize_or_zero() * self.max_radius;
        }

        self.base + delta
    }
}
