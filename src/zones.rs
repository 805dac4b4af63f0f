//! Control zones and the registry that lays them out and hit-tests them.

use log::debug;
use macroquad::math::Vec2;

use crate::config::ControlsConfig;

/// Identity of an on-screen control. Declaration order is hit-test priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Joystick,
    Fire,
    Field,
    Jump,
    GunSwitchLeft,
    GunSwitchRight,
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::Joystick,
        ControlId::Fire,
        ControlId::Field,
        ControlId::Jump,
        ControlId::GunSwitchLeft,
        ControlId::GunSwitchRight,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Where a zone sits relative to the surface edges.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    BottomLeft { inset_x: f32, inset_y: f32 },
    BottomRight { inset_x: f32, inset_y: f32 },
    TopLeft { x: f32, y: f32 },
}

impl Anchor {
    fn resolve(self, width: f32, height: f32) -> Vec2 {
        match self {
            Anchor::BottomLeft { inset_x, inset_y } => Vec2::new(inset_x, height - inset_y),
            Anchor::BottomRight { inset_x, inset_y } => {
                Vec2::new(width - inset_x, height - inset_y)
            }
            Anchor::TopLeft { x, y } => Vec2::new(x, y),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlZone {
    pub id: ControlId,
    pub center: Vec2,
    /// Activation radius used by the hit test.
    pub hit_radius: f32,
    /// Radius the overlay draws.
    pub draw_radius: f32,
    /// Held down by a contact. Visual feedback only.
    pub active: bool,
    anchor: Anchor,
}

impl ControlZone {
    fn new(id: ControlId, anchor: Anchor, hit_radius: f32, draw_radius: f32) -> Self {
        Self {
            id,
            center: Vec2::ZERO,
            hit_radius,
            draw_radius,
            active: false,
            anchor,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center) < self.hit_radius
    }
}

#[derive(Debug, Clone)]
pub struct ControlRegistry {
    zones: [ControlZone; 6],
}

impl ControlRegistry {
    /// Build the zones described by `cfg`. Centers stay at the origin until
    /// the first [`ControlRegistry::reposition`].
    pub fn new(cfg: &ControlsConfig) -> Self {
        let j = &cfg.joystick;
        let right_button = |id, b: &crate::config::ButtonConfig| {
            ControlZone::new(
                id,
                Anchor::BottomRight {
                    inset_x: b.inset_right,
                    inset_y: b.inset_bottom,
                },
                b.radius,
                b.radius,
            )
        };
        let g = &cfg.gun_switch;
        let gun = |id, [x, y]: [f32; 2]| {
            ControlZone::new(id, Anchor::TopLeft { x, y }, g.hit_radius, g.draw_radius)
        };

        Self {
            zones: [
                ControlZone::new(
                    ControlId::Joystick,
                    Anchor::BottomLeft {
                        inset_x: j.inset_left,
                        inset_y: j.inset_bottom,
                    },
                    j.activation_radius,
                    j.max_radius,
                ),
                right_button(ControlId::Fire, &cfg.fire),
                right_button(ControlId::Field, &cfg.field),
                right_button(ControlId::Jump, &cfg.jump),
                gun(ControlId::GunSwitchLeft, g.left),
                gun(ControlId::GunSwitchRight, g.right),
            ],
        }
    }

    /// Recompute every zone center from the surface size alone.
    pub fn reposition(&mut self, width: f32, height: f32) {
        for zone in &mut self.zones {
            zone.center = zone.anchor.resolve(width, height);
        }
        debug!("controls repositioned for {width}x{height}");
    }

    /// First zone, in priority order, whose activation circle holds `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<ControlId> {
        if !point.is_finite() {
            return None;
        }
        self.zones.iter().find(|z| z.contains(point)).map(|z| z.id)
    }

    pub fn zone(&self, id: ControlId) -> &ControlZone {
        &self.zones[id.index()]
    }

    pub(crate) fn set_active(&mut self, id: ControlId, active: bool) {
        self.zones[id.index()].active = active;
    }

    pub fn zones(&self) -> impl Iterator<Item = &ControlZone> {
        self.zones.iter()
    }
}
