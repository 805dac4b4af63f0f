//! Drawing the control overlay.

use macroquad::camera::{pop_camera_state, push_camera_state, set_default_camera};
use macroquad::color::{Color, WHITE};
use macroquad::math::Vec2;
use macroquad::shapes::{draw_circle, draw_circle_lines};

use crate::joystick::JoystickState;
use crate::zones::{ControlId, ControlRegistry};

/// Screen-space circle drawing. The overlay only issues these calls.
pub trait OverlayPainter {
    /// Called before any circle; the overlay is drawn in screen space.
    fn begin(&mut self) {}
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color);
    fn end(&mut self) {}
}

/// Paints straight into the macroquad frame, ignoring any world camera.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadPainter;

impl OverlayPainter for MacroquadPainter {
    fn begin(&mut self) {
        push_camera_state();
        set_default_camera();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        draw_circle(center.x, center.y, radius, color);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color) {
        draw_circle_lines(center.x, center.y, radius, thickness, color);
    }

    fn end(&mut self) {
        pop_camera_state();
    }
}

const RING_THICKNESS: f32 = 3.0;
const OUTLINE_THICKNESS: f32 = 2.0;

fn faded(color: Color, alpha: f32) -> Color {
    Color { a: color.a * alpha, ..color }
}

// (idle, active) fill for each held button
fn button_colors(id: ControlId) -> (Color, Color) {
    match id {
        ControlId::Fire => (
            Color::from_rgba(255, 0, 0, 255),
            Color::from_rgba(255, 68, 68, 255),
        ),
        ControlId::Field => (
            Color::from_rgba(0, 255, 0, 255),
            Color::from_rgba(68, 255, 68, 255),
        ),
        ControlId::Jump => (
            Color::from_rgba(0, 0, 255, 255),
            Color::from_rgba(68, 68, 255, 255),
        ),
        _ => {
            let gun = Color::from_rgba(255, 170, 0, 255);
            (gun, gun)
        }
    }
}

/// 🎨 Draw the joystick ring and knob, then every button.
pub fn draw(
    painter: &mut dyn OverlayPainter,
    registry: &ControlRegistry,
    joystick: &JoystickState,
    knob_radius: f32,
    alpha: f32,
) {
    painter.begin();
    let white = faded(WHITE, alpha);

    painter.stroke_circle(joystick.base, joystick.max_radius, RING_THICKNESS, white);
    if joystick.active {
        painter.fill_circle(
            joystick.knob_position(),
            knob_radius,
            faded(Color::from_rgba(0, 204, 255, 255), alpha),
        );
    }

    for zone in registry.zones().filter(|z| z.id != ControlId::Joystick) {
        let (idle, held) = button_colors(zone.id);
        let fill = if zone.active { held } else { idle };
        painter.fill_circle(zone.center, zone.draw_radius, faded(fill, alpha));
        painter.stroke_circle(zone.center, zone.draw_radius, OUTLINE_THICKNESS, white);
    }

    painter.end();
}
