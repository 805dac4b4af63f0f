//! One contact-event type for both touch screens and mice.

use macroquad::input::{
    is_mouse_button_down, is_mouse_button_pressed, is_mouse_button_released, mouse_position,
    touches, MouseButton, Touch, TouchPhase,
};
use macroquad::math::Vec2;

/// Stable identity of one touch or press, from start to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactId {
    Touch(u64),
    /// The single synthetic contact of a pointer device.
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Start,
    Move,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactEvent {
    pub id: ContactId,
    pub phase: ContactPhase,
    pub pos: Vec2,
}

impl ContactEvent {
    pub fn start(id: ContactId, x: f32, y: f32) -> Self {
        Self {
            id,
            phase: ContactPhase::Start,
            pos: Vec2::new(x, y),
        }
    }

    pub fn moved(id: ContactId, x: f32, y: f32) -> Self {
        Self {
            id,
            phase: ContactPhase::Move,
            pos: Vec2::new(x, y),
        }
    }

    pub fn end(id: ContactId, x: f32, y: f32) -> Self {
        Self {
            id,
            phase: ContactPhase::End,
            pos: Vec2::new(x, y),
        }
    }
}

/// Left-button state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseSnapshot {
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub pos: Vec2,
}

/// Convert this frame's touches, in arrival order.
pub fn from_touches(touches: &[Touch]) -> Vec<ContactEvent> {
    touches
        .iter()
        .filter_map(|touch| {
            let id = ContactId::Touch(touch.id);
            let (x, y) = (touch.position.x, touch.position.y);
            match touch.phase {
                TouchPhase::Started => Some(ContactEvent::start(id, x, y)),
                TouchPhase::Moved => Some(ContactEvent::moved(id, x, y)),
                TouchPhase::Ended | TouchPhase::Cancelled => Some(ContactEvent::end(id, x, y)),
                _ => None,
            }
        })
        .collect()
}

/// The mouse acts as one contact while the left button is held.
pub fn from_mouse(mouse: MouseSnapshot) -> Option<ContactEvent> {
    let (x, y) = (mouse.pos.x, mouse.pos.y);
    if mouse.pressed {
        Some(ContactEvent::start(ContactId::Mouse, x, y))
    } else if mouse.down {
        Some(ContactEvent::moved(ContactId::Mouse, x, y))
    } else if mouse.released {
        Some(ContactEvent::end(ContactId::Mouse, x, y))
    } else {
        None
    }
}

/// 📥 Gather this frame's contact events from macroquad.
///
/// Touches win; the mouse is only consulted when no touch is reported.
pub fn poll() -> Vec<ContactEvent> {
    let touches = touches();
    if !touches.is_empty() {
        return from_touches(&touches);
    }

    // Fallback to mouse for desktop
    let (x, y) = mouse_position();
    let mouse = MouseSnapshot {
        pressed: is_mouse_button_pressed(MouseButton::Left),
        down: is_mouse_button_down(MouseButton::Left),
        released: is_mouse_button_released(MouseButton::Left),
        pos: Vec2::new(x, y),
    };
    from_mouse(mouse).into_iter().collect()
}

/// Is any finger or the left mouse button physically down right now?
pub fn any_contact_down() -> bool {
    !touches().is_empty() || is_mouse_button_down(MouseButton::Left)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> Touch {
        Touch {
            id,
            phase,
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn touch_phases_map_and_keep_order() {
        let events = from_touches(&[
            touch(3, TouchPhase::Started, 1.0, 2.0),
            touch(4, TouchPhase::Stationary, 0.0, 0.0),
            touch(5, TouchPhase::Moved, 3.0, 4.0),
            touch(6, TouchPhase::Cancelled, 5.0, 6.0),
            touch(7, TouchPhase::Ended, 7.0, 8.0),
        ]);
        assert_eq!(
            events,
            vec![
                ContactEvent::start(ContactId::Touch(3), 1.0, 2.0),
                ContactEvent::moved(ContactId::Touch(5), 3.0, 4.0),
                ContactEvent::end(ContactId::Touch(6), 5.0, 6.0),
                ContactEvent::end(ContactId::Touch(7), 7.0, 8.0),
            ]
        );
    }

    #[test]
    fn mouse_press_beats_held() {
        let m = MouseSnapshot {
            pressed: true,
            down: true,
            pos: Vec2::new(10.0, 20.0),
            ..Default::default()
        };
        assert_eq!(
            from_mouse(m),
            Some(ContactEvent::start(ContactId::Mouse, 10.0, 20.0))
        );
    }

    #[test]
    fn idle_mouse_emits_nothing() {
        assert_eq!(from_mouse(MouseSnapshot::default()), None);
        let up = MouseSnapshot {
            released: true,
            ..Default::default()
        };
        assert_eq!(from_mouse(up).map(|e| e.phase), Some(ContactPhase::End));
    }
}
