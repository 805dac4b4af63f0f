//! The touch control surface: event ingestion, per-tick resolution, drawing.

use log::{debug, info, trace};
use macroquad::math::Vec2;

use crate::config::ControlsConfig;
use crate::event::{ContactEvent, ContactId, ContactPhase};
use crate::input_state::{InputState, Intent};
use crate::joystick::JoystickState;
use crate::overlay::{self, OverlayPainter};
use crate::tracker::{Bind, ContactTracker};
use crate::zones::{ControlId, ControlRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchDirection {
    Previous,
    Next,
}

impl SwitchDirection {
    /// `-1` or `+1`.
    pub fn step(self) -> i32 {
        match self {
            SwitchDirection::Previous => -1,
            SwitchDirection::Next => 1,
        }
    }
}

/// Weapon cycling, owned by the game.
pub trait GunSwitch {
    fn switch_gun(&mut self, direction: SwitchDirection);
}

impl<F: FnMut(SwitchDirection)> GunSwitch for F {
    fn switch_gun(&mut self, direction: SwitchDirection) {
        self(direction)
    }
}

fn button_intent(control: ControlId) -> Option<Intent> {
    match control {
        ControlId::Fire => Some(Intent::Fire),
        ControlId::Field => Some(Intent::Field),
        ControlId::Jump => Some(Intent::Up),
        _ => None,
    }
}

/// 📱 Virtual joystick plus buttons writing into an owned [`InputState`].
///
/// Input events only touch contact bookkeeping and button flags. Directional
/// intent is computed once per [`tick`](Self::tick) from the tracked stick
/// position, after the frame's events have been applied.
pub struct TouchControlSurface<G> {
    config: ControlsConfig,
    registry: ControlRegistry,
    tracker: ContactTracker,
    joystick: JoystickState,
    input: InputState,
    gun_switch: G,
    enabled: bool,
}

impl<G: GunSwitch> TouchControlSurface<G> {
    /// Build the surface and lay it out for a `width` x `height` screen.
    pub fn init(
        config: ControlsConfig,
        input: InputState,
        gun_switch: G,
        width: f32,
        height: f32,
    ) -> Self {
        let mut surface = Self {
            registry: ControlRegistry::new(&config),
            tracker: ContactTracker::new(),
            joystick: JoystickState::new(&config.joystick),
            enabled: config.overlay.enabled,
            config,
            input,
            gun_switch,
        };
        surface.reposition(width, height);
        info!("touch controls initialized for {width}x{height}");
        surface
    }

    /// Lay the zones out again for a new screen size.
    ///
    /// Held contacts stay bound. The stick base follows its zone while the
    /// finger position stays where it is in screen coordinates.
    pub fn reposition(&mut self, width: f32, height: f32) {
        self.registry.reposition(width, height);
        self.joystick.base = self.registry.zone(ControlId::Joystick).center;
        if !self.joystick.active {
            self.joystick.current = self.joystick.base;
        }
    }

    pub fn on_contact_start(&mut self, id: ContactId, x: f32, y: f32) {
        // An id that starts again without ending first gives up what it held,
        // whether or not the new start lands on a control.
        if self.tracker.control_of(id).is_some() {
            self.on_contact_end(id);
        }

        let pos = Vec2::new(x, y);
        let Some(control) = self.registry.hit_test(pos) else {
            trace!("{id:?} at ({x}, {y}) missed every control");
            return;
        };

        match control {
            ControlId::GunSwitchLeft | ControlId::GunSwitchRight => {
                let direction = if control == ControlId::GunSwitchLeft {
                    SwitchDirection::Previous
                } else {
                    SwitchDirection::Next
                };
                debug!("{id:?} switches gun {}", direction.step());
                self.gun_switch.switch_gun(direction);
            }
            ControlId::Joystick => {
                if let Bind::TookOver(prev) = self.tracker.bind(id, control) {
                    debug!("{id:?} takes the joystick from {prev:?}");
                }
                self.joystick.on_touch_start(pos);
                debug!("{id:?} bound to joystick");
            }
            ControlId::Fire | ControlId::Field | ControlId::Jump => {
                match self.tracker.bind(id, control) {
                    Bind::Rejected { holder } => {
                        debug!("{id:?} ignored, {control:?} is held by {holder:?}");
                        return;
                    }
                    Bind::Bound | Bind::TookOver(_) => {}
                }
                if let Some(intent) = button_intent(control) {
                    self.input.press(intent);
                }
                self.registry.set_active(control, true);
                debug!("{id:?} bound to {control:?}");
            }
        }
    }

    pub fn on_contact_move(&mut self, id: ContactId, x: f32, y: f32) {
        match self.tracker.control_of(id) {
            Some(ControlId::Joystick) => self.joystick.on_touch_move(Vec2::new(x, y)),
            Some(_) => {}
            None => trace!("move for untracked {id:?}"),
        }
    }

    /// Release whatever `id` held. Unknown ids are ignored.
    pub fn on_contact_end(&mut self, id: ContactId) {
        let Some(control) = self.tracker.unbind(id) else {
            trace!("end for untracked {id:?}");
            return;
        };
        self.release(control);
        debug!("{id:?} released {control:?}");
    }

    fn release(&mut self, control: ControlId) {
        if control == ControlId::Joystick {
            self.joystick.on_touch_end();
            self.input.clear_directional();
        } else if let Some(intent) = button_intent(control) {
            self.input.release(intent);
            self.registry.set_active(control, false);
        }
    }

    /// End every tracked contact, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        let held: Vec<_> = self.tracker.drain().collect();
        for (id, control) in held {
            self.release(control);
            debug!("{id:?} force-released {control:?}");
        }
    }

    pub fn handle(&mut self, event: ContactEvent) {
        let ContactEvent { id, phase, pos } = event;
        match phase {
            ContactPhase::Start => self.on_contact_start(id, pos.x, pos.y),
            ContactPhase::Move => self.on_contact_move(id, pos.x, pos.y),
            ContactPhase::End => self.on_contact_end(id),
        }
    }

    /// Apply a frame's events in arrival order.
    pub fn handle_batch(&mut self, events: impl IntoIterator<Item = ContactEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    /// 🔁 Recompute directional intent from the tracked stick position.
    pub fn tick(&mut self) {
        if !self.joystick.active {
            return;
        }
        let intent = self.joystick.resolve(&self.config.resolver);
        self.input
            .apply_directional(intent.left, intent.right, intent.down);
    }

    pub fn render(&self, painter: &mut dyn OverlayPainter) {
        if !self.enabled {
            return;
        }
        overlay::draw(
            painter,
            &self.registry,
            &self.joystick,
            self.config.joystick.knob_radius,
            self.config.overlay.alpha,
        );
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn registry(&self) -> &ControlRegistry {
        &self.registry
    }

    pub fn joystick(&self) -> &JoystickState {
        &self.joystick
    }

    pub fn tracked_contacts(&self) -> usize {
        self.tracker.len()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Hide or show the overlay. Input keeps working either way.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn gun_switch(&self) -> &G {
        &self.gun_switch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::tests::Recorder;

    type Switches = Vec<SwitchDirection>;

    #[derive(Default)]
    struct Log(Switches);

    impl GunSwitch for Log {
        fn switch_gun(&mut self, direction: SwitchDirection) {
            self.0.push(direction);
        }
    }

    const T1: ContactId = ContactId::Touch(1);
    const T2: ContactId = ContactId::Touch(2);

    fn surface() -> TouchControlSurface<Log> {
        TouchControlSurface::init(
            ControlsConfig::default(),
            InputState::new(),
            Log::default(),
            800.0,
            600.0,
        )
    }

    #[test]
    fn fire_press_and_release() {
        let mut s = surface();
        s.on_contact_start(T1, 720.0, 520.0);
        assert!(s.input().fire);
        assert!(s.registry().zone(ControlId::Fire).active);
        s.on_contact_end(T1);
        assert!(!s.input().fire);
        assert!(!s.registry().zone(ControlId::Fire).active);
        assert_eq!(s.tracked_contacts(), 0);
    }

    #[test]
    fn jump_raises_up() {
        let mut s = surface();
        s.on_contact_start(T1, 720.0, 320.0);
        assert!(s.input().up);
        s.on_contact_end(T1);
        assert!(!s.input().up);
    }

    #[test]
    fn joystick_intent_waits_for_tick() {
        let mut s = surface();
        s.on_contact_start(T1, 100.0, 500.0);
        s.on_contact_move(T1, 160.0, 500.0);
        assert!(!s.input().right);
        s.tick();
        assert!(s.input().right);
        s.on_contact_end(T1);
        assert_eq!(*s.input(), InputState::default());
    }

    #[test]
    fn returning_to_deadzone_clears_direction() {
        let mut s = surface();
        s.on_contact_start(T1, 100.0, 500.0);
        s.on_contact_move(T1, 100.0, 560.0);
        s.tick();
        assert!(s.input().down);
        s.on_contact_move(T1, 105.0, 505.0);
        s.tick();
        assert!(!s.input().down && !s.input().left && !s.input().right);
    }

    #[test]
    fn unknown_end_changes_nothing() {
        let mut s = surface();
        s.on_contact_start(T1, 720.0, 420.0);
        let before = *s.input();
        s.on_contact_end(T2);
        s.on_contact_end(ContactId::Mouse);
        assert_eq!(*s.input(), before);
        assert_eq!(s.tracked_contacts(), 1);
    }

    #[test]
    fn gun_switch_fires_once_and_keeps_no_binding() {
        let mut s = surface();
        s.on_contact_start(T1, 60.0, 60.0);
        s.on_contact_start(T2, 140.0, 60.0);
        assert_eq!(
            s.gun_switch().0,
            vec![SwitchDirection::Previous, SwitchDirection::Next]
        );
        assert_eq!(s.tracked_contacts(), 0);
        s.on_contact_move(T1, 300.0, 300.0);
        s.on_contact_end(T1);
        assert_eq!(s.gun_switch().0.len(), 2);
        assert_eq!(*s.input(), InputState::default());
    }

    #[test]
    fn second_finger_on_held_button_is_ignored() {
        let mut s = surface();
        s.on_contact_start(T1, 720.0, 520.0);
        s.on_contact_start(T2, 725.0, 525.0);
        s.on_contact_end(T2);
        assert!(s.input().fire, "T2 must not release T1's press");
        s.on_contact_end(T1);
        assert!(!s.input().fire);
    }

    #[test]
    fn newer_finger_takes_the_stick() {
        let mut s = surface();
        s.on_contact_start(T1, 100.0, 500.0);
        s.on_contact_start(T2, 110.0, 500.0);
        s.on_contact_move(T2, 40.0, 500.0);
        // T1 no longer owns the stick
        s.on_contact_move(T1, 160.0, 500.0);
        s.on_contact_end(T1);
        s.tick();
        assert!(s.joystick().active);
        assert!(s.input().left && !s.input().right);
        s.on_contact_end(T2);
        assert!(!s.input().left);
    }

    #[test]
    fn restarted_id_releases_previous_control() {
        let mut s = surface();
        s.on_contact_start(T1, 720.0, 520.0);
        s.on_contact_start(T1, 720.0, 420.0);
        assert!(!s.input().fire);
        assert!(s.input().field);
    }

    #[test]
    fn restart_on_empty_space_drops_the_stick() {
        let mut s = surface();
        s.on_contact_start(T1, 100.0, 500.0);
        s.on_contact_move(T1, 160.0, 500.0);
        s.tick();
        assert!(s.input().right);

        s.on_contact_start(T1, 400.0, 300.0);
        s.on_contact_move(T1, 420.0, 300.0);
        s.tick();
        assert_eq!(s.tracked_contacts(), 0);
        assert!(!s.joystick().active);
        assert_eq!(*s.input(), InputState::default());
    }

    #[test]
    fn non_finite_start_is_a_miss() {
        let mut s = surface();
        s.on_contact_start(T1, f32::NAN, 500.0);
        assert_eq!(s.tracked_contacts(), 0);
        assert!(!s.joystick().active);
    }

    #[test]
    fn resize_mid_drag_keeps_binding() {
        let mut s = surface();
        s.on_contact_start(T1, 100.0, 500.0);
        s.on_contact_move(T1, 160.0, 500.0);
        s.reposition(1024.0, 768.0);
        assert_eq!(s.joystick().base, Vec2::new(100.0, 668.0));
        assert_eq!(s.joystick().current, Vec2::new(160.0, 500.0));
        s.on_contact_end(T1);
        assert!(!s.joystick().active);
        assert_eq!(s.tracked_contacts(), 0);
    }

    #[test]
    fn release_all_clears_every_intent() {
        let mut s = surface();
        s.handle_batch([
            ContactEvent::start(T1, 100.0, 500.0),
            ContactEvent::moved(T1, 40.0, 500.0),
            ContactEvent::start(T2, 720.0, 520.0),
            ContactEvent::start(ContactId::Touch(3), 720.0, 420.0),
            ContactEvent::start(ContactId::Touch(4), 720.0, 320.0),
        ]);
        s.tick();
        assert!(s.input().left && s.input().fire && s.input().field && s.input().up);
        s.release_all();
        assert_eq!(*s.input(), InputState::default());
        assert_eq!(s.tracked_contacts(), 0);
        assert!(s.registry().zones().all(|z| !z.active));
    }

    #[test]
    fn disabled_overlay_draws_nothing() {
        let mut s = surface();
        s.set_enabled(false);
        let mut rec = Recorder::default();
        s.render(&mut rec);
        assert!(rec.calls.is_empty());
        s.set_enabled(true);
        s.render(&mut rec);
        assert!(!rec.calls.is_empty());
    }

    #[test]
    fn closures_work_as_gun_switch() {
        let mut steps = 0;
        {
            let mut s = TouchControlSurface::init(
                ControlsConfig::default(),
                InputState::new(),
                |d: SwitchDirection| steps += d.step(),
                800.0,
                600.0,
            );
            s.on_contact_start(T1, 140.0, 60.0);
            s.on_contact_start(T2, 140.0, 60.0);
        }
        assert_eq!(steps, 2);
    }
}
