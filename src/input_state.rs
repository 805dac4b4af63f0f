/// 🎮 Intent flags read by the game loop every frame.
///
/// The control surface owns one of these and is the only writer. Every
/// setter is idempotent, and every flag a contact can raise has a matching
/// release path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub field: bool,
}

/// A single intent flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Left,
    Right,
    Up,
    Down,
    Fire,
    Field,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, intent: Intent) -> bool {
        match intent {
            Intent::Left => self.left,
            Intent::Right => self.right,
            Intent::Up => self.up,
            Intent::Down => self.down,
            Intent::Fire => self.fire,
            Intent::Field => self.field,
        }
    }

    pub(crate) fn set(&mut self, intent: Intent, value: bool) {
        let flag = match intent {
            Intent::Left => &mut self.left,
            Intent::Right => &mut self.right,
            Intent::Up => &mut self.up,
            Intent::Down => &mut self.down,
            Intent::Fire => &mut self.fire,
            Intent::Field => &mut self.field,
        };
        *flag = value;
    }

    pub(crate) fn press(&mut self, intent: Intent) {
        self.set(intent, true);
    }

    pub(crate) fn release(&mut self, intent: Intent) {
        self.set(intent, false);
    }

    /// Write the joystick's share of the flags in one go.
    pub(crate) fn apply_directional(&mut self, left: bool, right: bool, down: bool) {
        self.left = left;
        self.right = right;
        self.down = down;
    }

    /// Drop the joystick-owned flags (`up` belongs to the jump button).
    pub(crate) fn clear_directional(&mut self) {
        self.apply_directional(false, false, false);
    }
}
