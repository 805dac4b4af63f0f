//! 🕹️ On-screen joystick and buttons for touch-driven macroquad games.
//!
//! Feed [`event::poll`] into a [`TouchControlSurface`] each frame, call
//! [`TouchControlSurface::tick`], then read [`TouchControlSurface::input`].

pub mod config;
pub mod error;
pub mod event;
pub mod input_state;
pub mod joystick;
pub mod overlay;
pub mod surface;
pub mod tracker;
pub mod zones;

pub use config::ControlsConfig;
pub use error::{Error, Result};
pub use event::{ContactEvent, ContactId, ContactPhase};
pub use input_state::{InputState, Intent};
pub use surface::{GunSwitch, SwitchDirection, TouchControlSurface};
pub use zones::ControlId;
