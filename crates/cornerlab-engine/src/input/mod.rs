//! Input subsystem.
//!
//! Public types are platform-agnostic; [`platform`] translates winit window
//! events into [`InputEvent`]s for the runtime.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseWheelDelta};
