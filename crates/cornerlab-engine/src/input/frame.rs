use std::collections::HashSet;

use super::types::{InputEvent, Key};

/// Input collected since the last frame.
///
/// [`InputState`](super::InputState) holds what is currently down; this holds
/// the transitions. The runtime clears it after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame, auto-repeat included.
    pub keys_pressed: HashSet<Key>,

    pub keys_released: HashSet<Key>,

    /// Accumulated vertical wheel movement in lines.
    pub wheel_lines: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.wheel_lines = 0.0;
    }

    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whole wheel steps taken this frame; fractions are dropped.
    pub fn wheel_steps(&self) -> i32 {
        self.wheel_lines.trunc() as i32
    }
}
