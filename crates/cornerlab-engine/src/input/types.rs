use std::fmt;

/// Keys the runtime distinguishes.
///
/// Anything else maps to `Unknown` with the platform key code when one exists.
/// Ordering follows declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Key {
    Escape,
    Space,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Digit1,
    Digit2,
    Digit3,

    H,
    S,

    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse wheel delta. `Line` is notched wheel input, `Pixel` is touchpad-style.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    /// Physical pixels.
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Pixel deltas per wheel line.
    pub const PIXELS_PER_LINE: f32 = 40.0;

    /// Vertical delta in wheel lines, positive away from the user.
    pub fn lines_y(&self) -> f32 {
        match *self {
            MouseWheelDelta::Line { y, .. } => y,
            MouseWheelDelta::Pixel { y, .. } => y / Self::PIXELS_PER_LINE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True for auto-repeat presses.
        repeat: bool,
    },

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    Focused(bool),
}
