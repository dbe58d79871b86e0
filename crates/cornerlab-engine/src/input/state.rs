use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state of the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies `ev` to the held state and records the transition in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered while unfocused.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, modifiers, repeat } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) || *repeat {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                frame.wheel_lines += delta.lines_y();
            }
        }

        frame.events.push(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn press_and_release_are_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::H, KeyState::Pressed, false));
        assert!(frame.pressed(Key::H));
        assert!(state.key_down(Key::H));

        frame.clear();
        state.apply_event(&mut frame, key(Key::H, KeyState::Pressed, false));
        assert!(!frame.pressed(Key::H));

        state.apply_event(&mut frame, key(Key::H, KeyState::Released, false));
        assert!(frame.keys_released.contains(&Key::H));
        assert!(!state.key_down(Key::H));
    }

    #[test]
    fn auto_repeat_counts_as_a_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::ArrowUp, KeyState::Pressed, false));
        frame.clear();
        state.apply_event(&mut frame, key(Key::ArrowUp, KeyState::Pressed, true));
        assert!(frame.pressed(Key::ArrowUp));
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::S, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn wheel_accumulates_lines() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let modifiers = Modifiers::default();
        state.apply_event(
            &mut frame,
            InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: 1.0 }, modifiers },
        );
        state.apply_event(
            &mut frame,
            InputEvent::MouseWheel { delta: MouseWheelDelta::Pixel { x: 0.0, y: 60.0 }, modifiers },
        );
        assert_eq!(frame.wheel_lines, 2.5);
        assert_eq!(frame.wheel_steps(), 2);

        frame.clear();
        assert_eq!(frame.wheel_steps(), 0);
        assert!(frame.is_empty());
    }
}
