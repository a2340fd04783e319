//! Per-frame input state.
//!
//! Instead of file-level globals for "last cursor position" and key flags,
//! each tutorial owns a [`KeyboardState`] and a [`MouseState`] and feeds SDL
//! events into them at the top of the frame.

use std::collections::HashSet;

use glam::Vec2;
use sdl2::keyboard::Keycode;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    /// Keys currently held.
    pub down: HashSet<Keycode>,
    /// Keys that went down this frame.
    pub pressed: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the edge-triggered set. Call before polling events.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        self.down.insert(keycode);
        self.pressed.insert(keycode);
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        self.down.remove(&keycode);
    }
}

/// Mouse movement accumulated over the current frame.
#[derive(Default)]
pub struct MouseState {
    pub delta: Vec2,
    pub scroll_delta: Vec2,
}

impl MouseState {
    /// Zeroes the deltas. Call before polling events.
    pub fn begin_frame(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_sets_both_held_and_pressed() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::W);
        assert!(keyboard.down.contains(&Keycode::W));
        assert!(keyboard.pressed.contains(&Keycode::W));
    }

    #[test]
    fn begin_frame_clears_pressed_but_not_held() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::W);
        keyboard.begin_frame();
        assert!(keyboard.down.contains(&Keycode::W));
        assert!(!keyboard.pressed.contains(&Keycode::W));
    }

    #[test]
    fn key_up_releases_the_key() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::Escape);
        keyboard.key_up(Keycode::Escape);
        assert!(!keyboard.down.contains(&Keycode::Escape));
    }

    #[test]
    fn mouse_begin_frame_zeroes_deltas() {
        let mut mouse = MouseState {
            delta: Vec2::new(3.0, -2.0),
            scroll_delta: Vec2::new(0.0, 1.0),
        };
        mouse.begin_frame();
        assert_eq!(mouse.delta, Vec2::ZERO);
        assert_eq!(mouse.scroll_delta, Vec2::ZERO);
    }
}
