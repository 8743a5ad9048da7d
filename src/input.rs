//! Held-state input boundary.
//!
//! The simulation only ever asks "is this held right now".  Edge detection and
//! rate limiting are left to callers; firing is unlimited.

use bevy::prelude::Resource;
use std::collections::HashSet;

/// Keys the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Escape,
    Space,
    Left,
    Up,
    Right,
    Down,
    Return,
    /// A printable key, lower-cased.
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Read-only view of the current input state.
pub trait InputState {
    fn is_key_pressed(&self, key: GameKey) -> bool;
    fn is_mouse_button_pressed(&self, button: PointerButton) -> bool;
    /// Cursor position in field coordinates `(x = row, y = column)`.
    fn cursor(&self) -> (i32, i32);
}

/// Snapshot of everything held during one frame.
///
/// Rebuilt from Bevy's input resources at the start of each frame; tests
/// fill it by hand.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    keys: HashSet<GameKey>,
    buttons: HashSet<PointerButton>,
    cursor: (i32, i32),
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: impl IntoIterator<Item = GameKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn press(&mut self, key: GameKey) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: GameKey) {
        self.keys.remove(&key);
    }

    pub fn press_button(&mut self, button: PointerButton) {
        self.buttons.insert(button);
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }
}

impl InputState for FrameInput {
    fn is_key_pressed(&self, key: GameKey) -> bool {
        self.keys.contains(&key)
    }

    fn is_mouse_button_pressed(&self, button: PointerButton) -> bool {
        self.buttons.contains(&button)
    }

    fn cursor(&self) -> (i32, i32) {
        self.cursor
    }
}
