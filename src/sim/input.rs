//! Keyboard state shared between the host's key events and the tick loop

use std::collections::HashMap;

/// Key names the simulation reacts to
pub mod keys {
    pub const ARROW_UP: &str = "ArrowUp";
    pub const ARROW_DOWN: &str = "ArrowDown";
}

/// Held/released state per key name
///
/// Entries appear on the first event for a key; unknown keys read as
/// released. Every key is stored, including ones the game ignores.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    /// Last write wins
    pub fn set(&mut self, key: &str, held: bool) {
        if let Some(state) = self.keys.get_mut(key) {
            *state = held;
        } else {
            self.keys.insert(key.to_string(), held);
        }
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Number of distinct keys seen so far
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
