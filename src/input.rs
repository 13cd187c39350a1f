//! Key mapping from terminal events to core input events.
//!
//! The core expects pre-debounced input: at most one event per tick per
//! direction. [`InputLatch`] does that for the demo driver by keeping only
//! the first mapped key press between two ticks; terminal auto-repeat
//! arriving faster than the tick rate collapses into one event.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputEvent;

/// Map a key press to a core input event.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(InputEvent::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(InputEvent::Right),
        KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('w') => {
            Some(InputEvent::Rotate)
        }
        _ => None,
    }
}

/// Check if a key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if a key should reset the game.
pub fn should_reset(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r'))
}

/// One-event-per-tick input gate.
#[derive(Debug, Default)]
pub struct InputLatch {
    pending: Option<InputEvent>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a key press; the first mapped event per tick wins.
    pub fn press(&mut self, key: KeyEvent) {
        if self.pending.is_none() {
            self.pending = map_key(key);
        }
    }

    /// Hand the latched event to the engine and clear the latch.
    pub fn take(&mut self) -> Option<InputEvent> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(InputEvent::Left));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(InputEvent::Right)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(InputEvent::Left)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(InputEvent::Right)
        );
    }

    #[test]
    fn rotation_keys_map() {
        // Both vertical arrows rotate, like the desktop build.
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(InputEvent::Rotate));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(InputEvent::Rotate)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn quit_and_reset_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('r'))));
        assert!(should_reset(KeyEvent::from(KeyCode::Char('r'))));
    }

    #[test]
    fn latch_keeps_first_event_per_tick() {
        let mut latch = InputLatch::new();
        latch.press(KeyEvent::from(KeyCode::Left));
        latch.press(KeyEvent::from(KeyCode::Right));
        assert_eq!(latch.take(), Some(InputEvent::Left));
        assert_eq!(latch.take(), None);
    }
}
