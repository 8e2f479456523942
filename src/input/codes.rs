//! Raw input codes shared by the keyboard and gamepad-emulation sources.
//!
//! The extended codes (>= 138) are what platform navigation layers report
//! when a controller drives the UI: left-thumbstick tilts, D-pad presses,
//! and the generic "navigation" actions some remotes emit.

use crossterm::event::{KeyCode, KeyEvent};

pub const BACKSPACE: u16 = 8;
pub const ENTER: u16 = 13;
pub const SPACE: u16 = 32;
pub const LEFT_ARROW: u16 = 37;
pub const UP_ARROW: u16 = 38;
pub const RIGHT_ARROW: u16 = 39;
pub const DOWN_ARROW: u16 = 40;

pub const NAVIGATION_UP: u16 = 138;
pub const NAVIGATION_DOWN: u16 = 139;
pub const NAVIGATION_LEFT: u16 = 140;
pub const NAVIGATION_RIGHT: u16 = 141;
pub const NAVIGATION_ACCEPT: u16 = 142;
pub const NAVIGATION_CANCEL: u16 = 143;

pub const GAMEPAD_A: u16 = 195;
pub const GAMEPAD_B: u16 = 196;
pub const GAMEPAD_DPAD_UP: u16 = 203;
pub const GAMEPAD_DPAD_DOWN: u16 = 204;
pub const GAMEPAD_DPAD_LEFT: u16 = 205;
pub const GAMEPAD_DPAD_RIGHT: u16 = 206;
pub const GAMEPAD_STICK_UP: u16 = 211;
pub const GAMEPAD_STICK_DOWN: u16 = 212;
pub const GAMEPAD_STICK_RIGHT: u16 = 213;
pub const GAMEPAD_STICK_LEFT: u16 = 214;

/// Translate a terminal key event into a raw code.
///
/// Only the keys the player binary navigates with are mapped; everything
/// else returns `None` and is handled (or ignored) at the screen level.
/// Extended gamepad codes never originate here -- they enter through the
/// library API when a real navigation layer feeds the menu directly.
pub fn from_key_event(key: &KeyEvent) -> Option<u16> {
    match key.code {
        KeyCode::Left => Some(LEFT_ARROW),
        KeyCode::Up => Some(UP_ARROW),
        KeyCode::Right => Some(RIGHT_ARROW),
        KeyCode::Down => Some(DOWN_ARROW),
        KeyCode::Enter => Some(ENTER),
        KeyCode::Char(' ') => Some(SPACE),
        KeyCode::Backspace => Some(BACKSPACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_action_keys_translate() {
        assert_eq!(from_key_event(&key(KeyCode::Left)), Some(LEFT_ARROW));
        assert_eq!(from_key_event(&key(KeyCode::Up)), Some(UP_ARROW));
        assert_eq!(from_key_event(&key(KeyCode::Right)), Some(RIGHT_ARROW));
        assert_eq!(from_key_event(&key(KeyCode::Down)), Some(DOWN_ARROW));
        assert_eq!(from_key_event(&key(KeyCode::Enter)), Some(ENTER));
        assert_eq!(from_key_event(&key(KeyCode::Char(' '))), Some(SPACE));
        assert_eq!(from_key_event(&key(KeyCode::Backspace)), Some(BACKSPACE));
    }

    #[test]
    fn other_keys_do_not_translate() {
        assert_eq!(from_key_event(&key(KeyCode::Char('a'))), None);
        assert_eq!(from_key_event(&key(KeyCode::Tab)), None);
        assert_eq!(from_key_event(&key(KeyCode::Esc)), None);
        assert_eq!(from_key_event(&key(KeyCode::F(1))), None);
    }
}
