//! Classification of raw input codes into navigation intents.
//!
//! The table is fixed at compile time: each intent owns a small set of codes
//! (standard key, analog-stick emulation, D-pad emulation, platform
//! navigation emulation). Whether the extended gamepad codes are honored is
//! an explicit capability flag passed by the caller, never read from ambient
//! platform state, so tests can simulate any platform deterministically.

use crate::input::codes;

/// An abstract navigation direction or action derived from a raw code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Left,
    Right,
    Up,
    Down,
    Accept,
    Cancel,
}

impl Intent {
    /// Menus collapse directions into two composites: left and down both
    /// advance the cursor.
    pub fn is_forward(self) -> bool {
        matches!(self, Intent::Left | Intent::Down)
    }

    /// Up and right both retreat the cursor.
    pub fn is_backward(self) -> bool {
        matches!(self, Intent::Up | Intent::Right)
    }
}

const LEFT_CODES: &[u16] = &[
    codes::LEFT_ARROW,
    codes::GAMEPAD_STICK_LEFT,
    codes::GAMEPAD_DPAD_LEFT,
    codes::NAVIGATION_LEFT,
];

const RIGHT_CODES: &[u16] = &[
    codes::RIGHT_ARROW,
    codes::GAMEPAD_STICK_RIGHT,
    codes::GAMEPAD_DPAD_RIGHT,
    codes::NAVIGATION_RIGHT,
];

const UP_CODES: &[u16] = &[
    codes::UP_ARROW,
    codes::GAMEPAD_STICK_UP,
    codes::GAMEPAD_DPAD_UP,
    codes::NAVIGATION_UP,
];

const DOWN_CODES: &[u16] = &[
    codes::DOWN_ARROW,
    codes::GAMEPAD_STICK_DOWN,
    codes::GAMEPAD_DPAD_DOWN,
    codes::NAVIGATION_DOWN,
];

const ACCEPT_CODES: &[u16] = &[
    codes::SPACE,
    codes::ENTER,
    codes::NAVIGATION_ACCEPT,
    codes::GAMEPAD_A,
];

const CANCEL_CODES: &[u16] = &[
    codes::BACKSPACE,
    codes::NAVIGATION_CANCEL,
    codes::GAMEPAD_B,
];

/// Codes a plain keyboard produces; the only recognized set when the
/// extended gamepad capability is off.
const KEYBOARD_CODES: &[u16] = &[
    codes::LEFT_ARROW,
    codes::RIGHT_ARROW,
    codes::UP_ARROW,
    codes::DOWN_ARROW,
    codes::SPACE,
    codes::ENTER,
    codes::BACKSPACE,
];

/// Classify a raw code into an intent.
///
/// Pure and deterministic. Unrecognized codes return `None`, as do the
/// extended gamepad/navigation codes when `extended_pad` is false.
pub fn classify(code: u16, extended_pad: bool) -> Option<Intent> {
    if !extended_pad && !KEYBOARD_CODES.contains(&code) {
        return None;
    }

    if LEFT_CODES.contains(&code) {
        Some(Intent::Left)
    } else if RIGHT_CODES.contains(&code) {
        Some(Intent::Right)
    } else if UP_CODES.contains(&code) {
        Some(Intent::Up)
    } else if DOWN_CODES.contains(&code) {
        Some(Intent::Down)
    } else if ACCEPT_CODES.contains(&code) {
        Some(Intent::Accept)
    } else if CANCEL_CODES.contains(&code) {
        Some(Intent::Cancel)
    } else {
        None
    }
}
