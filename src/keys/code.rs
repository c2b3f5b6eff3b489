//! Key code and transition definitions
//!
//! Provides the closed enumeration of keys the capture core understands,
//! plus the down/up direction a hook attaches to each raw transition.

use serde::{Deserialize, Serialize};

/// Identifier for a physical/virtual key.
///
/// The enumeration is closed and stable: every variant has a defined
/// (possibly suppressed) translation. Variant names are part of the
/// observable output grammar, because keys without an explicit mapping
/// are emitted as `[<VariantName>]` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Letter keys
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Top-row digit keys
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,

    // Numeric keypad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadMultiply,
    NumpadAdd,
    NumpadSubtract,
    NumpadDecimal,
    NumpadDivide,

    // Momentary modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Toggle locks
    CapsLock,
    NumLock,
    ScrollLock,

    // Named non-printable keys
    Enter,
    Space,
    Backspace,
    Tab,
    Escape,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Left,
    Right,
    Up,
    Down,

    // Punctuation (OEM) keys with unshifted/shifted glyph pairs
    OemComma,
    OemPeriod,
    OemQuestion,
    OemSemicolon,
    OemQuotes,
    OemOpenBrackets,
    OemCloseBrackets,
    OemPipe,
    OemMinus,
    OemPlus,
    OemTilde,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Keys reached only by the fallback token rule
    MetaLeft,
    MetaRight,
    Menu,
    PrintScreen,
    Pause,
}

impl KeyCode {
    /// Momentary modifier keys (shift, control, alt).
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::ShiftLeft
                | KeyCode::ShiftRight
                | KeyCode::ControlLeft
                | KeyCode::ControlRight
                | KeyCode::AltLeft
                | KeyCode::AltRight
        )
    }

    /// Toggle-mode lock keys (caps, num, scroll).
    pub fn is_lock(self) -> bool {
        matches!(
            self,
            KeyCode::CapsLock | KeyCode::NumLock | KeyCode::ScrollLock
        )
    }

    /// Either shift key.
    pub fn is_shift(self) -> bool {
        matches!(self, KeyCode::ShiftLeft | KeyCode::ShiftRight)
    }
}

/// Direction of a key transition as delivered by a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Key pressed (or OS auto-repeat while held)
    Down,
    /// Key released
    Up,
}

/// A single raw key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTransition {
    /// Which key moved
    pub code: KeyCode,
    /// Which way it moved
    pub direction: Direction,
}

impl KeyTransition {
    /// A down transition for `code`
    pub fn down(code: KeyCode) -> Self {
        Self {
            code,
            direction: Direction::Down,
        }
    }

    /// An up transition for `code`
    pub fn up(code: KeyCode) -> Self {
        Self {
            code,
            direction: Direction::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_classification() {
        assert!(KeyCode::ShiftLeft.is_modifier());
        assert!(KeyCode::AltRight.is_modifier());
        assert!(!KeyCode::CapsLock.is_modifier());
        assert!(!KeyCode::A.is_modifier());
    }

    #[test]
    fn test_lock_classification() {
        assert!(KeyCode::CapsLock.is_lock());
        assert!(KeyCode::ScrollLock.is_lock());
        assert!(!KeyCode::ShiftLeft.is_lock());
        assert!(!KeyCode::NumpadAdd.is_lock());
    }

    #[test]
    fn test_shift_classification() {
        assert!(KeyCode::ShiftLeft.is_shift());
        assert!(KeyCode::ShiftRight.is_shift());
        assert!(!KeyCode::ControlLeft.is_shift());
    }

    #[test]
    fn test_transition_constructors() {
        let down = KeyTransition::down(KeyCode::A);
        assert_eq!(down.code, KeyCode::A);
        assert_eq!(down.direction, Direction::Down);

        let up = KeyTransition::up(KeyCode::A);
        assert_eq!(up.direction, Direction::Up);
    }

    #[test]
    fn test_transition_serialization() {
        let transition = KeyTransition::down(KeyCode::D5);
        let json = serde_json::to_string(&transition).unwrap();
        assert!(json.contains("D5"));
        assert!(json.contains("down"));

        let back: KeyTransition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transition);
    }
}
