//! Abstract input events, independent of terminal library.
//!
//! `InputKey` and `PointerPhase` keep hanzi-app free of crossterm types; the
//! TUI converts its events at the boundary.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

/// Stage of a pointer gesture on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Button pressed
    Down,
    /// Moved with the button held
    Drag,
    /// Button released
    Up,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::Tab, InputKey::BackTab);
        assert_eq!(InputKey::F(2), InputKey::F(2));
    }
}
