//! Abstract input key event, independent of terminal library.
//!
//! Converted from crossterm key events at the TUI boundary so the app
//! crate never depends on crossterm.

/// Abstract input key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Home,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::Tab, InputKey::BackTab);
    }
}
