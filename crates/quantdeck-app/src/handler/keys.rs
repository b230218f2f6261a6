//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use quantdeck_core::Section;

/// Convert key events to messages
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Sidebar navigation
        InputKey::Up | InputKey::Char('k') | InputKey::BackTab => Some(Message::PreviousSection),
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::NextSection),
        InputKey::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Section::from_index(d as usize - 1))
            .map(Message::SelectSection),

        InputKey::Char('r') | InputKey::Enter => Some(Message::Reload),

        // Content scrolling
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Char('K') => Some(Message::ScrollUp),
        InputKey::Char('J') => Some(Message::ScrollDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),

        InputKey::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}
