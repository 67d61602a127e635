//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global shortcuts work regardless of focus
    match key {
        InputKey::Esc | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(2) => return Some(Message::Animate),
        InputKey::F(3) => return Some(Message::StartQuiz),
        InputKey::F(5) => return Some(Message::Generate),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        _ => {}
    }

    match state.focus {
        Focus::Input => handle_key_input(key),
        Focus::Button(button) => match key {
            InputKey::Enter | InputKey::Char(' ') => Some(Message::ActivateButton(button)),
            InputKey::Left => Some(Message::FocusPrev),
            InputKey::Right => Some(Message::FocusNext),
            _ => None,
        },
    }
}

/// Handle key events while the input field has focus
fn handle_key_input(key: InputKey) -> Option<Message> {
    match key {
        // Enter generates even while a lookup is pending
        InputKey::Enter => Some(Message::Generate),

        // The field holds one character; typing replaces it
        InputKey::Char(c) if !c.is_control() => Some(Message::SetInput(c.to_string())),

        InputKey::Backspace | InputKey::Delete | InputKey::CharCtrl('u') => {
            Some(Message::ClearInput)
        }

        InputKey::Right => Some(Message::FocusNext),

        _ => None,
    }
}
