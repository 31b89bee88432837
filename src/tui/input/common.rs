use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::TextInput;

/// Apply a line-editing key to a text input. Returns true if the key was
/// consumed.
pub(super) fn handle_text_key(input: &mut TextInput, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => input.insert_char(c),
        (_, KeyCode::Backspace) => input.backspace(),
        (_, KeyCode::Delete) => input.delete(),
        (_, KeyCode::Left) => input.move_left(),
        (_, KeyCode::Right) => input.move_right(),
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => input.move_home(),
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => input.move_end(),
        // Clear the whole line
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => input.clear(),
        _ => return false,
    }
    true
}
