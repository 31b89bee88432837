use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::*;

/// Inline title editing: Enter saves, Esc discards
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        _ => {
            if let Some(edit) = &mut app.editing {
                handle_text_key(&mut edit.input, key);
            }
        }
    }
}
