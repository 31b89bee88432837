use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Delete confirmation: y/Enter deletes, n/Esc cancels, anything else is ignored
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) | (_, KeyCode::Enter) => app.confirm_delete(),
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => app.cancel_modal(),
        _ => {}
    }
}
