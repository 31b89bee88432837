use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

/// Search bar has focus: every edit re-filters the board immediately
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        // Keep the query, back to the list
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            app.mode = Mode::Navigate;
        }
        // Clear the query, back to the list
        KeyCode::Esc => {
            app.search.clear();
            app.search_changed();
            app.mode = Mode::Navigate;
        }
        _ => {
            let before = app.search.text().to_string();
            if handle_text_key(&mut app.search, key) && app.search.text() != before {
                tracing::trace!(query = %app.search.text(), "search changed");
                app.search_changed();
            }
        }
    }
}
