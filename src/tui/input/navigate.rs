use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::PageUp => app.move_cursor(-10),

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_cursor_task(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_add_form(),

        // Search and filter
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('f') => app.open_filter_popup(),
        KeyCode::Esc if !app.search.is_empty() => {
            // Priority filter stays
            app.search.clear();
            app.search_changed();
        }
        _ => {}
    }
}
