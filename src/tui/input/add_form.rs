use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Modal};

use super::*;

/// Add-task modal: move between fields, edit the focused one, submit or cancel
pub(super) fn handle_add_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_modal();
            return;
        }
        KeyCode::Enter => {
            app.submit_add_form();
            return;
        }
        _ => {}
    }

    let Modal::AddTask(form) = &mut app.modal else {
        return;
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus = form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => form.focus = form.focus.prev(),
        KeyCode::Left | KeyCode::Char('h') if !form.focus.is_text() => form.cycle_focused(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') if !form.focus.is_text() => {
            form.cycle_focused(true)
        }
        _ => {
            if let Some(input) = form.focused_input() {
                handle_text_key(input, key);
            }
        }
    }
}
