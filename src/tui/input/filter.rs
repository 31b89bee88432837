use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Priority;
use crate::ops::view::PriorityFilter;
use crate::tui::app::App;

/// Filter popover: pick one of the four priority choices
pub(super) fn handle_filter_popup(app: &mut App, key: KeyEvent) {
    let Some(highlighted) = app.filter_popup else {
        return;
    };
    let count = PriorityFilter::CHOICES.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.filter_popup = Some((highlighted + 1) % count);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.filter_popup = Some((highlighted + count - 1) % count);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.set_filter(PriorityFilter::CHOICES[highlighted]),
        // Direct picks
        KeyCode::Char('a') => app.set_filter(PriorityFilter::All),
        KeyCode::Char('h') => app.set_filter(PriorityFilter::Only(Priority::High)),
        KeyCode::Char('m') => app.set_filter(PriorityFilter::Only(Priority::Medium)),
        KeyCode::Char('l') => app.set_filter(PriorityFilter::Only(Priority::Low)),
        KeyCode::Esc | KeyCode::Char('f') => app.filter_popup = None,
        _ => {}
    }
}
