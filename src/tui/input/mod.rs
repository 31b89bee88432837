mod add_form;
mod common;
mod confirm;
mod edit;
mod filter;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode, Modal};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use add_form::*;
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use filter::*;
#[allow(unused_imports)]
use navigate::*;
#[allow(unused_imports)]
use search::*;

/// Handle a key event. Overlays take keys first, in stacking order: help,
/// the open modal, the filter popover, an inline edit, the search bar,
/// then the list itself.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    if matches!(app.modal, Modal::AddTask(_)) {
        handle_add_form(app, key);
    } else if matches!(app.modal, Modal::ConfirmDelete(_)) {
        handle_confirm(app, key);
    } else if app.filter_popup.is_some() {
        handle_filter_popup(app, key);
    } else if app.editing.is_some() {
        handle_edit(app, key);
    } else {
        match app.mode {
            Mode::Search => handle_search(app, key),
            Mode::Navigate => handle_navigate(app, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Config, Priority};
    use crate::ops::view::PriorityFilter;
    use chrono::NaiveDate;

    fn test_app() -> App {
        let mut app = App::new(&Config::default());
        app.today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Open the form, type a title, optionally step to the category/priority
    /// fields, and submit.
    fn add_via_keys(app: &mut App, title: &str, category_steps: usize, priority_steps: usize) {
        press(app, KeyCode::Char('a'));
        type_str(app, title);
        // Title -> Description -> Category
        press(app, KeyCode::Tab);
        press(app, KeyCode::Tab);
        for _ in 0..category_steps {
            press(app, KeyCode::Right);
        }
        // Category -> Due date -> Priority
        press(app, KeyCode::Tab);
        press(app, KeyCode::Tab);
        for _ in 0..priority_steps {
            press(app, KeyCode::Right);
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut app = test_app();
        // work -> personal -> shopping; medium stays medium
        add_via_keys(&mut app, "Buy milk", 2, 0);
        assert!(matches!(app.modal, Modal::Idle));
        {
            let board = app.board();
            assert_eq!(board.pending.len(), 1);
            assert_eq!(board.pending[0].title, "Buy milk");
            assert_eq!(board.pending[0].category, Category::Shopping);
            assert_eq!(board.pending[0].category.label(), "shopping");
            assert_eq!(board.pending[0].priority, Priority::Medium);
        }

        press(&mut app, KeyCode::Char(' '));
        {
            let board = app.board();
            assert!(board.pending.is_empty());
            assert_eq!(board.completed.len(), 1);
        }

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.modal, Modal::ConfirmDelete(_)));
        press(&mut app, KeyCode::Char('y'));
        assert!(matches!(app.modal, Modal::Idle));
        assert!(app.board().is_empty());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_enter_on_blank_title_does_nothing() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.modal, Modal::AddTask(_)));
        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.modal, Modal::Idle));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_typing_in_form_does_not_trigger_list_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "quit dq");
        let Modal::AddTask(form) = &app.modal else {
            panic!("form should stay open");
        };
        assert_eq!(form.title.text(), "quit dq");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_due_date_field() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Dentist");
        for _ in 0..3 {
            press(&mut app, KeyCode::Tab);
        }
        type_str(&mut app, "2026-10-23");
        press(&mut app, KeyCode::Enter);
        let task = &app.store.tasks()[0];
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 10, 23));
    }

    #[test]
    fn test_delete_cancel_keeps_task() {
        let mut app = test_app();
        add_via_keys(&mut app, "Keep", 0, 0);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.len(), 1);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 1);
        assert!(matches!(app.modal, Modal::Idle));
    }

    #[test]
    fn test_inline_edit_keys() {
        let mut app = test_app();
        add_via_keys(&mut app, "Call mom", 1, 0);
        press(&mut app, KeyCode::Char('e'));
        assert!(app.editing.is_some());
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "dad");
        press(&mut app, KeyCode::Enter);
        assert!(app.editing.is_none());
        assert_eq!(app.store.tasks()[0].title, "Call dad");

        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "!!!");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.tasks()[0].title, "Call dad");
    }

    #[test]
    fn test_search_keys() {
        let mut app = test_app();
        add_via_keys(&mut app, "Buy milk", 0, 0);
        add_via_keys(&mut app, "Write report", 0, 0);

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);
        type_str(&mut app, "MILK");
        assert_eq!(app.board().len(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.search.text(), "MILK");
        assert_eq!(app.board().len(), 1);

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Esc);
        assert!(app.search.is_empty());
        assert_eq!(app.board().len(), 2);
    }

    #[test]
    fn test_filter_popup_keys() {
        let mut app = test_app();
        add_via_keys(&mut app, "Urgent", 0, 2); // medium -> low -> high
        add_via_keys(&mut app, "Someday", 0, 1); // medium -> low

        press(&mut app, KeyCode::Char('f'));
        assert!(app.filter_popup.is_some());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.priority_filter, PriorityFilter::Only(Priority::High));
        assert!(app.filter_popup.is_none());
        {
            let board = app.board();
            assert_eq!(board.pending.len(), 1);
            assert_eq!(board.pending[0].title, "Urgent");
        }

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.priority_filter, PriorityFilter::All);
        assert_eq!(app.board().len(), 2);
    }

    #[test]
    fn test_help_swallows_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('a'));
        assert!(matches!(app.modal, Modal::Idle));
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
