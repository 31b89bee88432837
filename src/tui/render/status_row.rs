use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Modal, Mode};

use super::helpers::spans_width;

/// Render the status row (bottom of screen): mode badge, task counts on the
/// left and key hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let (badge, hint) = mode_prompt(app);

    let mut spans = Vec::new();
    if let Some(badge) = badge {
        spans.push(Span::styled(
            format!(" {} ", badge),
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let board = app.board();
    let total = app.store.len();
    let done = app.store.tasks().iter().filter(|t| t.completed).count();
    let counts = if app.is_filtering() {
        format!(" {} of {} {}", board.len(), total, plural(total))
    } else {
        format!(" {} {}, {} done", total, plural(total), done)
    };
    spans.push(Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)));

    if app.show_key_hints {
        let used = spans_width(&spans);
        let hint_width = hint.chars().count() + 1;
        if used + hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_width),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "task" } else { "tasks" }
}

/// Badge and key hint for whatever currently owns the keyboard
fn mode_prompt(app: &App) -> (Option<&'static str>, &'static str) {
    if app.show_help {
        return (None, "? close help");
    }
    match app.modal {
        Modal::AddTask(_) => return (Some("NEW TASK"), "Enter add  Esc cancel"),
        Modal::ConfirmDelete(_) => return (Some("CONFIRM"), "y delete  n cancel"),
        Modal::Idle => {}
    }
    if app.filter_popup.is_some() {
        return (Some("FILTER"), "jk move  Enter pick  Esc close");
    }
    if app.editing.is_some() {
        return (Some("EDIT"), "Enter save  Esc cancel");
    }
    match app.mode {
        Mode::Search => (Some("SEARCH"), "Enter keep  Esc clear"),
        Mode::Navigate => (None, "a add  space done  / search  f filter  ? help"),
    }
}
