use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view::PriorityFilter;
use crate::tui::app::{App, Mode};

use super::helpers::{input_spans, spans_width};

pub const APP_TITLE: &str = "Task-It Easy";

const SEARCH_PLACEHOLDER: &str = "Search tasks...";

/// Render the header: title row with the active filter, then the search bar
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + filter
            Constraint::Length(1), // search bar
            Constraint::Min(0),    // gap
        ])
        .split(area);

    frame.render_widget(title_line(app, area.width as usize), chunks[0]);
    frame.render_widget(search_line(app), chunks[1]);
}

fn title_line(app: &App, width: usize) -> Paragraph<'static> {
    let bg = app.theme.background;
    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Right-aligned "filter: <level>"
    let filter_color = match app.priority_filter {
        PriorityFilter::All => app.theme.dim,
        PriorityFilter::Only(p) => app.theme.priority_color(p),
    };
    let filter_spans = vec![
        Span::styled("filter: ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            app.priority_filter.label(),
            Style::default().fg(filter_color).bg(bg),
        ),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    let used = spans_width(&spans) + spans_width(&filter_spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.extend(filter_spans);
    }

    Paragraph::new(Line::from(spans)).style(Style::default().bg(bg))
}

fn search_line(app: &App) -> Paragraph<'static> {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Search;
    let prompt_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let mut spans = vec![Span::styled(
        " / ",
        Style::default().fg(prompt_color).bg(bg),
    )];

    if app.search.is_empty() && !focused {
        spans.push(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.extend(input_spans(
            &app.search,
            Style::default().fg(app.theme.text_bright).bg(bg),
            Style::default().fg(app.theme.highlight).bg(bg),
            focused,
        ));
    }

    Paragraph::new(Line::from(spans)).style(Style::default().bg(bg))
}
