use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::Task;
use crate::ops::view::{BoardView, Urgency, days_remaining, due_label};
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

use super::helpers::{checkbox, input_spans, spans_width};
use super::push_highlighted_spans;

/// Render the task board: "Pending" then "Completed", one row per task
pub fn render_board_view(frame: &mut Frame, app: &mut App, area: Rect) {
    app.clamp_cursor();
    let bg = app.theme.background;
    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }

    let (lines, cursor_line) = {
        let board = app.board();
        if board.is_empty() {
            frame.render_widget(empty_message(app, area.width as usize), area);
            return;
        }
        build_lines(app, &board, area.width as usize)
    };

    // Keep the cursor row on screen; the top row also shows its section header
    if app.cursor == 0 {
        app.scroll_offset = 0;
    } else if cursor_line < app.scroll_offset {
        app.scroll_offset = cursor_line;
    } else if cursor_line >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor_line + 1 - visible_height;
    }
    app.scroll_offset = app.scroll_offset.min(lines.len().saturating_sub(1));

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(visible_height)
        .collect();
    let paragraph = Paragraph::new(visible).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn empty_message(app: &App, width: usize) -> Paragraph<'static> {
    let bg = app.theme.background;
    if app.is_filtering() {
        let msg = " no matching tasks ";
        let padding = width.saturating_sub(msg.len() + 1);
        let warn_style = Style::default()
            .fg(app.theme.text_bright)
            .bg(Color::Rgb(0x8D, 0x0B, 0x0B))
            .add_modifier(Modifier::BOLD);
        let line = Line::from(vec![
            Span::styled(" ".repeat(padding), Style::default().bg(bg)),
            Span::styled(msg, warn_style),
        ]);
        Paragraph::new(line).style(Style::default().bg(bg))
    } else {
        Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg))
    }
}

/// All board lines plus the line index of the cursor row
fn build_lines(app: &App, board: &BoardView<'_>, width: usize) -> (Vec<Line<'static>>, usize) {
    let search_re = app.search_re();
    let mut lines = Vec::with_capacity(board.len() + 3);
    let mut cursor_line = 0;

    let sections = [
        ("Pending", &board.pending, 0),
        ("Completed", &board.completed, board.pending.len()),
    ];
    for (i, (name, tasks, first_row)) in sections.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(section_header(app, name, tasks.len()));
        for (offset, task) in tasks.iter().enumerate() {
            let row = first_row + offset;
            let is_cursor = row == app.cursor;
            if is_cursor {
                cursor_line = lines.len();
            }
            lines.push(task_line(app, task, is_cursor, width, search_re.as_ref()));
        }
    }

    (lines, cursor_line)
}

fn section_header(app: &App, name: &str, count: usize) -> Line<'static> {
    let bg = app.theme.background;
    Line::from(vec![
        Span::styled(
            format!(" {}", name),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", count),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ])
}

/// One task row: cursor bar, checkbox, title (or edit buffer), description,
/// then right-aligned category, priority and due label.
fn task_line(
    app: &App,
    task: &Task,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'static> {
    let theme = &app.theme;
    let row_bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(row_bg);
    let dim_style = base.fg(theme.dim);

    let mut spans: Vec<Span<'static>> = Vec::new();
    if is_cursor {
        spans.push(Span::styled("\u{258E}", base.fg(theme.selection_border)));
    } else {
        spans.push(Span::styled(" ", base));
    }
    let check_style = if task.completed {
        base.fg(theme.green)
    } else {
        base.fg(theme.text)
    };
    spans.push(Span::styled(format!("{} ", checkbox(task.completed)), check_style));

    let right = right_spans(app, task, base);
    let right_w = spans_width(&right);
    let avail = width.saturating_sub(spans_width(&spans) + right_w + 1);

    let editing = app.editing.as_ref().filter(|e| e.task_id == task.id);
    if let Some(edit) = editing {
        spans.extend(input_spans(
            &edit.input,
            base.fg(theme.text_bright),
            base.fg(theme.highlight),
            true,
        ));
    } else {
        let title_style = if task.completed {
            dim_style.add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            base.fg(theme.text_bright).add_modifier(Modifier::BOLD)
        } else {
            base.fg(theme.text_bright)
        };
        let highlight_style = Style::default()
            .fg(theme.search_match_fg)
            .bg(theme.search_match_bg)
            .add_modifier(Modifier::BOLD);

        let title = truncate_to_width(&task.title, avail);
        let used = display_width(&title);
        push_highlighted_spans(&mut spans, &title, title_style, highlight_style, search_re);

        if !task.description.is_empty() && avail > used + 4 {
            let desc = truncate_to_width(&task.description, avail - used - 2);
            spans.push(Span::styled("  ", base));
            push_highlighted_spans(&mut spans, &desc, dim_style, highlight_style, search_re);
        }
    }

    let left_w = spans_width(&spans);
    if left_w + right_w < width {
        spans.push(Span::styled(" ".repeat(width - left_w - right_w), base));
        spans.extend(right);
    }
    Line::from(spans)
}

/// "category  priority  due" with a trailing space, all dimmed when completed
fn right_spans(app: &App, task: &Task, base: Style) -> Vec<Span<'static>> {
    let theme = &app.theme;
    let color = |c: Color| {
        if task.completed {
            base.fg(theme.dim)
        } else {
            base.fg(c)
        }
    };

    let mut spans = vec![
        Span::styled(task.category.label(), color(theme.category_color(task.category))),
        Span::styled("  ", base),
        Span::styled(task.priority.label(), color(theme.priority_color(task.priority))),
    ];
    if let Some(days) = days_remaining(task.due_date, app.today) {
        spans.push(Span::styled("  ", base));
        spans.push(Span::styled(
            due_label(days),
            color(theme.urgency_color(Urgency::from_days(days))),
        ));
    }
    spans.push(Span::styled(" ", base));
    spans
}
