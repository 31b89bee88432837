use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::TaskId;
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::helpers::centered_rect_fixed;

/// Render the delete confirmation popup for `id`
pub fn render_confirm_popup(frame: &mut Frame, app: &App, id: TaskId, area: Rect) {
    let Some(task) = app.store.get(id) else {
        return;
    };

    let bg = app.theme.background;
    let warn_color = app.theme.red;
    let header_style = Style::default()
        .fg(warn_color)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let title_w = (popup_w as usize).saturating_sub(6);

    let lines = vec![
        Line::from(Span::styled(" Delete Task", header_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(truncate_to_width(&task.title, title_w), bright_style),
        ]),
        Line::from(""),
        Line::from(Span::styled("  This cannot be undone.", text_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("y", dim_style),
            Span::styled(" delete  ", text_style),
            Span::styled("n", dim_style),
            Span::styled(" cancel", text_style),
        ]),
    ];

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(warn_color).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
