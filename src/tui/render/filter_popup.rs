use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::view::PriorityFilter;
use crate::tui::app::App;

const POPUP_W: u16 = 22;

/// Render the priority filter popover in the top-right corner of `area`
pub fn render_filter_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(highlighted) = app.filter_popup else {
        return;
    };

    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let inner_w = POPUP_W.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, choice) in PriorityFilter::CHOICES.into_iter().enumerate() {
        let selected = i == highlighted;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let color = match choice {
            PriorityFilter::All => app.theme.text,
            PriorityFilter::Only(p) => app.theme.priority_color(p),
        };
        let mut label_style = Style::default().fg(color).bg(row_bg);
        if choice == app.priority_filter {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        let label = choice.label();
        // The first letter doubles as the hotkey
        let hotkey = &label[..1];
        let marker = if selected { "\u{25B8} " } else { "  " };
        let used = marker.len() + 4 + label.len();
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                hotkey.to_string(),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
            Span::styled("   ", Style::default().bg(row_bg)),
            Span::styled(label, label_style),
            Span::styled(
                " ".repeat(inner_w.saturating_sub(used)),
                Style::default().bg(row_bg),
            ),
        ]));
    }
    lines.push(Line::from(Span::styled(" Enter pick  Esc", dim_style)));

    let popup_w = POPUP_W.min(area.width);
    let popup_h = ((lines.len() as u16) + 2).min(area.height);
    let popup_area = Rect::new(
        area.x + area.width.saturating_sub(popup_w),
        area.y,
        popup_w,
        popup_h,
    );
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Filter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup_area);
}
