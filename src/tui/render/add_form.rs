use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::NewTask;
use crate::tui::app::App;
use crate::tui::form::{AddForm, FormError, FormField};

use super::helpers::{centered_rect_fixed, input_spans};

const LABEL_WIDTH: usize = 14;
const DUE_PLACEHOLDER: &str = "YYYY-MM-DD (optional)";

/// Render the add-task modal over the whole screen
pub fn render_add_form(frame: &mut Frame, app: &App, form: &AddForm, area: Rect) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let validation = form.validate(app.today);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" New Task", header_style)));
    lines.push(Line::from(""));

    for field in FormField::ORDER {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        let marker = if focused { " \u{25B8} " } else { "   " };
        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            ),
        ];
        spans.extend(field_spans(app, form, field, focused, &validation));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));

    // Only due-date problems are worth shouting about; a blank title just
    // leaves the button disabled.
    if let Err(err @ (FormError::InvalidDueDate(_) | FormError::DueDateInPast(_))) = &validation {
        lines.push(Line::from(Span::styled(
            format!("   {}", err),
            Style::default().fg(app.theme.red).bg(bg),
        )));
        lines.push(Line::from(""));
    }

    let button_style = if validation.is_ok() {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.green)
            .add_modifier(Modifier::BOLD)
    } else {
        dim_style
    };
    lines.push(Line::from(vec![
        Span::styled("   ", text_style),
        Span::styled("[ Add Task ]", button_style),
        Span::styled("   ", text_style),
        Span::styled("Enter", dim_style),
        Span::styled(" add  ", text_style),
        Span::styled("Tab", dim_style),
        Span::styled(" next  ", text_style),
        Span::styled("Esc", dim_style),
        Span::styled(" cancel", text_style),
    ]));

    let popup_w: u16 = 60.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

fn field_spans(
    app: &App,
    form: &AddForm,
    field: FormField,
    focused: bool,
    validation: &Result<NewTask, FormError>,
) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default().fg(app.theme.highlight).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let choice = |label: &'static str, color: Color| {
        let arrow_style = if focused { cursor_style } else { dim_style };
        vec![
            Span::styled("\u{2039} ", arrow_style),
            Span::styled(label, Style::default().fg(color).bg(bg)),
            Span::styled(" \u{203A}", arrow_style),
        ]
    };

    match field {
        FormField::Title => input_spans(&form.title, value_style, cursor_style, focused),
        FormField::Description => {
            input_spans(&form.description, value_style, cursor_style, focused)
        }
        FormField::DueDate => {
            if form.due_date.is_empty() && !focused {
                return vec![Span::styled(DUE_PLACEHOLDER, dim_style)];
            }
            let bad = matches!(
                validation,
                Err(FormError::InvalidDueDate(_) | FormError::DueDateInPast(_))
            );
            let style = if bad {
                Style::default().fg(app.theme.red).bg(bg)
            } else {
                value_style
            };
            input_spans(&form.due_date, style, cursor_style, focused)
        }
        FormField::Category => choice(
            form.category.label(),
            app.theme.category_color(form.category),
        ),
        FormField::Priority => choice(
            form.priority.label(),
            app.theme.priority_color(form.priority),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Priority};
    use crate::tui::app::TextInput;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App, form: &AddForm) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_add_form(frame, app, form, area)
        })
    }

    #[test]
    fn add_form_empty() {
        let app = app_with_tasks(&[]);
        let output = render(&app, &AddForm::new());
        assert!(output.contains("New Task"));
        assert!(output.contains("\u{25B8} Title"));
        assert!(output.contains("Description"));
        assert!(output.contains("\u{2039} work \u{203A}"));
        assert!(output.contains("\u{2039} medium \u{203A}"));
        assert!(output.contains(DUE_PLACEHOLDER));
        assert!(output.contains("[ Add Task ]"));
        assert!(!output.contains("title is required"));
    }

    #[test]
    fn add_form_filled_values() {
        let app = app_with_tasks(&[]);
        let form = AddForm {
            title: TextInput::from("Buy milk"),
            description: TextInput::from("two litres"),
            category: Category::Shopping,
            priority: Priority::High,
            due_date: TextInput::from("2026-10-20"),
            focus: FormField::Priority,
        };
        let output = render(&app, &form);
        assert!(output.contains("Buy milk"));
        assert!(output.contains("two litres"));
        assert!(output.contains("\u{2039} shopping \u{203A}"));
        assert!(output.contains("\u{25B8} Priority"));
        assert!(output.contains("2026-10-20"));
        assert!(!output.contains("before today"));
    }

    #[test]
    fn add_form_reports_bad_due_date() {
        let app = app_with_tasks(&[]);
        let mut form = AddForm::new();
        form.title = TextInput::from("Buy milk");
        form.due_date = TextInput::from("2026-10-01");
        let output = render(&app, &form);
        assert!(output.contains("due date 2026-10-01 is before today"));

        form.due_date = TextInput::from("soon");
        let output = render(&app, &form);
        assert!(output.contains("YYYY-MM-DD: \"soon\""));
    }
}
