use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::app::TextInput;
use crate::util::unicode;

/// Markdown-style checkbox for a task's completion flag
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Spans for a text input. When focused, the grapheme under the cursor is
/// drawn reversed, or a `▌` bar is appended when the cursor is at the end.
pub(super) fn input_spans<'a>(
    input: &TextInput,
    style: Style,
    cursor_style: Style,
    focused: bool,
) -> Vec<Span<'a>> {
    let text = input.text();
    if !focused {
        return vec![Span::styled(text.to_string(), style)];
    }
    let cursor = input.cursor().min(text.len());
    let mut spans = Vec::new();
    if cursor > 0 {
        spans.push(Span::styled(text[..cursor].to_string(), style));
    }
    match unicode::next_grapheme_boundary(text, cursor) {
        Some(end) => {
            spans.push(Span::styled(
                text[cursor..end].to_string(),
                style.add_modifier(Modifier::REVERSED),
            ));
            if end < text.len() {
                spans.push(Span::styled(text[end..].to_string(), style));
            }
        }
        None => spans.push(Span::styled("\u{258C}", cursor_style)),
    }
    spans
}
