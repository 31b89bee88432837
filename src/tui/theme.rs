use ratatui::style::Color;

use crate::model::{Category, Priority, UiConfig};
use crate::ops::view::Urgency;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x11, 0x18, 0x27),
            text: Color::Rgb(0xD1, 0xD5, 0xDB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x3B, 0x82, 0xF6),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            yellow: Color::Rgb(0xFA, 0xCC, 0x15),
            green: Color::Rgb(0x22, 0xC5, 0x5E),
            cyan: Color::Rgb(0x22, 0xD3, 0xEE),
            purple: Color::Rgb(0xA8, 0x55, 0xF7),
            blue: Color::Rgb(0x60, 0xA5, 0xFA),
            selection_bg: Color::Rgb(0x1F, 0x29, 0x37),
            selection_border: Color::Rgb(0x3B, 0x82, 0xF6),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x11, 0x18, 0x27),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the [ui] config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring malformed color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "red" => &mut theme.red,
                "yellow" => &mut theme.yellow,
                "green" => &mut theme.green,
                "cyan" => &mut theme.cyan,
                "purple" => &mut theme.purple,
                "blue" => &mut theme.blue,
                "selection_bg" => &mut theme.selection_bg,
                "selection_border" => &mut theme.selection_border,
                "search_match_bg" => &mut theme.search_match_bg,
                "search_match_fg" => &mut theme.search_match_fg,
                _ => {
                    tracing::warn!(key = %key, "ignoring unknown color key");
                    continue;
                }
            };
            *slot = color;
        }

        theme
    }

    pub fn priority_color(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.red,
            Priority::Medium => self.yellow,
            Priority::Low => self.green,
        }
    }

    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Work => self.blue,
            Category::Personal => self.purple,
            Category::Shopping => self.cyan,
            Category::Other => self.text,
        }
    }

    pub fn urgency_color(&self, urgency: Urgency) -> Color {
        match urgency {
            Urgency::Overdue => self.red,
            Urgency::Near => self.yellow,
            Urgency::Safe => self.green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("red".into(), "#112233".into());
        ui.colors.insert("no_such_key".into(), "#112233".into());
        ui.colors.insert("text".into(), "not a color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.red, Color::Rgb(0x11, 0x22, 0x33));
        // Malformed value leaves the default in place
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    fn test_priority_and_urgency_colors() {
        let theme = Theme::default();
        assert_eq!(theme.priority_color(Priority::High), theme.red);
        assert_eq!(theme.priority_color(Priority::Low), theme.green);
        assert_eq!(theme.urgency_color(Urgency::Overdue), theme.red);
        assert_eq!(theme.urgency_color(Urgency::Near), theme.yellow);
        assert_eq!(theme.urgency_color(Urgency::Safe), theme.green);
        assert_eq!(theme.category_color(Category::Shopping), theme.cyan);
    }
}
