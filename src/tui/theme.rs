use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub done: Color,
    pub check: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x16, 0x17, 0x22),
            text: Color::Rgb(0xC8, 0xCB, 0xE7),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x57, 0xDD, 0xFF),
            dim: Color::Rgb(0x5B, 0x5E, 0x7E),
            done: Color::Rgb(0x4D, 0x50, 0x67),
            check: Color::Rgb(0xC0, 0x58, 0xF3),
            selection_bg: Color::Rgb(0x25, 0x27, 0x3C),
            input_bg: Color::Rgb(0x25, 0x27, 0x3C),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "highlight" => &mut theme.highlight,
                "dim" => &mut theme.dim,
                "done" => &mut theme.done,
                "check" => &mut theme.check,
                "selection_bg" => &mut theme.selection_bg,
                "input_bg" => &mut theme.input_bg,
                _ => continue,
            };
            *slot = color;
        }

        theme
    }

    /// Foreground for an item's text
    pub fn todo_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
