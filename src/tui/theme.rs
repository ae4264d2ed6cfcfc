use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the window
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Text drawn straight on the background (buttons, headings)
    pub text: Color,
    /// Text inside the input field and the list, and the clock
    pub ink: Color,
    pub field_bg: Color,
    pub dim: Color,
    pub button: Color,
    pub danger: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0x98, 0x00),
            text: Color::Rgb(0xFE, 0xFD, 0xED),
            ink: Color::Rgb(0x0C, 0x2D, 0x57),
            field_bg: Color::Rgb(0xFF, 0xB7, 0x4D),
            dim: Color::Rgb(0x8A, 0x5A, 0x00),
            button: Color::Rgb(0x2C, 0x78, 0x65),
            danger: Color::Rgb(0xE7, 0x29, 0x29),
            selection_bg: Color::Rgb(0x0C, 0x2D, 0x57),
            selection_fg: Color::Rgb(0xFE, 0xFD, 0xED),
        }
    }
}

/// Parse a hex color string like "#FF9800" into an RGB Color
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
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = key.as_str(), value = value.as_str(), "ignoring bad color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "ink" => theme.ink = color,
                "field_bg" => theme.field_bg = color,
                "dim" => theme.dim = color,
                "button" => theme.button = color,
                "danger" => theme.danger = color,
                "selection_bg" => theme.selection_bg = color,
                "selection_fg" => theme.selection_fg = color,
                _ => {}
            }
        }

        theme
    }
}
