//! Application theme: resolved colors for every UI element.
//!
//! The config layer deals in hex strings; everything past this module deals
//! in `ratatui::Color`. Row emphasis hints resolve to colors here so the row
//! sources never name a concrete color.

use crate::config::ThemeConfig;
use crate::ui::sources::Emphasis;
use ratatui::style::Color;

/// Complete resolved theme.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub header: Color,
    pub header_hint: Color,
    pub border: Color,
    pub border_focused: Color,
    pub panel_title: Color,
    pub text: Color,
    pub muted: Color,
    /// Background of the highlighted row and the focused panel title.
    pub highlight_bg: Color,
    pub detail_text: Color,
    pub scrollbar: Color,
    pub good: Color,
    pub very_good: Color,
    pub bad: Color,
    pub very_bad: Color,
    pub info: Color,
    pub accent: Color,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            header: Color::White,
            header_hint: Color::LightRed,
            border: Color::DarkGray,
            border_focused: Color::Gray,
            panel_title: Color::Gray,
            text: Color::Gray,
            muted: Color::DarkGray,
            highlight_bg: Color::Blue,
            detail_text: Color::Magenta,
            scrollbar: Color::DarkGray,
            good: Color::LightGreen,
            very_good: Color::Green,
            bad: Color::LightRed,
            very_bad: Color::Red,
            info: Color::LightBlue,
            accent: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Self {
            header: Color::Black,
            header_hint: Color::Red,
            border: Color::Gray,
            border_focused: Color::Black,
            panel_title: Color::Black,
            text: Color::Black,
            muted: Color::Gray,
            highlight_bg: Color::LightBlue,
            detail_text: Color::Magenta,
            scrollbar: Color::Gray,
            good: Color::Green,
            very_good: Color::Green,
            bad: Color::Red,
            very_bad: Color::Red,
            info: Color::Blue,
            accent: Color::Yellow,
        }
    }

    /// Build a theme from config: variant defaults plus hex overrides.
    pub fn resolve(config: &ThemeConfig) -> Self {
        let mut theme = match config.variant.as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        };
        for (key, hex) in &config.colors {
            let Some(color) = parse_color(hex) else {
                tracing::warn!(key = %key, value = %hex, "Ignoring unparsable theme color");
                continue;
            };
            match key.as_str() {
                "header" => theme.header = color,
                "header_hint" => theme.header_hint = color,
                "border" => theme.border = color,
                "border_focused" => theme.border_focused = color,
                "panel_title" => theme.panel_title = color,
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "highlight_bg" => theme.highlight_bg = color,
                "detail_text" => theme.detail_text = color,
                "scrollbar" => theme.scrollbar = color,
                "good" => theme.good = color,
                "very_good" => theme.very_good = color,
                "bad" => theme.bad = color,
                "very_bad" => theme.very_bad = color,
                "info" => theme.info = color,
                "accent" => theme.accent = color,
                other => tracing::warn!(key = %other, "Unknown theme color key"),
            }
        }
        theme
    }

    /// Concrete color for a row emphasis hint.
    pub fn emphasis(&self, emphasis: Emphasis) -> Color {
        match emphasis {
            Emphasis::Muted => self.muted,
            Emphasis::Normal => self.text,
            Emphasis::Good => self.good,
            Emphasis::VeryGood => self.very_good,
            Emphasis::Bad => self.bad,
            Emphasis::VeryBad => self.very_bad,
            Emphasis::Info => self.info,
            Emphasis::Accent => self.accent,
        }
    }
}

/// Parse a `#rrggbb` hex color string.
pub fn parse_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_color("#ff8800"), Some(Color::Rgb(255, 136, 0)));
        assert_eq!(parse_color("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("zzzzzz"), None);
    }

    #[test]
    fn overrides_apply_on_top_of_the_variant() {
        let mut colors = HashMap::new();
        colors.insert("detail_text".to_string(), "#112233".to_string());
        colors.insert("bogus_key".to_string(), "#ffffff".to_string());
        colors.insert("good".to_string(), "not-a-color".to_string());

        let config = ThemeConfig {
            variant: "dark".to_string(),
            colors,
        };
        let theme = AppTheme::resolve(&config);
        assert_eq!(theme.detail_text, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.good, AppTheme::dark().good);
    }

    #[test]
    fn unknown_variant_falls_back_to_dark() {
        let config = ThemeConfig {
            variant: "solarized".to_string(),
            colors: HashMap::new(),
        };
        assert_eq!(AppTheme::resolve(&config).highlight_bg, AppTheme::dark().highlight_bg);
    }
}
