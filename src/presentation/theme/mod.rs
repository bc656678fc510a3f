//! Accent-derived styles.

use coolor::{Hsl, Rgb};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub title_style: Style,
    pub subtitle_style: Style,
    pub heading_style: Style,
    pub label_style: Style,
    pub chip_style: Style,
    pub card_border_style: Style,
    pub callout_style: Style,
    pub dimmed_style: Style,
    pub base_style: Style,
    pub key_style: Style,
    pub button_style: Style,
    pub button_disabled_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new("#667eea")
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str) -> Self {
        Self::from_color(parse_color(accent_color_str))
    }

    #[must_use]
    pub fn from_color(accent: Color) -> Self {
        let key_bg = shade(accent, 0.08, 0.5);
        let chip_bg = shade(accent, 0.2, 0.3);

        Self {
            accent,
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            subtitle_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
            heading_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            chip_style: Style::default().bg(chip_bg).fg(Color::White),
            card_border_style: Style::default().fg(accent),
            callout_style: Style::default()
                .bg(key_bg)
                .fg(accent)
                .add_modifier(Modifier::BOLD),
            dimmed_style: Style::default().fg(Color::DarkGray),
            base_style: Style::default().fg(Color::Reset),
            key_style: Style::default().bg(key_bg).fg(Color::White),
            button_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            button_disabled_style: Style::default().bg(Color::DarkGray).fg(Color::Gray),
        }
    }
}

/// Returns `color` with the given HSL lightness and saturation.
fn shade(color: Color, lightness: f32, saturation: f32) -> Color {
    let mut hsl = to_hsl(color);
    hsl.l = lightness;
    hsl.s = saturation;
    let rgb: Rgb = hsl.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn to_hsl(color: Color) -> Hsl {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (170, 0, 0),
        Color::Green => (0, 170, 0),
        Color::Yellow => (170, 85, 0),
        Color::Blue => (0, 0, 170),
        Color::Magenta => (170, 0, 170),
        Color::Cyan => (0, 170, 170),
        Color::Gray => (170, 170, 170),
        Color::DarkGray => (85, 85, 85),
        _ => (255, 255, 255),
    };
    Rgb::new(r, g, b).to_hsl()
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if s.starts_with('#')
        && let Some((r, g, b)) = parse_hex_color(s)
    {
        return Color::Rgb(r, g, b);
    }

    match s.to_lowercase().as_str() {
        "orange" => Color::Indexed(208),
        _ => Color::Rgb(102, 126, 234),
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => Some((
            channel(&s[0..1].repeat(2))?,
            channel(&s[1..2].repeat(2))?,
            channel(&s[2..3].repeat(2))?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Red"), Color::Red);
        assert_eq!(parse_color("#FF0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#0f0"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("Orange"), Color::Indexed(208));
        assert_eq!(parse_color("Invalid"), Color::Rgb(102, 126, 234));
    }

    #[test]
    fn test_shade_keeps_rgb() {
        assert!(matches!(shade(Color::Cyan, 0.1, 0.5), Color::Rgb(..)));
    }
}
