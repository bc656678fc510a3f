use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const BRAND: &str = "CRESCER";
const INSTITUTE: &str = "Instituto de Negócios";

pub struct HeaderBarStyle {
    pub background: Style,
    pub brand: Style,
    pub institute: Style,
    pub company: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            brand: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            institute: theme.key_style.add_modifier(Modifier::BOLD),
            company: Style::default().fg(theme.accent),
            ..Self::default()
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            brand: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            institute: Style::default().fg(Color::White),
            company: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top bar: brand on the left, company name on the right.
pub struct HeaderBar<'a> {
    company_name: &'a str,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(company_name: &'a str) -> Self {
        Self {
            company_name,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    fn brand_spans(&self) -> (Vec<Span<'static>>, u16) {
        let brand = format!(" {BRAND} ");
        let institute = format!(" {} ", INSTITUTE.to_uppercase());
        let width = brand.width() + 1 + institute.width();
        let spans = vec![
            Span::styled(brand, self.style.brand),
            Span::raw(" "),
            Span::styled(institute, self.style.institute),
        ];
        (spans, u16::try_from(width).unwrap_or(u16::MAX))
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let (brand_spans, brand_width) = self.brand_spans();
        let left_area = Rect::new(area.x, area.y, brand_width.min(area.width), 1);
        Paragraph::new(Line::from(brand_spans)).render(left_area, buf);

        let company = format!("{} ", self.company_name);
        let company_width = u16::try_from(company.width()).unwrap_or(u16::MAX);
        if company_width < area.width.saturating_sub(brand_width + 1) {
            let right_x = area.right().saturating_sub(company_width);
            let right_area = Rect::new(right_x, area.y, company_width, 1);
            Paragraph::new(Line::from(Span::styled(company, self.style.company)))
                .render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_header_shows_brand_and_company() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("Acme Ltda").render(area, &mut buf);

        let text = row_text(&buf, 80);
        assert!(text.starts_with(" CRESCER "));
        assert!(text.contains("INSTITUTO DE NEGÓCIOS"));
        assert!(text.trim_end().ends_with("Acme Ltda"));
    }

    #[test]
    fn test_company_dropped_when_too_narrow() {
        let area = Rect::new(0, 0, 34, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new("Crescer Negócios e Consultoria").render(area, &mut buf);

        assert!(!row_text(&buf, 34).contains("Consultoria"));
    }
}
