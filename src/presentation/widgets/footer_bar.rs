use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const PREVIOUS_LABEL: &str = " ◀ Anterior ";
const NEXT_LABEL: &str = " Próximo ▶ ";
const BUTTON_GAP: u16 = 1;

/// Clickable footer controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Previous,
    Next,
}

/// Screen regions of the footer buttons, recomputed on every draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FooterButtons {
    pub previous: Rect,
    pub next: Rect,
}

impl FooterButtons {
    /// Lays the buttons out right-aligned on the first row of `area`.
    #[must_use]
    pub fn layout(area: Rect) -> Self {
        if area.height == 0 {
            return Self::default();
        }

        let next_width = label_width(NEXT_LABEL).min(area.width);
        let next_x = area.right().saturating_sub(next_width);
        let next = Rect::new(next_x, area.y, next_width, 1);

        let previous_width = label_width(PREVIOUS_LABEL);
        let previous_x = next_x.saturating_sub(previous_width + BUTTON_GAP);
        let previous = if previous_x >= area.x && previous_x + previous_width <= next_x {
            Rect::new(previous_x, area.y, previous_width, 1)
        } else {
            Rect::default()
        };

        Self { previous, next }
    }

    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<NavButton> {
        let position = Position::new(column, row);
        if self.previous.contains(position) {
            Some(NavButton::Previous)
        } else if self.next.contains(position) {
            Some(NavButton::Next)
        } else {
            None
        }
    }

    fn total_width(&self) -> u16 {
        if self.previous.is_empty() {
            self.next.width
        } else {
            self.next.right().saturating_sub(self.previous.x)
        }
    }
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX)
}

pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
    pub button: Style,
    pub button_disabled: Style,
}

impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: theme.key_style,
            info: theme.dimmed_style,
            button: theme.button_style,
            button_disabled: theme.button_disabled_style,
            ..Self::default()
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::Gray).bg(Color::DarkGray),
        }
    }
}

/// Bottom bar: key hints, slide counter and the navigation buttons.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    current: usize,
    total: usize,
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(keybindings: &'a [Keybind]) -> Self {
        Self {
            keybindings,
            current: 0,
            total: 0,
            style: FooterBarStyle::default(),
        }
    }

    /// Zero-based current slide and deck length.
    #[must_use]
    pub const fn position(mut self, current: usize, total: usize) -> Self {
        self.current = current;
        self.total = total;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn at_first(&self) -> bool {
        self.current == 0
    }

    const fn at_last(&self) -> bool {
        self.current + 1 >= self.total
    }

    fn format_key(key: &crossterm::event::KeyEvent) -> String {
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }

        match key.code {
            KeyCode::Char(c) => s.push(c),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Left => s.push('←'),
            KeyCode::Right => s.push('→'),
            other => s.push_str(&format!("{other:?}")),
        }
        s
    }

    fn hint_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        spans
    }

    fn counter_text(&self) -> String {
        format!("Slide {} | Total {}", self.current + 1, self.total)
    }

    fn button_style(&self, disabled: bool) -> Style {
        if disabled {
            self.style.button_disabled
        } else {
            self.style.button
        }
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let buttons = FooterButtons::layout(area);
        if !buttons.previous.is_empty() {
            Paragraph::new(Span::styled(
                PREVIOUS_LABEL,
                self.button_style(self.at_first()),
            ))
            .render(buttons.previous, buf);
        }
        Paragraph::new(Span::styled(NEXT_LABEL, self.button_style(self.at_last())))
            .render(buttons.next, buf);

        let remaining = area.width.saturating_sub(buttons.total_width() + 1);
        let counter = self.counter_text();
        let counter_width = label_width(&counter);

        let hints_width = if counter_width + 2 <= remaining {
            let counter_x = area.x + remaining - counter_width - 1;
            let counter_area = Rect::new(counter_x, area.y, counter_width, 1);
            Paragraph::new(Span::styled(counter, self.style.info)).render(counter_area, buf);
            remaining - counter_width - 2
        } else {
            remaining
        };

        let hints_area = Rect::new(area.x, area.y, hints_width, 1);
        Paragraph::new(Line::from(self.hint_spans())).render(hints_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::default_keybindings;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_buttons_are_right_aligned() {
        let area = Rect::new(0, 10, 100, 1);
        let buttons = FooterButtons::layout(area);

        assert_eq!(buttons.next.right(), 100);
        assert_eq!(buttons.next.y, 10);
        assert_eq!(buttons.previous.right() + BUTTON_GAP, buttons.next.x);
    }

    #[test]
    fn test_hit_testing() {
        let buttons = FooterButtons::layout(Rect::new(0, 5, 100, 1));

        assert_eq!(
            buttons.hit(buttons.next.x, 5),
            Some(NavButton::Next)
        );
        assert_eq!(
            buttons.hit(buttons.previous.x + 1, 5),
            Some(NavButton::Previous)
        );
        assert_eq!(buttons.hit(buttons.next.x, 4), None);
        assert_eq!(buttons.hit(0, 5), None);
    }

    #[test]
    fn test_narrow_area_keeps_next_only() {
        let buttons = FooterButtons::layout(Rect::new(0, 0, 14, 1));

        assert!(buttons.previous.is_empty());
        assert!(!buttons.next.is_empty());
    }

    #[test]
    fn test_footer_renders_hints_counter_and_buttons() {
        let bindings = default_keybindings();
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&bindings)
            .position(2, 13)
            .render(area, &mut buf);

        let text = row_text(&buf, 100);
        assert!(text.contains(" Anterior  ← "));
        assert!(text.contains(" Sair  q "));
        assert!(!text.contains("Esc"));
        assert!(text.contains("Slide 3 | Total 13"));
        assert!(text.contains("◀ Anterior"));
        assert!(text.contains("Próximo ▶"));
    }

    #[test]
    fn test_boundary_buttons_use_disabled_style() {
        let bindings = default_keybindings();
        let area = Rect::new(0, 0, 100, 1);
        let buttons = FooterButtons::layout(area);
        let style = FooterBarStyle::default();
        let disabled = style.button_disabled;
        let enabled = style.button;

        let mut buf = Buffer::empty(area);
        FooterBar::new(&bindings)
            .position(0, 13)
            .render(area, &mut buf);
        assert_eq!(buf[(buttons.previous.x, 0)].bg, disabled.bg.unwrap());
        assert_eq!(buf[(buttons.next.x, 0)].bg, enabled.bg.unwrap());

        let mut buf = Buffer::empty(area);
        FooterBar::new(&bindings)
            .position(12, 13)
            .render(area, &mut buf);
        assert_eq!(buf[(buttons.previous.x, 0)].bg, enabled.bg.unwrap());
        assert_eq!(buf[(buttons.next.x, 0)].bg, disabled.bg.unwrap());
    }
}
