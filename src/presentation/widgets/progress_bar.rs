use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const FILLED: char = '━';
const EMPTY: char = '─';

/// Thin bar filled to `(current + 1) / total` of its width.
pub struct ProgressBar {
    current: usize,
    total: usize,
    filled_style: Style,
    empty_style: Style,
}

impl ProgressBar {
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            filled_style: Style::default().fg(Color::Cyan),
            empty_style: Style::default().fg(Color::DarkGray),
        }
    }

    #[must_use]
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.filled_style = Style::default().fg(theme.accent);
        self.empty_style = theme.dimmed_style;
        self
    }

    /// Number of filled cells out of `width`.
    #[must_use]
    pub fn filled_width(&self, width: u16) -> u16 {
        if self.total == 0 {
            return 0;
        }
        let shown = (self.current + 1).min(self.total);
        let filled = usize::from(width) * shown / self.total;
        u16::try_from(filled).unwrap_or(width)
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let filled = self.filled_width(area.width);
        for (i, x) in (area.left()..area.right()).enumerate() {
            let (symbol, style) = if i < usize::from(filled) {
                (FILLED, self.filled_style)
            } else {
                (EMPTY, self.empty_style)
            };
            buf[(x, area.y)].set_char(symbol).set_style(style);
        }
    }
}
