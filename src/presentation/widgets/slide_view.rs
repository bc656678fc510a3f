use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::application::services::RevealCursor;
use crate::domain::entities::{Alignment, Card, CardLine, ContentBlock, Kpi, LabeledText, Slide};
use crate::presentation::theme::Theme;

const BULLET: &str = "• ";
const CARD_INDENT: &str = "│ ";
const MAX_CONTENT_WIDTH: u16 = 110;

/// Renders one slide with its staged cards gated by the reveal cursor.
///
/// Hidden cards keep their height so revealing one never shifts the rest.
pub struct SlideView<'a> {
    slide: &'a Slide,
    cursor: RevealCursor,
    theme: Theme,
}

impl<'a> SlideView<'a> {
    #[must_use]
    pub fn new(slide: &'a Slide) -> Self {
        Self {
            slide,
            cursor: None,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub const fn reveal_cursor(mut self, cursor: RevealCursor) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn is_revealed(&self, block: &ContentBlock) -> bool {
        match block.reveal_slot() {
            None => true,
            Some(slot) => self.cursor.is_some_and(|c| slot <= c),
        }
    }

    /// Content lines for a region `width` columns wide.
    #[must_use]
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width.max(10));
        let mut lines = Vec::new();

        if let Some(title) = self.slide.title_text() {
            lines.extend(
                wrap(title, width)
                    .into_iter()
                    .map(|l| Line::styled(l, self.theme.title_style)),
            );
        }
        if let Some(subtitle) = self.slide.subtitle_text() {
            lines.extend(
                wrap(subtitle, width)
                    .into_iter()
                    .map(|l| Line::styled(l, self.theme.subtitle_style)),
            );
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }

        for (i, block) in self.slide.content().iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let block_lines = self.block_lines(block, width);
            if self.is_revealed(block) {
                lines.extend(block_lines);
            } else {
                lines.extend(block_lines.iter().map(|_| Line::default()));
            }
        }

        if self.slide.alignment() == Alignment::Center {
            lines = lines.into_iter().map(Line::centered).collect();
        }
        lines
    }

    fn block_lines(&self, block: &ContentBlock, width: usize) -> Vec<Line<'static>> {
        let theme = &self.theme;
        match block {
            ContentBlock::Heading(text) => wrap(text, width)
                .into_iter()
                .map(|l| Line::styled(l, theme.heading_style))
                .collect(),
            ContentBlock::Paragraph(text) => wrap(text, width)
                .into_iter()
                .map(|l| Line::styled(l, theme.base_style))
                .collect(),
            ContentBlock::Bullets(items) => items
                .iter()
                .flat_map(|item| hanging(BULLET, item, width, theme.base_style))
                .collect(),
            ContentBlock::LabeledList(items) => items
                .iter()
                .flat_map(|item| labeled(item, width, theme))
                .collect(),
            ContentBlock::Chips(chips) => chip_lines(chips, width, theme.chip_style),
            ContentBlock::Card(card) => card_lines(card, width, theme),
            ContentBlock::Kpis(kpis) => kpi_lines(kpis, theme),
            ContentBlock::Image { path, alt } => vec![Line::from(vec![
                Span::styled(format!("[imagem: {alt}]"), theme.label_style),
                Span::styled(format!(" {path}"), theme.dimmed_style),
            ])],
            ContentBlock::QrCode { url, caption } => {
                let mut lines: Vec<Line<'static>> = wrap(caption, width)
                    .into_iter()
                    .map(|l| Line::styled(l, theme.base_style))
                    .collect();
                lines.push(Line::from(vec![
                    Span::styled("▣ QR ", theme.label_style),
                    Span::styled(url.clone(), theme.dimmed_style),
                ]));
                lines
            }
            ContentBlock::Table { header, rows } => table_lines(header, rows, theme),
            ContentBlock::Callout(text) => wrap(text, width.saturating_sub(2))
                .into_iter()
                .map(|l| Line::styled(format!(" {l} "), theme.callout_style))
                .collect(),
        }
    }
}

impl Widget for SlideView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width.min(MAX_CONTENT_WIDTH);
        let x = area.x + (area.width - width) / 2;
        let inner = Rect::new(x, area.y, width, area.height);

        Paragraph::new(self.lines(width)).render(inner, buf);
    }
}

/// Greedy word wrap by display width. Words longer than `width` get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn hanging(prefix: &str, text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    let indent = " ".repeat(prefix.width());
    wrap(text, width.saturating_sub(prefix.width()).max(1))
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            let lead = if i == 0 { prefix.to_string() } else { indent.clone() };
            Line::styled(format!("{lead}{l}"), style)
        })
        .collect()
}

fn labeled(item: &LabeledText, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let label = format!("{}: ", item.label);
    let label_width = label.width();
    let first_width = width.saturating_sub(label_width).max(1);

    let mut words = wrap(&item.text, first_width).into_iter();
    let first = words.next().unwrap_or_default();
    let mut lines = vec![Line::from(vec![
        Span::styled(label, theme.label_style),
        Span::styled(first, theme.base_style),
    ])];

    let rest: Vec<String> = words.collect();
    if !rest.is_empty() {
        lines.extend(
            wrap(&rest.join(" "), width)
                .into_iter()
                .map(|l| Line::styled(l, theme.base_style)),
        );
    }
    lines
}

fn chip_lines(chips: &[String], width: usize, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for chip in chips {
        let text = format!(" {chip} ");
        let chip_width = text.width() + 1;
        if used + chip_width > width && !spans.is_empty() {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
        used += chip_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn card_lines(card: &Card, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let border = theme.card_border_style;
    let inner = width.saturating_sub(CARD_INDENT.width()).max(1);

    let mut lines = vec![Line::from(vec![
        Span::styled("┌ ", border),
        Span::styled(card.title.clone(), theme.heading_style),
    ])];

    for line in &card.lines {
        let body: Vec<Line<'static>> = match line {
            CardLine::Text(text) => wrap(text, inner)
                .into_iter()
                .map(|l| Line::styled(l, theme.base_style))
                .collect(),
            CardLine::Bullet(text) => hanging(BULLET, text, inner, theme.base_style),
            CardLine::Labeled(item) => labeled(item, inner, theme),
        };
        lines.extend(body.into_iter().map(|l| {
            let mut spans = vec![Span::styled(CARD_INDENT, border)];
            spans.extend(l.spans);
            Line::from(spans)
        }));
    }

    lines.push(Line::styled("└", border));
    lines
}

fn kpi_lines(kpis: &[Kpi], theme: &Theme) -> Vec<Line<'static>> {
    let mut spans = Vec::new();
    for (i, kpi) in kpis.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", theme.dimmed_style));
        }
        spans.push(Span::styled(kpi.value.clone(), theme.title_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(kpi.label.clone(), theme.dimmed_style));
    }
    vec![Line::from(spans)]
}

fn table_lines(header: &[String], rows: &[Vec<String>], theme: &Theme) -> Vec<Line<'static>> {
    let columns = header.len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .chain(std::iter::once(&header[c]))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_row = |cells: &[String], style: Style| {
        let mut spans = Vec::new();
        for (c, width) in widths.iter().enumerate() {
            if c > 0 {
                spans.push(Span::styled(" │ ", theme.dimmed_style));
            }
            let cell = cells.get(c).map_or("", String::as_str);
            let pad = width.saturating_sub(cell.width());
            spans.push(Span::styled(format!("{cell}{}", " ".repeat(pad)), style));
        }
        Line::from(spans)
    };

    let separator = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");

    let mut lines = vec![
        render_row(header, theme.label_style),
        Line::styled(separator, theme.dimmed_style),
    ];
    lines.extend(rows.iter().map(|row| render_row(row.as_slice(), theme.base_style)));
    lines
}
