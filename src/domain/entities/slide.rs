//! Slide descriptors and their content blocks.

/// Horizontal alignment of a slide's title, subtitle and content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Centered layout, used for title and closing slides.
    Center,
    /// Left-aligned layout.
    #[default]
    Left,
}

/// A label/text pair rendered as `label: text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    /// Bold leading label.
    pub label: String,
    /// Body text.
    pub text: String,
}

impl LabeledText {
    /// Creates a labeled text line.
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// One line inside a card body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLine {
    /// Plain text.
    Text(String),
    /// Bulleted item.
    Bullet(String),
    /// `label: text` line.
    Labeled(LabeledText),
}

/// A boxed group of lines. Cards with a reveal slot take part in staged reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card heading.
    pub title: String,
    /// Body lines.
    pub lines: Vec<CardLine>,
    /// Position in the slide's reveal sequence, if staged.
    pub reveal_slot: Option<usize>,
}

impl Card {
    /// Creates an always-visible card.
    #[must_use]
    pub fn new(title: impl Into<String>, lines: Vec<CardLine>) -> Self {
        Self {
            title: title.into(),
            lines,
            reveal_slot: None,
        }
    }

    /// Marks the card as staged at the given reveal slot.
    #[must_use]
    pub const fn staged(mut self, slot: usize) -> Self {
        self.reveal_slot = Some(slot);
        self
    }
}

/// Headline number with a caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kpi {
    /// Value, e.g. `< 1%`.
    pub value: String,
    /// Caption below the value.
    pub label: String,
}

impl Kpi {
    /// Creates a KPI.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Renderable content of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    /// Section heading inside the content region.
    Heading(String),
    /// Wrapped paragraph.
    Paragraph(String),
    /// Bulleted list.
    Bullets(Vec<String>),
    /// List of `label: text` lines.
    LabeledList(Vec<LabeledText>),
    /// Row of short tags.
    Chips(Vec<String>),
    /// Boxed card, possibly staged.
    Card(Card),
    /// Row of headline numbers.
    Kpis(Vec<Kpi>),
    /// Image shown as a framed placeholder with its alt text.
    Image {
        /// Asset path relative to the deck's asset directory.
        path: String,
        /// Alternative text.
        alt: String,
    },
    /// QR code target shown with a caption.
    QrCode {
        /// Encoded URL.
        url: String,
        /// Caption shown above the link.
        caption: String,
    },
    /// Table with a header row.
    Table {
        /// Column headers.
        header: Vec<String>,
        /// Body rows.
        rows: Vec<Vec<String>>,
    },
    /// Highlighted note.
    Callout(String),
}

impl ContentBlock {
    /// Returns the reveal slot of this block, if it is a staged card.
    #[must_use]
    pub const fn reveal_slot(&self) -> Option<usize> {
        match self {
            Self::Card(card) => card.reveal_slot,
            _ => None,
        }
    }
}

/// One panel of the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    title: Option<String>,
    subtitle: Option<String>,
    content: Vec<ContentBlock>,
    alignment: Alignment,
    revealable_count: usize,
}

impl Slide {
    /// Creates a slide from its content. The revealable count is the number of
    /// staged cards in `content`.
    #[must_use]
    pub fn new(content: Vec<ContentBlock>) -> Self {
        let revealable_count = content
            .iter()
            .filter(|block| block.reveal_slot().is_some())
            .count();

        Self {
            title: None,
            subtitle: None,
            content,
            alignment: Alignment::default(),
            revealable_count,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Slide title, if any.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Slide subtitle, if any.
    #[must_use]
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Content blocks in display order.
    #[must_use]
    pub fn content(&self) -> &[ContentBlock] {
        &self.content
    }

    /// Layout alignment.
    #[must_use]
    pub const fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Number of staged items revealed one by one on entry.
    #[must_use]
    pub const fn revealable_count(&self) -> usize {
        self.revealable_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revealable_count_counts_staged_cards_only() {
        let slide = Slide::new(vec![
            ContentBlock::Paragraph("intro".to_string()),
            ContentBlock::Card(Card::new("a", vec![]).staged(0)),
            ContentBlock::Card(Card::new("b", vec![])),
            ContentBlock::Card(Card::new("c", vec![]).staged(1)),
        ]);

        assert_eq!(slide.revealable_count(), 2);
    }

    #[test]
    fn test_defaults() {
        let slide = Slide::new(vec![]);

        assert_eq!(slide.alignment(), Alignment::Left);
        assert_eq!(slide.title_text(), None);
        assert_eq!(slide.subtitle_text(), None);
        assert_eq!(slide.revealable_count(), 0);
    }

    #[test]
    fn test_builder() {
        let slide = Slide::new(vec![]).title("Title").subtitle("Sub").centered();

        assert_eq!(slide.title_text(), Some("Title"));
        assert_eq!(slide.subtitle_text(), Some("Sub"));
        assert_eq!(slide.alignment(), Alignment::Center);
    }
}
