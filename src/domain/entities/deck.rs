use super::Slide;

/// Ordered, fixed-length sequence of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    #[must_use]
    pub const fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Per-slide staged item counts, indexed like the deck.
    #[must_use]
    pub fn revealable_counts(&self) -> Vec<usize> {
        self.slides.iter().map(Slide::revealable_count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Card, ContentBlock};

    #[test]
    fn test_revealable_counts() {
        let deck = Deck::new(vec![
            Slide::new(vec![]),
            Slide::new(vec![
                ContentBlock::Card(Card::new("a", vec![]).staged(0)),
                ContentBlock::Card(Card::new("b", vec![]).staged(1)),
            ]),
        ]);

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.revealable_counts(), vec![0, 2]);
        assert!(deck.get(2).is_none());
    }
}
