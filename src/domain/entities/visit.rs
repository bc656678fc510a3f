use std::fmt;

/// Identifies one entry into a slide. Every navigation mints a new token, so a
/// reveal step carrying an older token belongs to a visit that has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisitToken(u64);

impl VisitToken {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VisitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A slide has just become current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideEntry {
    pub visit: VisitToken,
    pub slide: usize,
    pub revealable_count: usize,
}

/// Deferred instruction to reveal items `0..=step` of a visited slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub visit: VisitToken,
    pub slide: usize,
    pub step: usize,
}
