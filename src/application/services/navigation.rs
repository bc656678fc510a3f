//! Slide navigation and staged reveal controller.
//!
//! The controller owns the current slide index, the reveal cursor of every
//! slide and the token of the active visit. Each index change starts a new
//! visit: the cursor of the entered slide is reset and a [`SlideEntry`] is
//! returned for the caller to schedule. Reveal steps are accepted only when they
//! carry the active visit token, so steps from a visit that has ended are
//! dropped no matter when they arrive.

use tracing::{debug, trace};

use crate::domain::entities::{RevealStep, SlideEntry, VisitToken};
use crate::domain::keybinding::Action;

/// Reveal cursor of one slide: `None` until the first item is shown,
/// `Some(k)` once items `0..=k` are visible.
pub type RevealCursor = Option<usize>;

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub current: usize,
    pub total: usize,
    pub cursor: RevealCursor,
    pub revealable_count: usize,
    pub at_first: bool,
    pub at_last: bool,
}

impl NavigationSnapshot {
    /// Whether every staged item of the current slide is visible.
    #[must_use]
    pub fn fully_revealed(&self) -> bool {
        self.revealable_count == 0 || self.cursor == Some(self.revealable_count - 1)
    }

    /// One-based position for display.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current + 1
    }
}

#[derive(Debug)]
pub struct NavigationController {
    revealable: Vec<usize>,
    current: usize,
    cursors: Vec<RevealCursor>,
    visit: VisitToken,
}

impl NavigationController {
    /// Creates the controller and enters slide 0.
    ///
    /// # Panics
    /// Panics if `revealable_counts` is empty; a deck always has a slide.
    #[must_use]
    pub fn new(revealable_counts: Vec<usize>) -> Self {
        assert!(
            !revealable_counts.is_empty(),
            "navigation requires at least one slide"
        );
        let cursors = vec![None; revealable_counts.len()];
        let mut controller = Self {
            revealable: revealable_counts,
            current: 0,
            cursors,
            visit: VisitToken::new(0),
        };
        controller.enter(0);
        controller
    }

    /// Entry describing the active visit. Used to schedule the initial mount.
    #[must_use]
    pub fn current_entry(&self) -> SlideEntry {
        SlideEntry {
            visit: self.visit,
            slide: self.current,
            revealable_count: self.revealable[self.current],
        }
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealable.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealable.is_empty()
    }

    #[must_use]
    pub const fn active_visit(&self) -> VisitToken {
        self.visit
    }

    /// Steps forward. Returns the new entry, or `None` at the last slide.
    pub fn go_next(&mut self) -> Option<SlideEntry> {
        let target = (self.current + 1).min(self.len() - 1);
        self.move_to(target)
    }

    /// Steps back. Returns the new entry, or `None` at slide 0.
    pub fn go_previous(&mut self) -> Option<SlideEntry> {
        let target = self.current.saturating_sub(1);
        self.move_to(target)
    }

    /// Maps a key action onto navigation. Non-navigation actions are ignored.
    pub fn handle_action(&mut self, action: Action) -> Option<SlideEntry> {
        match action {
            Action::NextSlide => self.go_next(),
            Action::PreviousSlide => self.go_previous(),
            Action::Quit => None,
        }
    }

    /// Applies a scheduled reveal step. Returns `false` for stale steps.
    pub fn apply_reveal_step(&mut self, step: RevealStep) -> bool {
        if step.visit != self.visit || step.slide != self.current {
            trace!(
                visit = %step.visit,
                active = %self.visit,
                slide = step.slide,
                "Dropping stale reveal step"
            );
            return false;
        }

        let count = self.revealable[step.slide];
        if step.step >= count {
            return false;
        }

        self.cursors[step.slide] = Some(step.step);
        trace!(slide = step.slide, step = step.step, "Revealed item");
        true
    }

    /// Reveal cursor of `slide`.
    ///
    /// # Panics
    /// Panics if `slide` is outside the deck.
    #[must_use]
    pub fn reveal_cursor(&self, slide: usize) -> RevealCursor {
        assert!(
            slide < self.len(),
            "slide {slide} out of range for deck of {}",
            self.len()
        );
        self.cursors[slide]
    }

    /// Whether staged item `item` of `slide` is visible. Slides without staged
    /// items count as fully revealed.
    ///
    /// # Panics
    /// Panics if `slide` is outside the deck.
    #[must_use]
    pub fn is_item_revealed(&self, slide: usize, item: usize) -> bool {
        let cursor = self.reveal_cursor(slide);
        self.revealable[slide] == 0 || cursor.is_some_and(|c| item <= c)
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current: self.current,
            total: self.len(),
            cursor: self.cursors[self.current],
            revealable_count: self.revealable[self.current],
            at_first: self.current == 0,
            at_last: self.current + 1 == self.len(),
        }
    }

    fn move_to(&mut self, target: usize) -> Option<SlideEntry> {
        if target == self.current {
            return None;
        }
        debug!(from = self.current, to = target, "Changing slide");
        self.current = target;
        Some(self.enter(target))
    }

    fn enter(&mut self, index: usize) -> SlideEntry {
        self.visit = self.visit.next();
        self.cursors[index] = None;
        self.current_entry()
    }
}
