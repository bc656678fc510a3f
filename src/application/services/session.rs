//! The presenter's owned state: live config, built deck and navigation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Deck, DeckConfig, DeckConfigUpdate, RevealStep, Slide, SlideEntry};
use crate::domain::keybinding::Action;

use super::config_sync::ConfigSync;
use super::deck_builder::build_deck;
use super::navigation::{NavigationController, NavigationSnapshot};

pub struct DeckSession {
    config: ConfigSync,
    deck: Deck,
    navigation: NavigationController,
}

impl DeckSession {
    /// Builds the deck for `config` and enters the first slide.
    #[must_use]
    pub fn new(config: DeckConfig) -> Self {
        let deck = build_deck(&config);
        let navigation = NavigationController::new(deck.revealable_counts());
        Self {
            config: ConfigSync::new(config),
            deck,
            navigation,
        }
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn config(&self) -> Arc<DeckConfig> {
        self.config.current()
    }

    #[must_use]
    pub const fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        self.navigation.snapshot()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.navigation.current_index())
    }

    /// Entry of the active visit, scheduled once on mount.
    #[must_use]
    pub fn current_entry(&self) -> SlideEntry {
        self.navigation.current_entry()
    }

    pub fn handle_action(&mut self, action: Action) -> Option<SlideEntry> {
        self.navigation.handle_action(action)
    }

    pub fn go_next(&mut self) -> Option<SlideEntry> {
        self.navigation.go_next()
    }

    pub fn go_previous(&mut self) -> Option<SlideEntry> {
        self.navigation.go_previous()
    }

    pub fn apply_reveal_step(&mut self, step: RevealStep) -> bool {
        self.navigation.apply_reveal_step(step)
    }

    /// Applies a host update and rebuilds the deck text. Navigation and reveal
    /// state are left as they are.
    pub fn apply_config_update(&mut self, update: &DeckConfigUpdate) -> bool {
        if !self.config.apply(update) {
            return false;
        }
        let deck = build_deck(&self.config.current());
        debug_assert_eq!(deck.revealable_counts(), self.deck.revealable_counts());
        debug!(slides = deck.len(), "Rebuilt deck after config update");
        self.deck = deck;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_title(title: &str) -> DeckConfigUpdate {
        DeckConfigUpdate {
            course_title: Some(title.to_string()),
            ..DeckConfigUpdate::default()
        }
    }

    #[test]
    fn test_new_session_starts_at_first_slide() {
        let session = DeckSession::new(DeckConfig::default());

        assert_eq!(session.snapshot().current, 0);
        assert_eq!(session.snapshot().total, session.deck().len());
        assert_eq!(
            session.current_slide().and_then(Slide::title_text),
            Some("Quem Somos")
        );
    }

    #[test]
    fn test_config_update_keeps_navigation_and_reveal() {
        let mut session = DeckSession::new(DeckConfig::default());
        for _ in 0..3 {
            session.go_next();
        }
        let entry = session.current_entry();
        assert_eq!(entry.revealable_count, 3);
        assert!(session.apply_reveal_step(RevealStep {
            visit: entry.visit,
            slide: entry.slide,
            step: 1,
        }));

        assert!(session.apply_config_update(&course_title("Curso novo")));

        assert_eq!(session.snapshot().current, 3);
        assert_eq!(session.snapshot().cursor, Some(1));
        assert_eq!(session.navigation().active_visit(), entry.visit);
        assert_eq!(
            session.deck().get(1).and_then(Slide::title_text),
            Some("Curso novo")
        );
    }

    #[test]
    fn test_reveal_in_flight_survives_config_update() {
        let mut session = DeckSession::new(DeckConfig::default());
        for _ in 0..3 {
            session.go_next();
        }
        let entry = session.current_entry();

        session.apply_config_update(&course_title("Outro"));

        assert!(session.apply_reveal_step(RevealStep {
            visit: entry.visit,
            slide: entry.slide,
            step: 0,
        }));
        assert_eq!(session.snapshot().cursor, Some(0));
    }

    #[test]
    fn test_unchanged_update_does_not_rebuild() {
        let mut session = DeckSession::new(DeckConfig::default());
        assert!(!session.apply_config_update(&DeckConfigUpdate::default()));
    }

    #[test]
    fn test_handle_action_moves() {
        let mut session = DeckSession::new(DeckConfig::default());

        assert!(session.handle_action(Action::PreviousSlide).is_none());
        let entry = session.handle_action(Action::NextSlide).expect("moved");
        assert_eq!(entry.slide, 1);
    }
}
