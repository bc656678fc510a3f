//! Application layer: deck building, navigation and host sync.

/// Application services.
pub mod services;

pub use services::{
    ConfigSync, DEFAULT_REVEAL_INTERVAL, DeckSession, NavigationController, NavigationSnapshot,
    RevealScheduler, build_deck,
};
