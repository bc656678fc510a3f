//! deckterm - A terminal slide-deck presenter.
//!
//! This crate renders a fixed course deck in the terminal with arrow-key and
//! mouse navigation, staged reveal of cards on entry, and live text overrides
//! pushed by an optional host.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the deck model services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and the host adapter.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "deckterm";
