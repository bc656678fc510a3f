//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{Deck, DeckConfig, DeckConfigUpdate, Slide};
pub use errors::HostError;
pub use ports::{ConfigHostPort, DeckIntrospection};
