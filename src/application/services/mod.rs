pub mod config_sync;
pub mod content;
pub mod deck_builder;
pub mod navigation;
pub mod reveal_scheduler;
pub mod session;

pub use config_sync::{ConfigSync, DeckFields, spawn_host_listener};
pub use deck_builder::build_deck;
pub use navigation::{NavigationController, NavigationSnapshot, RevealCursor};
pub use reveal_scheduler::{DEFAULT_REVEAL_INTERVAL, RevealScheduler};
pub use session::DeckSession;
