//! Configuration host adapters.

mod file_host;

pub use file_host::{FileConfigHost, PanelDocument};
