//! Infrastructure layer with configuration and host adapters.

/// Application configuration.
pub mod config;
/// Configuration host adapters.
pub mod host;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use host::FileConfigHost;
