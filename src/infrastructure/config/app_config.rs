//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::entities::{DeckConfig, DeckConfigUpdate};

pub(super) const APP_NAME: &str = "deckterm";
pub(super) const APP_QUALIFIER: &str = "br";
pub(super) const APP_ORGANIZATION: &str = "crescer";

const DEFAULT_REVEAL_INTERVAL_MS: u64 = 280;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Presenter configuration, read from `config.toml` and merged with CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Delay between two staged reveal steps, in milliseconds.
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,

    /// Enable mouse support for the footer buttons.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// JSON file watched for configuration pushed by a host.
    #[serde(default)]
    pub host_file: Option<PathBuf>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Deck text overrides applied over the built-in defaults.
    #[serde(default)]
    pub deck: DeckConfigUpdate,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` slide transitions.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            accent_color: default_accent_color(),
        }
    }
}

fn default_accent_color() -> String {
    "#667eea".to_string()
}

fn default_true() -> bool {
    true
}

fn default_reveal_interval_ms() -> u64 {
    DEFAULT_REVEAL_INTERVAL_MS
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(interval) = args.reveal_interval_ms {
            self.reveal_interval_ms = interval;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(host_file) = args.host_file {
            self.host_file = Some(host_file);
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
        if let Some(course_title) = args.course_title {
            self.deck.course_title = Some(course_title);
        }
        if let Some(instructor_name) = args.instructor_name {
            self.deck.instructor_name = Some(instructor_name);
        }
        if let Some(company_name) = args.company_name {
            self.deck.company_name = Some(company_name);
        }
    }

    /// Delay between reveal steps.
    #[must_use]
    pub const fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_interval_ms)
    }

    /// Deck text at startup: built-in defaults with `[deck]` overrides applied.
    #[must_use]
    pub fn initial_deck_config(&self) -> DeckConfig {
        DeckConfig::default().merged(&self.deck)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("deckterm.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            reveal_interval_ms: DEFAULT_REVEAL_INTERVAL_MS,
            mouse: true,
            host_file: None,
            ui: UiConfig::default(),
            deck: DeckConfigUpdate::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_with_deck_section() {
        let toml_content = r#"
            log_level = "debug"
            reveal_interval_ms = 150
            host_file = "/tmp/deck-host.json"

            [ui]
            enable_animations = false

            [deck]
            course_title = "Análise de Dados"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.reveal_interval(), Duration::from_millis(150));
        assert_eq!(config.host_file, Some(PathBuf::from("/tmp/deck-host.json")));
        assert!(!config.ui.enable_animations);
        assert_eq!(config.ui.accent_color, "#667eea");

        let deck = config.initial_deck_config();
        assert_eq!(deck.course_title, "Análise de Dados");
        assert_eq!(deck.instructor_name, DeckConfig::default().instructor_name);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.reveal_interval_ms, 280);
        assert!(config.mouse);
        assert!(config.host_file.is_none());
        assert!(config.ui.enable_animations);
        assert_eq!(config.initial_deck_config(), DeckConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.reveal_interval_ms, 280);
        assert!(config.deck.is_empty());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config: AppConfig = toml::from_str(
            r#"
            reveal_interval_ms = 500
            [deck]
            company_name = "Arquivo"
            "#,
        )
        .expect("parse");
        let args = CliArgs::parse_from([
            "deckterm",
            "--reveal-interval-ms",
            "100",
            "--company-name",
            "Linha de comando",
            "--mouse",
            "false",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.reveal_interval_ms, 100);
        assert!(!config.mouse);
        assert_eq!(config.deck.company_name.as_deref(), Some("Linha de comando"));
    }
}
