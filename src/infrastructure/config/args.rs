use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "deckterm",
    version,
    about = "A terminal slide-deck presenter with staged reveal animations",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Delay between staged reveal steps, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub reveal_interval_ms: Option<u64>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// JSON file a host writes configuration updates to.
    #[arg(long, value_name = "PATH", env = "DECKTERM_HOST_FILE")]
    pub host_file: Option<PathBuf>,

    /// Enable `TachyonFX` slide transitions.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Course title shown on the title slide.
    #[arg(long)]
    pub course_title: Option<String>,

    /// Instructor line shown on the title slide.
    #[arg(long)]
    pub instructor_name: Option<String>,

    /// Company name shown in the header.
    #[arg(long)]
    pub company_name: Option<String>,
}
