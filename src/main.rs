use std::io::stdout;

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use deckterm::application::services::{DeckSession, spawn_host_listener};
use deckterm::infrastructure::{AppConfig, CliArgs, FileConfigHost, StorageManager};
use deckterm::presentation::App;
use deckterm::presentation::theme::Theme;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level.to_tracing_level()).into())
        .from_env_lossy();

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app(config: &AppConfig) -> App {
    let deck_config = config.initial_deck_config();
    let session = DeckSession::new(deck_config.clone());

    let mut app = App::new(session, config.reveal_interval())
        .with_theme(Theme::new(&config.ui.accent_color))
        .with_animations(config.ui.enable_animations)
        .with_mouse(config.mouse);

    if let Some(host_file) = &config.host_file {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let host = FileConfigHost::new(host_file);
        match spawn_host_listener(Box::new(host), &deck_config, update_tx) {
            Ok(_) => app = app.with_host_updates(update_rx),
            Err(e) => warn!(error = %e, "Configuration host unavailable, using local config"),
        }
    }

    app
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = deckterm::VERSION, "Starting {}", deckterm::NAME);

    let app = create_app(&config);

    let mut terminal = ratatui::init();
    if config.mouse {
        execute!(stdout(), EnableMouseCapture)?;
    }

    let result = app.run(&mut terminal).await;

    ratatui::restore();
    if config.mouse {
        execute!(stdout(), DisableMouseCapture)?;
    }

    result
}
