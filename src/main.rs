// kiosk - terminal reader for a static-site content bundle
//
// The site is generated from one JSON document (articles, dashboards,
// tools, site-wide text). This reader fetches that document and renders
// it in the terminal.
//
// Architecture:
// - ContentStore: loads and owns the canonical dataset (reqwest / tokio::fs)
// - Projector: pure transformations from entities to view-models
// - FilterController: the one mutable filter/search state
// - TUI (ratatui): renders the page regions and the particle banner
// - An mpsc channel carries bundle load results into the event loop

mod cli;
mod config;
mod consent;
mod content;
mod demo;
mod filter;
mod logging;
mod particles;
mod projector;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation};
use consent::ConsentStore;
use content::BundleSource;
use logging::{KioskLogLayer, LogBuffer};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI subcommands first (config --show / --reset / --path).
    // None means a subcommand ran and we should exit.
    let Some(cli_args) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();

    // CLI flags override config for this run
    if let Some(bundle) = cli_args.bundle {
        config.bundle = bundle;
    }
    if cli_args.demo {
        config.demo_mode = true;
    }

    // Logs are captured to an in-memory buffer so they never write through
    // the alternate screen. File logging (if enabled) adds a JSON layer on
    // a non-blocking rotating appender; its guard must outlive the TUI so
    // buffered logs flush on exit.
    //
    // Filter precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("kiosk={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    tracing_subscriber::registry()
                        .with(filter)
                        .with(KioskLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();

                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(KioskLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(KioskLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Consent flag lives next to the config file
    let consent = ConsentStore::from_default_dir();
    if consent.is_none() {
        tracing::warn!("No home directory; consent banner will show every run");
    }

    // Bundle load results flow through this channel into the event loop.
    // Buffered so a reload result never blocks the loader task.
    let (load_tx, load_rx) = mpsc::channel(4);

    // Kick off the initial load before the terminal takes over
    let source = if config.demo_mode {
        tracing::info!("Running in demo mode with the built-in sample bundle");
        let _ = load_tx.try_send(Ok(demo::sample_bundle()));
        None
    } else {
        let source = BundleSource::parse(&config.bundle);
        tracing::info!("Loading content bundle from {}", source);
        let src = source.clone();
        let tx = load_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(content::load(&src).await).await;
        });
        Some(source)
    };

    tui::run_tui(load_rx, load_tx, source, log_buffer, config, consent).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
