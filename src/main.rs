// askme - Ask Me Anything, a terminal chat client
//
// Sends questions to a remote question-answering API and shows the running
// conversation, newest exchange first.
//
// Architecture:
// - Conversation: Store (state + submit cycle), loading stages, ticker, Session
// - Gateway: async trait over the remote API, reqwest implementation
// - TUI (ratatui): chat screen driven by a single tokio::select! loop
// - CLI (clap): headless ask/history/clear plus config management
// - Demo (axum): in-process mock of the remote API

mod cli;
mod config;
mod conversation;
mod demo;
mod gateway;
mod logging;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LoggingConfig};
use demo::MockBackend;
use gateway::{Gateway, HttpGateway};
use logging::{CaptureLayer, LogRing};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Config management never touches the network
    if let Some(Commands::Config {
        show,
        reset,
        edit,
        path,
    }) = cli.command
    {
        cli::handle_config_command(show, reset, edit, path)?;
        return Ok(ExitCode::SUCCESS);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::load()?;
    if cli.demo {
        config.demo_mode = true;
    }
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    // In TUI mode logs go to the in-memory ring (stderr would garble the
    // display); headless commands log to stderr
    let tui_mode = cli.command.is_none();
    let log_ring = LogRing::new();
    let _file_guard = init_tracing(&config.logging, tui_mode.then_some(&log_ring));

    let backend = if config.demo_mode {
        Some(MockBackend::spawn(config.demo_latency()).await?)
    } else {
        None
    };
    let base_url = match &backend {
        Some(backend) => backend.base_url().to_string(),
        None => config.api_url.clone(),
    };

    let http = HttpGateway::new(&base_url, config.request_timeout())
        .context("Failed to set up the API client")?;
    let label = if backend.is_some() {
        format!("demo ({})", http.base_url())
    } else {
        http.base_url().to_string()
    };
    let gateway: Arc<dyn Gateway> = Arc::new(http);

    let exit = match cli.command {
        None => {
            tui::run_tui(gateway, log_ring, config, label).await?;
            ExitCode::SUCCESS
        }
        Some(command) => {
            if cli::run_conversation_command(command, gateway).await {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    };

    if let Some(backend) = backend {
        backend.shutdown().await;
    }

    Ok(exit)
}

/// Initialize tracing
///
/// Precedence for the filter: RUST_LOG env var > config file > default "info".
/// With a ring, events are captured for the TUI log panel; without one they
/// go to stderr. File logging (JSON, rotated) is added on top when enabled.
///
/// The returned guard must be kept alive for the duration of the program to
/// ensure file logs flush.
fn init_tracing(
    logging: &LoggingConfig,
    ring: Option<&LogRing>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter_directive().into());

    let capture_layer = ring.map(|ring| CaptureLayer::new(ring.clone()));
    let stderr_layer = ring
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = if logging.file_enabled {
        match std::fs::create_dir_all(&logging.file_dir) {
            Ok(()) => {
                // Writes happen on a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(logging.rolling_appender());
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    logging.file_dir, e
                );
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(capture_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}
