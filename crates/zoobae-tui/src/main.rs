//! Zoobae - a terminal shell for the Zoobae dating app.
//!
//! Walks through welcome, login and registration against the Zoobae
//! authentication backend, then lands on the main tab hub.

mod app;
mod branding;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zoobae_core::Config;

use app::{App, AppState};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Environment variable overriding the backend address
const API_URL_ENV: &str = "ZOOBAE_API_URL";

/// Log file prefix inside the cache directory
const LOG_FILE: &str = "zoobae.log";

/// Initialize the tracing subscriber for logging.
///
/// The terminal belongs to the UI, so logs go to a daily file in the cache
/// directory. Use RUST_LOG to control the level (e.g., RUST_LOG=debug).
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_dir = Config::cache_dir().ok()?;
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Some(guard)
}

fn load_config() -> (Config, Option<std::path::PathBuf>) {
    let path = match Config::default_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(error = %e, "No config directory, settings will not be saved");
            None
        }
    };

    let mut config = match path.as_deref().map(Config::load_from) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
        None => Config::default(),
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        info!(url = %url, "Backend address overridden from environment");
        config.api_base_url = url;
    }

    (config, path)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_tracing();
    info!("Zoobae starting");

    let (config, config_path) = load_config();
    let mut app = App::new(config, config_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("Zoobae shutting down");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll with a timeout so taglines animate and results land
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Ctrl+C to quit
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    if handle_input(app, key)? {
                        return Ok(());
                    }
                }
            }
        }

        // Apply finished submissions
        app.check_background_tasks();

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
