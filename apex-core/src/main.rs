//! src/main.rs
//! ============================================================================
//! # Apex Predators TUI Application Entry Point
//!
//! Terminal browser for the apex predator catalog, built with ratatui and
//! tokio. Loads the configured dataset, then runs a single-task event loop
//! that renders on demand and dispatches key actions to the session state.

use std::{
    io::{self, Stdout},
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend as Backend};
use tokio::{signal, sync::Notify};
use tracing::{error, info, warn};

use apex_core::{
    Logger,
    config::Config,
    logging::DEFAULT_LOG_LEVEL,
    controller::{actions::Action, event_loop::Controller},
    model::app_state::AppState,
    view::{theme, ui::View},
};

type AppTerminal = Terminal<Backend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup panic handler early
    setup_panic_handler();

    let app: App = App::new()
        .await
        .context("Failed to initialize application")?;

    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    controller: Controller,
    state: AppState,
    shutdown: Arc<Notify>,
}

impl App {
    async fn new() -> Result<Self> {
        // Config first so the log level is known; failures fall back to defaults
        let (config, config_err) = match Config::load().await {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        };

        let (directive, level_err) = Logger::directive_or_default(&config.log_level);
        Logger::init_tracing(directive).context("Failed to initialize logging")?;
        info!("Starting Apex Predators TUI");

        let mut startup_warnings: Vec<String> = Vec::new();
        if let Some(e) = config_err {
            warn!("Failed to load config, using defaults: {}", e);
            startup_warnings.push(format!("Config ignored: {e}"));
        }
        if let Some(e) = level_err {
            warn!("{}; logging at '{}' instead", e, DEFAULT_LOG_LEVEL);
            startup_warnings.push(format!("{e}; logging at '{DEFAULT_LOG_LEVEL}'"));
        }

        let config: Arc<Config> = Arc::new(config);
        theme::init_theme(config.theme);

        let mut state: AppState = AppState::bootstrap(config).await;
        state.report_startup_warnings(&startup_warnings);

        let terminal: AppTerminal = setup_terminal().context("Failed to initialize terminal")?;

        info!("Application initialization complete");

        Ok(Self {
            terminal,
            controller: Controller::new(),
            state,
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();

        if let Ok(size) = self.terminal.size() {
            Controller::dispatch(&mut self.state, Action::Resize(size.width, size.height));
        }

        info!("Starting main event loop");

        loop {
            self.render()?;

            let action: Action = tokio::select! {
                _ = self.shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_action = self.controller.next_action(&self.state) => {
                    match maybe_action {
                        Some(action) => action,
                        None => {
                            info!("Controller stream ended");
                            break;
                        }
                    }
                }
            };

            if !Controller::dispatch(&mut self.state, action) {
                info!("Quit action received");
                break;
            }
        }

        info!("Main event loop ended");
        Ok(())
    }

    /// Render the UI if a redraw is needed
    fn render(&mut self) -> Result<()> {
        if self.state.redraw {
            let state: &AppState = &self.state;
            self.terminal
                .draw(|frame: &mut Frame<'_>| View::redraw(frame, state))
                .context("Failed to draw terminal")?;

            self.state.redraw = false;
        }

        Ok(())
    }

    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C signal");
                    shutdown.notify_one();
                }
                Err(e) => {
                    error!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            error!("Failed to cleanup terminal: {}", e);
        }
    }
}

/// Initialize terminal in raw mode with alternate screen
fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend: Backend<Stdout> = Backend::new(stdout);
    let terminal: AppTerminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

/// Restore terminal to normal mode
fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

/// Setup panic handler for graceful terminal restoration
fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
