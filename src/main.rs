use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use tokio::sync::mpsc;

use foodmatch::config::Config;
use foodmatch::logging;
use foodmatch::logic::sequencer::TimerRequest;
use foodmatch::model::Model;
use foodmatch::services::{
    spawn_timer_service, AcceptAllAuthenticator, Authenticator, PhotoStore, SessionPhotoStore,
    TimerFired,
};

mod app;
mod handlers;
mod ui;

/// Foodmatch: meet people through the food they love
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/foodmatch-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Initial route, e.g. /chat (still subject to sign-in)
    #[arg(short, long)]
    route: Option<String>,
}

pub struct App {
    pub model: Model,

    authenticator: Box<dyn Authenticator>,
    photo_store: Box<dyn PhotoStore>,

    // Timer service channels
    timer_tx: mpsc::UnboundedSender<TimerRequest>,
    timer_rx: mpsc::UnboundedReceiver<TimerFired>,
}

impl App {
    /// Must be called from inside the tokio runtime (spawns the timer service)
    fn new(config: &Config) -> Self {
        let (timer_tx, timer_rx) = spawn_timer_service();
        Self {
            model: Model::new(config),
            authenticator: Box::new(AcceptAllAuthenticator),
            photo_store: Box::new(SessionPhotoStore::new()),
            timer_tx,
            timer_rx,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

/// Locate the config file
///
/// An explicit `--config` must exist. Otherwise the platform config dir and
/// then `./config.yaml` are tried; no file at all means built-in defaults.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/foodmatch/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("foodmatch").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    logging::init(args.debug)?;

    // Determine config file path
    let config_path = get_config_path(args.config)?;
    match &config_path {
        Some(path) => log::debug!("Loading config from: {}", path.display()),
        None => log::debug!("No config file found, using defaults"),
    }

    // Load configuration
    let mut config = Config::load(config_path.as_deref())?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(route) = args.route {
        config.start_route = route;
    }

    // Initialize app
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::warn!("Exited with error: {:#}", e);
    }
    log::logger().flush();

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, &app.model);
        })?;

        if app.model.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Deliver elapsed sequencer timers (non-blocking)
        while let Ok(fired) = app.timer_rx.try_recv() {
            handlers::handle_timer_fired(app, fired);
        }

        // Short poll so swipe animations and banners update promptly
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }
    }

    Ok(())
}
