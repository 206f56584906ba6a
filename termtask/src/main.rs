//! `TermTask` — terminal-native task list manager.
//!
//! Launches the TUI form by default, or a line-oriented console menu
//! with `--console`. Configuration via CLI flags, environment
//! variables, or config file (`~/.config/termtask/config.toml`).
//!
//! ```bash
//! # TUI form
//! cargo run --bin termtask
//!
//! # Start with only pending tasks visible
//! cargo run --bin termtask -- --pending
//!
//! # Line-oriented console menu
//! cargo run --bin termtask -- --console
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use termtask::app::App;
use termtask::config::{AppConfig, CliArgs};
use termtask::console;
use termtask::ui;
use termtask_core::TaskStore;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("termtask starting");

    if cli.console {
        let result = run_console();
        tracing::info!("termtask exiting");
        return result;
    }

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("termtask exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal and the console menu owns stdout). Returns a [`WorkerGuard`]
/// that must be held until shutdown to ensure all buffered log entries
/// are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("termtask.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Run the line-oriented console menu on stdin/stdout.
fn run_console() -> io::Result<()> {
    let mut store = TaskStore::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    console::run(&mut store, &mut input, &mut output)
}

/// Main TUI loop: draw, poll for input, dispatch key events.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app = App::new().with_pending_view(config.start_in_pending_view);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
