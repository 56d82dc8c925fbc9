//! vortexflow - VortexFlow Command Deck
//!
//! A terminal shell with an attract-mode intro screen, a slide-in sidebar
//! of widgets and categories, and a dark/light theme toggle.
//!
//! Usage: vortexflow [--config PATH] [--log-file PATH] [--write-config]

mod app;
mod catalog;
mod config;
mod controls;
mod modules;
mod scheduler;
mod types;
mod ui;
mod view;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version, about = "VortexFlow Command Deck")]
struct Cli {
    /// Config file (defaults to ~/.config/vortexflow/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write logs to this file (level `info` unless RUST_LOG is set)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,

    /// Disable the particle backdrop
    #[arg(long)]
    no_backdrop: bool,

    /// Milliseconds between intro lines
    #[arg(long, value_name = "MS")]
    attract_interval: Option<u64>,
}

impl Cli {
    /// Command-line flags win over the config file
    fn apply(&self, config: &mut Config) {
        if self.no_backdrop {
            config.backdrop.enabled = false;
        }
        if let Some(ms) = self.attract_interval {
            config.attract.interval_ms = ms;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli).context("Failed to set up logging")?;

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(cli: &Cli) -> Result<()> {
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {:?}", path))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let path = Config::resolve(cli.config.as_deref())?;
    let mut config = Config::load(&path).context("Failed to load configuration")?;

    if cli.write_config {
        config.save(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    cli.apply(&mut config);

    let mut app = App::new(config).context("Failed to initialize application")?;
    app.boot(Instant::now());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Restore the terminal on panic, otherwise it stays in raw mode
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        let _ = execute!(std::io::stdout(), crossterm::cursor::Show);
        original_hook(info);
    }));

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.config.shell.tick_ms.max(10));

    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        let now = Instant::now();
        app.tick(now);

        // Wake up for the next attract line even if no input arrives
        let timeout = app
            .scheduler
            .next_deadline()
            .map_or(tick, |deadline| deadline.saturating_duration_since(now).min(tick));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            tracing::info!("quit requested");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "vortexflow",
            "--config",
            "/tmp/deck.toml",
            "--no-backdrop",
            "--attract-interval",
            "750",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/deck.toml")));
        assert!(cli.no_backdrop);
        assert!(!cli.write_config);

        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(!config.backdrop.enabled);
        assert_eq!(config.attract.interval_ms, 750);
    }

    #[test]
    fn test_cli_defaults_leave_config_alone() {
        let cli = Cli::try_parse_from(["vortexflow"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_rejects_bad_interval() {
        assert!(Cli::try_parse_from(["vortexflow", "--attract-interval", "soon"]).is_err());
    }
}
