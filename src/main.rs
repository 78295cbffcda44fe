// Starfolio
// Terminal portfolio page with a twinkling star field and tabbed projects

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use starfolio::{load_and_validate_config, ui::run_app, App, LOG_ENV, LOG_FILE_NAME};

//--------------------------------------------------------<<

#[derive(Parser, Debug)]
#[command(name = "starfolio", version, about = "Portfolio page in the terminal")]
struct Args {
    /// Configuration file (defaults to the bundled config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the star field; the same seed gives the same sky
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write logs
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Keyboard only; leaves mouse selection to the terminal
    #[arg(long)]
    no_mouse: bool,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.clone())?;

    // Load and validate configuration from YAML file
    let config = load_and_validate_config(args.config.as_deref())?;
    let mouse = config.application.mouse_enabled && !args.no_mouse;

    let mut app = App::new(config, args.seed)?;

    let mut terminal = setup_terminal(mouse)?;
    app.mount(Instant::now());

    let result = run_app(&mut terminal, &mut app);

    // Effects stop on every exit path, then the terminal is handed back
    app.teardown();
    let restored = restore_terminal(&mut terminal, mouse);

    if let Err(e) = &result {
        error!(error = %format!("{:#}", e), "application error");
    }
    info!("exiting");
    result.and(restored)
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                  TERMINAL SETUP                                                  │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    match enter_terminal(mouse) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            // Undo whatever part of the setup already reached the terminal
            let _ = leave_terminal(&mut io::stdout(), mouse);
            let _ = disable_raw_mode();
            Err(e)
        }
    }
}

fn enter_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mouse: bool) -> Result<()> {
    disable_raw_mode()?;
    leave_terminal(terminal.backend_mut(), mouse)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Release mouse capture (when it was requested) and leave the alternate screen
fn leave_terminal<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, DisableMouseCapture)?;
    }
    execute!(out, LeaveAlternateScreen)?;
    Ok(())
}

/// Logs go to a file; the terminal belongs to the page
fn init_logging(log_file: Option<PathBuf>) -> Result<()> {
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));
    let file = File::create(&path).with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_terminal_releases_mouse_and_screen() {
        let mut out = Vec::new();
        leave_terminal(&mut out, true).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1000l"));
        assert!(written.ends_with("\x1b[?1049l"));
    }

    #[test]
    fn test_leave_terminal_without_mouse() {
        let mut out = Vec::new();
        leave_terminal(&mut out, false).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(!written.contains("\x1b[?1000l"));
        assert!(written.contains("\x1b[?1049l"));
    }
}
