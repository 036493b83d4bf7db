//! Strictly Tic-Tac-Toe - terminal front end.
//!
//! Runs the interactive game by default, plus headless commands for
//! engine matches and one-off move suggestions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod headless;
mod input;
mod settings;
mod ui;

use anyhow::{Context, Result};
use app::{App, Control};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play {
        difficulty: None,
        first: None,
        seed: None,
    }) {
        Command::Play {
            difficulty,
            first,
            seed,
        } => {
            let config = config.with_overrides(difficulty, first, seed, cli.log_file);
            init_tracing(Some(config.log_file().as_path()))?;
            run_tui(&config)
        }
        Command::Match { x, o, games, seed } => {
            init_tracing(cli.log_file.as_deref())?;
            let mut rng = seeded_rng(seed.or(*config.seed()));
            let tally = headless::run_match(x, o, games, &mut rng)?;
            println!("X ({x}) vs O ({o}) over {games} games");
            println!("{tally}");
            Ok(())
        }
        Command::Suggest {
            board,
            difficulty,
            computer,
            seed,
        } => {
            init_tracing(cli.log_file.as_deref())?;
            let mut rng = seeded_rng(seed.or(*config.seed()));
            let (mark, position) = headless::suggest(&board, difficulty, computer, &mut rng)?;
            println!("{}\n", board.display());
            println!(
                "{} plays {} at {} (square {})",
                difficulty.label(),
                mark,
                position,
                position.to_index() + 1
            );
            Ok(())
        }
    }
}

/// Installs the subscriber. Logs go to `log_file` if given, else stderr.
///
/// The terminal UI always passes a file so log lines never land on the
/// alternate screen.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Run the interactive terminal UI.
#[instrument(skip(config))]
fn run_tui(config: &GameConfig) -> Result<()> {
    info!(difficulty = %config.difficulty(), "Starting Strictly Tic-Tac-Toe TUI");

    let app = App::new(config.settings(), seeded_rng(*config.seed()))?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = res {
        tracing::error!(error = %err, "TUI exited with error");
    }
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(action) = input::action_for(key.code) else {
                continue;
            };
            if app.handle(action)? == Control::Quit {
                info!("Quitting");
                return Ok(());
            }
        }
    }
}
