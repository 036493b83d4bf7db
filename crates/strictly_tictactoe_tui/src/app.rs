//! Application state and logic.

use crate::input::Action;
use crate::settings::Settings;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use strictly_tictactoe::{Game, Outcome, Position};
use tracing::{debug, info, instrument, warn};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    settings: Settings,
    cursor: Position,
    status_message: String,
    rng: StdRng,
}

impl App {
    /// Creates the application and starts the first game.
    ///
    /// If the computer moves first it has already moved when this returns.
    #[instrument(skip(rng))]
    pub fn new(settings: Settings, rng: StdRng) -> Result<Self> {
        let mut app = Self {
            game: Game::new(),
            settings,
            cursor: Position::default(),
            status_message: String::new(),
            rng,
        };
        app.restart()?;
        Ok(app)
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the active settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles one user action.
    ///
    /// # Errors
    ///
    /// Only engine failures are errors; rejected human moves are reported
    /// in the status line.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) -> Result<Control> {
        match action {
            Action::MoveCursor(d_row, d_col) => self.cursor = self.cursor.step(d_row, d_col),
            Action::PlaceAtCursor => self.human_move(self.cursor.to_index())?,
            Action::PlaceAt(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.human_move(index)?;
            }
            Action::CycleDifficulty => {
                self.settings.difficulty = self.settings.difficulty.next();
                self.restart()?;
            }
            Action::ToggleFirstPlayer => {
                self.settings.first_player = self.settings.first_player.toggle();
                self.restart()?;
            }
            Action::Restart => self.restart()?,
            Action::Quit => return Ok(Control::Quit),
        }
        Ok(Control::Continue)
    }

    /// Places the human mark, then lets the computer answer.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> Result<()> {
        if !self.game.is_active() {
            debug!("Ignoring move on finished game");
            return Ok(());
        }

        let human = self.settings.human_mark();
        if self.game.to_move() != human {
            debug!("Ignoring move out of turn");
            return Ok(());
        }

        match self.game.apply(index, human) {
            Ok(Outcome::InProgress) => self.computer_move()?,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, index, "Rejected move");
                self.status_message = format!("Invalid move: {}. Try again.", e);
                return Ok(());
            }
        }

        self.refresh_status();
        Ok(())
    }

    /// Clears the board. The computer opens if it plays X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<()> {
        info!(
            difficulty = %self.settings.difficulty,
            first_player = %self.settings.first_player,
            "Starting new game"
        );
        self.game.reset();
        self.cursor = Position::default();

        if self.game.to_move() == self.settings.computer_mark() {
            self.computer_move()?;
        }

        self.refresh_status();
        Ok(())
    }

    fn computer_move(&mut self) -> Result<()> {
        let (mv, outcome) = self
            .game
            .computer_move(self.settings.difficulty, &mut self.rng)
            .context("computer opponent failed to move")?;
        debug!(%mv, ?outcome, "Computer moved");
        Ok(())
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.game.outcome() {
            Outcome::InProgress => format!("Player {}'s turn", self.game.to_move()),
            outcome => format!("{} Press 'r' to restart or 'q' to quit.", outcome),
        };
    }
}
