//! Game session: one board plus turn bookkeeping.

use crate::action::{Move, MoveError};
use crate::engine::{self, Difficulty};
use crate::error::TicTacToeError;
use crate::types::{Board, Outcome, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A single game in play.
///
/// Each game owns its board; nothing is shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The board.
    board: Board,
    /// Player to move next. X always opens.
    to_move: Player,
    /// Accepted moves in order.
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Returns true while moves can still be made.
    pub fn is_active(&self) -> bool {
        !self.outcome().is_over()
    }

    /// Places `mark` at `index` and passes the turn to the other player.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from [`Board::apply`]; the session is left
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn apply(&mut self, index: usize, mark: Player) -> Result<Outcome, MoveError> {
        let outcome = self.board.apply(index, mark)?;
        self.history.push(Move::new(mark, index));
        self.to_move = mark.opponent();

        if outcome.is_over() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        Ok(outcome)
    }

    /// Places the mark of the player to move.
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        self.apply(index, self.to_move)
    }

    /// Lets the engine move for the player to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] on a concluded game. An [`EngineError`] or a
    /// rejected placement here means the engine broke its contract.
    ///
    /// [`EngineError`]: crate::EngineError
    #[instrument(skip(self, rng))]
    pub fn computer_move<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(Move, Outcome), TicTacToeError> {
        if !self.is_active() {
            return Err(MoveError::GameOver.into());
        }

        let computer = self.to_move;
        let index = engine::select_move_with_rng(
            &self.board,
            difficulty,
            computer,
            computer.opponent(),
            rng,
        )?;
        let outcome = self.apply(index, computer)?;
        Ok((Move::new(computer, index), outcome))
    }

    /// Clears the board and history; X moves next.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
