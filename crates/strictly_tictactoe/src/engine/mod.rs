//! Move engine for the computer opponent.
//!
//! Every call is a pure function of the board it receives. The engine owns
//! no state and can be called from any thread with its own board snapshot.

mod difficulty;
mod heuristic;
mod minimax;
mod random;

pub use difficulty::Difficulty;
pub use heuristic::heuristic_move;
pub use minimax::best_move;
pub use random::random_move;

use crate::error::EngineError;
use crate::types::{Board, Player};
use rand::Rng;
use tracing::{debug, instrument};

/// Selects the computer's move using the thread-local RNG.
///
/// See [`select_move_with_rng`].
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    computer: Player,
    opponent: Player,
) -> Result<usize, EngineError> {
    let mut rng = rand::rng();
    select_move_with_rng(board, difficulty, computer, opponent, &mut rng)
}

/// Selects the computer's move.
///
/// The returned index is always an empty square on `board`.
///
/// # Errors
///
/// - [`EngineError::IdenticalMarks`] if `computer == opponent`
/// - [`EngineError::NoAvailableCells`] if the board is full
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    computer: Player,
    opponent: Player,
    rng: &mut R,
) -> Result<usize, EngineError> {
    if computer == opponent {
        return Err(EngineError::IdenticalMarks(computer));
    }

    let available = board.available_cells();
    if available.is_empty() {
        return Err(EngineError::NoAvailableCells);
    }

    let chosen = match difficulty {
        Difficulty::Easy => random_move(&available, rng),
        Difficulty::Medium => {
            heuristic_move(board, computer, opponent).or_else(|| random_move(&available, rng))
        }
        Difficulty::Hard => best_move(board, computer, opponent),
    };

    let index = chosen.ok_or(EngineError::NoAvailableCells)?;
    debug!(index, "Engine selected move");
    Ok(index)
}
