//! Commands that drive the engine without the terminal UI.

use anyhow::{Context, Result};
use rand::Rng;
use strictly_tictactoe::{Board, Difficulty, Game, Outcome, Player, Position, select_move_with_rng};
use tracing::{debug, info, instrument};

/// Results of an engine-versus-engine match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchTally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl MatchTally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for MatchTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}  O wins: {}  draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` full games with X and O at the given tiers.
#[instrument(skip(rng))]
pub fn run_match<R: Rng + ?Sized>(
    x: Difficulty,
    o: Difficulty,
    games: usize,
    rng: &mut R,
) -> Result<MatchTally> {
    let mut tally = MatchTally::default();
    let mut game = Game::new();

    for round in 0..games {
        game.reset();
        while game.is_active() {
            let difficulty = match game.to_move() {
                Player::X => x,
                Player::O => o,
            };
            game.computer_move(difficulty, rng)
                .with_context(|| format!("engine failed in game {}", round + 1))?;
        }
        debug!(round, outcome = %game.outcome(), "Game complete");
        tally.record(game.outcome());
    }

    info!(%tally, "Match complete");
    Ok(tally)
}

/// Side to move on a board built by alternating play from X.
pub fn side_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Asks the engine for a move on `board`.
///
/// `computer` defaults to the side to move.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn suggest<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    computer: Option<Player>,
    rng: &mut R,
) -> Result<(Player, Position)> {
    let computer = computer.unwrap_or_else(|| side_to_move(board));
    let index = select_move_with_rng(board, difficulty, computer, computer.opponent(), rng)
        .with_context(|| format!("no move for {} on {}", computer, board))?;
    let position = Position::from_index(index)
        .with_context(|| format!("engine returned out-of-range index {}", index))?;
    Ok((computer, position))
}
