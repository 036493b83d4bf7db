//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::error::BoardParseError;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Single-character form used by the textual board notation.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '_',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Derived status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true once the game has concluded.
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "{player} Wins!"),
            Outcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is the whole of the game's mutable state: the outcome is
/// recomputed from the squares on every query rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_CELLS],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_CELLS] {
        &self.squares
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Places `mark` at `index` and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not in `0..9`
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark
    /// - [`MoveError::GameOver`] if the board is already won or drawn
    ///
    /// A failed call leaves the board untouched.
    #[instrument(skip(self), fields(board = %self))]
    pub fn apply(&mut self, index: usize, mark: Player) -> Result<Outcome, MoveError> {
        if index >= BOARD_CELLS {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.is_empty(index) {
            return Err(MoveError::SquareOccupied(index));
        }
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        self.place(index, mark);
        let outcome = self.outcome();
        debug!(?outcome, "Mark placed");
        Ok(outcome)
    }

    /// Returns the current outcome.
    ///
    /// A completed line is reported as a win even on a full board.
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = rules::check_winner(self) {
            Outcome::Won(winner)
        } else if rules::is_full(self) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns the indices of empty squares in ascending order.
    pub fn available_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; BOARD_CELLS];
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Unchecked placement used by the search's mutate/undo loop.
    pub(crate) fn place(&mut self, index: usize, mark: Player) {
        self.squares[index] = Square::Occupied(mark);
    }

    /// Undoes [`Board::place`].
    pub(crate) fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: three rows of `X`, `O` or `_` separated by `|`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                write!(f, "|")?;
            }
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; BOARD_CELLS];
        let mut filled = 0;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' | '1'..='9' => Square::Empty,
                other => {
                    return Err(BoardParseError::new(format!(
                        "unexpected character {other:?} in board {s:?}"
                    )));
                }
            };
            if filled == BOARD_CELLS {
                return Err(BoardParseError::new(format!(
                    "board {s:?} has more than {BOARD_CELLS} cells"
                )));
            }
            squares[filled] = square;
            filled += 1;
        }

        if filled != BOARD_CELLS {
            return Err(BoardParseError::new(format!(
                "board {s:?} has {filled} cells, expected {BOARD_CELLS}"
            )));
        }

        Ok(Self { squares })
    }
}
