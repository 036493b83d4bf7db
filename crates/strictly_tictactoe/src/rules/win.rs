//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};

/// The 8 lines whose uniform occupation ends the game.
///
/// Order matters: rows, then columns, then diagonals. The medium engine
/// returns the first qualifying line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in WINNING_LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Finds the empty square that would complete a line for `player`.
///
/// A line qualifies only when it holds two of `player`'s marks and exactly
/// one empty square. Lines are scanned in [`WINNING_LINES`] order and the
/// first match wins.
pub fn winning_cell(board: &Board, player: Player) -> Option<usize> {
    let squares = board.squares();
    let mark = Square::Occupied(player);

    WINNING_LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| squares[i] == mark).count();
        let mut empties = line.iter().filter(|&&i| squares[i] == Square::Empty);
        match (owned, empties.next(), empties.next()) {
            (2, Some(&gap), None) => Some(gap),
            _ => None,
        }
    })
}
