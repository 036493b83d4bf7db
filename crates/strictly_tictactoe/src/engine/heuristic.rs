//! Medium tier: a fixed two-rule heuristic.
//!
//! 1. Complete a line for the computer.
//! 2. Otherwise block a line the opponent could complete.
//!
//! When neither applies the caller falls back to the easy tier. There is no
//! look-ahead beyond the immediate move.

use crate::rules::winning_cell;
use crate::types::{Board, Player};
use tracing::debug;

/// Returns the winning or blocking square, if one exists.
pub fn heuristic_move(board: &Board, computer: Player, opponent: Player) -> Option<usize> {
    if let Some(index) = winning_cell(board, computer) {
        debug!(index, "Taking winning square");
        return Some(index);
    }

    if let Some(index) = winning_cell(board, opponent) {
        debug!(index, "Blocking opponent");
        return Some(index);
    }

    None
}
