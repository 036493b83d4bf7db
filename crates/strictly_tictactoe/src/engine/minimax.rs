//! Hard tier: exhaustive minimax.
//!
//! No pruning and no depth discount: a win found at any depth scores the
//! same. Scores are always from the computer's point of view regardless of
//! which layer is maximizing.

use crate::types::{BOARD_CELLS, Board, Outcome, Player};

const WIN: i8 = 1;
const LOSS: i8 = -1;
const DRAW: i8 = 0;

/// Returns the square with the best minimax score for `computer`.
///
/// Ties go to the lowest index. Returns `None` if the board has no empty
/// squares.
pub fn best_move(board: &Board, computer: Player, opponent: Player) -> Option<usize> {
    let mut scratch = board.clone();
    let mut best: Option<(usize, i8)> = None;

    for index in 0..BOARD_CELLS {
        if !scratch.is_empty(index) {
            continue;
        }
        scratch.place(index, computer);
        let score = minimax(&mut scratch, computer, opponent, false);
        scratch.clear(index);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    best.map(|(index, _)| index)
}

fn minimax(board: &mut Board, computer: Player, opponent: Player, maximizing: bool) -> i8 {
    match board.outcome() {
        Outcome::Won(winner) if winner == computer => return WIN,
        Outcome::Won(_) => return LOSS,
        Outcome::Draw => return DRAW,
        Outcome::InProgress => {}
    }

    let mark = if maximizing { computer } else { opponent };
    let mut best = if maximizing { i8::MIN } else { i8::MAX };

    for index in 0..BOARD_CELLS {
        if !board.is_empty(index) {
            continue;
        }
        board.place(index, mark);
        let score = minimax(board, computer, opponent, !maximizing);
        board.clear(index);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "OO_|XX_|X__".parse().unwrap();
        assert_eq!(best_move(&board, Player::O, Player::X), Some(2));
    }

    #[test]
    fn test_blocks_when_no_win() {
        let board: Board = "XX_|_O_|___".parse().unwrap();
        assert_eq!(best_move(&board, Player::O, Player::X), Some(2));
    }

    #[test]
    fn test_no_move_on_full_board() {
        let board: Board = "XOX|OXO|OXO".parse().unwrap();
        assert_eq!(best_move(&board, Player::O, Player::X), None);
    }

    #[test]
    fn test_equal_scores_pick_lowest_index() {
        // Every reply to an empty board draws under perfect play.
        assert_eq!(best_move(&Board::new(), Player::X, Player::O), Some(0));
    }

    #[test]
    fn test_score_is_from_computer_perspective() {
        // X has just blocked at 5, but O forks at 6 and wins.
        let board: Board = "X_O|___|__O".parse().unwrap();
        let mut scratch = board.clone();
        scratch.place(5, Player::X);
        assert_eq!(minimax(&mut scratch, Player::X, Player::O, false), LOSS);
    }
}
