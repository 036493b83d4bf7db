//! Strictly Tic-Tac-Toe - pure game logic and computer opponent.
//!
//! # Architecture
//!
//! - **Board State**: a 3x3 grid of marks with win/draw evaluation ([`Board`])
//! - **Move Engine**: selects the computer's move under a [`Difficulty`] tier
//!   ([`select_move`])
//! - **Session**: one board plus turn bookkeeping and history ([`Game`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Difficulty, Outcome, Player, select_move};
//!
//! let mut board = Board::new();
//! board.apply(4, Player::X).unwrap();
//!
//! let reply = select_move(&board, Difficulty::Hard, Player::O, Player::X).unwrap();
//! assert!(board.is_empty(reply));
//! assert_eq!(board.apply(reply, Player::O).unwrap(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod game;
mod position;
mod rules;
mod types;

// Crate-level exports - Board State
pub use types::{BOARD_CELLS, Board, Outcome, Player, Square};

// Crate-level exports - Positions and rules
pub use position::Position;
pub use rules::{WINNING_LINES, check_winner, is_draw, is_full, winning_cell};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};
pub use error::{BoardParseError, EngineError, TicTacToeError};

// Crate-level exports - Move Engine
pub use engine::{
    Difficulty, best_move, heuristic_move, random_move, select_move, select_move_with_rng,
};

// Crate-level exports - Session
pub use game::Game;
