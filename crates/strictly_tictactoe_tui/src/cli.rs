//! Command-line interface for strictly_tictactoe.

use crate::settings::FirstPlayer;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Difficulty, Player};

/// Strictly Tic-Tac-Toe - play against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML settings file (missing file means defaults)
    #[arg(long, global = true, default_value = "strictly_tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured default
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Who moves first: human or computer
        #[arg(long)]
        first: Option<FirstPlayer>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two engine tiers against each other
    Match {
        /// Tier playing X
        #[arg(short = 'x', long, default_value = "hard")]
        x: Difficulty,

        /// Tier playing O
        #[arg(short = 'o', long, default_value = "hard")]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value_t = 100)]
        games: usize,

        /// Seed for the engines' random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the engine's move for a board such as "XX_|_O_|___"
    Suggest {
        /// Board in row-major order: X, O and _ (or 1-9) for empty
        #[arg(short, long)]
        board: Board,

        /// Computer strength: easy, medium or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Mark to move for (defaults to the side to move)
        #[arg(long)]
        computer: Option<Player>,

        /// Seed for the engine's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["strictly_tictactoe"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("strictly_tictactoe.toml"));
    }

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::try_parse_from([
            "strictly_tictactoe",
            "play",
            "--difficulty",
            "Hard",
            "--first",
            "computer",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Play {
                difficulty, first, ..
            }) => {
                assert_eq!(difficulty, Some(Difficulty::Hard));
                assert_eq!(first, Some(FirstPlayer::Computer));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_suggest_parses_board() {
        let cli =
            Cli::try_parse_from(["strictly_tictactoe", "suggest", "--board", "XX_|_O_|___"])
                .unwrap();
        match cli.command {
            Some(Command::Suggest {
                board, difficulty, ..
            }) => {
                assert_eq!(board.available_cells(), vec![2, 3, 5, 6, 7, 8]);
                assert_eq!(difficulty, Difficulty::Hard);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_board_rejected() {
        assert!(
            Cli::try_parse_from(["strictly_tictactoe", "suggest", "--board", "XX"]).is_err()
        );
    }
}
