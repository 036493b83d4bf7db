//! Game settings - user-configurable preferences for a session.

use serde::{Deserialize, Serialize};
use strictly_tictactoe::{Difficulty, Player};
use tracing::instrument;

/// Which side takes the first move (X) in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human plays X.
    #[default]
    Human,
    /// The computer plays X.
    Computer,
}

impl FirstPlayer {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Computer => "Computer",
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Settings that shape a game; changing either restarts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Strength of the computer opponent.
    pub difficulty: Difficulty,
    /// Who takes the first move in each game.
    pub first_player: FirstPlayer,
}

impl Settings {
    /// Mark played by the human. The first mover is always X.
    pub fn human_mark(&self) -> Player {
        match self.first_player {
            FirstPlayer::Human => Player::X,
            FirstPlayer::Computer => Player::O,
        }
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Player {
        self.human_mark().opponent()
    }
}
