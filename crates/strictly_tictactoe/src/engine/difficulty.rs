//! Difficulty tiers for the computer opponent.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Strategy class governing computer move selection.
///
/// Tiers carry no state between moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    #[default]
    Easy,
    /// Take a win, else block a win, else random.
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Cycles Easy -> Medium -> Hard -> Easy.
    #[instrument]
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}
