//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Result of a match so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// No side has a winning tally yet.
    #[default]
    Ongoing,
    /// The human completed a winning tally.
    PlayerWon,
    /// The scripted opponent completed a winning tally.
    OpponentWon,
}

impl MatchOutcome {
    /// Outcome in which `side` has won.
    #[must_use]
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Player => MatchOutcome::PlayerWon,
            Side::Opponent => MatchOutcome::OpponentWon,
        }
    }

    /// The winning side, if the match is over.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            MatchOutcome::Ongoing => None,
            MatchOutcome::PlayerWon => Some(Side::Player),
            MatchOutcome::OpponentWon => Some(Side::Opponent),
        }
    }

    /// Check if the match is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MatchOutcome::Ongoing)
    }
}
