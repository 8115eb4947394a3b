//! Match state.
//!
//! ## MatchPhase
//!
//! Where the match is in its lifecycle:
//! - `Playing`: waiting for the human to play a card
//! - `AwaitingWildChoice(side)`: a Wild win needs an element nomination
//! - `Finished(winner)`: terminal until reset
//!
//! ## MatchState
//!
//! All mutable match data in one plain struct: tallies, phase, the hand,
//! and the last resolved round.

use serde::{Deserialize, Serialize};

use super::action::RoundRecord;
use super::side::{Side, SideMap};
use crate::cards::Hand;
use crate::rules::{MatchOutcome, WinTally};

/// Lifecycle phase of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the human to play a card.
    #[default]
    Playing,
    /// A Wild win for this side is waiting for an element nomination.
    AwaitingWildChoice(Side),
    /// This side won. Only a reset leaves this phase.
    Finished(Side),
}

impl MatchPhase {
    /// The match outcome implied by this phase.
    #[must_use]
    pub const fn outcome(self) -> MatchOutcome {
        match self {
            MatchPhase::Finished(side) => MatchOutcome::won_by(side),
            _ => MatchOutcome::Ongoing,
        }
    }

    /// The side that owes a Wild nomination, if any.
    #[must_use]
    pub const fn pending_choice(self) -> Option<Side> {
        match self {
            MatchPhase::AwaitingWildChoice(side) => Some(side),
            _ => None,
        }
    }
}

/// Complete mutable state of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    /// Per-side element tallies.
    pub tallies: SideMap<WinTally>,

    /// Current phase.
    pub phase: MatchPhase,

    /// The human hand.
    pub hand: Hand,

    /// Most recent resolved round.
    pub last_round: Option<RoundRecord>,

    /// Rounds resolved since the last reset.
    pub rounds_played: u32,
}

impl MatchState {
    /// Fresh state around a dealt hand.
    #[must_use]
    pub fn new(hand: Hand) -> Self {
        Self {
            tallies: SideMap::new(|_| WinTally::new()),
            phase: MatchPhase::Playing,
            hand,
            last_round: None,
            rounds_played: 0,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        self.phase.outcome()
    }
}
