//! Match actions and round records.
//!
//! An `Action` is everything the human side can ask of a match:
//! - play a card from a hand slot
//! - nominate the element a winning Wild card counts toward
//! - reset the match

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Element};
use crate::rules::RoundOutcome;

/// A request from the human side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card in this hand slot.
    PlayCard(usize),
    /// Assign a pending Wild win to an element.
    Nominate(Element),
    /// Zero the tallies and deal a fresh hand.
    Reset,
}

/// A resolved round, kept for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    /// The human card.
    pub player_card: Card,

    /// The opponent card.
    pub opponent_card: Card,

    /// How the round resolved.
    pub outcome: RoundOutcome,

    /// Round number within the match (starts at 1).
    pub round: u32,
}

impl RoundRecord {
    /// Create a new round record.
    #[must_use]
    pub fn new(player_card: Card, opponent_card: Card, outcome: RoundOutcome, round: u32) -> Self {
        Self {
            player_card,
            opponent_card,
            outcome,
            round,
        }
    }
}

impl std::fmt::Display for RoundRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}: {}", self.player_card, self.opponent_card, self.outcome)
    }
}
