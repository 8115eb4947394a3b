//! Round resolution.
//!
//! Rules, in priority order:
//! 1. Both cards Wild: draw.
//! 2. Exactly one card Wild: the Wild side wins, numbers ignored.
//! 3. Same element: higher number wins, equal numbers draw.
//! 4. Otherwise the element cycle decides (Fire > Earth > Water > Fire).

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Side;

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The human card won.
    PlayerWins,
    /// The opponent card won.
    OpponentWins,
    /// Same element and number, or both Wild. Nobody scores.
    Draw,
}

impl RoundOutcome {
    /// Outcome in which `side` wins.
    #[must_use]
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Player => RoundOutcome::PlayerWins,
            Side::Opponent => RoundOutcome::OpponentWins,
        }
    }

    /// The winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::PlayerWins => Some(Side::Player),
            RoundOutcome::OpponentWins => Some(Side::Opponent),
            RoundOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::PlayerWins => write!(f, "Player Wins"),
            RoundOutcome::OpponentWins => write!(f, "Opponent Wins"),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Resolve a round between the player's card and the opponent's card.
///
/// Pure and deterministic.
///
/// ```
/// use elemental_clash::cards::{Card, Element};
/// use elemental_clash::rules::{resolve, RoundOutcome};
///
/// let water = Card::new(Element::Water, 5).unwrap();
/// let fire = Card::new(Element::Fire, 9).unwrap();
/// assert_eq!(resolve(&water, &fire), RoundOutcome::PlayerWins);
/// ```
#[must_use]
pub fn resolve(player: &Card, opponent: &Card) -> RoundOutcome {
    match (player.is_wild(), opponent.is_wild()) {
        (true, true) => return RoundOutcome::Draw,
        (true, false) => return RoundOutcome::PlayerWins,
        (false, true) => return RoundOutcome::OpponentWins,
        (false, false) => {}
    }

    if player.element() == opponent.element() {
        return match player.number().cmp(&opponent.number()) {
            std::cmp::Ordering::Greater => RoundOutcome::PlayerWins,
            std::cmp::Ordering::Less => RoundOutcome::OpponentWins,
            std::cmp::Ordering::Equal => RoundOutcome::Draw,
        };
    }

    if player.element().beats(opponent.element()) {
        RoundOutcome::PlayerWins
    } else {
        RoundOutcome::OpponentWins
    }
}
