//! Elemental Clash match logic.
//!
//! A match pits the human against a scripted opponent:
//! - The human plays one card from a six-card hand each round
//! - The opponent's card is drawn fresh each round
//! - The round winner credits the winning card's element
//! - A winning Wild card is credited to a nominated element
//! - First to three of one element, or one of each, wins

mod machine;
mod policy;

pub use machine::{Match, MatchError, RoundReport};
pub use policy::{ClosestToWin, NominationPolicy, UniformNomination};
