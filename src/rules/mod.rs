//! Game rules: round resolution and the win condition.
//!
//! - `resolve`: maps two cards to a `RoundOutcome`
//! - `WinTally`: per-element round counts for one side
//! - `MatchOutcome`: ongoing or won by a side
//!
//! Everything here is pure. The `game` module owns the mutable match.

pub mod outcome;
pub mod resolver;
pub mod tally;

pub use outcome::MatchOutcome;
pub use resolver::{resolve, RoundOutcome};
pub use tally::{WinTally, SAME_ELEMENT_TARGET};
