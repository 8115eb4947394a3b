//! Card system: elements, cards, dealing, and the hand.
//!
//! ## Key Types
//!
//! - `Element`: Fire, Water, Earth and Wild, with the dominance cycle
//! - `Card`: an element plus a 1-10 tiebreak number
//! - `CardDealer`: independent random draws with a low Wild rate
//! - `Hand`: the human's fixed-size hand

pub mod card;
pub mod deck;
pub mod element;

pub use card::{Card, CardError, MAX_NUMBER, MIN_NUMBER};
pub use deck::{CardDealer, Hand};
pub use element::Element;
