//! Drawn cards.

use thiserror::Error;

use super::element::Element;

/// Lowest card number.
pub const MIN_NUMBER: u8 = 1;

/// Highest card number.
pub const MAX_NUMBER: u8 = 10;

/// Card construction errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("card number {0} outside 1..=10")]
    NumberOutOfRange(u8),
}

/// An element card with a tiebreak number.
///
/// Immutable once drawn. The number is shown on Wild cards too but never
/// affects how a Wild card resolves.
///
/// Only `Card::new` and the dealer build cards, so the number is always in
/// range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    element: Element,
    number: u8,
}

impl Card {
    /// Create a card, checking the number range.
    pub fn new(element: Element, number: u8) -> Result<Self, CardError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            return Err(CardError::NumberOutOfRange(number));
        }
        Ok(Self { element, number })
    }

    /// Create a card, clamping the number into range.
    pub(crate) fn clamped(element: Element, number: u8) -> Self {
        Self {
            element,
            number: number.clamp(MIN_NUMBER, MAX_NUMBER),
        }
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.element
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.element.is_wild()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.element, self.number)
    }
}
