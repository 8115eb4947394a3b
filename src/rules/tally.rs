//! Per-side win tallies and the win condition.
//!
//! A side wins the match once it has won three rounds with one element,
//! or at least one round with every element.

use serde::{Deserialize, Serialize};

use crate::cards::Element;

/// Rounds needed with a single element to win.
pub const SAME_ELEMENT_TARGET: u32 = 3;

/// Rounds won per non-Wild element.
///
/// Counts only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinTally {
    counts: [u32; 3],
}

impl WinTally {
    /// An all-zero tally.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 3] }
    }

    /// Build a tally from explicit Fire/Water/Earth counts.
    #[must_use]
    pub const fn from_counts(fire: u32, water: u32, earth: u32) -> Self {
        Self {
            counts: [fire, water, earth],
        }
    }

    /// Count for an element. Wild always reads as 0.
    #[must_use]
    pub fn get(&self, element: Element) -> u32 {
        element.tally_index().map_or(0, |i| self.counts[i])
    }

    /// Credit one round to an element.
    ///
    /// Returns the new count, or `None` for Wild (which has no slot).
    pub fn increment(&mut self, element: Element) -> Option<u32> {
        let i = element.tally_index()?;
        self.counts[i] = self.counts[i].saturating_add(1);
        Some(self.counts[i])
    }

    /// Check the win condition.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.counts.iter().any(|&c| c >= SAME_ELEMENT_TARGET) || self.counts.iter().all(|&c| c >= 1)
    }

    /// Total rounds credited.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// (element, count) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        Element::NON_WILD.into_iter().zip(self.counts.iter().copied())
    }

    /// Check every count is at least the matching count in `earlier`.
    #[must_use]
    pub fn dominates(&self, earlier: &WinTally) -> bool {
        self.counts.iter().zip(earlier.counts.iter()).all(|(now, then)| now >= then)
    }
}

impl std::fmt::Display for WinTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fire: {} | Water: {} | Earth: {}",
            self.counts[0], self.counts[1], self.counts[2]
        )
    }
}
