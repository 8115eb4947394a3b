//! Opponent Wild nomination policies.
//!
//! When the opponent wins a round with a Wild card it has no UI step, so
//! the match asks a `NominationPolicy` which element to credit.

use crate::cards::Element;
use crate::core::RandomSource;
use crate::rules::{WinTally, SAME_ELEMENT_TARGET};

/// Picks the element credited for an opponent Wild win.
pub trait NominationPolicy {
    /// Choose a non-Wild element given the opponent's current tally.
    fn nominate(&self, tally: &WinTally, rng: &mut dyn RandomSource) -> Element;
}

/// Uniform random nomination.
///
/// Selects uniformly among Fire, Water and Earth.
#[derive(Clone, Debug, Default)]
pub struct UniformNomination;

impl NominationPolicy for UniformNomination {
    fn nominate(&self, _tally: &WinTally, rng: &mut dyn RandomSource) -> Element {
        Element::NON_WILD[rng.next_below(Element::NON_WILD.len())]
    }
}

/// Nominate the element that brings the tally closest to a win.
///
/// Prefers an immediate win, then the fewest remaining rounds. Ties are
/// broken uniformly at random.
#[derive(Clone, Debug, Default)]
pub struct ClosestToWin;

impl ClosestToWin {
    /// Rounds still needed to win after crediting `element`.
    fn rounds_to_win(tally: &WinTally, element: Element) -> u32 {
        let mut after = *tally;
        after.increment(element);

        let same_element = after
            .iter()
            .map(|(_, count)| SAME_ELEMENT_TARGET.saturating_sub(count))
            .min()
            .unwrap_or(SAME_ELEMENT_TARGET);
        let one_of_each = after.iter().filter(|&(_, count)| count == 0).count() as u32;

        same_element.min(one_of_each)
    }
}

impl NominationPolicy for ClosestToWin {
    fn nominate(&self, tally: &WinTally, rng: &mut dyn RandomSource) -> Element {
        let scored: Vec<(Element, u32)> = Element::NON_WILD
            .iter()
            .map(|&e| (e, Self::rounds_to_win(tally, e)))
            .collect();
        let best = scored.iter().map(|&(_, s)| s).min().unwrap_or(0);
        let candidates: Vec<Element> = scored
            .into_iter()
            .filter(|&(_, s)| s == best)
            .map(|(e, _)| e)
            .collect();

        candidates[rng.next_below(candidates.len())]
    }
}
