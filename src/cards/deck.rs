//! Card dealing and the human hand.
//!
//! Cards are not drawn from a finite deck: every draw is independent.
//! A draw is Wild with a small fixed probability, otherwise one of the
//! three non-Wild elements uniformly. Numbers are uniform in 1..=10.

use smallvec::SmallVec;

use super::card::{Card, MAX_NUMBER, MIN_NUMBER};
use super::element::Element;
use crate::core::RandomSource;

/// Deals independent random cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardDealer {
    wild_probability: f64,
}

impl CardDealer {
    /// Create a dealer. The probability is clamped into [0, 1].
    #[must_use]
    pub fn new(wild_probability: f64) -> Self {
        Self {
            wild_probability: wild_probability.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn wild_probability(&self) -> f64 {
        self.wild_probability
    }

    /// Deal one card.
    pub fn deal(&self, rng: &mut impl RandomSource) -> Card {
        let element = if rng.next_unit() < self.wild_probability {
            Element::Wild
        } else {
            Element::NON_WILD[rng.next_below(Element::NON_WILD.len())]
        };
        let span = usize::from(MAX_NUMBER - MIN_NUMBER) + 1;
        let number = MIN_NUMBER + rng.next_below(span) as u8;
        Card::clamped(element, number)
    }
}

/// The human hand.
///
/// A fixed number of slots. Playing a card refills its slot, so the hand
/// size never changes during a match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    cards: SmallVec<[Card; 6]>,
}

impl Hand {
    /// Deal a fresh hand.
    pub fn deal(size: usize, dealer: &CardDealer, rng: &mut impl RandomSource) -> Self {
        let cards = (0..size).map(|_| dealer.deal(rng)).collect();
        Self { cards }
    }

    /// Build a hand from known cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card in a slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Replace the card in a slot, returning the old card.
    ///
    /// Returns `None` (and changes nothing) if the slot does not exist.
    pub fn replace(&mut self, index: usize, card: Card) -> Option<Card> {
        self.cards
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, card))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_deal_respects_ranges() {
        let dealer = CardDealer::new(0.03);
        let mut rng = GameRng::new(42);

        for _ in 0..2000 {
            let card = dealer.deal(&mut rng);
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&card.number()));
        }
    }

    #[test]
    fn test_wild_rate_is_low() {
        let dealer = CardDealer::new(0.03);
        let mut rng = GameRng::new(7);

        let wilds = (0..10_000).filter(|_| dealer.deal(&mut rng).is_wild()).count();
        // 3% of 10k = 300
        assert!((150..=450).contains(&wilds), "wild count {}", wilds);
    }

    #[test]
    fn test_non_wild_uniform() {
        let dealer = CardDealer::new(0.0);
        let mut rng = GameRng::new(11);

        let mut counts = [0usize; 3];
        for _ in 0..9000 {
            let card = dealer.deal(&mut rng);
            let slot = card.element().tally_index().unwrap();
            counts[slot] += 1;
        }
        for count in counts {
            assert!((2500..=3500).contains(&count), "counts {:?}", counts);
        }
    }

    #[test]
    fn test_scripted_deal() {
        let dealer = CardDealer::new(0.03);

        // unit 0.01 < 0.03 -> Wild, number pick 9 -> 10
        let mut rng = ScriptedRng::new(vec![9], vec![0.01]);
        let card = dealer.deal(&mut rng);
        assert_eq!(card, Card::new(Element::Wild, 10).unwrap());

        // unit 0.9 -> element pick 2 (Earth), number pick 4 -> 5
        let mut rng = ScriptedRng::new(vec![2, 4], vec![0.9]);
        let card = dealer.deal(&mut rng);
        assert_eq!(card, Card::new(Element::Earth, 5).unwrap());
    }

    #[test]
    fn test_probability_clamped() {
        assert_eq!(CardDealer::new(2.0).wild_probability(), 1.0);
        assert_eq!(CardDealer::new(-1.0).wild_probability(), 0.0);
    }

    #[test]
    fn test_hand_deal_and_replace() {
        let dealer = CardDealer::new(0.03);
        let mut rng = GameRng::new(3);
        let mut hand = Hand::deal(6, &dealer, &mut rng);
        assert_eq!(hand.len(), 6);

        let fresh = Card::new(Element::Fire, 1).unwrap();
        let old = hand.get(2).unwrap();
        assert_eq!(hand.replace(2, fresh), Some(old));
        assert_eq!(hand.get(2), Some(fresh));
        assert_eq!(hand.len(), 6);

        assert_eq!(hand.replace(6, fresh), None);
        assert_eq!(hand.get(6), None);
    }
}
