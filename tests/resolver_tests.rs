//! Round resolution property tests.

use elemental_clash::cards::{Card, Element, MAX_NUMBER, MIN_NUMBER};
use elemental_clash::rules::{resolve, RoundOutcome};
use proptest::prelude::*;

fn number() -> impl Strategy<Value = u8> {
    MIN_NUMBER..=MAX_NUMBER
}

fn non_wild() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::NON_WILD.to_vec())
}

fn card(element: Element, number: u8) -> Card {
    Card::new(element, number).unwrap()
}

// =============================================================================
// Wild
// =============================================================================

proptest! {
    #[test]
    fn wild_side_always_wins(element in non_wild(), wild_n in number(), other_n in number()) {
        let wild = card(Element::Wild, wild_n);
        let other = card(element, other_n);

        prop_assert_eq!(resolve(&wild, &other), RoundOutcome::PlayerWins);
        prop_assert_eq!(resolve(&other, &wild), RoundOutcome::OpponentWins);
    }

    #[test]
    fn both_wild_draw(a in number(), b in number()) {
        prop_assert_eq!(
            resolve(&card(Element::Wild, a), &card(Element::Wild, b)),
            RoundOutcome::Draw
        );
    }
}

// =============================================================================
// Same element
// =============================================================================

proptest! {
    #[test]
    fn same_element_higher_number_wins(element in non_wild(), a in number(), b in number()) {
        let expected = if a > b {
            RoundOutcome::PlayerWins
        } else if a < b {
            RoundOutcome::OpponentWins
        } else {
            RoundOutcome::Draw
        };
        prop_assert_eq!(resolve(&card(element, a), &card(element, b)), expected);
    }
}

// =============================================================================
// Cycle
// =============================================================================

proptest! {
    #[test]
    fn distinct_elements_follow_cycle(
        a in non_wild(),
        b in non_wild(),
        na in number(),
        nb in number(),
    ) {
        prop_assume!(a != b);

        let expected = match (a, b) {
            (Element::Fire, Element::Earth)
            | (Element::Earth, Element::Water)
            | (Element::Water, Element::Fire) => RoundOutcome::PlayerWins,
            _ => RoundOutcome::OpponentWins,
        };
        prop_assert_eq!(resolve(&card(a, na), &card(b, nb)), expected);
    }

    #[test]
    fn resolution_is_symmetric(a in non_wild(), b in non_wild(), na in number(), nb in number()) {
        let forward = resolve(&card(a, na), &card(b, nb));
        let backward = resolve(&card(b, nb), &card(a, na));

        let mirrored = match forward {
            RoundOutcome::PlayerWins => RoundOutcome::OpponentWins,
            RoundOutcome::OpponentWins => RoundOutcome::PlayerWins,
            RoundOutcome::Draw => RoundOutcome::Draw,
        };
        prop_assert_eq!(backward, mirrored);
    }
}

#[test]
fn test_water_five_beats_fire_nine() {
    assert_eq!(
        resolve(&card(Element::Water, 5), &card(Element::Fire, 9)),
        RoundOutcome::PlayerWins
    );
}
