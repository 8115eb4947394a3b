//! Card elements and the dominance cycle.
//!
//! Fire beats Earth, Earth beats Water, Water beats Fire.
//! Wild sits outside the cycle and beats every non-Wild element.

use serde::{Deserialize, Serialize};

/// A card element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// Beats Earth.
    Fire,
    /// Beats Fire.
    Water,
    /// Beats Water.
    Earth,
    /// Beats every other element; counts toward an element its side names.
    Wild,
}

impl Element {
    /// The elements that can receive tally credit, in display order.
    pub const NON_WILD: [Element; 3] = [Element::Fire, Element::Water, Element::Earth];

    /// Check if this is the Wild element.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Element::Wild)
    }

    /// The element this one dominates in the cycle. `None` for Wild.
    #[must_use]
    pub const fn dominates(self) -> Option<Element> {
        match self {
            Element::Fire => Some(Element::Earth),
            Element::Earth => Some(Element::Water),
            Element::Water => Some(Element::Fire),
            Element::Wild => None,
        }
    }

    /// Check if this element beats `other` in the cycle.
    ///
    /// Only defined between distinct non-Wild elements; Wild handling
    /// lives in the round resolver.
    #[must_use]
    pub fn beats(self, other: Element) -> bool {
        self.dominates() == Some(other)
    }

    /// Tally slot for a non-Wild element.
    #[must_use]
    pub const fn tally_index(self) -> Option<usize> {
        match self {
            Element::Fire => Some(0),
            Element::Water => Some(1),
            Element::Earth => Some(2),
            Element::Wild => None,
        }
    }

    /// Parse an element name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Element> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fire" => Some(Element::Fire),
            "water" => Some(Element::Water),
            "earth" => Some(Element::Earth),
            "wild" => Some(Element::Wild),
            _ => None,
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Wild => "Wild",
        };
        write!(f, "{}", name)
    }
}
