//! Fixed display strings.

pub const TITLE: &str = "Elemental Clash";

pub const BATTLE_ZONE: &str = "Battle Zone";

pub const CHOOSE_ELEMENT: &str = "Your Wild card won! Choose the element it counts toward:";

pub const RULES: [&str; 7] = [
    "In Elemental Clash, each card has an element: Fire, Water, Earth, & Wild",
    "Fire beats Earth, Earth beats Water, Water beats Fire.",
    "Each card also has a number (1-10).",
    "Cards of the same element are decided by the higher number.",
    "Wild cards beat any card. Two Wild cards draw.",
    "After a Wild card wins, pick any element it counts towards.",
    "The goal is to win with 1 of each element or 3 of a single element.",
];
