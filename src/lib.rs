//! # Elemental Clash
//!
//! A two-player card game: a human against a scripted opponent.
//!
//! ## Rules
//!
//! 1. **Elements**: every card is Fire, Water, Earth or (rarely) Wild, with
//!    a number from 1 to 10.
//! 2. **Rounds**: Fire beats Earth, Earth beats Water, Water beats Fire.
//!    Same elements compare numbers. Wild beats everything; two Wilds draw.
//! 3. **Winning**: three round wins with one element, or one with each.
//!    A winning Wild card counts toward an element chosen by its side.
//!
//! ## Architecture
//!
//! - **Pure rules**: round resolution and the win condition have no side
//!   effects and no failure modes.
//!
//! - **One owned state**: a `Match` owns its state, RNG and opponent policy.
//!   The front-end owns the `Match`; there are no globals.
//!
//! - **Injectable randomness**: dealing and opponent choices go through
//!   `RandomSource`, so tests can script every draw.
//!
//! - **Degrading services**: rendering, media and flavor text are traits.
//!   Their failures are logged and never reach the match.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, actions, match state
//! - `cards`: elements, cards, dealing, the hand
//! - `rules`: round resolver, tallies, match outcome
//! - `game`: the match state machine and opponent nomination policies
//! - `services`: render, media and flavor-text collaborators
//! - `ui`: screen flow and the terminal front-end

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    Action, AssetPaths, ConfigError, GameRng, MatchConfig, MatchPhase, MatchState, RandomSource,
    RoundRecord, ScriptedRng, Side, SideMap,
};

pub use crate::cards::{Card, CardDealer, CardError, Element, Hand};

pub use crate::rules::{resolve, MatchOutcome, RoundOutcome, WinTally};

pub use crate::game::{
    ClosestToWin, Match, MatchError, NominationPolicy, RoundReport, UniformNomination,
};

pub use crate::services::{
    fallback_text, victory_message, FlavorText, Frame, MediaPlayer, Renderer, ServiceError,
};

pub use crate::ui::{App, Button, Screen, UiEvent};
