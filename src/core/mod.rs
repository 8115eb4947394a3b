//! Core match types: sides, RNG, configuration, actions, state.
//!
//! This module contains the plain data the rest of the crate is built on.
//! Match logic lives in `game`; rules in `rules`.

pub mod action;
pub mod config;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Action, RoundRecord};
pub use config::{AssetPaths, ConfigError, MatchConfig};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use side::{Side, SideMap};
pub use state::{MatchPhase, MatchState};
