//! Match configuration.
//!
//! `MatchConfig` combines the tunables of a match:
//! - Hand size and Wild draw probability
//! - Optional RNG seed for reproducible matches
//! - Flavor-text time budget
//! - Media asset paths
//!
//! Configs can be built in code with the `with_*` setters or loaded from
//! JSON, where every field is optional and falls back to its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of cards in the human hand.
pub const DEFAULT_HAND_SIZE: usize = 6;

/// Default probability that a dealt card is Wild.
pub const DEFAULT_WILD_PROBABILITY: f64 = 0.03;

/// Default time budget for the flavor-text service.
pub const DEFAULT_FLAVOR_TIMEOUT_MS: u64 = 2000;

/// Errors from loading or validating a `MatchConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The hand must hold at least one card.
    #[error("hand_size must be at least 1, got {0}")]
    EmptyHand(usize),

    /// Probabilities live in [0, 1].
    #[error("wild_probability must be within [0, 1], got {0}")]
    WildProbability(f64),
}

/// Paths of the media clips played by the front-end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Background music, played on loop.
    pub music: String,

    /// Cutscene shown when a match starts from the main menu.
    pub cutscene: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            music: "assets/music.mp3".to_string(),
            cutscene: "assets/card-cutscene.mp4".to_string(),
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Cards in the human hand.
    pub hand_size: usize,

    /// Probability that any dealt card is Wild.
    pub wild_probability: f64,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Time budget for producing the victory message.
    pub flavor_timeout_ms: u64,

    /// Media assets.
    pub assets: AssetPaths,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            wild_probability: DEFAULT_WILD_PROBABILITY,
            seed: None,
            flavor_timeout_ms: DEFAULT_FLAVOR_TIMEOUT_MS,
            assets: AssetPaths::default(),
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::EmptyHand(self.hand_size));
        }
        if !(0.0..=1.0).contains(&self.wild_probability) {
            return Err(ConfigError::WildProbability(self.wild_probability));
        }
        Ok(())
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the Wild draw probability.
    #[must_use]
    pub fn with_wild_probability(mut self, probability: f64) -> Self {
        self.wild_probability = probability;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the flavor-text time budget.
    #[must_use]
    pub fn with_flavor_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.flavor_timeout_ms = timeout_ms;
        self
    }

    /// Set the media asset paths.
    #[must_use]
    pub fn with_assets(mut self, assets: AssetPaths) -> Self {
        self.assets = assets;
        self
    }
}
