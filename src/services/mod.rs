//! External collaborators: rendering, media playback, flavor text.
//!
//! The match never depends on these succeeding. Each service reports
//! failures as `ServiceError`, and the helpers here log the failure and
//! degrade (skip the frame, skip the clip, use the fallback text).

pub mod flavor;
pub mod media;
pub mod render;

use thiserror::Error;

pub use flavor::{fallback_text, victory_message, FallbackFlavor, FlavorText, TimedFlavor};
pub use media::{play_or_skip, FileCheckMedia, MediaPlayer, SilentMedia};
pub use render::{present_frame, CardSlot, DrawItem, Frame, NullRenderer, Renderer, TextStyle};

/// Failure reported by an external service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required asset could not be found or loaded.
    #[error("asset not available: {0}")]
    AssetMissing(String),

    /// The service is not reachable or not configured.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The service did not answer within its time budget.
    #[error("service timed out after {0} ms")]
    Timeout(u64),

    /// I/O failure while talking to the service.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
