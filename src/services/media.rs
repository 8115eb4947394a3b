//! Cutscene and audio playback.
//!
//! Playback is best-effort: a clip that fails to load or play is skipped
//! with a warning and the screen flow carries on.

use std::path::Path;

use super::ServiceError;

/// Plays media clips.
pub trait MediaPlayer {
    /// Play a clip to completion. Blocks until the clip ends.
    fn play_clip(&mut self, path: &str) -> Result<(), ServiceError>;

    /// Start a clip looping in the background.
    fn play_loop(&mut self, path: &str) -> Result<(), ServiceError>;

    /// Stop any looping clip.
    fn stop(&mut self);
}

/// Player with no output. Every request succeeds instantly.
#[derive(Clone, Debug, Default)]
pub struct SilentMedia;

impl MediaPlayer for SilentMedia {
    fn play_clip(&mut self, _path: &str) -> Result<(), ServiceError> {
        Ok(())
    }

    fn play_loop(&mut self, _path: &str) -> Result<(), ServiceError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

/// Player for headless front-ends.
///
/// Checks that the asset exists on disk and logs what would play.
#[derive(Clone, Debug, Default)]
pub struct FileCheckMedia {
    looping: Option<String>,
}

impl FileCheckMedia {
    pub fn new() -> Self {
        Self::default()
    }

    /// The clip currently looping, if any.
    pub fn looping(&self) -> Option<&str> {
        self.looping.as_deref()
    }

    fn check(path: &str) -> Result<(), ServiceError> {
        if Path::new(path).is_file() {
            Ok(())
        } else {
            Err(ServiceError::AssetMissing(path.to_string()))
        }
    }
}

impl MediaPlayer for FileCheckMedia {
    fn play_clip(&mut self, path: &str) -> Result<(), ServiceError> {
        Self::check(path)?;
        log::info!("Playing clip {}", path);
        Ok(())
    }

    fn play_loop(&mut self, path: &str) -> Result<(), ServiceError> {
        Self::check(path)?;
        log::info!("Looping {}", path);
        self.looping = Some(path.to_string());
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(path) = self.looping.take() {
            log::debug!("Stopped {}", path);
        }
    }
}

/// Play a clip, logging and skipping it on failure.
///
/// Returns whether the clip played.
pub fn play_or_skip(player: &mut dyn MediaPlayer, path: &str) -> bool {
    match player.play_clip(path) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Skipping clip {}: {}", path, e);
            false
        }
    }
}
