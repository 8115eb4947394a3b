//! Victory flavor text.
//!
//! A `FlavorText` service turns the winner into a short display line. It
//! is optional: any failure, empty answer or timeout falls back to a fixed
//! line per winner.

use crossbeam_channel::RecvTimeoutError;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::ServiceError;
use crate::core::Side;

/// Produces a victory line for the winner.
pub trait FlavorText {
    fn victory_text(&self, winner: Side) -> Result<String, ServiceError>;
}

/// The deterministic fallback line.
#[must_use]
pub fn fallback_text(winner: Side) -> &'static str {
    match winner {
        Side::Player => "Player is victorious!",
        Side::Opponent => "Opponent is victorious!",
    }
}

/// Ask the service for a victory line, falling back on any failure.
pub fn victory_message(service: &dyn FlavorText, winner: Side) -> String {
    match service.victory_text(winner) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            log::warn!("Flavor text was empty, using fallback");
            fallback_text(winner).to_string()
        }
        Err(e) => {
            log::warn!("Flavor text unavailable ({}), using fallback", e);
            fallback_text(winner).to_string()
        }
    }
}

/// Service that always answers with the fallback line.
#[derive(Clone, Debug, Default)]
pub struct FallbackFlavor;

impl FlavorText for FallbackFlavor {
    fn victory_text(&self, winner: Side) -> Result<String, ServiceError> {
        Ok(fallback_text(winner).to_string())
    }
}

/// Bounds another service by a time budget.
///
/// The call runs on a helper thread. If it has not answered when the
/// budget runs out, the result is `ServiceError::Timeout` and the helper
/// is left to finish on its own.
pub struct TimedFlavor<F> {
    inner: Arc<F>,
    timeout: Duration,
}

impl<F> TimedFlavor<F>
where
    F: FlavorText + Send + Sync + 'static,
{
    pub fn new(inner: F, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }
}

impl<F> FlavorText for TimedFlavor<F>
where
    F: FlavorText + Send + Sync + 'static,
{
    fn victory_text(&self, winner: Side) -> Result<String, ServiceError> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let inner = Arc::clone(&self.inner);

        thread::Builder::new()
            .name("flavor-text".to_string())
            .spawn(move || {
                // The receiver may already be gone after a timeout.
                let _ = tx.send(inner.victory_text(winner));
            })?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => {
                Err(ServiceError::Timeout(self.timeout.as_millis() as u64))
            }
            Err(RecvTimeoutError::Disconnected) => {
                Err(ServiceError::Unavailable("flavor-text worker exited".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl FlavorText for Fixed {
        fn victory_text(&self, _winner: Side) -> Result<String, ServiceError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl FlavorText for Failing {
        fn victory_text(&self, _winner: Side) -> Result<String, ServiceError> {
            Err(ServiceError::Unavailable("no model".to_string()))
        }
    }

    struct Slow(Duration);

    impl FlavorText for Slow {
        fn victory_text(&self, _winner: Side) -> Result<String, ServiceError> {
            thread::sleep(self.0);
            Ok("Too late".to_string())
        }
    }

    #[test]
    fn test_service_text_used() {
        assert_eq!(
            victory_message(&Fixed("  The flames obey you.  "), Side::Player),
            "The flames obey you."
        );
    }

    #[test]
    fn test_fallback_on_error() {
        assert_eq!(victory_message(&Failing, Side::Player), "Player is victorious!");
        assert_eq!(victory_message(&Failing, Side::Opponent), "Opponent is victorious!");
    }

    #[test]
    fn test_fallback_on_empty() {
        assert_eq!(victory_message(&Fixed("   "), Side::Opponent), "Opponent is victorious!");
    }

    #[test]
    fn test_fallback_flavor() {
        assert_eq!(victory_message(&FallbackFlavor, Side::Player), "Player is victorious!");
    }

    #[test]
    fn test_timed_passes_through_fast_answer() {
        let timed = TimedFlavor::new(Fixed("Earth trembles."), Duration::from_secs(5));
        assert_eq!(victory_message(&timed, Side::Player), "Earth trembles.");
    }

    struct Panicking;

    impl FlavorText for Panicking {
        fn victory_text(&self, _winner: Side) -> Result<String, ServiceError> {
            panic!("flavor backend crashed");
        }
    }

    #[test]
    fn test_timed_worker_exit_is_unavailable() {
        let timed = TimedFlavor::new(Panicking, Duration::from_secs(5));
        assert!(matches!(
            timed.victory_text(Side::Player),
            Err(ServiceError::Unavailable(_))
        ));
        assert_eq!(victory_message(&timed, Side::Player), "Player is victorious!");
    }

    #[test]
    fn test_timed_falls_back_on_timeout() {
        let timed = TimedFlavor::new(Slow(Duration::from_millis(500)), Duration::from_millis(20));
        assert!(matches!(
            timed.victory_text(Side::Player),
            Err(ServiceError::Timeout(20))
        ));
        assert_eq!(victory_message(&timed, Side::Opponent), "Opponent is victorious!");
    }
}
