use crate::models::error::CaptureError;
use crate::models::state::CaptureState;

/// Event delegate for capture session notifications.
///
/// Replaces user-facing alerts and UI labels with structured callbacks;
/// the host application decides presentation. `on_tick` and `on_error`
/// fire on background threads (timer and delivery respectively), not the
/// caller's thread — implementations should marshal if needed.
pub trait CaptureDelegate: Send + Sync {
    /// Called when the session moves between idle and recording.
    fn on_state_changed(&self, state: &CaptureState);

    /// Called once per second while recording with the elapsed time.
    fn on_tick(&self, elapsed_secs: u64);

    /// Called when capture fails asynchronously (stream interruption).
    fn on_error(&self, error: &CaptureError);
}
