use thiserror::Error;

/// Errors that can occur during audio capture operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The audio source failed to begin a stream (no device, permission
    /// denied, already streaming). `start()` surfaces this and the session
    /// stays idle.
    #[error("stream acquisition failed: {0}")]
    Acquisition(String),

    /// The capture pipeline could not be initialized (invalid
    /// configuration, source reported an incompatible stream).
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// The source terminated mid-stream (device unplugged, permission
    /// revoked). Reported via the delegate; the session returns to idle.
    #[error("stream interrupted: {0}")]
    StreamInterrupted(String),

    /// Interleaving was invoked with unequal-length channel arrays.
    /// A contract violation, never silently truncated or padded.
    #[error("channel length mismatch: expected {expected} samples, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("storage error: {0}")]
    Storage(String),
}
