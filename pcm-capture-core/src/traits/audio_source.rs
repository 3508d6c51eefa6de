use std::sync::Arc;

use crate::models::config::CaptureConfig;
use crate::models::error::CaptureError;

/// Stream parameters reported by an audio source when a stream begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamParams {
    /// Actual sample rate of the delivered audio in Hz.
    pub sample_rate: u32,
    /// Number of channels the source delivers per callback.
    pub channels: u16,
}

/// Consumer side of a frame stream, implemented by the capture session.
///
/// Both methods fire on the source's delivery thread — keep processing
/// minimal and never block.
pub trait FrameSink: Send + Sync {
    /// One frame per channel, delivered once per audio block.
    ///
    /// `frames[c]` holds the samples for channel `c`; all frames in one
    /// delivery have the same length.
    fn deliver(&self, frames: &[&[f32]]);

    /// The stream terminated without `end_stream` being called
    /// (device unplugged, permission revoked). No further deliveries
    /// follow.
    fn interrupted(&self, reason: &str);
}

/// Interface for audio capture sources.
///
/// Implemented by platform backends (microphone capture, loopback) and by
/// `pcm-capture-sim`'s generators. The core never touches devices itself.
pub trait AudioSource: Send + Sync {
    /// Begin streaming, delivering frames to `sink` until `end_stream`.
    ///
    /// Returns the negotiated stream parameters, or
    /// `CaptureError::Acquisition` when no stream could be obtained.
    fn begin_stream(
        &mut self,
        config: &CaptureConfig,
        sink: Arc<dyn FrameSink>,
    ) -> Result<StreamParams, CaptureError>;

    /// Stop streaming and release the underlying capture. Idempotent.
    fn end_stream(&mut self);
}
