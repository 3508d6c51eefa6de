/// Capture session state machine.
///
/// State transitions:
/// ```text
/// idle ⇄ recording
/// ```
///
/// `start()` moves idle → recording (no-op when already recording),
/// `stop()` moves recording → idle (safe no-op when already idle).
/// A mid-stream interruption also lands back in idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Recording,
}

impl CaptureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}
