/// Append-only frame store for one capture channel.
///
/// Each audio callback delivers one fixed-length frame per channel; the
/// buffer keeps those frames in arrival order together with a running
/// total-sample count. Appending is O(1) (one chunk push), so it is safe
/// to call from the real-time delivery path under a briefly held lock.
///
/// Wrap in `Arc<parking_lot::Mutex<FrameBuffer>>` for cross-thread access.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    frames: Vec<Vec<f32>>,
    total_samples: usize,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame, updating the cumulative sample count.
    pub fn append(&mut self, frame: &[f32]) {
        if frame.is_empty() {
            return;
        }
        self.total_samples += frame.len();
        self.frames.push(frame.to_vec());
    }

    /// Cumulative number of samples across all appended frames.
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Number of frames appended so far.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_samples == 0
    }

    /// Reset to the empty state, dropping all frames.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.total_samples = 0;
    }

    /// Flatten the frame sequence into one contiguous sample array.
    ///
    /// The result equals the concatenation of all appended frames in
    /// arrival order; no samples are reordered or dropped. Merging an
    /// empty buffer yields an empty vec, not an error.
    pub fn merge(&self) -> Vec<f32> {
        let mut merged = Vec::with_capacity(self.total_samples);
        for frame in &self.frames {
            merged.extend_from_slice(frame);
        }
        merged
    }
}
