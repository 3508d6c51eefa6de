use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::models::asset::{AssetMetadata, WavAsset};
use crate::models::config::CaptureConfig;
use crate::models::error::CaptureError;
use crate::models::state::CaptureState;
use crate::processing::frame_buffer::FrameBuffer;
use crate::processing::interleave::interleave;
use crate::processing::wav_format;
use crate::traits::audio_source::{AudioSource, FrameSink};
use crate::traits::capture_delegate::CaptureDelegate;

/// Ingestion counters, updated from the delivery thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureDiagnostics {
    /// Frame deliveries appended to the buffers.
    pub deliveries: u64,
    /// Deliveries dropped by the recording gate or a channel-count
    /// mismatch.
    pub deliveries_discarded: u64,
}

/// State shared between the session, the source's delivery thread, and
/// the elapsed timer thread.
struct Shared {
    /// Recording gate. The ingestion path does exactly one relaxed read
    /// per delivery, so `stop()` closes the gate without an unbounded
    /// race window of continued appends.
    recording: AtomicBool,
    timer_running: AtomicBool,
    elapsed_secs: AtomicU64,
    /// One buffer per channel, all behind a single short-held lock so a
    /// delivery appends to every channel atomically with respect to
    /// `clear` and export. The buffers always hold equal cumulative
    /// counts when the lock is free.
    buffers: Mutex<Vec<FrameBuffer>>,
    deliveries: AtomicU64,
    deliveries_discarded: AtomicU64,
}

impl Shared {
    fn new(channels: u16) -> Self {
        Self {
            recording: AtomicBool::new(false),
            timer_running: AtomicBool::new(false),
            elapsed_secs: AtomicU64::new(0),
            buffers: Mutex::new((0..channels).map(|_| FrameBuffer::new()).collect()),
            deliveries: AtomicU64::new(0),
            deliveries_discarded: AtomicU64::new(0),
        }
    }
}

/// `FrameSink` half of the session, handed to the source at stream start.
///
/// Runs on the source's delivery thread: one gate read, one short lock,
/// no allocation beyond the chunk pushes, no I/O.
struct IngestSink {
    shared: Arc<Shared>,
    delegate: Option<Arc<dyn CaptureDelegate>>,
}

impl FrameSink for IngestSink {
    fn deliver(&self, frames: &[&[f32]]) {
        if !self.shared.recording.load(Ordering::Relaxed) {
            // Late frames after stop() are silently discarded.
            self.shared.deliveries_discarded.fetch_add(1, Ordering::Relaxed);
            return;
        }

        {
            let mut buffers = self.shared.buffers.lock();
            if frames.len() != buffers.len() {
                self.shared.deliveries_discarded.fetch_add(1, Ordering::Relaxed);
                return;
            }
            for (buffer, frame) in buffers.iter_mut().zip(frames) {
                buffer.append(frame);
            }
        }
        self.shared.deliveries.fetch_add(1, Ordering::Relaxed);
    }

    fn interrupted(&self, reason: &str) {
        let was_recording = self.shared.recording.swap(false, Ordering::SeqCst);
        self.shared.timer_running.store(false, Ordering::SeqCst);
        self.shared.elapsed_secs.store(0, Ordering::SeqCst);
        if !was_recording {
            return;
        }

        log::warn!("capture stream interrupted: {}", reason);
        if let Some(ref delegate) = self.delegate {
            delegate.on_error(&CaptureError::StreamInterrupted(reason.to_string()));
            delegate.on_state_changed(&CaptureState::Idle);
        }
    }
}

/// Capture session orchestrator.
///
/// Generic over the audio backend via the `AudioSource` trait. Owns one
/// `FrameBuffer` per channel, gates frame ingestion on the recording
/// state, and exposes start/stop/clear/export.
///
/// ```text
/// [AudioSource] → ingest gate → [FrameBuffer × N] → merge → interleave → WAV
/// ```
///
/// The channel count is fixed at construction; a session is reusable
/// across any number of start/stop/clear/export cycles.
pub struct CaptureSession<A: AudioSource> {
    source: A,
    config: CaptureConfig,
    /// Sample rate reported by the source at the most recent stream
    /// start; used for encoding. Falls back to the configured rate.
    stream_rate: u32,
    shared: Arc<Shared>,
    delegate: Option<Arc<dyn CaptureDelegate>>,
    timer_handle: Option<thread::JoinHandle<()>>,
}

impl<A: AudioSource> CaptureSession<A> {
    pub fn new(source: A) -> Self {
        Self::with_config(source, CaptureConfig::default())
    }

    pub fn with_config(source: A, config: CaptureConfig) -> Self {
        Self {
            source,
            config,
            stream_rate: config.sample_rate,
            shared: Arc::new(Shared::new(config.channels)),
            delegate: None,
            timer_handle: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn CaptureDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub fn state(&self) -> CaptureState {
        if self.shared.recording.load(Ordering::SeqCst) {
            CaptureState::Recording
        } else {
            CaptureState::Idle
        }
    }

    /// Seconds elapsed since `start()`, counted by the once-per-second
    /// timer. Zero while idle.
    pub fn elapsed_secs(&self) -> u64 {
        self.shared.elapsed_secs.load(Ordering::SeqCst)
    }

    pub fn diagnostics(&self) -> CaptureDiagnostics {
        CaptureDiagnostics {
            deliveries: self.shared.deliveries.load(Ordering::Relaxed),
            deliveries_discarded: self.shared.deliveries_discarded.load(Ordering::Relaxed),
        }
    }

    /// Cumulative sample count of each channel buffer.
    pub fn buffered_samples(&self) -> Vec<usize> {
        self.shared
            .buffers
            .lock()
            .iter()
            .map(|b| b.total_samples())
            .collect()
    }

    /// Begin capturing. No-op when already recording.
    ///
    /// Acquires a stream from the source and opens the ingestion gate;
    /// on any failure the session stays idle and the buffers are
    /// untouched.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.shared.recording.load(Ordering::SeqCst) {
            log::debug!("start ignored: session already recording");
            return Ok(());
        }

        self.config
            .validate()
            .map_err(CaptureError::Initialization)?;

        let sink: Arc<dyn FrameSink> = Arc::new(IngestSink {
            shared: Arc::clone(&self.shared),
            delegate: self.delegate.clone(),
        });

        // Open the gate before the stream can deliver so the first
        // frames are not lost.
        self.shared.recording.store(true, Ordering::SeqCst);

        let params = match self.source.begin_stream(&self.config, sink) {
            Ok(params) => params,
            Err(e) => {
                self.shared.recording.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        if params.channels != self.config.channels {
            self.shared.recording.store(false, Ordering::SeqCst);
            self.source.end_stream();
            return Err(CaptureError::Initialization(format!(
                "source delivers {} channels, session holds {}",
                params.channels, self.config.channels
            )));
        }

        self.stream_rate = params.sample_rate;
        self.start_timer();

        log::debug!(
            "capture started: {} channel(s) at {} Hz",
            params.channels,
            params.sample_rate
        );
        if let Some(ref delegate) = self.delegate {
            delegate.on_state_changed(&CaptureState::Recording);
        }
        Ok(())
    }

    /// Stop capturing. Unconditional and idempotent.
    ///
    /// Closes the ingestion gate first (late frames are then discarded),
    /// cancels the elapsed timer (resetting it to zero), and ends the
    /// source stream. Buffered samples are kept.
    pub fn stop(&mut self) {
        let was_recording = self.shared.recording.swap(false, Ordering::SeqCst);
        self.halt_timer();
        self.shared.elapsed_secs.store(0, Ordering::SeqCst);
        self.source.end_stream();

        if was_recording {
            log::debug!("capture stopped");
            if let Some(ref delegate) = self.delegate {
                delegate.on_state_changed(&CaptureState::Idle);
            }
        }
    }

    /// Reset every channel buffer to empty. Does not change the
    /// idle/recording state.
    ///
    /// The buffer lock is held for the whole reset and a delivery holds
    /// it for all of its appends, so a racing delivery either lands
    /// entirely before the reset or entirely after — the channels never
    /// end up with unequal counts.
    pub fn clear(&self) {
        let mut buffers = self.shared.buffers.lock();
        for buffer in buffers.iter_mut() {
            buffer.clear();
        }
        log::debug!("capture buffers cleared");
    }

    /// Build a WAV asset from the current buffer contents.
    ///
    /// Pure in-memory computation: merge each channel, interleave,
    /// encode. Valid while recording (the snapshot is taken under the
    /// buffer lock, so it is consistent across channels) or idle. An
    /// empty capture yields the minimal 44-byte file.
    pub fn export_asset(&self, name: Option<&str>) -> Result<WavAsset, CaptureError> {
        let merged: Vec<Vec<f32>> = {
            let buffers = self.shared.buffers.lock();
            buffers.iter().map(|b| b.merge()).collect()
        };

        let frames_per_channel = merged.first().map(|c| c.len()).unwrap_or(0);
        let samples = interleave(&merged)?;
        let bytes = wav_format::encode_wav(&samples, self.stream_rate, self.config.channels);

        let metadata = AssetMetadata::new(self.stream_rate, self.config.channels, frames_per_channel);
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("recording_{}.wav", metadata.id),
        };

        Ok(WavAsset {
            name,
            bytes,
            metadata,
        })
    }

    fn start_timer(&mut self) {
        self.shared.timer_running.store(true, Ordering::SeqCst);

        let shared = Arc::clone(&self.shared);
        let delegate = self.delegate.clone();

        // Poll the cancel flag at 100ms; elapsed time comes from the
        // start Instant, so sleep overshoot never accumulates drift.
        let handle = thread::Builder::new()
            .name("capture-elapsed-timer".into())
            .spawn(move || {
                let started = Instant::now();
                let mut last_tick = 0u64;
                loop {
                    thread::sleep(Duration::from_millis(100));
                    if !shared.timer_running.load(Ordering::SeqCst) {
                        break;
                    }
                    let elapsed = started.elapsed().as_secs();
                    if elapsed > last_tick {
                        last_tick = elapsed;
                        shared.elapsed_secs.store(elapsed, Ordering::SeqCst);
                        if let Some(ref d) = delegate {
                            d.on_tick(elapsed);
                        }
                    }
                }
            })
            .expect("failed to spawn timer thread");

        self.timer_handle = Some(handle);
    }

    fn halt_timer(&mut self) {
        self.shared.timer_running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.timer_handle.take() {
            let _ = handle.join();
        }
    }
}

impl<A: AudioSource> Drop for CaptureSession<A> {
    fn drop(&mut self) {
        self.shared.recording.store(false, Ordering::SeqCst);
        self.halt_timer();
        self.source.end_stream();
    }
}
