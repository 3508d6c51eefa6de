//! Sine-wave audio source.
//!
//! Generates phase-continuous sine blocks on a dedicated delivery thread
//! at the real-time cadence of the configured block size.

use std::f32::consts::TAU;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use pcm_capture_core::{AudioSource, CaptureConfig, CaptureError, FrameSink, StreamParams};

/// Simulated capture source producing a sine tone on every channel.
///
/// Stands in for a hardware backend: `begin_stream` spawns a delivery
/// thread that pushes one block per channel per tick until `end_stream`.
/// Each channel's amplitude is scaled down by its index so multi-channel
/// output is distinguishable per channel.
pub struct SineSource {
    frequency: f32,
    block_size: usize,
    running: Arc<AtomicBool>,
    delivery_handle: Mutex<Option<thread::JoinHandle<()>>>,
}

impl SineSource {
    /// A 440 Hz tone delivered in 512-sample blocks.
    pub fn new() -> Self {
        Self::with_params(440.0, 512)
    }

    pub fn with_params(frequency: f32, block_size: usize) -> Self {
        Self {
            frequency,
            block_size: block_size.max(1),
            running: Arc::new(AtomicBool::new(false)),
            delivery_handle: Mutex::new(None),
        }
    }
}

impl Default for SineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSource for SineSource {
    fn begin_stream(
        &mut self,
        config: &CaptureConfig,
        sink: Arc<dyn FrameSink>,
    ) -> Result<StreamParams, CaptureError> {
        if self.running.load(Ordering::SeqCst) {
            return Err(CaptureError::Acquisition("stream already active".into()));
        }

        let params = StreamParams {
            sample_rate: config.sample_rate,
            channels: config.channels,
        };

        self.running.store(true, Ordering::SeqCst);
        let running = Arc::clone(&self.running);
        let frequency = self.frequency;
        let block_size = self.block_size;

        let handle = thread::Builder::new()
            .name("sim-sine-delivery".into())
            .spawn(move || {
                delivery_loop(running, sink, params, frequency, block_size);
            })
            .map_err(|e| {
                self.running.store(false, Ordering::SeqCst);
                CaptureError::Acquisition(format!("failed to spawn delivery thread: {}", e))
            })?;

        *self.delivery_handle.lock() = Some(handle);
        log::debug!(
            "sine stream started: {} Hz tone, {} sample blocks",
            frequency,
            block_size
        );
        Ok(params)
    }

    fn end_stream(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.delivery_handle.lock().take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SineSource {
    fn drop(&mut self) {
        self.end_stream();
    }
}

fn delivery_loop(
    running: Arc<AtomicBool>,
    sink: Arc<dyn FrameSink>,
    params: StreamParams,
    frequency: f32,
    block_size: usize,
) {
    let block_period = Duration::from_secs_f64(block_size as f64 / params.sample_rate as f64);
    let phase_step = TAU * frequency / params.sample_rate as f32;
    let mut phase = 0.0f32;

    let mut channels: Vec<Vec<f32>> = vec![vec![0.0; block_size]; params.channels as usize];

    while running.load(Ordering::SeqCst) {
        let block_start = phase;
        for (c, channel) in channels.iter_mut().enumerate() {
            // Quieter on higher channel indices so channels differ.
            let amplitude = 0.8 / (c as f32 + 1.0);
            phase = block_start;
            for sample in channel.iter_mut() {
                *sample = amplitude * phase.sin();
                phase = (phase + phase_step) % TAU;
            }
        }

        let frames: Vec<&[f32]> = channels.iter().map(|c| c.as_slice()).collect();
        sink.deliver(&frames);

        thread::sleep(block_period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Instant;

    struct CountingSink {
        deliveries: AtomicUsize,
        frame_len: Mutex<Option<(usize, usize)>>,
    }

    impl CountingSink {
        fn new() -> Self {
            Self {
                deliveries: AtomicUsize::new(0),
                frame_len: Mutex::new(None),
            }
        }
    }

    impl FrameSink for CountingSink {
        fn deliver(&self, frames: &[&[f32]]) {
            *self.frame_len.lock() = Some((frames.len(), frames[0].len()));
            self.deliveries.fetch_add(1, Ordering::SeqCst);
        }

        fn interrupted(&self, _reason: &str) {}
    }

    fn wait_for_delivery(sink: &CountingSink) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while sink.deliveries.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < deadline, "no delivery within 2s");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn reports_configured_params() {
        let mut source = SineSource::with_params(440.0, 64);
        let sink = Arc::new(CountingSink::new());

        let params = source
            .begin_stream(&CaptureConfig::default(), sink.clone())
            .unwrap();

        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.channels, 2);

        wait_for_delivery(&sink);
        source.end_stream();

        assert_eq!(*sink.frame_len.lock(), Some((2, 64)));
    }

    #[test]
    fn begin_while_active_is_acquisition_error() {
        let mut source = SineSource::with_params(440.0, 64);
        let sink: Arc<dyn FrameSink> = Arc::new(CountingSink::new());

        source
            .begin_stream(&CaptureConfig::default(), sink.clone())
            .unwrap();
        let err = source
            .begin_stream(&CaptureConfig::default(), sink)
            .unwrap_err();

        assert!(matches!(err, CaptureError::Acquisition(_)));
        source.end_stream();
    }

    #[test]
    fn end_stream_is_idempotent_and_halts_delivery() {
        let mut source = SineSource::with_params(440.0, 64);
        let sink = Arc::new(CountingSink::new());

        source
            .begin_stream(&CaptureConfig::default(), sink.clone())
            .unwrap();
        wait_for_delivery(&sink);

        source.end_stream();
        source.end_stream();

        let after_stop = sink.deliveries.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(sink.deliveries.load(Ordering::SeqCst), after_stop);
    }

    #[test]
    fn samples_stay_in_range() {
        let mut source = SineSource::with_params(1000.0, 128);

        struct RangeSink {
            ok: AtomicBool,
            seen: AtomicUsize,
        }
        impl FrameSink for RangeSink {
            fn deliver(&self, frames: &[&[f32]]) {
                for frame in frames {
                    for &s in *frame {
                        if !(-1.0..=1.0).contains(&s) {
                            self.ok.store(false, Ordering::SeqCst);
                        }
                    }
                }
                self.seen.fetch_add(1, Ordering::SeqCst);
            }
            fn interrupted(&self, _reason: &str) {}
        }

        let sink = Arc::new(RangeSink {
            ok: AtomicBool::new(true),
            seen: AtomicUsize::new(0),
        });
        source
            .begin_stream(&CaptureConfig::default(), sink.clone())
            .unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        while sink.seen.load(Ordering::SeqCst) < 3 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        source.end_stream();

        assert!(sink.seen.load(Ordering::SeqCst) >= 3);
        assert!(sink.ok.load(Ordering::SeqCst));
    }
}
