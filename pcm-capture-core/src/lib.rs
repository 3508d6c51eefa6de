//! # pcm-capture-core
//!
//! Platform-agnostic audio capture buffering pipeline.
//!
//! Accumulates asynchronously delivered audio frames into per-channel
//! buffers and converts them into a canonical uncompressed PCM WAV asset.
//! Audio backends (hardware capture, simulators) implement the
//! `AudioSource` trait and plug into the generic `CaptureSession`.
//!
//! ## Architecture
//!
//! ```text
//! pcm-capture-core (this crate)
//! ├── traits/       ← AudioSource, FrameSink, CaptureDelegate
//! ├── models/       ← CaptureError, CaptureState, CaptureConfig, WavAsset
//! ├── processing/   ← FrameBuffer, interleave, WAV encoding
//! ├── session/      ← CaptureSession (generic orchestrator)
//! └── storage/      ← asset writer (WAV + metadata sidecar)
//! ```
//!
//! Data flows one way:
//!
//! ```text
//! [AudioSource] → ingest → [FrameBuffer × N] → merge → interleave → [WAV bytes]
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::asset::{AssetMetadata, WavAsset};
pub use models::config::CaptureConfig;
pub use models::error::CaptureError;
pub use models::state::CaptureState;
pub use processing::frame_buffer::FrameBuffer;
pub use processing::interleave::interleave;
pub use processing::wav_format::{encode_wav, generate_wav_header, quantize, WAV_HEADER_SIZE};
pub use session::capture::{CaptureDiagnostics, CaptureSession};
pub use storage::asset_writer::write_asset;
pub use traits::audio_source::{AudioSource, FrameSink, StreamParams};
pub use traits::capture_delegate::CaptureDelegate;
