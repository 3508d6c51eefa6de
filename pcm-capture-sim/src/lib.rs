//! # pcm-capture-sim
//!
//! Simulated audio source backend for `pcm-capture-core`.
//!
//! Provides:
//! - `SineSource` — phase-continuous sine generator delivering blocks on
//!   a dedicated thread at the real-time cadence of the block size
//!
//! Useful as a deterministic stand-in for hardware capture in tests and
//! demos, and as a reference implementation of the `AudioSource` contract.
//!
//! ## Usage
//! ```ignore
//! use pcm_capture_core::CaptureSession;
//! use pcm_capture_sim::SineSource;
//!
//! let mut session = CaptureSession::new(SineSource::new());
//! session.start()?;
//! // ... later ...
//! session.stop();
//! let asset = session.export_asset(None)?;
//! ```

pub mod sine;

pub use sine::SineSource;
