use serde::{Deserialize, Serialize};

/// Metadata describing an exported WAV asset.
///
/// Serializable for JSON export alongside the asset bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub id: String,
    pub created_at: String,
    pub sample_rate: u32,
    pub channels: u16,
    /// Samples per channel in the encoded payload.
    pub frames_per_channel: usize,
    pub duration_secs: f64,
}

impl AssetMetadata {
    pub fn new(sample_rate: u32, channels: u16, frames_per_channel: usize) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            sample_rate,
            channels,
            frames_per_channel,
            duration_secs: frames_per_channel as f64 / sample_rate as f64,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A fully encoded PCM WAV recording held in memory.
///
/// `bytes` is a complete RIFF/WAVE container: 44-byte header followed by
/// 16-bit little-endian PCM data. Any standard WAV consumer can parse it.
#[derive(Debug, Clone, PartialEq)]
pub struct WavAsset {
    pub name: String,
    pub bytes: Vec<u8>,
    pub metadata: AssetMetadata,
}

impl WavAsset {
    /// Total size of the container in bytes (header + payload).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the asset carries any PCM payload at all.
    pub fn is_empty(&self) -> bool {
        self.metadata.frames_per_channel == 0
    }
}
