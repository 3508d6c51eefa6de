use std::fs;
use std::path::{Path, PathBuf};

use crate::models::asset::WavAsset;
use crate::models::error::CaptureError;

/// Persist an exported asset to disk.
///
/// Writes the WAV bytes as `<dir>/<name>` plus a `<name>.json` metadata
/// sidecar, creating the directory if needed. Returns the path of the
/// WAV file. The capture core itself never touches the filesystem; this
/// is a convenience for hosts that want the asset on disk.
pub fn write_asset(asset: &WavAsset, dir: &Path) -> Result<PathBuf, CaptureError> {
    fs::create_dir_all(dir)
        .map_err(|e| CaptureError::Storage(format!("failed to create directory: {}", e)))?;

    let wav_path = dir.join(&asset.name);
    fs::write(&wav_path, &asset.bytes)
        .map_err(|e| CaptureError::Storage(format!("failed to write asset: {}", e)))?;

    let json = asset
        .metadata
        .to_json()
        .map_err(|e| CaptureError::Storage(format!("failed to serialize metadata: {}", e)))?;
    let sidecar_path = dir.join(format!("{}.json", asset.name));
    fs::write(&sidecar_path, json)
        .map_err(|e| CaptureError::Storage(format!("failed to write metadata: {}", e)))?;

    log::debug!("asset written to {}", wav_path.display());
    Ok(wav_path)
}
