use crate::models::error::CaptureError;

/// Combine N equal-length channel arrays into one sample-interleaved array.
///
/// Frame-major ordering: `out[k * n + c] = channels[c][k]`. A single channel
/// is the identity transform. Unequal input lengths are a contract
/// violation and fail with `CaptureError::LengthMismatch` — the interleaver
/// never truncates or zero-pads.
pub fn interleave(channels: &[Vec<f32>]) -> Result<Vec<f32>, CaptureError> {
    let Some(first) = channels.first() else {
        return Ok(Vec::new());
    };

    let frame_count = first.len();
    for channel in &channels[1..] {
        if channel.len() != frame_count {
            return Err(CaptureError::LengthMismatch {
                expected: frame_count,
                actual: channel.len(),
            });
        }
    }

    if channels.len() == 1 {
        return Ok(first.clone());
    }

    let num_channels = channels.len();
    let mut out = vec![0.0f32; num_channels * frame_count];
    for (c, channel) in channels.iter().enumerate() {
        for (k, &sample) in channel.iter().enumerate() {
            out[k * num_channels + c] = sample;
        }
    }
    Ok(out)
}
