//! WAV container encoding.
//!
//! Generates standard 44-byte RIFF WAV headers and serializes float
//! samples into 16-bit little-endian PCM payloads.

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

const BIT_DEPTH: u16 = 16;
const BYTES_PER_SAMPLE: u32 = 2;

/// Generate a 44-byte WAV RIFF header.
///
/// Format: PCM (format code 1), 16-bit, little-endian.
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    chunk size = 36 + data_size
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * channels * 2
/// [32-33]  block_align = channels * 2
/// [34-35]  16 (bits per sample)
/// [36-39]  "data"
/// [40-43]  data_size
/// ```
pub fn generate_wav_header(sample_rate: u32, channels: u16, data_size: u32) -> [u8; WAV_HEADER_SIZE] {
    let byte_rate = sample_rate * channels as u32 * BYTES_PER_SAMPLE;
    let block_align = channels * BYTES_PER_SAMPLE as u16;
    let chunk_size = 36 + data_size;

    let mut header = [0u8; WAV_HEADER_SIZE];

    // RIFF chunk descriptor
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    // fmt sub-chunk
    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes()); // PCM format size
    header[20..22].copy_from_slice(&1u16.to_le_bytes()); // PCM format code
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&BIT_DEPTH.to_le_bytes());

    // data sub-chunk
    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

/// Quantize one float sample to signed 16-bit PCM.
///
/// Clamps to [-1.0, 1.0], then scales negatives by 32768 and
/// non-negatives by 32767, truncating toward zero. The asymmetric scale
/// keeps +1.0 at 32767 (in range) while -1.0 still reaches the full
/// negative extent -32768.
pub fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 32768.0) as i16
    } else {
        (clamped * 32767.0) as i16
    }
}

/// Byte size of the PCM payload for `sample_count` samples, saturating
/// at the 32-bit limit of the WAV size fields rather than wrapping.
fn pcm_data_size(sample_count: usize) -> u32 {
    (sample_count as u64)
        .saturating_mul(BYTES_PER_SAMPLE as u64)
        .min(u32::MAX as u64) as u32
}

/// Serialize interleaved float samples into a complete WAV container.
///
/// An empty sample array is valid and produces the minimal 44-byte file
/// (`data_size = 0`, chunk size 36).
pub fn encode_wav(samples: &[f32], sample_rate: u32, channels: u16) -> Vec<u8> {
    let data_size = pcm_data_size(samples.len());

    let mut bytes = Vec::with_capacity(WAV_HEADER_SIZE + data_size as usize);
    bytes.extend_from_slice(&generate_wav_header(sample_rate, channels, data_size));
    for &sample in samples {
        bytes.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u16_at(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn u32_at(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    fn i16_at(bytes: &[u8], offset: usize) -> i16 {
        i16::from_le_bytes([bytes[offset], bytes[offset + 1]])
    }

    #[test]
    fn header_size_is_44_bytes() {
        let header = generate_wav_header(44100, 2, 0);
        assert_eq!(header.len(), WAV_HEADER_SIZE);
    }

    #[test]
    fn header_riff_magic() {
        let header = generate_wav_header(44100, 2, 0);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");
    }

    #[test]
    fn header_pcm_format() {
        let header = generate_wav_header(44100, 2, 0);
        // Format code = 1 (PCM), fmt chunk size = 16, 16-bit
        assert_eq!(u16_at(&header, 20), 1);
        assert_eq!(u32_at(&header, 16), 16);
        assert_eq!(u16_at(&header, 34), 16);
    }

    #[test]
    fn header_44khz_stereo_fields() {
        let header = generate_wav_header(44100, 2, 9600);

        assert_eq!(u16_at(&header, 22), 2);
        assert_eq!(u32_at(&header, 24), 44100);
        assert_eq!(u32_at(&header, 28), 176400); // 44100 * 2 * 2
        assert_eq!(u16_at(&header, 32), 4); // 2 * 2
        assert_eq!(u32_at(&header, 40), 9600);
        assert_eq!(u32_at(&header, 4), 36 + 9600);
    }

    #[test]
    fn quantize_corner_values() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32768);
    }

    #[test]
    fn quantize_clamps_out_of_range() {
        assert_eq!(quantize(2.0), 32767);
        assert_eq!(quantize(-3.0), -32768);
    }

    #[test]
    fn quantize_scales_asymmetrically() {
        // 0.5 * 32767 = 16383.5 → truncates to 16383
        assert_eq!(quantize(0.5), 16383);
        // -0.5 * 32768 = -16384 exactly
        assert_eq!(quantize(-0.5), -16384);
    }

    #[test]
    fn data_size_saturates_instead_of_wrapping() {
        assert_eq!(pcm_data_size(0), 0);
        assert_eq!(pcm_data_size(24), 48);
        // 2^31 samples would wrap a u32 multiply to 0; the size field
        // saturates instead so header and payload never contradict by
        // wrap-around.
        assert_eq!(pcm_data_size(1 << 31), u32::MAX);
        assert_eq!(pcm_data_size(usize::MAX), u32::MAX);
    }

    #[test]
    fn encode_empty_is_minimal_file() {
        let bytes = encode_wav(&[], 44100, 2);

        assert_eq!(bytes.len(), WAV_HEADER_SIZE);
        assert_eq!(u32_at(&bytes, 4), 36);
        assert_eq!(u32_at(&bytes, 40), 0);
    }

    #[test]
    fn encode_sizes_consistent() {
        let samples = [0.0f32; 24];
        let bytes = encode_wav(&samples, 44100, 2);

        assert_eq!(bytes.len(), 44 + 48);
        assert_eq!(u32_at(&bytes, 40), 48); // data size = 24 samples * 2 bytes
        assert_eq!(u32_at(&bytes, 4), 36 + 48);
    }

    #[test]
    fn encode_payload_little_endian() {
        let bytes = encode_wav(&[0.0, 1.0, -1.0], 8000, 1);

        assert_eq!(i16_at(&bytes, 44), 0);
        assert_eq!(i16_at(&bytes, 46), 32767);
        assert_eq!(i16_at(&bytes, 48), -32768);
    }
}
