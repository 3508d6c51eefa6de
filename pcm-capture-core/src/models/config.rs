/// Configuration for a capture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Number of capture channels (default: 2 for stereo). Fixed for the
    /// session's lifetime.
    pub channels: u16,

    /// Requested sample rate in Hz (default: 44100). The rate the source
    /// actually reports at stream start is authoritative for encoding.
    pub sample_rate: u32,
}

impl CaptureConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.channels == 0 {
            return Err("channel count must be at least 1".into());
        }
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        Ok(())
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 44100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_stereo() {
        let config = CaptureConfig::default();
        assert_eq!(config.channels, 2);
        assert_eq!(config.sample_rate, 44100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_channels_rejected() {
        let config = CaptureConfig {
            channels: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_sample_rate_rejected() {
        let config = CaptureConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
