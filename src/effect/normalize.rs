use crate::buffer::AudioBuffer;

/// Rescales the buffer so its peak absolute amplitude is exactly 1.0.
///
/// Peak normalization, not loudness normalization: every sample is
/// divided by the global peak. A silent buffer is returned unchanged
/// rather than dividing by zero. This stage cannot fail.
pub fn normalize(mut buffer: AudioBuffer) -> AudioBuffer {
    let peak = buffer.peak();
    if peak > 0.0 && peak.is_finite() {
        let inv = 1.0 / peak;
        for s in &mut buffer.samples {
            *s *= inv;
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_scaled_down_to_unity() {
        let buffer = AudioBuffer::new(8_000, 2, vec![0.5, -2.0, 1.0, 0.25]);
        let out = normalize(buffer);

        assert!((out.peak() - 1.0).abs() < 1e-6);
        assert!((out.samples[1] + 1.0).abs() < 1e-6);
        assert!((out.samples[0] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_quiet_signal_scaled_up() {
        let buffer = AudioBuffer::new(8_000, 1, vec![0.1, -0.05, 0.025]);
        let out = normalize(buffer);

        assert!((out.peak() - 1.0).abs() < 1e-6);
        assert!((out.samples[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_silence_unchanged() {
        let buffer = AudioBuffer::new(8_000, 2, vec![0.0; 128]);
        let out = normalize(buffer);

        assert!(out.samples.iter().all(|&s| s == 0.0));
    }
}
