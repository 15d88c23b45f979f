//! Interleaved PCM buffer shared by the effect pipeline and the codec layer.

/// An in-memory block of decoded PCM audio.
///
/// Samples are stored as interleaved `f32` values, nominally in the range
/// `[-1.0, 1.0]`. Intermediate pipeline stages may exceed that range; the
/// final normalization stage restores it before quantization.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Number of channels (1 for mono, 2 for stereo).
    pub channels: usize,

    /// Interleaved samples, `frames * channels` values long.
    pub samples: Vec<f32>,
}

impl AudioBuffer {
    pub fn new(sample_rate: u32, channels: usize, samples: Vec<f32>) -> Self {
        Self {
            sample_rate,
            channels,
            samples,
        }
    }

    /// Number of frames (time positions) in the buffer.
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }

    /// Buffer duration in seconds.
    pub fn duration_sec(&self) -> f32 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f32 / self.sample_rate as f32
        }
    }

    /// Largest absolute sample value, ignoring non-finite samples.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_mono_and_stereo() {
        let mono = AudioBuffer::new(44_100, 1, vec![0.0; 100]);
        assert_eq!(mono.frames(), 100);

        let stereo = AudioBuffer::new(44_100, 2, vec![0.0; 100]);
        assert_eq!(stereo.frames(), 50);
    }

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::new(8_000, 2, vec![0.0; 16_000]);
        assert!((buffer.duration_sec() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_peak() {
        let buffer = AudioBuffer::new(8_000, 1, vec![0.25, -0.75, 0.5]);
        assert!((buffer.peak() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_peak_of_silence_is_zero() {
        let buffer = AudioBuffer::new(8_000, 1, vec![0.0; 8]);
        assert_eq!(buffer.peak(), 0.0);
    }
}
