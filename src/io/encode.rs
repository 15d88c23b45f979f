//! WAV output encoding.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::buffer::AudioBuffer;
use crate::io::errors::CodecError;

/// Quantizes the buffer to 16-bit PCM and writes it as a WAV file.
///
/// Samples are clamped to `[-1, 1]` before quantization; the pipeline's
/// normalizer guarantees that bound for processed audio, so clamping
/// only matters for buffers written without processing.
pub fn write_wav(path: &Path, buffer: &AudioBuffer) -> Result<(), CodecError> {
    let spec = WavSpec {
        channels: buffer.channels as u16,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in &buffer.samples {
        let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(quantized)?;
    }
    writer.finalize()?;

    Ok(())
}
