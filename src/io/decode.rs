//! Audio file decoding.
//!
//! Decodes compressed or raw audio containers into the normalized
//! floating-point [`AudioBuffer`] the effect pipeline consumes. The
//! pipeline itself never touches codecs; this module is its only source
//! of decoded PCM.

use std::fs::File;
use std::path::Path;
use symphonia::core::{
    audio::SampleBuffer as SymphoniaSampleBuffer, codecs::DecoderOptions,
    errors::Error as SymphoniaError, formats::FormatOptions, io::MediaSourceStream,
    meta::MetadataOptions, probe::Hint,
};
use symphonia::default::{get_codecs, get_probe};

use crate::buffer::AudioBuffer;
use crate::io::errors::CodecError;

/// Decodes an audio file into an interleaved f32 buffer at its native
/// sample rate and channel layout.
///
/// # Errors
///
/// - File not found or cannot be opened
/// - Audio format not recognized or corrupted
/// - Missing sample rate or channel metadata
/// - More than two channels (the effect pipeline handles mono and
///   stereo only)
pub fn decode_audio_file(path: &Path) -> Result<AudioBuffer, CodecError> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut format = probed.format;

    let track = format.default_track().ok_or(CodecError::NoDefaultTrack)?;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(CodecError::MissingSampleRate)?;
    let channels = track
        .codec_params
        .channels
        .ok_or(CodecError::MissingChannels)?
        .count();

    if channels == 0 || channels > 2 {
        return Err(CodecError::UnsupportedChannels { channels });
    }

    let mut decoder = get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut samples: Vec<f32> = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(err) => return Err(CodecError::Decode(err)),
        };

        let audio_buf = decoder.decode(&packet)?;
        let spec = *audio_buf.spec();
        let duration = audio_buf.capacity() as u64;

        let mut sample_buf = SymphoniaSampleBuffer::<f32>::new(duration, spec);
        sample_buf.copy_interleaved_ref(audio_buf);
        samples.extend_from_slice(sample_buf.samples());
    }

    Ok(AudioBuffer::new(sample_rate, channels, samples))
}
