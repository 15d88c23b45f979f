use std::f32::consts::PI;

use crate::buffer::AudioBuffer;
use crate::effect::config::ValidConfig;
use crate::effect::errors::EffectError;

fn pan_curve(frames: usize, sample_rate: u32, pan_speed: f32, depth: f32) -> Vec<f32> {
    // t spans [0, duration] inclusive; a single frame sits at t = 0 so
    // the step divisor never hits zero.
    let step = if frames > 1 {
        let duration = frames as f32 / sample_rate as f32;
        duration / (frames - 1) as f32
    } else {
        0.0
    };

    (0..frames)
        .map(|i| (2.0 * PI * pan_speed * step * i as f32).sin() * depth)
        .collect()
}

fn upmix_to_stereo(samples: Vec<f32>) -> Vec<f32> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for s in samples {
        out.push(s);
        out.push(s);
    }
    out
}

/// Applies differential left/right gain following a sinusoidal pan curve.
///
/// Mono input is duplicated into stereo first; any other channel layout
/// is rejected. The curve is a single continuous sinusoid over the buffer
/// duration, bounded to `[-depth, depth]`. Output amplitudes may exceed
/// `[-1, 1]`; the normalizer at the end of the pipeline restores the
/// nominal range.
pub fn apply_panning(
    buffer: AudioBuffer,
    config: &ValidConfig,
) -> Result<AudioBuffer, EffectError> {
    let mut samples = match buffer.channels {
        1 => upmix_to_stereo(buffer.samples),
        2 => buffer.samples,
        other => return Err(EffectError::UnsupportedChannelLayout(other)),
    };

    let frames = samples.len() / 2;
    let config = config.get();
    let curve = pan_curve(frames, buffer.sample_rate, config.pan_speed, config.depth);

    for (frame, pan) in samples.chunks_exact_mut(2).zip(&curve) {
        frame[0] *= 1.0 + pan;
        frame[1] *= 1.0 - pan;
    }

    Ok(AudioBuffer {
        sample_rate: buffer.sample_rate,
        channels: 2,
        samples,
    })
}
