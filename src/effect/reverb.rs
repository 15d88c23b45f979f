use crate::buffer::AudioBuffer;
use crate::effect::config::ValidConfig;
use crate::effect::constants::REVERB_MIX;

/// Sparse echo impulse: a unit direct tap and one decayed tap at the end
/// of the delay window. Interior taps stay zero so the result is a single
/// discrete echo rather than a diffuse room reverb.
fn impulse_response(delay_samples: usize, decay: f32) -> Vec<f32> {
    let mut ir = vec![0.0; delay_samples];
    ir[0] = 1.0;
    // For delay_samples == 1 both taps share index 0 and the decayed
    // tap wins.
    ir[delay_samples - 1] = decay;
    ir
}

/// Direct-form causal FIR over a single channel. Output at index `i`
/// depends only on inputs at indices `<= i`; the filter is not
/// normalized.
fn filter_channel(input: &[f32], ir: &[f32]) -> Vec<f32> {
    let mut out = vec![0.0; input.len()];
    for (k, &tap) in ir.iter().enumerate() {
        if tap == 0.0 {
            continue;
        }
        for i in k..input.len() {
            out[i] += tap * input[i - k];
        }
    }
    out
}

/// Applies the two-tap echo to every channel independently and mixes the
/// filtered signal back at a fixed weight: `out = dry + 0.5 * wet`.
///
/// Amplitudes may exceed `[-1, 1]` after mixing.
pub fn apply_reverb(buffer: AudioBuffer, config: &ValidConfig) -> AudioBuffer {
    let config = config.get();
    let delay_samples =
        (config.reverb_delay_ms * buffer.sample_rate as f32 / 1000.0).floor() as usize;

    // Flooring can reach zero taps at very low sample rates; an empty
    // impulse is an identity pass.
    if delay_samples < 1 {
        return buffer;
    }

    let ir = impulse_response(delay_samples, config.reverb_decay);
    let frames = buffer.frames();
    let channels = buffer.channels;
    let mut samples = buffer.samples;

    let mut channel = vec![0.0f32; frames];
    for ch in 0..channels {
        for (frame, slot) in channel.iter_mut().enumerate() {
            *slot = samples[frame * channels + ch];
        }

        let wet = filter_channel(&channel, &ir);
        for (frame, w) in wet.iter().enumerate() {
            samples[frame * channels + ch] += REVERB_MIX * w;
        }
    }

    AudioBuffer {
        sample_rate: buffer.sample_rate,
        channels,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::config::EffectConfig;

    fn config(reverb_delay_ms: f32, reverb_decay: f32) -> ValidConfig {
        EffectConfig {
            reverb_delay_ms,
            reverb_decay,
            ..EffectConfig::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_impulse_response_shape() {
        let ir = impulse_response(400, 0.3);
        assert_eq!(ir.len(), 400);
        assert_eq!(ir[0], 1.0);
        assert_eq!(ir[399], 0.3);
        assert!(ir[1..399].iter().all(|&t| t == 0.0));
    }

    #[test]
    fn test_echo_appears_at_delay() {
        // 50 ms at 8 kHz is a 400 sample window; the echoed tap lands at
        // the last index of the window.
        let mut samples = vec![0.0; 2 * 8_000];
        samples[0] = 1.0;
        samples[1] = 1.0;
        let buffer = AudioBuffer::new(8_000, 2, samples);

        let out = apply_reverb(buffer, &config(50.0, 0.3));

        // Direct path: dry + mix * dry.
        assert!((out.samples[0] - 1.5).abs() < 1e-6);
        assert!((out.samples[1] - 1.5).abs() < 1e-6);

        // Echo: mix * decay.
        let echo = 399 * 2;
        assert!((out.samples[echo] - 0.15).abs() < 1e-6);
        assert!((out.samples[echo + 1] - 0.15).abs() < 1e-6);

        // Nothing in between.
        assert!(
            out.samples[2..echo].iter().all(|&s| s.abs() < 1e-6),
            "unexpected energy between direct path and echo"
        );
    }

    #[test]
    fn test_channels_filtered_independently() {
        let mut samples = vec![0.0; 2 * 1_000];
        samples[0] = 1.0; // left impulse only
        let buffer = AudioBuffer::new(8_000, 2, samples);

        let out = apply_reverb(buffer, &config(50.0, 0.5));

        let echo = 399 * 2;
        assert!((out.samples[echo] - 0.25).abs() < 1e-6);
        assert!(out.samples[echo + 1].abs() < 1e-6);
    }

    #[test]
    fn test_zero_decay_keeps_only_direct_path() {
        let samples: Vec<f32> = (0..512).map(|i| ((i % 7) as f32 - 3.0) / 10.0).collect();
        let buffer = AudioBuffer::new(8_000, 2, samples.clone());

        let out = apply_reverb(buffer, &config(50.0, 0.0));

        for (y, x) in out.samples.iter().zip(&samples) {
            assert!((y - 1.5 * x).abs() < 1e-6);
        }
    }

    #[test]
    fn test_delay_rounding_to_zero_is_identity() {
        // 0.5 ms at 1 kHz floors to zero samples.
        let samples = vec![0.25; 64];
        let buffer = AudioBuffer::new(1_000, 2, samples.clone());

        let out = apply_reverb(buffer, &config(0.5, 0.9));
        assert_eq!(out.samples, samples);
    }

    #[test]
    fn test_causality() {
        // All-zero prefix stays untouched by a later impulse.
        let mut samples = vec![0.0; 2 * 600];
        samples[500 * 2] = 1.0;
        samples[500 * 2 + 1] = 1.0;
        let buffer = AudioBuffer::new(8_000, 2, samples);

        let out = apply_reverb(buffer, &config(50.0, 0.3));
        assert!(out.samples[..500 * 2].iter().all(|&s| s == 0.0));
    }
}
