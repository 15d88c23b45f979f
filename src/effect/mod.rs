//! 8D Effect Pipeline
//!
//! This module implements the rotating-source ("8D") effect as a strictly
//! sequential pipeline of pure buffer transformations:
//!
//! - [`config`]: parameter set, defaults, and range validation
//! - [`constants`]: parameter bounds and fixed mix weights
//! - [`errors`]: effect error types
//! - [`panning`]: time-varying sinusoidal stereo panning
//! - [`reverb`]: two-tap echo filter
//! - [`normalize`]: final peak normalization
//!
//! Each invocation of [`process`] is stateless and deterministic; there is
//! no shared state between calls, so independent buffers may be processed
//! concurrently without coordination.

use crate::buffer::AudioBuffer;

pub mod config;
pub mod constants;
pub mod errors;
mod normalize;
mod panning;
mod reverb;

pub use config::{EffectConfig, ValidConfig};
pub use errors::EffectError;
pub use normalize::normalize;
pub use panning::apply_panning;
pub use reverb::apply_reverb;

/// Runs the full pipeline: panning, echo, then peak normalization.
///
/// Accepts mono or stereo input and always produces stereo output with
/// the same frame count and sample rate, with samples in `[-1.0, 1.0]`.
///
/// # Errors
///
/// - [`EffectError::EmptyBuffer`] if the buffer has no frames
/// - [`EffectError::UnsupportedChannelLayout`] for channel counts
///   outside mono/stereo
pub fn process(buffer: AudioBuffer, config: &ValidConfig) -> Result<AudioBuffer, EffectError> {
    if buffer.frames() == 0 {
        return Err(EffectError::EmptyBuffer);
    }

    log::debug!(
        "processing {} frames at {} Hz ({} channel(s))",
        buffer.frames(),
        buffer.sample_rate,
        buffer.channels
    );

    let panned = panning::apply_panning(buffer, config)?;
    let echoed = reverb::apply_reverb(panned, config);
    Ok(normalize::normalize(echoed))
}
