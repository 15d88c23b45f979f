//! Effect-specific error types.

use thiserror::Error;

/// Errors that can occur while applying the 8D effect.
#[derive(Debug, Error, PartialEq)]
pub enum EffectError {
    /// A configuration parameter is outside its documented range.
    #[error("invalid configuration: {parameter} = {value} (allowed range {allowed})")]
    InvalidConfiguration {
        /// Name of the first parameter that failed validation.
        parameter: &'static str,
        /// The rejected value.
        value: f32,
        /// Human-readable description of the allowed range.
        allowed: &'static str,
    },

    /// The input buffer has a channel count other than mono or stereo.
    #[error("unsupported channel layout: {0} channels (only mono and stereo supported)")]
    UnsupportedChannelLayout(usize),

    /// The input buffer contains no frames, so no time base exists.
    #[error("input buffer contains no frames")]
    EmptyBuffer,
}
