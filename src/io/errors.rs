//! Codec-layer error types.

use thiserror::Error;

/// Errors that can occur while decoding input files or encoding output.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Failed to open or read the audio file.
    #[error("failed to open file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the audio file.
    #[error("failed to decode audio file: {0}")]
    Decode(#[from] symphonia::core::errors::Error),

    /// Failed to write the output WAV file.
    #[error("failed to encode wav file: {0}")]
    Encode(#[from] hound::Error),

    /// Audio file has no default track.
    #[error("audio file has no default track")]
    NoDefaultTrack,

    /// Audio file is missing sample rate information.
    #[error("audio file is missing a sample rate")]
    MissingSampleRate,

    /// Audio file is missing channel information.
    #[error("audio file is missing channel information")]
    MissingChannels,

    /// The file's channel layout cannot feed the effect pipeline.
    #[error("unsupported channel layout: {channels} channels (only mono and stereo supported)")]
    UnsupportedChannels {
        /// Number of channels in the source file.
        channels: usize,
    },
}
