//! Codec collaborators for the effect pipeline.
//!
//! The effect core consumes and produces raw PCM only; these modules
//! bridge it to the filesystem:
//!
//! - [`decode`]: audio file → [`AudioBuffer`](crate::buffer::AudioBuffer)
//!   via Symphonia
//! - [`encode`]: processed buffer → 16-bit PCM WAV via hound
//! - [`errors`]: codec error types

pub mod decode;
pub mod encode;
pub mod errors;

pub use decode::decode_audio_file;
pub use encode::write_wav;
pub use errors::CodecError;
