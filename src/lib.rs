//! 8D audio conversion.
//!
//! Turns mono or stereo PCM into stereo audio with a rotating-source
//! ("8D") effect: a slow sinusoidal pan sweeps the signal between the
//! left and right channels, a single decayed echo adds a sense of space,
//! and a final peak normalization keeps the result clip-free.
//!
//! The effect itself lives in [`effect`] and operates purely on
//! in-memory [`AudioBuffer`]s; file decoding and WAV encoding live in
//! [`io`].

pub mod buffer;
pub mod effect;
pub mod io;

pub use buffer::AudioBuffer;
pub use effect::{EffectConfig, EffectError, ValidConfig, process};
