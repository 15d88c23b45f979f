//! Effect parameters and their validation.

use crate::effect::constants::{
    DEPTH_MAX, DEPTH_MIN, PAN_SPEED_MAX_HZ, PAN_SPEED_MIN_HZ, REVERB_DECAY_MAX, REVERB_DECAY_MIN,
    REVERB_DELAY_MAX_MS, REVERB_DELAY_MIN_MS,
};
use crate::effect::errors::EffectError;

/// Parameters controlling the 8D effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectConfig {
    /// Frequency of the panning oscillation in Hz, in (0, 2].
    pub pan_speed: f32,

    /// Panning modulation depth, in [0, 1].
    pub depth: f32,

    /// Echo delay in milliseconds, in (0, 100].
    pub reverb_delay_ms: f32,

    /// Echo amplitude decay factor, in [0, 1].
    pub reverb_decay: f32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            pan_speed: 0.5,
            depth: 0.95,
            reverb_delay_ms: 50.0,
            reverb_decay: 0.3,
        }
    }
}

impl EffectConfig {
    /// Checks every parameter against its documented range.
    ///
    /// Checks run in a fixed order (pan_speed, depth, reverb_delay_ms,
    /// reverb_decay) and the first violation is reported. Non-finite
    /// values never pass.
    pub fn validate(self) -> Result<ValidConfig, EffectError> {
        if !self.pan_speed.is_finite()
            || self.pan_speed <= PAN_SPEED_MIN_HZ
            || self.pan_speed > PAN_SPEED_MAX_HZ
        {
            return Err(EffectError::InvalidConfiguration {
                parameter: "pan_speed",
                value: self.pan_speed,
                allowed: "(0, 2] Hz",
            });
        }

        if !self.depth.is_finite() || !(DEPTH_MIN..=DEPTH_MAX).contains(&self.depth) {
            return Err(EffectError::InvalidConfiguration {
                parameter: "depth",
                value: self.depth,
                allowed: "[0, 1]",
            });
        }

        if !self.reverb_delay_ms.is_finite()
            || self.reverb_delay_ms <= REVERB_DELAY_MIN_MS
            || self.reverb_delay_ms > REVERB_DELAY_MAX_MS
        {
            return Err(EffectError::InvalidConfiguration {
                parameter: "reverb_delay_ms",
                value: self.reverb_delay_ms,
                allowed: "(0, 100] ms",
            });
        }

        if !self.reverb_decay.is_finite()
            || !(REVERB_DECAY_MIN..=REVERB_DECAY_MAX).contains(&self.reverb_decay)
        {
            return Err(EffectError::InvalidConfiguration {
                parameter: "reverb_decay",
                value: self.reverb_decay,
                allowed: "[0, 1]",
            });
        }

        Ok(ValidConfig(self))
    }
}

/// Proof that an [`EffectConfig`] has passed validation.
///
/// The pipeline stages only accept this type, so an out-of-range
/// configuration cannot reach sample processing. The wrapped config is
/// immutable for the lifetime of the token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidConfig(EffectConfig);

impl ValidConfig {
    /// The validated parameter set.
    pub fn get(&self) -> &EffectConfig {
        &self.0
    }
}
