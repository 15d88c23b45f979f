//! Effect parameter bounds and fixed mix weights.

/// Minimum panning oscillation frequency in Hz (exclusive).
pub const PAN_SPEED_MIN_HZ: f32 = 0.0;

/// Maximum panning oscillation frequency in Hz (inclusive).
pub const PAN_SPEED_MAX_HZ: f32 = 2.0;

/// Minimum panning depth.
pub const DEPTH_MIN: f32 = 0.0;

/// Maximum panning depth.
pub const DEPTH_MAX: f32 = 1.0;

/// Minimum echo delay in milliseconds (exclusive).
pub const REVERB_DELAY_MIN_MS: f32 = 0.0;

/// Maximum echo delay in milliseconds (inclusive).
pub const REVERB_DELAY_MAX_MS: f32 = 100.0;

/// Minimum echo decay factor.
pub const REVERB_DECAY_MIN: f32 = 0.0;

/// Maximum echo decay factor.
pub const REVERB_DECAY_MAX: f32 = 1.0;

/// Weight of the echo signal when mixed back into the dry signal.
///
/// Fixed so that the echo's prominence stays constant regardless of the
/// configured decay factor.
pub const REVERB_MIX: f32 = 0.5;
