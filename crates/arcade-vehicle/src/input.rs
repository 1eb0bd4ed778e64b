//! Input channel names and clamped driver intent.

use serde::{Deserialize, Serialize};

/// Names of the input channels the controller reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputChannels {
    /// Throttle axis.
    pub throttle: String,
    /// Brake axis (arcade, unclamped) or button (progressive).
    pub brake: String,
    /// Steering axis.
    pub steer: String,
    /// Handbrake toggle button.
    pub handbrake: String,
    /// Boost button, held to burn charge.
    pub boost: String,
    /// Drift button, held to request drift.
    pub drift: String,
    /// Left indicator toggle.
    pub blinker_left: String,
    /// Right indicator toggle.
    pub blinker_right: String,
    /// Indicator off.
    pub blinker_clear: String,
}

impl Default for InputChannels {
    fn default() -> Self {
        Self {
            throttle: "Throttle".into(),
            brake: "Brake".into(),
            steer: "Horizontal".into(),
            handbrake: "Handbrake".into(),
            boost: "Boost".into(),
            drift: "Drift".into(),
            blinker_left: "blinker_left".into(),
            blinker_right: "blinker_right".into(),
            blinker_clear: "blinker_clear".into(),
        }
    }
}

/// Clamp to `[-1, 1]`, mapping NaN to zero.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Clamp to `[0, 1]`, mapping NaN to zero.
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Resolved throttle, steer and brake scalars.
///
/// Fields are private so every write goes through the clamps:
/// throttle and steer in `[-1, 1]`, brake in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriverIntent {
    throttle: f32,
    steer: f32,
    brake: f32,
}

impl DriverIntent {
    /// Build an intent, clamping each scalar into its domain.
    pub fn new(throttle: f32, steer: f32, brake: f32) -> Self {
        Self {
            throttle: clamp_unit(throttle),
            steer: clamp_unit(steer),
            brake: clamp01(brake),
        }
    }

    /// Throttle in `[-1, 1]`; negative drives backwards.
    pub fn throttle(&self) -> f32 {
        self.throttle
    }

    /// Steer in `[-1, 1]`.
    pub fn steer(&self) -> f32 {
        self.steer
    }

    /// Brake in `[0, 1]`.
    pub fn brake(&self) -> f32 {
        self.brake
    }

    /// Zero steering and braking, leaving throttle alone.
    pub(crate) fn neutralize_chassis(&mut self) {
        self.steer = 0.0;
        self.brake = 0.0;
    }
}
