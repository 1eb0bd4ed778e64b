//! Read-only state snapshot for HUD and logging collaborators.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::blinkers::BlinkerState;
use crate::lockout::Authority;

/// Everything a HUD or a telemetry logger reads from a controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Working speed of the active scheme, km/h.
    pub speed_kmh: f32,
    /// Throttle in `[-1, 1]`.
    pub throttle: f32,
    /// Steer in `[-1, 1]`.
    pub steer: f32,
    /// Brake in `[0, 1]`.
    pub brake: f32,
    /// Boost charge.
    pub boost: f32,
    /// Boost capacity.
    pub max_boost: f32,
    /// Whether boost propulsion fired on the last tick.
    pub boosting: bool,
    /// Handbrake flag.
    pub handbrake: bool,
    /// Drift flag.
    pub drift: bool,
    /// Reverse flag.
    pub reverse: bool,
    /// Current authority.
    pub authority: Authority,
    /// Indicator state.
    pub blinkers: BlinkerState,
    /// Smoothed steering-wheel visual angle, degrees.
    pub steering_wheel_angle: f32,
}

impl fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {:.1} km/h | throttle {:.2} steer {:.2} brake {:.2} | boost {:.1}/{:.1}{}",
            self.authority,
            self.speed_kmh,
            self.throttle,
            self.steer,
            self.brake,
            self.boost,
            self.max_boost,
            if self.boosting { " (boosting)" } else { "" },
        )?;
        let flags = [
            (self.handbrake, "handbrake"),
            (self.drift, "drift"),
            (self.reverse, "reverse"),
        ];
        for (on, name) in flags {
            if on {
                write!(f, " | {name}")?;
            }
        }
        match self.blinkers {
            BlinkerState::Off => Ok(()),
            BlinkerState::Left => write!(f, " | blinker left"),
            BlinkerState::Right => write!(f, " | blinker right"),
        }
    }
}
