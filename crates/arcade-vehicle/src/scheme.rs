//! Input-resolution strategies sharing one actuation pipeline.
//!
//! | Scheme        | Input read on | Throttle            | Brake          | Wheel steer        | Speed           |
//! |---------------|---------------|---------------------|----------------|--------------------|-----------------|
//! | `Arcade`      | fixed tick    | axis, reverse sign  | axis, `[0, 1]` | direct             | signed forward  |
//! | `Progressive` | frame         | ramped while held   | button, 0 or 1 | blended per tick   | magnitude       |
//! | `Unclamped`   | frame         | raw axis            | axis, `[0, 1]` | direct, no curve   | magnitude       |

use core::fmt;
use core::str::FromStr;

use arcade_errors::ValidationError;
use arcade_interfaces::Observation;
use serde::{Deserialize, Serialize};

/// Which wheels receive brake torque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrakeTarget {
    /// Every wheel in the layout.
    AllWheels,
    /// Drive wheels only, and only while the brake is pressed.
    DriveWheels,
}

/// Control scheme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlScheme {
    /// Countdown-gated arcade handling.
    #[default]
    Arcade,
    /// Throttle ramps up while held; steer wheels are smoothed.
    Progressive,
    /// Raw axes without steer shaping; brakes on the drive axle.
    Unclamped,
}

impl ControlScheme {
    /// All variants, in declaration order.
    pub const ALL: [ControlScheme; 3] = [Self::Arcade, Self::Progressive, Self::Unclamped];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Arcade => "arcade",
            Self::Progressive => "progressive",
            Self::Unclamped => "unclamped",
        }
    }

    /// Whether throttle, brake and steer are read on the frame step rather
    /// than the fixed tick.
    pub fn reads_input_on_frame(self) -> bool {
        !matches!(self, Self::Arcade)
    }

    /// Working speed in km/h for this scheme.
    pub fn speed_kmh(self, observation: &Observation) -> f32 {
        match self {
            Self::Arcade => observation.forward_speed_kmh,
            Self::Progressive | Self::Unclamped => observation.speed_kmh,
        }
    }

    /// Which wheels receive brake torque.
    pub fn brake_target(self) -> BrakeTarget {
        match self {
            Self::Unclamped => BrakeTarget::DriveWheels,
            Self::Arcade | Self::Progressive => BrakeTarget::AllWheels,
        }
    }

    /// Whether steer wheels blend toward their target instead of snapping.
    pub fn blends_wheel_steer(self) -> bool {
        matches!(self, Self::Progressive)
    }

    /// Whether the steer axis is shaped through the steer-input curve.
    pub fn shapes_steer(self) -> bool {
        !matches!(self, Self::Unclamped)
    }

    /// Whether the handbrake flag is derived from the brake scalar.
    pub fn handbrake_follows_brake(self) -> bool {
        matches!(self, Self::Unclamped)
    }
}

impl fmt::Display for ControlScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ControlScheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_enum("scheme", s, "arcade, progressive, unclamped"))
    }
}
