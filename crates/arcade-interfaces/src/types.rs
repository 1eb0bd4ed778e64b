//! Value types exchanged with collaborators.

use core::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::body::PhysicsBody;

/// Conversion factor from m/s to km/h.
pub const MPS_TO_KMH: f32 = 3.6;

/// Identifier of one wheel actuator on the physics body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WheelId(pub u16);

impl fmt::Display for WheelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wheel#{}", self.0)
    }
}

/// Index of a render frame, supplied by the variable-step scheduler.
///
/// Frame ids only need to differ between frames; they are compared for
/// equality, never subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub u64);

impl FrameId {
    /// The id of the frame after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// World-space position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// World position in metres.
    pub position: Vec3,
    /// World orientation.
    pub rotation: Quat,
}

impl Pose {
    /// Create a pose.
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// World-space forward axis (body `+Z`).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// World-space up axis (body `+Y`).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Actuation for one wheel, recomputed every fixed tick and not retained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelCommand {
    /// Drive torque in N·m.
    pub motor_torque: f32,
    /// Brake torque in N·m, never negative.
    pub brake_torque: f32,
    /// Steer angle in degrees.
    pub steer_angle: f32,
}

/// Body state read back from the physics collaborator once per fixed tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Velocity in the body frame, m/s.
    pub local_velocity: Vec3,
    /// Signed speed along the body's forward axis, km/h.
    pub forward_speed_kmh: f32,
    /// Unsigned speed, km/h.
    pub speed_kmh: f32,
    /// World pose.
    pub pose: Pose,
}

impl Observation {
    /// Read the current state of `body`.
    pub fn capture<B: PhysicsBody + ?Sized>(body: &B) -> Self {
        let local_velocity = body.body_relative_velocity();
        Self {
            local_velocity,
            forward_speed_kmh: local_velocity.z * MPS_TO_KMH,
            speed_kmh: body.velocity().length() * MPS_TO_KMH,
            pose: body.pose(),
        }
    }
}
