//! Physics collaborator contract.

use glam::Vec3;

use crate::types::{Pose, WheelCommand, WheelId};

/// A rigid body with wheel actuators, integrated by an external solver.
///
/// The controller only writes commands and reads observations. It never
/// resolves contacts, suspension or friction.
///
/// Wheel ids passed in are the ones listed in the vehicle's wheel layout;
/// implementations may ignore writes to ids they do not know.
pub trait PhysicsBody {
    /// World-space linear velocity in m/s.
    fn velocity(&self) -> Vec3;

    /// Overwrite the world-space linear velocity.
    ///
    /// Used by the scripted countdown profile and by resets.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Overwrite the world-space angular velocity (rad/s).
    fn set_angular_velocity(&mut self, angular_velocity: Vec3);

    /// Apply a world-space force for the current step.
    fn add_force(&mut self, force: Vec3);

    /// Current world pose.
    fn pose(&self) -> Pose;

    /// Teleport the body.
    fn set_pose(&mut self, pose: Pose);

    /// Whether the wheel's actuator is enabled.
    fn wheel_active(&self, _wheel: WheelId) -> bool {
        true
    }

    /// Whether the wheel currently touches the ground.
    fn wheel_grounded(&self, wheel: WheelId) -> bool;

    /// The wheel's current steer angle in degrees.
    fn wheel_steer_angle(&self, wheel: WheelId) -> f32;

    /// Set the drive torque of one wheel.
    fn set_wheel_motor_torque(&mut self, wheel: WheelId, torque: f32);

    /// Set the brake torque of one wheel.
    fn set_wheel_brake_torque(&mut self, wheel: WheelId, torque: f32);

    /// Set the steer angle of one wheel, in degrees.
    fn set_wheel_steer_angle(&mut self, wheel: WheelId, angle: f32);

    /// Velocity expressed in the body frame (`+Z` forward).
    fn body_relative_velocity(&self) -> Vec3 {
        self.pose().rotation.inverse() * self.velocity()
    }

    /// Write all three channels of a [`WheelCommand`] to one wheel.
    fn apply_wheel_command(&mut self, wheel: WheelId, command: WheelCommand) {
        self.set_wheel_motor_torque(wheel, command.motor_torque);
        self.set_wheel_brake_torque(wheel, command.brake_torque);
        self.set_wheel_steer_angle(wheel, command.steer_angle);
    }
}
