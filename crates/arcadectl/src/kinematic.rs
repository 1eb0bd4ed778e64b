//! Kinematic stand-in body for headless sessions.
//!
//! This is not a physics solver. Drive torque pushes the body along its
//! forward axis, brake torque slows it without reversing it, steer angles
//! turn it with a bicycle model, and added forces act on the planar motion
//! only. Every wheel is always active and grounded.

use std::collections::BTreeMap;

use arcade_interfaces::{PhysicsBody, Pose, WheelCommand, WheelId};
use glam::{Quat, Vec3};

/// Body mass, kg.
pub const MASS_KG: f32 = 1200.0;
/// Wheel radius, m.
pub const WHEEL_RADIUS_M: f32 = 0.35;
/// Axle separation, m.
pub const WHEELBASE_M: f32 = 2.6;

/// Ground-plane body driven by wheel commands.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pose: Pose,
    velocity: Vec3,
    angular_velocity: Vec3,
    wheels: BTreeMap<WheelId, WheelCommand>,
    force: Vec3,
    distance_m: f32,
}

impl KinematicBody {
    /// A body at rest at `pose` with the given wheels.
    pub fn new(pose: Pose, wheels: &[WheelId]) -> Self {
        Self {
            pose,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            wheels: wheels.iter().map(|&id| (id, WheelCommand::default())).collect(),
            force: Vec3::ZERO,
            distance_m: 0.0,
        }
    }

    /// Distance covered so far, m.
    pub fn distance_m(&self) -> f32 {
        self.distance_m
    }

    /// Advance by `dt` seconds using the latest wheel commands and the
    /// forces added since the previous step.
    pub fn step(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }

        let forward = self.pose.forward();
        let mut speed = self.velocity.dot(forward);

        let planar_force = Vec3::new(self.force.x, 0.0, self.force.z);
        let drive: f32 = self.wheels.values().map(|c| c.motor_torque).sum::<f32>() / WHEEL_RADIUS_M;
        speed += (drive + planar_force.dot(forward)) / MASS_KG * dt;

        let brake: f32 = self.wheels.values().map(|c| c.brake_torque.abs()).sum::<f32>() / WHEEL_RADIUS_M;
        let slowdown = (brake / MASS_KG * dt).min(speed.abs());
        speed -= slowdown * speed.signum();

        let yaw_rate = speed * self.steer_angle().to_radians().tan() / WHEELBASE_M;
        self.angular_velocity = Vec3::new(0.0, yaw_rate, 0.0);
        self.pose.rotation = (Quat::from_rotation_y(yaw_rate * dt) * self.pose.rotation).normalize();

        self.velocity = self.pose.forward() * speed;
        self.velocity.y = 0.0;
        let travel = self.velocity * dt;
        self.pose.position += travel;
        self.distance_m += travel.length();
        self.force = Vec3::ZERO;
    }

    /// Steer angle of the most deflected wheel, degrees.
    fn steer_angle(&self) -> f32 {
        self.wheels
            .values()
            .map(|c| c.steer_angle)
            .fold(0.0, |widest: f32, angle| if angle.abs() > widest.abs() { angle } else { widest })
    }
}

impl PhysicsBody for KinematicBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    fn wheel_active(&self, wheel: WheelId) -> bool {
        self.wheels.contains_key(&wheel)
    }

    fn wheel_grounded(&self, wheel: WheelId) -> bool {
        self.wheels.contains_key(&wheel)
    }

    fn wheel_steer_angle(&self, wheel: WheelId) -> f32 {
        self.wheels.get(&wheel).map_or(0.0, |c| c.steer_angle)
    }

    fn set_wheel_motor_torque(&mut self, wheel: WheelId, torque: f32) {
        if let Some(command) = self.wheels.get_mut(&wheel) {
            command.motor_torque = torque;
        }
    }

    fn set_wheel_brake_torque(&mut self, wheel: WheelId, torque: f32) {
        if let Some(command) = self.wheels.get_mut(&wheel) {
            command.brake_torque = torque;
        }
    }

    fn set_wheel_steer_angle(&mut self, wheel: WheelId, angle: f32) {
        if let Some(command) = self.wheels.get_mut(&wheel) {
            command.steer_angle = angle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheels() -> Vec<WheelId> {
        (0..4).map(WheelId).collect()
    }

    #[test]
    fn test_drive_torque_accelerates_forward() {
        let mut body = KinematicBody::new(Pose::default(), &wheels());
        body.set_wheel_motor_torque(WheelId(2), 420.0);
        body.step(1.0);
        // 420 / 0.35 = 1200 N on 1200 kg
        assert!((body.velocity().z - 1.0).abs() < 1e-4);
        assert!((body.distance_m() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_brake_never_reverses() {
        let mut body = KinematicBody::new(Pose::default(), &wheels());
        body.set_velocity(Vec3::new(0.0, 0.0, 2.0));
        for id in 0..4 {
            body.set_wheel_brake_torque(WheelId(id), 5000.0);
        }
        body.step(1.0);
        assert_eq!(body.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_steer_turns_right() {
        let mut body = KinematicBody::new(Pose::default(), &wheels());
        body.set_velocity(Vec3::new(0.0, 0.0, 10.0));
        body.set_wheel_steer_angle(WheelId(0), 20.0);
        body.step(0.1);
        assert!(body.velocity().x > 0.0);
        assert!(body.pose().forward().x > 0.0);
    }

    #[test]
    fn test_forces_are_planar_and_consumed() {
        let mut body = KinematicBody::new(Pose::default(), &wheels());
        body.add_force(Vec3::new(0.0, -5000.0, 1200.0));
        body.step(1.0);
        assert!((body.velocity().z - 1.0).abs() < 1e-4);
        assert_eq!(body.velocity().y, 0.0);
        body.step(1.0);
        assert!((body.velocity().z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_unknown_wheels_are_ignored() {
        let mut body = KinematicBody::new(Pose::default(), &wheels());
        body.set_wheel_motor_torque(WheelId(9), 1000.0);
        assert!(!body.wheel_grounded(WheelId(9)));
        body.step(1.0);
        assert_eq!(body.velocity(), Vec3::ZERO);
    }
}
