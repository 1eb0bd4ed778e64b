//! Actuation pipeline: scalar intent to per-wheel commands.
//!
//! The arithmetic is kept in free functions so it can be checked without a
//! controller; [`emit`] performs the writes for one fixed tick.

use arcade_filters::lerp;
use arcade_interfaces::PhysicsBody;

use crate::config::WheelLayout;
use crate::scheme::BrakeTarget;

/// Nominal drive torque written at activation.
///
/// Some wheel solvers treat exactly zero motor torque as "wheel asleep";
/// a tiny positive value keeps them integrating.
pub const NOMINAL_TORQUE: f32 = 0.0001;

/// Motor torque per drive wheel.
///
/// `throttle × torque_at_speed × diff_gearing / drive_wheels`, with the
/// torque split statically and evenly. Zero drive wheels yield zero.
#[inline]
pub fn motor_torque(throttle: f32, torque_at_speed: f32, diff_gearing: f32, drive_wheels: usize) -> f32 {
    if drive_wheels == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss, reason = "wheel counts are tiny")]
    let share = drive_wheels as f32;
    throttle * torque_at_speed * diff_gearing / share
}

/// Brake torque per braked wheel: `|brake| × brake_force`.
#[inline]
pub fn brake_torque(brake: f32, brake_force: f32) -> f32 {
    brake.abs() * brake_force
}

/// How steer wheels reach their target angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SteerCommand {
    /// Write the angle as is.
    Direct(f32),
    /// Blend each wheel's current angle toward `target` by `factor`.
    Blend {
        /// Target angle, degrees.
        target: f32,
        /// Per-tick blend factor.
        factor: f32,
    },
}

impl SteerCommand {
    /// The angle the wheels are heading for.
    pub fn target(&self) -> f32 {
        match *self {
            Self::Direct(angle) => angle,
            Self::Blend { target, .. } => target,
        }
    }
}

/// Everything written to the wheels in one fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuationPlan {
    /// Motor torque per drive wheel.
    pub motor_torque: f32,
    /// Brake torque per braked wheel.
    pub brake_torque: f32,
    /// Which wheels are braked.
    pub brake_target: BrakeTarget,
    /// Steer wheel command.
    pub steer: SteerCommand,
}

/// Write `plan` to `body`.
///
/// Empty wheel groups are skipped. Every wheel in the brake target gets a
/// write each tick, zero included, so a released brake clears the wheels.
pub fn emit<B: PhysicsBody + ?Sized>(body: &mut B, layout: &WheelLayout, plan: &ActuationPlan) {
    for &wheel in layout.drive() {
        body.set_wheel_motor_torque(wheel, plan.motor_torque);
    }

    match plan.steer {
        SteerCommand::Direct(angle) => {
            for &wheel in layout.steer() {
                body.set_wheel_steer_angle(wheel, angle);
            }
        }
        SteerCommand::Blend { target, factor } => {
            for &wheel in layout.steer() {
                let current = body.wheel_steer_angle(wheel);
                body.set_wheel_steer_angle(wheel, lerp(current, target, factor));
            }
        }
    }

    match plan.brake_target {
        BrakeTarget::AllWheels => {
            for &wheel in layout.all() {
                body.set_wheel_brake_torque(wheel, plan.brake_torque);
            }
        }
        BrakeTarget::DriveWheels => {
            for &wheel in layout.drive() {
                body.set_wheel_brake_torque(wheel, plan.brake_torque);
            }
        }
    }
}

/// Write the nominal activation torque to every wheel.
pub fn prime<B: PhysicsBody + ?Sized>(body: &mut B, layout: &WheelLayout) {
    for &wheel in layout.all() {
        body.set_wheel_motor_torque(wheel, NOMINAL_TORQUE);
    }
}
