//! Headless session runner.
//!
//! Plays the roles of the host scheduler, the countdown collaborator and the
//! input device: one frame step and one fixed tick per simulated frame, the
//! lockout released after the countdown, and constant driver input.

use arcade_errors::VehicleError;
use arcade_interfaces::{FrameId, InputSource, PhysicsBody, Pose};
use arcade_vehicle::{Authority, InputChannels, TelemetrySnapshot, TickContext, VehicleConfig, VehicleController};
use serde::Serialize;
use tracing::{debug, info};

use crate::kinematic::KinematicBody;

/// Fixed step length, seconds.
pub const FIXED_DT: f32 = 0.02;

/// Constant driver input for a whole session.
#[derive(Debug, Clone, Default)]
pub struct FixedInput {
    channels: InputChannels,
    throttle: f32,
    steer: f32,
    brake: f32,
    boost: bool,
    drift: bool,
}

impl FixedInput {
    pub fn new(channels: InputChannels) -> Self {
        Self {
            channels,
            ..Self::default()
        }
    }

    pub fn throttle(mut self, value: f32) -> Self {
        self.throttle = value;
        self
    }

    pub fn steer(mut self, value: f32) -> Self {
        self.steer = value;
        self
    }

    pub fn brake(mut self, value: f32) -> Self {
        self.brake = value;
        self
    }

    pub fn boost(mut self, held: bool) -> Self {
        self.boost = held;
        self
    }

    pub fn drift(mut self, held: bool) -> Self {
        self.drift = held;
        self
    }
}

impl InputSource for FixedInput {
    fn axis(&self, channel: &str) -> f32 {
        if channel == self.channels.throttle {
            self.throttle
        } else if channel == self.channels.steer {
            self.steer
        } else if channel == self.channels.brake {
            self.brake
        } else {
            0.0
        }
    }

    // A constant held button never produces a press edge.
    fn button_down(&self, _channel: &str) -> bool {
        false
    }

    fn button_held(&self, channel: &str) -> bool {
        (self.boost && channel == self.channels.boost)
            || (self.drift && channel == self.channels.drift)
            || (self.brake > 0.0 && channel == self.channels.brake)
    }
}

/// Session shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    /// Total fixed ticks.
    pub ticks: u64,
    /// Ticks spent under scripted authority before the lockout releases.
    pub countdown_ticks: u64,
    /// Engage the handbrake once player authority begins.
    pub handbrake: bool,
    /// Select reverse.
    pub reverse: bool,
}

/// Outcome of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub vehicle: String,
    pub scheme: String,
    pub ticks: u64,
    pub countdown_ticks: u64,
    pub duration_s: f32,
    pub distance_m: f32,
    pub top_speed_kmh: f32,
    pub boost_ticks: u64,
    pub position: [f32; 3],
    pub telemetry: TelemetrySnapshot,
}

/// Run a session from a standing start at the origin.
///
/// # Errors
///
/// Propagates controller errors; with a validated config none are expected.
pub fn run(
    config: VehicleConfig,
    input: &FixedInput,
    options: SessionOptions,
) -> Result<SessionSummary, VehicleError> {
    let mut body = KinematicBody::new(Pose::default(), config.layout().all());
    let mut vehicle = VehicleController::new(config);

    let start = if options.countdown_ticks > 0 {
        Authority::Scripted
    } else {
        Authority::Player
    };
    vehicle.activate(&mut body, start)?;
    vehicle.set_reverse(options.reverse);
    if options.handbrake && start == Authority::Player {
        vehicle.toggle_handbrake(true);
    }

    let mut top_speed_kmh: f32 = 0.0;
    let mut boost_ticks = 0;
    for tick in 0..options.ticks {
        if tick == options.countdown_ticks && vehicle.set_player_authority(true) {
            info!(tick, "countdown finished");
            if options.handbrake {
                vehicle.toggle_handbrake(true);
            }
        }

        let frame = FrameId(tick + 1);
        vehicle.frame_tick(input, FIXED_DT)?;
        let report = vehicle.fixed_tick(&mut body, input, TickContext::new(frame, FIXED_DT))?;
        body.step(FIXED_DT);

        top_speed_kmh = top_speed_kmh.max(report.speed_kmh.abs());
        if report.boosting {
            boost_ticks += 1;
        }
        debug!(
            tick,
            authority = %report.authority,
            speed_kmh = report.speed_kmh,
            motor = report.motor_torque,
            "session tick"
        );
    }

    #[allow(clippy::cast_precision_loss, reason = "tick counts stay far below 2^24")]
    let duration_s = options.ticks as f32 * FIXED_DT;
    let position = body.pose().position;
    Ok(SessionSummary {
        vehicle: vehicle.config().name().to_string(),
        scheme: vehicle.scheme().to_string(),
        ticks: options.ticks,
        countdown_ticks: options.countdown_ticks.min(options.ticks),
        duration_s,
        distance_m: body.distance_m(),
        top_speed_kmh,
        boost_ticks,
        position: position.to_array(),
        telemetry: vehicle.telemetry(),
    })
}
