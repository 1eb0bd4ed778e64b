//! The vehicle controller.
//!
//! One [`VehicleController`] owns all mutable vehicle state. The host calls
//! [`VehicleController::frame_tick`] once per render frame and
//! [`VehicleController::fixed_tick`] once per physics step, on the same
//! thread. Both refuse to run before [`VehicleController::activate`].

use arcade_errors::{ConfigError, ValidationError, VehicleError};
use arcade_filters::{BlendState, FilterState, SlewRateState, blend_filter, slew_rate_filter};
use arcade_interfaces::{FrameId, InputSource, MPS_TO_KMH, Observation, PhysicsBody, Pose};
use glam::Vec3;
use serde::Serialize;
use tracing::{info, trace, warn};

use crate::blinkers::{BlinkerState, Blinkers};
use crate::config::{Parameter, ParameterKind, VehicleConfig};
use crate::ground::GroundContactCache;
use crate::input::{DriverIntent, clamp01, clamp_unit};
use crate::lockout::{Authority, Lockout};
use crate::pipeline::{self, ActuationPlan, SteerCommand};
use crate::resources::ResourceManager;
use crate::scheme::ControlScheme;
use crate::telemetry::TelemetrySnapshot;

/// Capability shared by every control scheme.
pub trait Vehicle {
    /// Working speed in km/h.
    fn speed(&self) -> f32;

    /// Whether the handbrake is engaged.
    fn handbrake(&self) -> bool;
}

/// Scheduler-supplied timing for one fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Render frame the tick belongs to.
    pub frame: FrameId,
    /// Fixed step length in seconds.
    pub dt: f32,
}

impl TickContext {
    /// Create a tick context.
    pub fn new(frame: FrameId, dt: f32) -> Self {
        Self { frame, dt }
    }
}

/// What one fixed tick resolved and wrote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickReport {
    /// Authority the tick ran under.
    pub authority: Authority,
    /// Working speed, km/h.
    pub speed_kmh: f32,
    /// Scalars after resolution.
    pub intent: DriverIntent,
    /// Motor torque written to each drive wheel.
    pub motor_torque: f32,
    /// Brake torque written to each braked wheel.
    pub brake_torque: f32,
    /// Steer angle target, degrees.
    pub steer_angle: f32,
    /// Velocity imposed by the countdown profile, if any.
    pub scripted_velocity: Option<Vec3>,
    /// Whether boost propulsion fired.
    pub boosting: bool,
    /// Ground contact, when it was consulted.
    pub grounded: Option<bool>,
}

/// Arcade vehicle dynamics controller.
#[derive(Debug, Clone)]
pub struct VehicleController {
    config: VehicleConfig,
    activated: bool,
    spawn: Option<Pose>,
    lockout: Lockout,
    resources: ResourceManager,
    ground: GroundContactCache,
    blinkers: Blinkers,
    intent: DriverIntent,
    throttle_ramp: SlewRateState,
    steering_wheel: BlendState,
    speed_kmh: f32,
    handbrake: bool,
    boosting: bool,
    reverse: bool,
}

impl VehicleController {
    /// Build an inactive controller.
    pub fn new(config: VehicleConfig) -> Self {
        let resources = ResourceManager::new(
            config.max_boost(),
            config.boost_regen(),
            config.allow_boost(),
            config.allow_drift(),
        );
        let throttle_ramp = SlewRateState::new(config.throttle_rate());
        let steering_wheel = BlendState::new(config.steer_speed());
        Self {
            config,
            activated: false,
            spawn: None,
            lockout: Lockout::default(),
            resources,
            ground: GroundContactCache::new(),
            blinkers: Blinkers::default(),
            intent: DriverIntent::default(),
            throttle_ramp,
            steering_wheel,
            speed_kmh: 0.0,
            handbrake: false,
            boosting: false,
            reverse: false,
        }
    }

    /// Capture the spawn pose, fill the boost tank, prime the wheels with
    /// nominal torque and enter `start`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the body's pose is not
    /// finite; the controller stays inactive.
    pub fn activate<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        start: Authority,
    ) -> Result<(), VehicleError> {
        let spawn = body.pose();
        if !(spawn.position.is_finite() && spawn.rotation.is_finite()) {
            let err = ConfigError::invalid_value("spawn_pose", f32::NAN, "body pose must be finite");
            warn!(vehicle = %self.config.name(), error = %err, "activation refused");
            return Err(err.into());
        }

        self.spawn = Some(spawn);
        self.resources.refill();
        self.lockout.restart(start);
        self.ground.invalidate();
        pipeline::prime(body, self.config.layout());
        self.activated = true;

        info!(
            vehicle = %self.config.name(),
            scheme = %self.config.scheme(),
            authority = %start,
            "controller activated"
        );
        Ok(())
    }

    /// Frame step: boost regen, and for frame-rate schemes the throttle,
    /// brake and steer reads. Indicator and handbrake toggles are edge
    /// triggered, so they are read here and only here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotActivated`] before activation.
    pub fn frame_tick<I: InputSource + ?Sized>(
        &mut self,
        input: &I,
        dt: f32,
    ) -> Result<(), VehicleError> {
        self.require_active()?;

        let authority = self.lockout.authority();
        self.resources.tick(dt, authority);
        if authority != Authority::Player {
            return Ok(());
        }

        let channels = self.config.channels();
        self.blinkers.update(
            input.button_down(&channels.blinker_left),
            input.button_down(&channels.blinker_right),
            input.button_down(&channels.blinker_clear),
        );
        if input.button_down(&channels.handbrake) {
            self.handbrake = !self.handbrake;
        }

        let sign = self.reverse_sign();
        match self.config.scheme() {
            ControlScheme::Arcade => {}
            ControlScheme::Progressive => {
                let pressed = input.axis(&channels.throttle) > 0.0;
                let target = if pressed { 1.0 } else { 0.0 };
                let throttle = slew_rate_filter(&mut self.throttle_ramp, target, dt);
                let brake = if input.button_held(&channels.brake) { 1.0 } else { 0.0 };
                let steer = self.steer_input(input.axis(&channels.steer));
                self.intent = DriverIntent::new(throttle * sign, steer, brake);
            }
            ControlScheme::Unclamped => {
                self.intent = DriverIntent::new(
                    input.axis(&channels.throttle) * sign,
                    self.steer_input(input.axis(&channels.steer)),
                    input.axis(&channels.brake),
                );
            }
        }
        Ok(())
    }

    /// Fixed step: resolve intent and write wheel commands.
    ///
    /// Under [`Authority::Scripted`] no input is read and no wheel is
    /// written; the body's velocity is overwritten with the countdown
    /// profile instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotActivated`] before activation. Nothing is
    /// written to `body` in that case.
    pub fn fixed_tick<B, I>(
        &mut self,
        body: &mut B,
        input: &I,
        ctx: TickContext,
    ) -> Result<TickReport, VehicleError>
    where
        B: PhysicsBody + ?Sized,
        I: InputSource + ?Sized,
    {
        self.require_active()?;

        let observation = Observation::capture(&*body);
        let scheme = self.config.scheme();
        self.speed_kmh = scheme.speed_kmh(&observation);

        if self.lockout.is_locked() {
            let velocity = self.scripted_velocity(body.velocity(), &observation.pose);
            body.set_velocity(velocity);
            self.intent.neutralize_chassis();
            self.boosting = false;
            self.update_steering_wheel();
            trace!(frame = ctx.frame.0, ?velocity, "scripted tick");
            return Ok(TickReport {
                authority: Authority::Scripted,
                speed_kmh: self.speed_kmh,
                intent: self.intent,
                motor_torque: 0.0,
                brake_torque: 0.0,
                steer_angle: 0.0,
                scripted_velocity: Some(velocity),
                boosting: false,
                grounded: None,
            });
        }

        let channels = self.config.channels();
        if !scheme.reads_input_on_frame() {
            let throttle = input.axis(&channels.throttle) * self.reverse_sign();
            let brake = clamp01(input.axis(&channels.brake));
            let steer = self.steer_input(input.axis(&channels.steer));
            self.intent = DriverIntent::new(throttle, steer, brake);
        }
        let boost_held = input.button_held(&channels.boost);
        self.resources.set_drift(input.button_held(&channels.drift));

        let grounded = self
            .ground
            .is_grounded(&*body, self.config.layout().all(), ctx.frame);
        let downforce = self.config.downforce();
        if grounded && downforce > 0.0 {
            body.add_force(-observation.pose.up() * self.speed_kmh.abs() * downforce);
        }

        self.boosting = boost_held && self.resources.consume(ctx.dt);
        if self.boosting {
            body.add_force(observation.pose.forward() * self.config.boost_force());
        }

        let plan = self.plan();
        pipeline::emit(body, self.config.layout(), &plan);
        self.update_steering_wheel();

        trace!(
            frame = ctx.frame.0,
            speed_kmh = self.speed_kmh,
            motor = plan.motor_torque,
            brake = plan.brake_torque,
            "player tick"
        );
        Ok(TickReport {
            authority: Authority::Player,
            speed_kmh: self.speed_kmh,
            intent: self.intent,
            motor_torque: plan.motor_torque,
            brake_torque: plan.brake_torque,
            steer_angle: plan.steer.target(),
            scripted_velocity: None,
            boosting: self.boosting,
            grounded: Some(grounded),
        })
    }

    /// Countdown hand-off.
    ///
    /// `true` releases the lockout; the next input read takes over and no
    /// smoothing state is reset. `false` cannot revoke player authority
    /// in-session and is ignored. Returns whether the authority changed.
    pub fn set_player_authority(&mut self, player: bool) -> bool {
        if !player {
            if !self.lockout.is_locked() {
                warn!(
                    vehicle = %self.config.name(),
                    "player authority cannot be revoked in-session; use restart"
                );
            }
            return false;
        }

        let released = self.lockout.release();
        if released {
            info!(vehicle = %self.config.name(), "lockout released, player has control");
        }
        released
    }

    /// Teleport to the spawn pose and stop the body.
    ///
    /// Configuration, authority and controller state are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotActivated`] if no spawn pose was captured.
    pub fn reset_to_spawn<B: PhysicsBody + ?Sized>(&mut self, body: &mut B) -> Result<(), VehicleError> {
        let spawn = self.require_active()?;
        body.set_pose(spawn);
        body.set_velocity(Vec3::ZERO);
        body.set_angular_velocity(Vec3::ZERO);
        self.ground.invalidate();
        info!(vehicle = %self.config.name(), position = ?spawn.position, "reset to spawn");
        Ok(())
    }

    /// Full reset: spawn pose, zero velocities, full boost, cleared
    /// smoothing and input state, nominal torque, and `authority`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotActivated`] before activation.
    pub fn restart<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        authority: Authority,
    ) -> Result<(), VehicleError> {
        self.reset_to_spawn(body)?;

        self.resources.refill();
        self.resources.set_drift(false);
        self.intent = DriverIntent::default();
        self.throttle_ramp.reset();
        self.steering_wheel.reset();
        self.blinkers.clear();
        self.speed_kmh = 0.0;
        self.handbrake = false;
        self.boosting = false;
        self.reverse = false;
        self.lockout.restart(authority);
        pipeline::prime(body, self.config.layout());

        info!(vehicle = %self.config.name(), %authority, "controller restarted");
        Ok(())
    }

    /// Retune one scalar, clamped into its bounds. Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] for NaN or infinite values;
    /// the field keeps its previous value.
    pub fn set_parameter(&mut self, parameter: Parameter) -> Result<f32, ValidationError> {
        let value = self.config.apply(parameter).inspect_err(|err| {
            warn!(vehicle = %self.config.name(), error = %err, "parameter write refused");
        })?;
        match parameter.kind() {
            ParameterKind::MaxBoost => self.resources.set_max_boost(value),
            ParameterKind::BoostRegen => self.resources.set_regen_rate(value),
            ParameterKind::SteerSpeed => self.steering_wheel.set_blend(value),
            _ => {}
        }
        Ok(value)
    }

    /// Set the handbrake flag.
    pub fn toggle_handbrake(&mut self, engaged: bool) {
        self.handbrake = engaged;
    }

    /// Select reverse: throttle input is sign-flipped while set.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Enable or disable boost regen and use.
    pub fn set_allow_boost(&mut self, allow: bool) {
        self.resources.set_allow_boost(allow);
    }

    /// Enable or disable drift.
    pub fn set_allow_drift(&mut self, allow: bool) {
        self.resources.set_allow_drift(allow);
    }

    /// Set the boost charge, clamped to `[0, max_boost]`.
    pub fn set_boost(&mut self, boost: f32) {
        self.resources.set_boost(boost);
    }

    /// Current configuration.
    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    /// Active control scheme.
    pub fn scheme(&self) -> ControlScheme {
        self.config.scheme()
    }

    /// Whether [`VehicleController::activate`] has succeeded.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Current authority.
    pub fn authority(&self) -> Authority {
        self.lockout.authority()
    }

    /// Spawn pose captured at activation.
    pub fn spawn_pose(&self) -> Option<Pose> {
        self.spawn
    }

    /// Working speed of the last fixed tick, km/h.
    pub fn speed_kmh(&self) -> f32 {
        self.speed_kmh
    }

    /// Resolved scalars.
    pub fn intent(&self) -> DriverIntent {
        self.intent
    }

    /// Boost tank and drift gate.
    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    /// Boost charge.
    pub fn boost(&self) -> f32 {
        self.resources.boost()
    }

    /// Whether boost propulsion fired on the last tick.
    pub fn boosting(&self) -> bool {
        self.boosting
    }

    /// Whether drift is engaged.
    pub fn drift(&self) -> bool {
        self.resources.drift()
    }

    /// Whether reverse is selected.
    pub fn reverse(&self) -> bool {
        self.reverse
    }

    /// Handbrake state; the unclamped scheme reports "brake pressed".
    pub fn handbrake_engaged(&self) -> bool {
        if self.config.scheme().handbrake_follows_brake() {
            self.intent.brake() > 0.0
        } else {
            self.handbrake
        }
    }

    /// Indicator state.
    pub fn blinkers(&self) -> BlinkerState {
        self.blinkers.state()
    }

    /// Smoothed steering-wheel visual angle, degrees.
    pub fn steering_wheel_angle(&self) -> f32 {
        self.steering_wheel.output()
    }

    /// Snapshot for HUD and logging collaborators.
    pub fn telemetry(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            speed_kmh: self.speed_kmh,
            throttle: self.intent.throttle(),
            steer: self.intent.steer(),
            brake: self.intent.brake(),
            boost: self.resources.boost(),
            max_boost: self.resources.max_boost(),
            boosting: self.boosting,
            handbrake: self.handbrake_engaged(),
            drift: self.resources.drift(),
            reverse: self.reverse,
            authority: self.lockout.authority(),
            blinkers: self.blinkers.state(),
            steering_wheel_angle: self.steering_wheel.output(),
        }
    }

    fn require_active(&self) -> Result<Pose, VehicleError> {
        match self.spawn {
            Some(spawn) if self.activated => Ok(spawn),
            _ => {
                warn!(vehicle = %self.config.name(), "controller used before activation");
                Err(ConfigError::NotActivated.into())
            }
        }
    }

    fn reverse_sign(&self) -> f32 {
        if self.reverse { -1.0 } else { 1.0 }
    }

    fn scripted_velocity(&self, current: Vec3, pose: &Pose) -> Vec3 {
        let forward = pose.forward() * (self.config.scripted_speed_kmh() / MPS_TO_KMH);
        Vec3::new(forward.x, current.y, forward.z)
    }

    fn steer_input(&self, raw: f32) -> f32 {
        if self.config.scheme().shapes_steer() {
            self.config.steer_curve().evaluate(clamp_unit(raw))
        } else {
            raw
        }
    }

    fn steer_angle(&self) -> f32 {
        self.intent.steer() * self.config.max_steer_angle()
    }

    fn update_steering_wheel(&mut self) {
        let target = self.steer_angle() * self.config.steering_wheel_multiplier();
        blend_filter(&mut self.steering_wheel, target);
    }

    fn plan(&self) -> ActuationPlan {
        let config = &self.config;
        let scheme = config.scheme();
        let throttle = match scheme {
            ControlScheme::Progressive => self.intent.throttle() * config.throttle_multiplier(),
            ControlScheme::Arcade | ControlScheme::Unclamped => self.intent.throttle(),
        };
        let angle = self.steer_angle();
        let steer = if scheme.blends_wheel_steer() {
            SteerCommand::Blend {
                target: angle,
                factor: config.steer_speed(),
            }
        } else {
            SteerCommand::Direct(angle)
        };

        ActuationPlan {
            motor_torque: pipeline::motor_torque(
                throttle,
                config.torque_curve().evaluate(self.speed_kmh),
                config.diff_gearing(),
                config.layout().drive().len(),
            ),
            brake_torque: pipeline::brake_torque(self.intent.brake(), config.brake_force()),
            brake_target: scheme.brake_target(),
            steer,
        }
    }
}

impl Vehicle for VehicleController {
    fn speed(&self) -> f32 {
        self.speed_kmh
    }

    fn handbrake(&self) -> bool {
        self.handbrake_engaged()
    }
}
