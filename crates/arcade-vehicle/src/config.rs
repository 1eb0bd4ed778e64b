//! Vehicle profiles and validated configuration.
//!
//! A [`VehicleProfile`] is the on-disk form: every field is optional and
//! defaults to the stock arcade car. [`VehicleProfile::validate`] is the only
//! way to obtain a [`VehicleConfig`], so a controller never runs on an
//! unchecked profile.
//!
//! Runtime tuning goes through [`Parameter`]: each write is clamped into the
//! bounds of its [`ParameterKind`]. Profile validation rejects the same
//! bounds instead of clamping.

use std::collections::BTreeSet;
use std::path::Path;

use arcade_curves::{CurveError, Keyframe, ResponseCurve};
use arcade_errors::{ConfigError, ValidationError};
use arcade_interfaces::WheelId;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::input::InputChannels;
use crate::scheme::ControlScheme;

/// Tunable scalar with clamped writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// Differential gear ratio.
    DiffGearing,
    /// Brake torque at full brake, N·m.
    BrakeForce,
    /// Steer wheel angle at full lock, degrees.
    MaxSteerAngle,
    /// Per-tick blend factor of the steering filters.
    SteerSpeed,
    /// Drift strength.
    DriftIntensity,
    /// Downforce coefficient.
    Downforce,
    /// Boost regen per second.
    BoostRegen,
    /// Boost capacity.
    MaxBoost,
    /// Boost propulsion force, N.
    BoostForce,
}

impl ParameterKind {
    /// All kinds.
    pub const ALL: [ParameterKind; 9] = [
        Self::DiffGearing,
        Self::BrakeForce,
        Self::MaxSteerAngle,
        Self::SteerSpeed,
        Self::DriftIntensity,
        Self::Downforce,
        Self::BoostRegen,
        Self::MaxBoost,
        Self::BoostForce,
    ];

    /// Profile field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::DiffGearing => "diff_gearing",
            Self::BrakeForce => "brake_force",
            Self::MaxSteerAngle => "max_steer_angle",
            Self::SteerSpeed => "steer_speed",
            Self::DriftIntensity => "drift_intensity",
            Self::Downforce => "downforce",
            Self::BoostRegen => "boost_regen",
            Self::MaxBoost => "max_boost",
            Self::BoostForce => "boost_force",
        }
    }

    /// Inclusive `(min, max)` bounds.
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Self::DiffGearing => (2.0, 16.0),
            Self::MaxSteerAngle => (0.0, 50.0),
            Self::SteerSpeed => (0.001, 1.0),
            Self::DriftIntensity => (0.0, 2.0),
            Self::Downforce => (0.0, 5.0),
            Self::BoostRegen => (0.0, 1.0),
            Self::BrakeForce | Self::MaxBoost | Self::BoostForce => (0.0, f32::INFINITY),
        }
    }

    /// Clamp a finite value into bounds.
    pub fn clamp(self, value: f32) -> f32 {
        let (min, max) = self.bounds();
        value.clamp(min, max)
    }

    /// Reject non-finite or out-of-bounds values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the field.
    pub fn check(self, value: f32) -> Result<f32, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::non_finite(self.name()));
        }
        let (min, max) = self.bounds();
        if !(value >= min && value <= max) {
            return Err(ValidationError::out_of_range(self.name(), value, min, max));
        }
        Ok(value)
    }
}

/// A runtime tuning write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parameter {
    /// See [`ParameterKind::DiffGearing`].
    DiffGearing(f32),
    /// See [`ParameterKind::BrakeForce`].
    BrakeForce(f32),
    /// See [`ParameterKind::MaxSteerAngle`].
    MaxSteerAngle(f32),
    /// See [`ParameterKind::SteerSpeed`].
    SteerSpeed(f32),
    /// See [`ParameterKind::DriftIntensity`].
    DriftIntensity(f32),
    /// See [`ParameterKind::Downforce`].
    Downforce(f32),
    /// See [`ParameterKind::BoostRegen`].
    BoostRegen(f32),
    /// See [`ParameterKind::MaxBoost`].
    MaxBoost(f32),
    /// See [`ParameterKind::BoostForce`].
    BoostForce(f32),
}

impl Parameter {
    /// Build a write for `kind`.
    pub fn new(kind: ParameterKind, value: f32) -> Self {
        match kind {
            ParameterKind::DiffGearing => Self::DiffGearing(value),
            ParameterKind::BrakeForce => Self::BrakeForce(value),
            ParameterKind::MaxSteerAngle => Self::MaxSteerAngle(value),
            ParameterKind::SteerSpeed => Self::SteerSpeed(value),
            ParameterKind::DriftIntensity => Self::DriftIntensity(value),
            ParameterKind::Downforce => Self::Downforce(value),
            ParameterKind::BoostRegen => Self::BoostRegen(value),
            ParameterKind::MaxBoost => Self::MaxBoost(value),
            ParameterKind::BoostForce => Self::BoostForce(value),
        }
    }

    /// Which field this writes.
    pub fn kind(self) -> ParameterKind {
        match self {
            Self::DiffGearing(_) => ParameterKind::DiffGearing,
            Self::BrakeForce(_) => ParameterKind::BrakeForce,
            Self::MaxSteerAngle(_) => ParameterKind::MaxSteerAngle,
            Self::SteerSpeed(_) => ParameterKind::SteerSpeed,
            Self::DriftIntensity(_) => ParameterKind::DriftIntensity,
            Self::Downforce(_) => ParameterKind::Downforce,
            Self::BoostRegen(_) => ParameterKind::BoostRegen,
            Self::MaxBoost(_) => ParameterKind::MaxBoost,
            Self::BoostForce(_) => ParameterKind::BoostForce,
        }
    }

    /// The requested value, before clamping.
    pub fn value(self) -> f32 {
        match self {
            Self::DiffGearing(v)
            | Self::BrakeForce(v)
            | Self::MaxSteerAngle(v)
            | Self::SteerSpeed(v)
            | Self::DriftIntensity(v)
            | Self::Downforce(v)
            | Self::BoostRegen(v)
            | Self::MaxBoost(v)
            | Self::BoostForce(v) => v,
        }
    }
}

/// Wheel ids per role, as written in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelLayoutProfile {
    /// Wheels receiving motor torque.
    pub drive: Vec<WheelId>,
    /// Wheels receiving steer angles.
    pub steer: Vec<WheelId>,
    /// Every wheel on the body.
    pub all: Vec<WheelId>,
}

impl Default for WheelLayoutProfile {
    /// Four wheels, front-steer, rear-drive.
    fn default() -> Self {
        Self {
            drive: vec![WheelId(2), WheelId(3)],
            steer: vec![WheelId(0), WheelId(1)],
            all: vec![WheelId(0), WheelId(1), WheelId(2), WheelId(3)],
        }
    }
}

/// Validated wheel grouping.
///
/// `all` is non-empty and duplicate-free; `drive` and `steer` are
/// duplicate-free subsets of it and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelLayout {
    drive: Vec<WheelId>,
    steer: Vec<WheelId>,
    all: Vec<WheelId>,
}

impl WheelLayout {
    fn from_profile(profile: &WheelLayoutProfile) -> Result<Self, ConfigError> {
        if profile.all.is_empty() {
            return Err(ConfigError::missing_wheels("all"));
        }
        let all = unique(&profile.all)?;
        for (role, group) in [("drive", &profile.drive), ("steer", &profile.steer)] {
            unique(group)?;
            if let Some(stray) = group.iter().find(|id| !all.contains(id)) {
                return Err(ConfigError::unknown_wheel(role, stray.0));
            }
        }
        Ok(Self {
            drive: profile.drive.clone(),
            steer: profile.steer.clone(),
            all: profile.all.clone(),
        })
    }

    /// Wheels receiving motor torque.
    pub fn drive(&self) -> &[WheelId] {
        &self.drive
    }

    /// Wheels receiving steer angles.
    pub fn steer(&self) -> &[WheelId] {
        &self.steer
    }

    /// Every wheel.
    pub fn all(&self) -> &[WheelId] {
        &self.all
    }
}

fn unique(ids: &[WheelId]) -> Result<BTreeSet<WheelId>, ConfigError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(*id) {
            return Err(ConfigError::DuplicateWheel(id.0));
        }
    }
    Ok(seen)
}

/// On-disk file format of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// YAML (`.yaml`, `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl ProfileFormat {
    /// Guess the format from a file extension. Unknown extensions read as YAML,
    /// which also accepts JSON documents.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Serializable vehicle description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VehicleProfile {
    /// Display name.
    pub name: String,
    /// Input-resolution strategy.
    pub scheme: ControlScheme,
    /// Wheel grouping.
    pub wheels: WheelLayoutProfile,
    /// Input channel names.
    pub channels: InputChannels,
    /// Differential gear ratio, `[2, 16]`.
    pub diff_gearing: f32,
    /// Brake torque at full brake, N·m.
    pub brake_force: f32,
    /// Steer angle at full lock, degrees, `[0, 50]`.
    pub max_steer_angle: f32,
    /// Per-tick steering blend factor, `[0.001, 1]`.
    pub steer_speed: f32,
    /// Steering-wheel visual angle per degree of wheel steer.
    pub steering_wheel_multiplier: f32,
    /// Whether boost may regenerate and be burned.
    pub allow_boost: bool,
    /// Boost capacity.
    pub max_boost: f32,
    /// Boost regen per second, `[0, 1]`.
    pub boost_regen: f32,
    /// Boost propulsion force, N.
    pub boost_force: f32,
    /// Whether drift may be engaged.
    pub allow_drift: bool,
    /// Drift strength, `[0, 2]`.
    pub drift_intensity: f32,
    /// Downforce coefficient, `[0, 5]`.
    pub downforce: f32,
    /// Forward speed imposed during the countdown, km/h.
    pub scripted_speed_kmh: f32,
    /// Progressive throttle rise per second.
    pub throttle_rate: f32,
    /// Progressive torque multiplier.
    pub throttle_multiplier: f32,
    /// Motor torque by speed (km/h) keyframes.
    pub torque_curve: Option<Vec<Keyframe>>,
    /// Deceleration torque by speed (km/h) keyframes.
    pub deceleration_curve: Option<Vec<Keyframe>>,
    /// Steer axis shaping keyframes over `[-1, 1]`.
    pub steer_curve: Option<Vec<Keyframe>>,
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self {
            name: "arcade-car".into(),
            scheme: ControlScheme::Arcade,
            wheels: WheelLayoutProfile::default(),
            channels: InputChannels::default(),
            diff_gearing: 4.0,
            brake_force: 1500.0,
            max_steer_angle: 30.0,
            steer_speed: 0.2,
            steering_wheel_multiplier: -2.0,
            allow_boost: true,
            max_boost: 10.0,
            boost_regen: 0.2,
            boost_force: 5000.0,
            allow_drift: true,
            drift_intensity: 1.0,
            downforce: 1.0,
            scripted_speed_kmh: 30.0,
            throttle_rate: 0.5,
            throttle_multiplier: 1.0,
            torque_curve: Some(vec![
                Keyframe::new(0.0, 200.0),
                Keyframe::new(50.0, 300.0),
                Keyframe::new(200.0, 0.0),
            ]),
            deceleration_curve: Some(vec![Keyframe::new(0.0, 400.0), Keyframe::new(200.0, 600.0)]),
            steer_curve: Some(vec![Keyframe::new(-1.0, -1.0), Keyframe::new(1.0, 1.0)]),
        }
    }
}

impl VehicleProfile {
    /// Parse a YAML profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed input.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse a JSON profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed input.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse a profile in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed input.
    pub fn parse(source: &str, format: ProfileFormat) -> Result<Self, ConfigError> {
        match format {
            ProfileFormat::Yaml => Self::from_yaml_str(source),
            ProfileFormat::Json => Self::from_json_str(source),
        }
    }

    /// Check every field and freeze the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty or inconsistent wheel layout, a
    /// missing or malformed curve, or a scalar that is non-finite or out of
    /// bounds.
    pub fn validate(&self) -> Result<VehicleConfig, ConfigError> {
        self.build().inspect_err(|err| {
            warn!(profile = %self.name, error = %err, "vehicle profile rejected");
        })
    }

    fn build(&self) -> Result<VehicleConfig, ConfigError> {
        let layout = WheelLayout::from_profile(&self.wheels)?;

        let torque_curve = required_curve("torque_curve", self.torque_curve.as_deref())?;
        let deceleration_curve =
            required_curve("deceleration_curve", self.deceleration_curve.as_deref())?;
        let steer_curve = required_curve("steer_curve", self.steer_curve.as_deref())?;

        let bounded = |kind: ParameterKind, value: f32| {
            kind.check(value)
                .map_err(|err| ConfigError::invalid_value(kind.name(), value, err.to_string()))
        };
        let non_negative = |field: &str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(ConfigError::invalid_value(
                    field,
                    value,
                    "must be finite and >= 0",
                ))
            }
        };

        if !self.steering_wheel_multiplier.is_finite() {
            return Err(ConfigError::invalid_value(
                "steering_wheel_multiplier",
                self.steering_wheel_multiplier,
                "must be finite",
            ));
        }

        Ok(VehicleConfig {
            name: self.name.clone(),
            scheme: self.scheme,
            layout,
            channels: self.channels.clone(),
            diff_gearing: bounded(ParameterKind::DiffGearing, self.diff_gearing)?,
            brake_force: bounded(ParameterKind::BrakeForce, self.brake_force)?,
            max_steer_angle: bounded(ParameterKind::MaxSteerAngle, self.max_steer_angle)?,
            steer_speed: bounded(ParameterKind::SteerSpeed, self.steer_speed)?,
            steering_wheel_multiplier: self.steering_wheel_multiplier,
            allow_boost: self.allow_boost,
            max_boost: bounded(ParameterKind::MaxBoost, self.max_boost)?,
            boost_regen: bounded(ParameterKind::BoostRegen, self.boost_regen)?,
            boost_force: bounded(ParameterKind::BoostForce, self.boost_force)?,
            allow_drift: self.allow_drift,
            drift_intensity: bounded(ParameterKind::DriftIntensity, self.drift_intensity)?,
            downforce: bounded(ParameterKind::Downforce, self.downforce)?,
            scripted_speed_kmh: non_negative("scripted_speed_kmh", self.scripted_speed_kmh)?,
            throttle_rate: non_negative("throttle_rate", self.throttle_rate)?,
            throttle_multiplier: non_negative("throttle_multiplier", self.throttle_multiplier)?,
            torque_curve,
            deceleration_curve,
            steer_curve,
        })
    }
}

fn required_curve(name: &str, keys: Option<&[Keyframe]>) -> Result<ResponseCurve, ConfigError> {
    let keys = keys.ok_or_else(|| ConfigError::missing_curve(name))?;
    ResponseCurve::new(keys.to_vec()).map_err(|err| curve_error(name, &err))
}

/// Attach the profile field name to a curve construction failure.
pub fn curve_error(name: &str, err: &CurveError) -> ConfigError {
    ConfigError::invalid_curve(name, err.to_string())
}

/// Validated vehicle configuration.
///
/// Built only by [`VehicleProfile::validate`]. Scalar fields can later be
/// retuned through [`crate::VehicleController::set_parameter`], which clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleConfig {
    name: String,
    scheme: ControlScheme,
    layout: WheelLayout,
    channels: InputChannels,
    diff_gearing: f32,
    brake_force: f32,
    max_steer_angle: f32,
    steer_speed: f32,
    steering_wheel_multiplier: f32,
    allow_boost: bool,
    max_boost: f32,
    boost_regen: f32,
    boost_force: f32,
    allow_drift: bool,
    drift_intensity: f32,
    downforce: f32,
    scripted_speed_kmh: f32,
    throttle_rate: f32,
    throttle_multiplier: f32,
    torque_curve: ResponseCurve,
    deceleration_curve: ResponseCurve,
    steer_curve: ResponseCurve,
}

impl VehicleConfig {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input-resolution strategy.
    pub fn scheme(&self) -> ControlScheme {
        self.scheme
    }

    /// Wheel grouping.
    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    /// Input channel names.
    pub fn channels(&self) -> &InputChannels {
        &self.channels
    }

    /// Differential gear ratio.
    pub fn diff_gearing(&self) -> f32 {
        self.diff_gearing
    }

    /// Brake torque at full brake.
    pub fn brake_force(&self) -> f32 {
        self.brake_force
    }

    /// Steer angle at full lock, degrees.
    pub fn max_steer_angle(&self) -> f32 {
        self.max_steer_angle
    }

    /// Per-tick steering blend factor.
    pub fn steer_speed(&self) -> f32 {
        self.steer_speed
    }

    /// Steering-wheel visual multiplier.
    pub fn steering_wheel_multiplier(&self) -> f32 {
        self.steering_wheel_multiplier
    }

    /// Whether boost is permitted at activation.
    pub fn allow_boost(&self) -> bool {
        self.allow_boost
    }

    /// Boost capacity.
    pub fn max_boost(&self) -> f32 {
        self.max_boost
    }

    /// Boost regen per second.
    pub fn boost_regen(&self) -> f32 {
        self.boost_regen
    }

    /// Boost propulsion force.
    pub fn boost_force(&self) -> f32 {
        self.boost_force
    }

    /// Whether drift is permitted at activation.
    pub fn allow_drift(&self) -> bool {
        self.allow_drift
    }

    /// Drift strength.
    pub fn drift_intensity(&self) -> f32 {
        self.drift_intensity
    }

    /// Downforce coefficient.
    pub fn downforce(&self) -> f32 {
        self.downforce
    }

    /// Countdown forward speed, km/h.
    pub fn scripted_speed_kmh(&self) -> f32 {
        self.scripted_speed_kmh
    }

    /// Progressive throttle rise per second.
    pub fn throttle_rate(&self) -> f32 {
        self.throttle_rate
    }

    /// Progressive torque multiplier.
    pub fn throttle_multiplier(&self) -> f32 {
        self.throttle_multiplier
    }

    /// Motor torque by speed.
    pub fn torque_curve(&self) -> &ResponseCurve {
        &self.torque_curve
    }

    /// Deceleration torque by speed.
    pub fn deceleration_curve(&self) -> &ResponseCurve {
        &self.deceleration_curve
    }

    /// Steer axis shaping.
    pub fn steer_curve(&self) -> &ResponseCurve {
        &self.steer_curve
    }

    /// Current value of a tunable scalar.
    pub fn parameter(&self, kind: ParameterKind) -> f32 {
        match kind {
            ParameterKind::DiffGearing => self.diff_gearing,
            ParameterKind::BrakeForce => self.brake_force,
            ParameterKind::MaxSteerAngle => self.max_steer_angle,
            ParameterKind::SteerSpeed => self.steer_speed,
            ParameterKind::DriftIntensity => self.drift_intensity,
            ParameterKind::Downforce => self.downforce,
            ParameterKind::BoostRegen => self.boost_regen,
            ParameterKind::MaxBoost => self.max_boost,
            ParameterKind::BoostForce => self.boost_force,
        }
    }

    /// Clamp and store a tuning write, returning the stored value.
    ///
    /// Non-finite values are rejected and leave the field unchanged.
    pub(crate) fn apply(&mut self, parameter: Parameter) -> Result<f32, ValidationError> {
        let kind = parameter.kind();
        let requested = parameter.value();
        if !requested.is_finite() {
            return Err(ValidationError::non_finite(kind.name()));
        }
        let value = kind.clamp(requested);
        if value != requested {
            debug!(parameter = kind.name(), requested, applied = value, "parameter clamped");
        }

        let slot = match kind {
            ParameterKind::DiffGearing => &mut self.diff_gearing,
            ParameterKind::BrakeForce => &mut self.brake_force,
            ParameterKind::MaxSteerAngle => &mut self.max_steer_angle,
            ParameterKind::SteerSpeed => &mut self.steer_speed,
            ParameterKind::DriftIntensity => &mut self.drift_intensity,
            ParameterKind::Downforce => &mut self.downforce,
            ParameterKind::BoostRegen => &mut self.boost_regen,
            ParameterKind::MaxBoost => &mut self.max_boost,
            ParameterKind::BoostForce => &mut self.boost_force,
        };
        *slot = value;
        Ok(value)
    }
}
