//! Arcade Vehicle Dynamics Controller
//!
//! Converts driver intent (throttle, brake, steer, handbrake, boost, drift)
//! into per-wheel actuation commands for an externally simulated rigid body,
//! once per fixed simulation tick.
//!
//! # Architecture
//!
//! ```text
//!  InputSource ──┐
//!                ├─► VehicleController::fixed_tick ──► PhysicsBody (wheel commands, forces)
//!  Resources  ───┤        ▲             │
//!  Lockout    ───┘        │             └─► GroundContactCache (once per frame)
//!                         └── Observation (velocity, pose)
//! ```
//!
//! - [`config`]: profile loading and the validated [`VehicleConfig`]
//! - [`resources`]: boost tank and drift gate
//! - [`ground`]: per-frame memoized ground contact
//! - [`lockout`]: scripted countdown versus player authority
//! - [`pipeline`]: torque, brake and steer command computation
//! - [`scheme`]: the three input-resolution strategies
//! - [`controller`]: the owning state machine tying it together
//!
//! # Scheduling
//!
//! The host drives two steps on one thread: [`VehicleController::frame_tick`]
//! once per render frame (boost regen, frame-rate input reads, blinkers) and
//! [`VehicleController::fixed_tick`] once per physics step. The controller
//! owns all of its state; nothing else writes it.
//!
//! # Example
//!
//! ```
//! use arcade_interfaces::{FrameId, NeutralInput};
//! use arcade_test_helpers::RecordingBody;
//! use arcade_vehicle::prelude::*;
//!
//! let config = VehicleProfile::default().validate()?;
//! let mut controller = VehicleController::new(config);
//! let mut body = RecordingBody::four_wheel();
//!
//! controller.activate(&mut body, Authority::Scripted)?;
//! let report = controller.fixed_tick(&mut body, &NeutralInput, TickContext::new(FrameId(1), 0.02))?;
//! assert!(report.scripted_velocity.is_some());
//! # Ok::<(), arcade_errors::VehicleError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod blinkers;
pub mod config;
pub mod controller;
pub mod ground;
pub mod input;
pub mod lockout;
pub mod pipeline;
pub mod prelude;
pub mod resources;
pub mod scheme;
pub mod telemetry;

pub use blinkers::{BlinkerState, Blinkers};
pub use config::{
    Parameter, ParameterKind, ProfileFormat, VehicleConfig, VehicleProfile, WheelLayout,
    WheelLayoutProfile,
};
pub use controller::{TickContext, TickReport, Vehicle, VehicleController};
pub use ground::GroundContactCache;
pub use input::{DriverIntent, InputChannels};
pub use lockout::{Authority, Lockout};
pub use resources::ResourceManager;
pub use scheme::{BrakeTarget, ControlScheme};
pub use telemetry::TelemetrySnapshot;
