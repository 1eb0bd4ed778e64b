//! Collaborator contracts for the arcade vehicle controller
//!
//! The controller never integrates physics or polls devices itself. It talks
//! to two external collaborators through the traits in this crate:
//!
//! - [`PhysicsBody`]: the rigid body and its wheel actuators. Accepts
//!   per-wheel torque, brake and steer commands; reports velocity, pose and
//!   per-wheel ground contact.
//! - [`InputSource`]: named axes and buttons, one value per control channel.
//!
//! The value types shared across that boundary ([`WheelId`], [`Pose`],
//! [`WheelCommand`], [`Observation`], [`FrameId`]) live here too.
//!
//! # Conventions
//!
//! Body-local axes follow the rig's engine: `+Z` forward, `+Y` up. Linear
//! quantities are SI (m/s, N, N·m); steer angles are degrees; speeds handed
//! to calibration curves are km/h.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod body;
pub mod input;
pub mod types;

pub use body::PhysicsBody;
pub use input::{InputSource, NeutralInput};
pub use types::{FrameId, MPS_TO_KMH, Observation, Pose, WheelCommand, WheelId};
