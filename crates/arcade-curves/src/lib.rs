//! Keyframe Response Curves for Arcade Vehicles
//!
//! This crate implements the calibration curves used by the vehicle
//! controller: torque by speed, deceleration torque by speed, and steering
//! input shaping.
//!
//! # Overview
//!
//! A [`ResponseCurve`] is a finite, strictly ordered set of [`Keyframe`]s.
//! Evaluation is a pure function of the curve and the input:
//! - Between two keyframes the value is interpolated linearly.
//! - When both facing tangents are given, the segment uses cubic Hermite
//!   interpolation instead. Missing tangents always degrade to linear.
//! - Outside the keyed domain the value clamps to the nearest boundary key.
//!
//! # Example
//!
//! ```
//! use arcade_curves::ResponseCurve;
//!
//! let torque = ResponseCurve::from_points(&[(0.0, 200.0), (50.0, 300.0), (200.0, 0.0)])?;
//!
//! assert!((torque.evaluate(25.0) - 250.0).abs() < 1e-4);
//! assert!((torque.evaluate(50.0) - 300.0).abs() < 1e-4);
//! assert!((torque.evaluate(-10.0) - 200.0).abs() < 1e-4);
//! assert!((torque.evaluate(500.0) - 0.0).abs() < 1e-4);
//! # Ok::<(), arcade_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod error;
pub mod keyframe;
pub mod prelude;

pub use curve::ResponseCurve;
pub use error::CurveError;
pub use keyframe::Keyframe;
