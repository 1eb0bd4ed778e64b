//! Fixed-Tick Smoothing Filters
//!
//! Small stateful filters used by the actuation pipeline. Each filter is a
//! `Copy` state struct plus a free function that advances it by one step.
//!
//! - **Blend**: first-order low-pass `value <- lerp(value, target, blend)`.
//!   The blend factor is applied once per call, so the effective time
//!   constant follows the caller's tick rate rather than wall-clock time.
//! - **Slew rate**: rise limited to a rate per second, release immediate.
//!   Drives the progressive throttle ramp.
//!
//! # Example
//!
//! ```
//! use arcade_filters::prelude::*;
//!
//! let mut wheel = BlendState::new(0.2);
//! let angle = blend_filter(&mut wheel, -60.0);
//! assert!((angle + 12.0).abs() < 1e-4);
//!
//! let mut throttle = SlewRateState::new(0.5);
//! let value = slew_rate_filter(&mut throttle, 1.0, 0.5);
//! assert!((value - 0.25).abs() < 1e-6);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod blend;
pub mod prelude;
pub mod slew_rate;
pub mod state;

pub use blend::{BlendState, blend_filter, lerp};
pub use slew_rate::{SlewRateState, slew_rate_filter};
pub use state::FilterState;
