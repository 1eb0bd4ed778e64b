//! Error types for the arcade vehicle controller
//!
//! The controller distinguishes three failure families:
//!
//! - [`config`]: a required collaborator, curve or wheel group is missing or
//!   malformed. These surface at activation and keep the controller disabled.
//! - [`resource`]: a boost request exceeded the remaining charge. Recovered
//!   locally by denying the action.
//! - [`validation`]: a scalar left its declared domain. The live input path
//!   clamps instead of failing; strict callers (profile loading, tooling) use
//!   these to report the offending field.
//!
//! [`VehicleError`] wraps all of them and carries a [`ErrorCategory`] and an
//! [`ErrorSeverity`] for reporting.
//!
//! # Example
//!
//! ```
//! use arcade_errors::prelude::*;
//!
//! fn check_gearing(value: f32) -> Result<f32> {
//!     if !(2.0..=16.0).contains(&value) {
//!         return Err(ValidationError::out_of_range("diff_gearing", value, 2.0, 16.0).into());
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_gearing(4.0).is_ok());
//! assert!(check_gearing(40.0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod common;
pub mod config;
pub mod prelude;
pub mod resource;
pub mod validation;

pub use common::{ErrorCategory, ErrorSeverity, VehicleError};
pub use config::ConfigError;
pub use resource::ResourceError;
pub use validation::ValidationError;

/// A specialized `Result` type for controller operations.
pub type Result<T> = std::result::Result<T, VehicleError>;
