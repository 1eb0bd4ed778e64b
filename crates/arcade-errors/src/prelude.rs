//! Prelude module for convenient error handling imports.
//!
//! # Example
//!
//! ```
//! use arcade_errors::prelude::*;
//!
//! fn activate(wheels: &[u16]) -> Result<()> {
//!     if wheels.is_empty() {
//!         return Err(ConfigError::missing_wheels("all").into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(activate(&[]).is_err());
//! ```

pub use crate::{
    Result,
    common::{ErrorCategory, ErrorSeverity, VehicleError},
    config::ConfigError,
    resource::ResourceError,
    validation::ValidationError,
};

/// Macro for returning an out of range validation error.
#[macro_export]
macro_rules! validate_range {
    ($field:expr, $value:expr, $min:expr, $max:expr) => {
        if !($value >= $min && $value <= $max) {
            return Err($crate::ValidationError::out_of_range($field, $value, $min, $max).into());
        }
    };
}
