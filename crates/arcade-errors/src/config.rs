//! Configuration errors.
//!
//! Raised while turning a vehicle profile into a validated configuration or
//! while activating a controller. A controller holding one of these never
//! writes a wheel command.

use crate::common::ErrorSeverity;

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The controller was ticked before a successful activation
    #[error("Controller is not activated; no commands will be emitted")]
    NotActivated,

    /// A required wheel group is empty
    #[error("Wheel group '{role}' is empty")]
    MissingWheels {
        /// Wheel group name
        role: String,
    },

    /// A wheel referenced by a role is not part of the vehicle
    #[error("Wheel {wheel} in group '{role}' is not one of the vehicle's wheels")]
    UnknownWheel {
        /// Wheel group name
        role: String,
        /// Offending wheel id
        wheel: u16,
    },

    /// The same wheel is listed twice in the vehicle's wheel set
    #[error("Wheel {0} is listed more than once")]
    DuplicateWheel(u16),

    /// A calibration curve is missing
    #[error("Required curve '{0}' is missing")]
    MissingCurve(String),

    /// A calibration curve failed validation
    #[error("Curve '{curve}' is invalid: {reason}")]
    InvalidCurve {
        /// Curve name
        curve: String,
        /// Reason reported by the curve evaluator
        reason: String,
    },

    /// A physical constant is unusable
    #[error("Field '{field}' has invalid value {value}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// The invalid value
        value: f32,
        /// Why the value was refused
        reason: String,
    },

    /// The profile document could not be parsed
    #[error("Failed to parse vehicle profile: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Get the error severity.
    ///
    /// Every configuration error disables the controller.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Critical
    }

    /// Create a missing wheel group error.
    pub fn missing_wheels(role: impl Into<String>) -> Self {
        ConfigError::MissingWheels { role: role.into() }
    }

    /// Create an unknown wheel error.
    pub fn unknown_wheel(role: impl Into<String>, wheel: u16) -> Self {
        ConfigError::UnknownWheel {
            role: role.into(),
            wheel,
        }
    }

    /// Create a missing curve error.
    pub fn missing_curve(curve: impl Into<String>) -> Self {
        ConfigError::MissingCurve(curve.into())
    }

    /// Create an invalid curve error.
    pub fn invalid_curve(curve: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidCurve {
            curve: curve.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(field: impl Into<String>, value: f32, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }
}
