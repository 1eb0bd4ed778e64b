//! Top-level error type and classification shared by every crate.

use core::fmt;

use crate::{ConfigError, ResourceError, ValidationError};

/// Top-level error type wrapping every controller sub-error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VehicleError {
    /// Configuration errors (missing collaborator, curve or wheel group)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Depletable resource errors
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl VehicleError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            VehicleError::Config(_) => ErrorCategory::Config,
            VehicleError::Resource(_) => ErrorCategory::Resource,
            VehicleError::Validation(_) => ErrorCategory::Validation,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VehicleError::Config(e) => e.severity(),
            VehicleError::Resource(e) => e.severity(),
            VehicleError::Validation(e) => e.severity(),
        }
    }

    /// Check if this error is recovered locally by the controller.
    ///
    /// Only configuration errors are fatal; they must be fixed by the owner
    /// before the controller emits any command.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Configuration errors
    Config = 0,
    /// Resource exhaustion
    Resource = 1,
    /// Input validation errors
    Validation = 2,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Resource => write!(f, "Resource"),
            ErrorCategory::Validation => write!(f, "Validation"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, the action was denied or the value adjusted
    Warning = 1,
    /// Error, the operation failed
    Error = 2,
    /// Critical, the controller must not emit commands
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
