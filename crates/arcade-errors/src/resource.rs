//! Depletable resource errors.

use crate::common::ErrorSeverity;

/// Resource error types.
///
/// Boost consumption is normally a boolean query; these errors exist for
/// callers that want the reason for a denial.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResourceError {
    /// More charge was requested than is available
    #[error("Boost exhausted: requested {requested}, available {available}")]
    Exhausted {
        /// Requested amount
        requested: f32,
        /// Charge remaining when the request was denied
        available: f32,
    },

    /// The resource subsystem is switched off by configuration
    #[error("Boost is disabled for this vehicle")]
    Disabled,

    /// The request itself is not a usable amount
    #[error("Invalid boost request {0}")]
    InvalidAmount(f32),
}

impl ResourceError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ResourceError::Exhausted { .. } | ResourceError::Disabled => ErrorSeverity::Warning,
            ResourceError::InvalidAmount(_) => ErrorSeverity::Error,
        }
    }

    /// Create an exhausted error.
    pub fn exhausted(requested: f32, available: f32) -> Self {
        ResourceError::Exhausted {
            requested,
            available,
        }
    }
}
