//! Error types for arcadectl

use arcade_errors::{ConfigError, VehicleError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Session failed: {0}")]
    Session(#[from] VehicleError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::ProfileNotFound(_) => 3,
            CliError::InvalidProfile(_) | CliError::JsonError(_) | CliError::YamlError(_) => 4,
            CliError::InvalidArgument(_) => 2,
            CliError::Session(_) | CliError::IoError(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::ProfileNotFound("x".into()).exit_code(), 3);
        assert_eq!(CliError::from(ConfigError::missing_curve("torque_curve")).exit_code(), 4);
        assert_eq!(CliError::InvalidArgument("ticks".into()).exit_code(), 2);
        assert_eq!(CliError::from(VehicleError::from(ConfigError::NotActivated)).exit_code(), 1);
    }
}
