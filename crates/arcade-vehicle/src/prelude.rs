//! Common imports for driving a controller.

pub use crate::{
    Authority, BlinkerState, ControlScheme, DriverIntent, InputChannels, Parameter,
    TelemetrySnapshot, TickContext, TickReport, Vehicle, VehicleConfig, VehicleController,
    VehicleProfile,
};
pub use arcade_errors::{ConfigError, ResourceError, ValidationError, VehicleError};
