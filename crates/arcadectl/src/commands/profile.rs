//! Profile loading, validation and defaults

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use arcade_vehicle::{ProfileFormat, VehicleProfile};
use tracing::debug;

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::output;

/// Read and parse a profile file, picking the format from its extension.
pub fn load_profile(path: &Path) -> Result<VehicleProfile, CliError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CliError::ProfileNotFound(path.display().to_string()),
        _ => CliError::IoError(err),
    })?;
    let format = ProfileFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading profile");
    Ok(VehicleProfile::parse(&content, format)?)
}

/// Validate a profile file and print the resolved configuration.
pub fn validate(path: &Path, json: bool) -> Result<()> {
    let profile = load_profile(path)?;
    let config = profile.validate().map_err(CliError::from)?;
    output::print_config(&config, json)?;
    Ok(())
}

/// Print the stock profile.
pub fn defaults(format: OutputFormat) -> Result<()> {
    let profile = VehicleProfile::default();
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&profile).map_err(CliError::from)?,
        OutputFormat::Json => serde_json::to_string_pretty(&profile).map_err(CliError::from)?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
