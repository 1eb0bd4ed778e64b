//! Output formatting for CLI responses

use anyhow::Error;
use arcade_vehicle::VehicleConfig;
use colored::*;
use serde_json::json;

use crate::error::CliError;
use crate::session::SessionSummary;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error)
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::ProfileNotFound(_)) => "profile_not_found",
        Some(CliError::InvalidProfile(_)) => "invalid_profile",
        Some(CliError::InvalidArgument(_)) => "invalid_argument",
        Some(CliError::Session(_)) => "session",
        Some(CliError::IoError(_)) => "io",
        Some(CliError::JsonError(_)) | Some(CliError::YamlError(_)) => "serialization",
        None => "unknown",
    }
}

fn wheel_list(ids: &[arcade_interfaces::WheelId]) -> String {
    ids.iter().map(|id| id.0.to_string()).collect::<Vec<_>>().join(", ")
}

/// Print a validated configuration.
pub fn print_config(config: &VehicleConfig, json: bool) -> Result<(), CliError> {
    let layout = config.layout();
    if json {
        let output = json!({
            "success": true,
            "valid": true,
            "vehicle": {
                "name": config.name(),
                "scheme": config.scheme().name(),
                "wheels": {
                    "drive": layout.drive(),
                    "steer": layout.steer(),
                    "all": layout.all(),
                },
                "diff_gearing": config.diff_gearing(),
                "brake_force": config.brake_force(),
                "max_steer_angle": config.max_steer_angle(),
                "steer_speed": config.steer_speed(),
                "allow_boost": config.allow_boost(),
                "max_boost": config.max_boost(),
                "boost_regen": config.boost_regen(),
                "boost_force": config.boost_force(),
                "allow_drift": config.allow_drift(),
                "downforce": config.downforce(),
                "scripted_speed_kmh": config.scripted_speed_kmh(),
                "torque_curve": config.torque_curve().keys(),
            }
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} Profile is valid", "✓".green());
    println!("{} {}", "Vehicle:".bold(), config.name());
    println!("  Scheme: {}", config.scheme().to_string().cyan());
    println!(
        "  Wheels: drive [{}] steer [{}] all [{}]",
        wheel_list(layout.drive()),
        wheel_list(layout.steer()),
        wheel_list(layout.all())
    );
    println!("  Diff Gearing: {:.2}", config.diff_gearing());
    println!("  Brake Force: {:.0} N·m", config.brake_force());
    println!(
        "  Steering: {:.1}° max, blend {:.3}",
        config.max_steer_angle(),
        config.steer_speed()
    );
    if config.allow_boost() {
        println!(
            "  Boost: {:.1} capacity, {:.2}/s regen, {:.0} N",
            config.max_boost(),
            config.boost_regen(),
            config.boost_force()
        );
    } else {
        println!("  Boost: {}", "disabled".dimmed());
    }
    println!(
        "  Drift: {}",
        if config.allow_drift() { "allowed".normal() } else { "disabled".dimmed() }
    );
    println!("  Downforce: {:.2}", config.downforce());
    println!("  Countdown Speed: {:.1} km/h", config.scripted_speed_kmh());

    let (min, max) = config.torque_curve().domain();
    println!("  Torque Curve: {} keys over {:.0}..{:.0} km/h", config.torque_curve().keys().len(), min, max);
    Ok(())
}

/// Print a session summary.
pub fn print_session(summary: &SessionSummary, json: bool) -> Result<(), CliError> {
    if json {
        let output = json!({
            "success": true,
            "session": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        "Session:".bold(),
        summary.vehicle,
        summary.scheme.cyan()
    );
    println!(
        "  Ticks: {} ({} countdown), {:.2} s",
        summary.ticks, summary.countdown_ticks, summary.duration_s
    );
    println!("  Distance: {:.1} m", summary.distance_m);
    println!("  Top Speed: {:.1} km/h", summary.top_speed_kmh);
    if summary.boost_ticks > 0 {
        println!("  Boost Ticks: {}", summary.boost_ticks.to_string().yellow());
    }
    let [x, y, z] = summary.position;
    println!("  Position: ({x:.2}, {y:.2}, {z:.2})");
    println!("  {}", summary.telemetry);
    Ok(())
}
