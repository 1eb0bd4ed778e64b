//! Command implementations for arcadectl

pub mod profile;
pub mod simulate;

use std::path::PathBuf;

use arcade_vehicle::ControlScheme;
use clap::{Args, ValueEnum};

/// Serialization format for printed profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Vehicle profile (YAML or JSON)
    pub profile: PathBuf,

    /// Override the profile's control scheme (arcade, progressive, unclamped)
    #[arg(long)]
    pub scheme: Option<ControlScheme>,

    /// Fixed ticks to run
    #[arg(long, default_value_t = 250)]
    pub ticks: u64,

    /// Ticks under scripted authority before the lockout releases
    #[arg(long, default_value_t = 150)]
    pub countdown_ticks: u64,

    /// Throttle axis value held for the whole session
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub throttle: f32,

    /// Steering axis value held for the whole session
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub steer: f32,

    /// Brake axis value held for the whole session
    #[arg(long, default_value_t = 0.0)]
    pub brake: f32,

    /// Hold the boost button
    #[arg(long)]
    pub boost: bool,

    /// Hold the drift button
    #[arg(long)]
    pub drift: bool,

    /// Engage the handbrake once the player has control
    #[arg(long)]
    pub handbrake: bool,

    /// Drive in reverse
    #[arg(long)]
    pub reverse: bool,
}
