//! arcadectl - Arcade Vehicle Control CLI
//!
//! Validates vehicle profiles and runs headless controller sessions against
//! a kinematic stand-in body.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod kinematic;
mod output;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{OutputFormat, SimulateArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "arcadectl")]
#[command(about = "Arcade Vehicle Control CLI - Validate profiles and run headless sessions")]
#[command(version)]
#[command(long_about = "
arcadectl is a command-line front end for the arcade vehicle controller.
It validates vehicle profiles (YAML or JSON) and runs headless sessions
against a kinematic stand-in body, printing the final telemetry.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a vehicle profile and print the resolved configuration
    Validate {
        /// Profile path (YAML or JSON)
        profile: PathBuf,
    },

    /// Run a headless session: countdown, hand-off, constant input
    Simulate(SimulateArgs),

    /// Print the stock vehicle profile
    Defaults {
        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("arcadectl={log_level},arcade_vehicle={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Validate { profile } => commands::profile::validate(profile, cli.json),
        Commands::Simulate(args) => commands::simulate::execute(args, cli.json),
        Commands::Defaults { format } => commands::profile::defaults(*format),
    }
}
