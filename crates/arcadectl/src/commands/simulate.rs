//! Headless session command

use anyhow::Result;
use tracing::info;

use crate::commands::SimulateArgs;
use crate::commands::profile::load_profile;
use crate::error::CliError;
use crate::output;
use crate::session::{self, FixedInput, SessionOptions};

/// Run a headless session and print the summary.
pub fn execute(args: &SimulateArgs, json: bool) -> Result<()> {
    if args.ticks == 0 {
        return Err(CliError::InvalidArgument("--ticks must be at least 1".into()).into());
    }
    for (name, value) in [("--throttle", args.throttle), ("--steer", args.steer), ("--brake", args.brake)] {
        if !value.is_finite() {
            return Err(CliError::InvalidArgument(format!("{name} must be finite")).into());
        }
    }

    let mut profile = load_profile(&args.profile)?;
    if let Some(scheme) = args.scheme {
        profile.scheme = scheme;
    }
    let config = profile.validate().map_err(CliError::from)?;

    let input = FixedInput::new(config.channels().clone())
        .throttle(args.throttle)
        .steer(args.steer)
        .brake(args.brake)
        .boost(args.boost)
        .drift(args.drift);
    let options = SessionOptions {
        ticks: args.ticks,
        countdown_ticks: args.countdown_ticks,
        handbrake: args.handbrake,
        reverse: args.reverse,
    };

    info!(vehicle = %config.name(), scheme = %config.scheme(), ticks = args.ticks, "starting session");
    let summary = session::run(config, &input, options).map_err(CliError::from)?;
    output::print_session(&summary, json)?;
    Ok(())
}
