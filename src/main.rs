use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::warn;

use rs_nbody::apis::driver::{parse_steps, run};
use rs_nbody::utils::{InvRCheck, SimulationConfig};

/// Integrates the sun and the jovian planets and prints the total energy
/// before and after the run.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of steps. Defaults to 1000; anything that is not a
    /// non-negative integer runs 0 steps.
    #[arg(value_name = "STEPS", allow_hyphen_values = true)]
    steps: Option<String>,

    /// Anything after the step count is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// Compare every refined 1/r against a full square root after each step.
    /// Defaults to the build's `inv_r_check` feature.
    #[arg(long, value_enum)]
    inv_r_check: Option<CheckMode>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CheckMode {
    Enabled,
    Disabled,
}

impl From<CheckMode> for InvRCheck {
    fn from(mode: CheckMode) -> Self {
        match mode {
            CheckMode::Enabled => InvRCheck::Enabled,
            CheckMode::Disabled => InvRCheck::Disabled,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.rest.is_empty() {
        warn!("Ignoring extra arguments {:?}", args.rest);
    }
    let steps = parse_steps(args.steps.as_deref());
    let mut config = SimulationConfig::default();
    if let Some(mode) = args.inv_r_check {
        config = config.with_inv_r_check(mode.into());
    }

    let stdout = std::io::stdout();
    run(steps, config, &mut stdout.lock())?;
    Ok(())
}
