// src/apis/driver.rs

use std::fmt;
use std::io::Write;

use anyhow::Context;
use log::{debug, warn};

use crate::simulation::NBodySystem;
use crate::utils::{SimulationConfig, DEFAULT_STEPS};

/// Energies printed by a driver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub steps: usize,
    pub initial: f64,
    pub final_energy: f64,
}

impl EnergyReport {
    /// `final_energy - initial`
    pub fn drift(&self) -> f64 {
        self.final_energy - self.initial
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:.9}", self.initial)?;
        writeln!(f, "{:.9}", self.final_energy)
    }
}

/// Resolves the optional step-count argument.
///
/// A missing argument means [`DEFAULT_STEPS`]. Anything that is not a
/// non-negative integer (surrounding whitespace aside) means zero steps, so the
/// run still prints the initial energy twice instead of failing.
///
/// # Examples
///
/// ```
/// use rs_nbody::apis::driver::parse_steps;
///
/// assert_eq!(parse_steps(None), 1000);
/// assert_eq!(parse_steps(Some("50000000")), 50_000_000);
/// assert_eq!(parse_steps(Some("ten")), 0);
/// assert_eq!(parse_steps(Some("-5")), 0);
/// ```
pub fn parse_steps(arg: Option<&str>) -> usize {
    match arg {
        None => DEFAULT_STEPS,
        Some(raw) => raw.trim().parse::<usize>().unwrap_or_else(|e| {
            warn!("Ignoring step count {:?} ({}), running 0 steps", raw, e);
            0
        }),
    }
}

/// Sets up the jovian system, writes its energy, runs `steps` steps and writes
/// the energy again. Each energy goes on its own line with 9 decimals.
///
/// The first line is written before integrating, so it is present even if
/// the run stops on a failed accuracy check.
///
/// # Examples
///
/// ```
/// use rs_nbody::apis::driver::run;
/// use rs_nbody::utils::SimulationConfig;
///
/// let mut out = Vec::new();
/// let report = run(0, SimulationConfig::default(), &mut out).expect("Run failed");
///
/// assert_eq!(String::from_utf8(out).unwrap(), "-0.169075164\n-0.169075164\n");
/// assert_eq!(report.drift(), 0.0);
/// ```
pub fn run<W: Write>(steps: usize, config: SimulationConfig, out: &mut W) -> anyhow::Result<EnergyReport> {
    let mut system = NBodySystem::jovian(config).context("failed to build the jovian system")?;
    system.offset_momentum();

    let initial = system.energy();
    writeln!(out, "{:.9}", initial)?;

    system
        .simulate(steps)
        .with_context(|| format!("simulation stopped after {} of {} steps", system.steps_taken(), steps))?;

    let final_energy = system.energy();
    writeln!(out, "{:.9}", final_energy)?;

    let report = EnergyReport { steps, initial, final_energy };
    debug!("Ran {} steps, energy drift {:e}", steps, report.drift());
    Ok(report)
}
