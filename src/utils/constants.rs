use crate::utils::{InvRCheck, RefinementMethod, SimulationConfig};

pub const PI: f64 = 3.141592653589793;
pub const SOLAR_MASS: f64 = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Number of steps the driver runs when no argument is given.
pub const DEFAULT_STEPS: usize = 1000;

/// Largest supported body count. Keeps every pair index below `u16::MAX`.
pub const MAX_BODIES: usize = 255;

pub const DEFAULT_SIMULATION_CONFIG: SimulationConfig = SimulationConfig {
    timestep: 0.01,
    refinement: RefinementMethod::Halley,
    refinement_iterations: 1,
    refinement_tolerance: 1e-7,
    inv_r_check: if cfg!(feature = "inv_r_check") { InvRCheck::Enabled } else { InvRCheck::Disabled },
};
