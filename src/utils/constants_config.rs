// src/utils/constants_config.rs
use crate::utils::{
    DEFAULT_SIMULATION_CONFIG,
    errors::NBodyError
};

/// Polishing update applied to the previous step's `1 / r` estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementMethod {
    /// `inv_r *= (15 + y (3y - 10)) / 8`, cubically convergent.
    Halley,
    /// `inv_r *= 1.5 - 0.5 y`, quadratically convergent. Usually wants two iterations.
    Newton,
}

impl RefinementMethod {
    /// Applies one polishing iteration to `inv_r` given the current squared distance `r2`.
    ///
    /// # Example
    /// ```
    /// use rs_nbody::utils::RefinementMethod;
    ///
    /// // 1 / sqrt(4) = 0.5, start from a slightly stale estimate.
    /// let refined = RefinementMethod::Halley.refine(0.501, 4.0);
    /// assert!((refined - 0.5).abs() < 1e-7);
    /// ```
    #[inline]
    pub fn refine(self, inv_r: f64, r2: f64) -> f64 {
        let y = r2 * inv_r * inv_r;
        match self {
            RefinementMethod::Halley => inv_r * (0.125 * (15.0 + y * (3.0 * y - 10.0))),
            RefinementMethod::Newton => inv_r * (1.5 - 0.5 * y),
        }
    }
}

/// Whether the refined inverse distances are compared against `1 / sqrt(r2)` after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvRCheck {
    /// Run the check and fail the step on a violation.
    Enabled,
    /// Skip the check entirely.
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub timestep: f64,
    pub refinement: RefinementMethod,
    pub refinement_iterations: u32,
    pub refinement_tolerance: f64,
    pub inv_r_check: InvRCheck,
}


impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    /// Creates a configuration, falling back to the defaults for every `None`.
    ///
    /// # Example
    /// ```
    /// use rs_nbody::utils::{InvRCheck, SimulationConfig};
    ///
    /// let config = SimulationConfig::new(Some(0.005), None, None, None, Some(InvRCheck::Enabled));
    /// assert_eq!(config.timestep, 0.005);
    /// assert_eq!(config.refinement_iterations, 1);
    /// assert_eq!(config.inv_r_check, InvRCheck::Enabled);
    /// ```
    pub fn new(
        timestep: Option<f64>,
        refinement: Option<RefinementMethod>,
        refinement_iterations: Option<u32>,
        refinement_tolerance: Option<f64>,
        inv_r_check: Option<InvRCheck>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONFIG;
        Self {
            timestep: timestep.unwrap_or(default.timestep),
            refinement: refinement.unwrap_or(default.refinement),
            refinement_iterations: refinement_iterations.unwrap_or(default.refinement_iterations),
            refinement_tolerance: refinement_tolerance.unwrap_or(default.refinement_tolerance),
            inv_r_check: inv_r_check.unwrap_or(default.inv_r_check),
        }
    }

    /// Returns a copy with the accuracy check switched to `mode`.
    pub fn with_inv_r_check(mut self, mode: InvRCheck) -> Self {
        self.inv_r_check = mode;
        self
    }

    pub fn validate(&self) -> Result<(), NBodyError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) { return Err(NBodyError::InvalidTimestep(self.timestep)); }
        if self.refinement_iterations == 0 { return Err(NBodyError::InvalidRefinementIterations); }
        if !(self.refinement_tolerance.is_finite() && self.refinement_tolerance > 0.0) {
            return Err(NBodyError::InvalidTolerance(self.refinement_tolerance));
        }
        Ok(())
    }
}
