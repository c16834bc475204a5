//! This module ties the bodies, the pair cache and the configuration together
//! into a self-contained system that can be stepped forward in time.
//!
//! Each step runs the same pipeline: advance the bodies with the current
//! forces, recompute pair distances from the new positions, then polish the
//! inverse distances from the previous step's values. Only the very first
//! inverse distances (built in [`NBodySystem::new`]) use a full square root.
//!
//! # Example
//!
//! ```
//! use rs_nbody::simulation::NBodySystem;
//! use rs_nbody::utils::SimulationConfig;
//!
//! let mut system = NBodySystem::jovian(SimulationConfig::default())
//!     .expect("Failed to build system");
//! system.offset_momentum();
//!
//! let initial = system.energy();
//! system.simulate(100).expect("Simulation failed");
//! let after = system.energy();
//!
//! assert_eq!(format!("{:.9}", initial), "-0.169075164");
//! assert!((after - initial).abs() < 1e-4);
//! ```
use log::debug;

use crate::models::{Body, Vector3, JOVIAN_BODIES};
use crate::simulation::{advance, energy, offset_momentum, total_momentum, PairCache};
use crate::utils::{InvRCheck, NBodyError, SimulationConfig, MAX_BODIES};

#[derive(Debug, Clone)]
pub struct NBodySystem {
    bodies: Vec<Body>,
    cache: PairCache,
    config: SimulationConfig,
    steps_taken: usize,
}

impl NBodySystem {
    /// Builds a system and primes its pair cache for the initial positions.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, if there are no bodies
    /// or more than [`MAX_BODIES`], or if any body has a non-positive mass.
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Result<Self, NBodyError> {
        config.validate()?;
        if bodies.is_empty() || bodies.len() > MAX_BODIES {
            return Err(NBodyError::InvalidBodyCount(bodies.len()));
        }
        if let Some((body, b)) = bodies.iter().enumerate().find(|(_, b)| !(b.mass.is_finite() && b.mass > 0.0)) {
            return Err(NBodyError::InvalidMass { body, mass: b.mass });
        }

        let mut cache = PairCache::new(bodies.len());
        cache.calc_distances(&bodies);
        cache.calc_inv_r();
        debug!(
            "Built system with {} bodies and {} pairs, dt = {}, {:?} x{}, check {:?}",
            bodies.len(),
            cache.len(),
            config.timestep,
            config.refinement,
            config.refinement_iterations,
            config.inv_r_check
        );

        Ok(NBodySystem { bodies, cache, config, steps_taken: 0 })
    }

    /// The sun and the four jovian planets, without momentum offset.
    pub fn jovian(config: SimulationConfig) -> Result<Self, NBodyError> {
        Self::new(JOVIAN_BODIES.to_vec(), config)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn pair_cache(&self) -> &PairCache {
        &self.cache
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of steps taken since construction.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Cancels the system's momentum through body 0's velocity.
    pub fn offset_momentum(&mut self) {
        offset_momentum(&mut self.bodies);
    }

    pub fn total_momentum(&self) -> Vector3 {
        total_momentum(&self.bodies)
    }

    /// Total (kinetic + potential) energy of the current state.
    pub fn energy(&self) -> f64 {
        energy(&self.bodies, &self.cache)
    }

    /// Moves the bodies by one timestep with the forces of the current pair cache.
    ///
    /// The cache is left as it is, describing the positions before the move.
    /// [`step`](Self::step) follows this with the distance and inverse-distance passes.
    pub fn advance(&mut self) {
        advance(&mut self.bodies, &self.cache, self.config.timestep);
    }

    /// Advances by one timestep and brings the pair cache up to date.
    ///
    /// # Errors
    ///
    /// With [`InvRCheck::Enabled`], returns [`NBodyError::InverseDistanceDiverged`]
    /// when a refined inverse distance is off by more than the configured tolerance.
    /// The bodies have been moved either way.
    pub fn step(&mut self) -> Result<(), NBodyError> {
        self.advance();
        self.cache.calc_distances(&self.bodies);
        self.cache.update_inv_r(self.config.refinement, self.config.refinement_iterations);
        self.steps_taken += 1;

        match self.config.inv_r_check {
            InvRCheck::Enabled => self.cache.check_inv_r(self.config.refinement_tolerance),
            InvRCheck::Disabled => Ok(()),
        }
    }

    /// Runs `steps` steps, stopping at the first failed accuracy check.
    pub fn simulate(&mut self, steps: usize) -> Result<(), NBodyError> {
        debug!("Simulating {} steps from step {}", steps, self.steps_taken);
        for _ in 0..steps {
            self.step()?;
        }
        Ok(())
    }
}
