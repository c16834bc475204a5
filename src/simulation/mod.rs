mod pair_cache;
mod integrator;
mod energy;
mod nbody_system;

pub use pair_cache::*;
pub use integrator::*;
pub use energy::*;
pub use nbody_system::*;

#[cfg(test)]
mod integrator_tests;
#[cfg(test)]
mod energy_tests;
