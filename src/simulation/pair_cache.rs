//! Per-pair derived state: displacement, squared distance and inverse distance.
//!
//! The cache is a structure-of-arrays indexed by the canonical pair index
//! (see [`crate::utils::pair_index`]). Displacements and squared distances are
//! recomputed from the bodies every step. Inverse distances are computed
//! exactly once with `sqrt` and afterwards polished from their previous value,
//! which is close to the new one because the bodies only move by one timestep.
//!
//! # Example
//!
//! ```
//! use rs_nbody::models::Body;
//! use rs_nbody::simulation::PairCache;
//! use rs_nbody::utils::RefinementMethod;
//!
//! let mut bodies = vec![
//!     Body::new([0.0, 0.0, 0.0], [0.0; 3], 1.0).unwrap(),
//!     Body::new([3.0, 4.0, 0.0], [0.0; 3], 1.0).unwrap(),
//! ];
//! let mut cache = PairCache::new(bodies.len());
//! cache.calc_distances(&bodies);
//! cache.calc_inv_r();
//! assert_eq!(cache.r2()[0], 25.0);
//! assert_eq!(cache.inv_r()[0], 0.2);
//!
//! // Nudge a body and polish the stale estimate instead of taking a new sqrt.
//! bodies[1].position[0] += 1e-3;
//! cache.calc_distances(&bodies);
//! cache.update_inv_r(RefinementMethod::Halley, 1);
//! assert!((cache.inv_r()[0] - 1.0 / cache.r2()[0].sqrt()).abs() < 1e-10);
//! ```
use log::error;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::models::{vector3, Body, Vector3};
use crate::utils::{pair_count, pair_table, NBodyError, RefinementMethod};

#[derive(Debug, Clone)]
pub struct PairCache {
    /// `(i, j)` of every pair, in pair-index order.
    pairs: Vec<(usize, usize)>,
    /// `x_i - x_j`
    dr: Vec<Vector3>,
    /// `|x_i - x_j|²`
    r2: Vec<f64>,
    /// `1 / |x_i - x_j|`
    inv_r: Vec<f64>,
}

impl PairCache {
    /// Allocates a cache for `n_bodies`. Nothing is reallocated afterwards.
    pub fn new(n_bodies: usize) -> Self {
        let n_pairs = pair_count(n_bodies);
        PairCache {
            pairs: pair_table(n_bodies),
            dr: vec![vector3::ZERO; n_pairs],
            r2: vec![0.0; n_pairs],
            inv_r: vec![0.0; n_pairs],
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn dr(&self) -> &[Vector3] {
        &self.dr
    }

    pub fn r2(&self) -> &[f64] {
        &self.r2
    }

    pub fn inv_r(&self) -> &[f64] {
        &self.inv_r
    }

    /// Recomputes `dr` and `r2` for every pair from the current positions.
    ///
    /// `bodies` must hold the body count the cache was created for.
    pub fn calc_distances(&mut self, bodies: &[Body]) {
        debug_assert_eq!(
            pair_count(bodies.len()),
            self.len(),
            "cache built for {} pairs, got {} bodies",
            self.len(),
            bodies.len()
        );

        #[cfg(feature = "parallel")]
        {
            self.dr
                .par_iter_mut()
                .zip(self.r2.par_iter_mut())
                .zip(self.pairs.par_iter())
                .for_each(|((dr, r2), &(i, j))| {
                    *dr = vector3::sub(&bodies[i].position, &bodies[j].position);
                    *r2 = vector3::norm2(dr);
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (p, &(i, j)) in self.pairs.iter().enumerate() {
                self.dr[p] = vector3::sub(&bodies[i].position, &bodies[j].position);
                self.r2[p] = vector3::norm2(&self.dr[p]);
            }
        }
    }

    /// Sets every inverse distance to `1 / sqrt(r2)`. Call after [`calc_distances`](Self::calc_distances).
    pub fn calc_inv_r(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.inv_r
                .par_iter_mut()
                .zip(self.r2.par_iter())
                .for_each(|(inv_r, &r2)| *inv_r = 1.0 / r2.sqrt());
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (inv_r, &r2) in self.inv_r.iter_mut().zip(self.r2.iter()) {
                *inv_r = 1.0 / r2.sqrt();
            }
        }
    }

    /// Polishes every inverse distance from its previous value with `iterations`
    /// rounds of `method`. Call after [`calc_distances`](Self::calc_distances).
    pub fn update_inv_r(&mut self, method: RefinementMethod, iterations: u32) {
        let refine = move |inv_r: &mut f64, r2: f64| {
            for _ in 0..iterations {
                *inv_r = method.refine(*inv_r, r2);
            }
        };

        #[cfg(feature = "parallel")]
        {
            self.inv_r
                .par_iter_mut()
                .zip(self.r2.par_iter())
                .for_each(|(inv_r, &r2)| refine(inv_r, r2));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (inv_r, &r2) in self.inv_r.iter_mut().zip(self.r2.iter()) {
                refine(inv_r, r2);
            }
        }
    }

    /// Compares every inverse distance with `1 / sqrt(r2)`.
    ///
    /// # Errors
    ///
    /// Returns [`NBodyError::InverseDistanceDiverged`] for the first pair whose
    /// absolute error exceeds `tolerance`.
    pub fn check_inv_r(&self, tolerance: f64) -> Result<(), NBodyError> {
        for (p, (&inv_r, &r2)) in self.inv_r.iter().zip(self.r2.iter()).enumerate() {
            let error = (inv_r - 1.0 / r2.sqrt()).abs();
            // `!(<=)` so that a NaN error also trips the check.
            if !(error <= tolerance) {
                let (i, j) = self.pairs[p];
                error!("1/r of pair ({}, {}) is off by {:e}, tolerance {:e}", i, j, error, tolerance);
                return Err(NBodyError::InverseDistanceDiverged { pair: p, i, j, error, tolerance });
            }
        }
        Ok(())
    }
}
