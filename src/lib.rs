//! A small symplectic n-body integrator.
//!
//! The kernel steps a fixed set of gravitating bodies with a leapfrog-style
//! update, exploits pair symmetry so every force is evaluated once, and
//! replaces the per-pair square root with a polishing step seeded by the
//! previous step's inverse distance.
pub mod utils;
pub mod models;
pub mod simulation;
pub mod apis;

