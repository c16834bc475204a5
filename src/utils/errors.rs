use std::fmt;
use std::error::Error;

/// Represents errors that can occur while building or stepping an n-body system.
#[derive(Debug, Clone, PartialEq)]
pub enum NBodyError {
    /// Indicates a non-positive or non-finite mass for the body at `body`.
    InvalidMass { body: usize, mass: f64 },
    /// Indicates a non-positive or non-finite timestep.
    InvalidTimestep(f64),
    /// Indicates an empty system or one with more bodies than the pair encoding supports.
    InvalidBodyCount(usize),
    /// Indicates that the refinement was configured to run zero iterations.
    InvalidRefinementIterations,
    /// Indicates a non-positive or non-finite refinement tolerance.
    InvalidTolerance(f64),
    /// The refined inverse distance of a pair drifted further than `tolerance`
    /// from the exact value. The configuration moved too far within one step.
    InverseDistanceDiverged {
        pair: usize,
        i: usize,
        j: usize,
        error: f64,
        tolerance: f64,
    },
}

impl fmt::Display for NBodyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NBodyError::InvalidMass { body, mass } => write!(f, "Invalid mass {} for body {}", mass, body),
            NBodyError::InvalidTimestep(dt) => write!(f, "Invalid timestep {}", dt),
            NBodyError::InvalidBodyCount(n) => write!(f, "Invalid body count {}", n),
            NBodyError::InvalidRefinementIterations => write!(f, "Refinement needs at least one iteration"),
            NBodyError::InvalidTolerance(tol) => write!(f, "Invalid refinement tolerance {}", tol),
            NBodyError::InverseDistanceDiverged { pair, i, j, error, tolerance } => write!(
                f,
                "Inverse distance of pair {} ({}, {}) diverged: error {:e} exceeds tolerance {:e}",
                pair, i, j, error, tolerance
            ),
        }
    }
}

impl Error for NBodyError {}
