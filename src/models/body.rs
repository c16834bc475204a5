use crate::models::vector3::{self, Vector3};
use crate::utils::NBodyError;

/// A point mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Position `(x, y, z)`.
    pub position: Vector3,
    /// Velocity `(vx, vy, vz)`.
    pub velocity: Vector3,
    /// Body mass. Strictly positive.
    pub mass: f64,
}

impl Body {
    /// Creates a new body.
    ///
    /// # Errors
    ///
    /// Returns [`NBodyError::InvalidMass`] if `mass` is non-positive or not finite.
    /// A lone body has no position in a list, so the error's `body` index is
    /// always 0 here. [`NBodySystem::new`](crate::simulation::NBodySystem::new)
    /// reports the real index when it validates a whole list.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::models::Body;
    ///
    /// let body = Body::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], 2.0)
    ///     .expect("Failed to create body");
    /// assert_eq!(body.momentum(), [0.0, 2.0, 0.0]);
    ///
    /// assert!(Body::new([0.0; 3], [0.0; 3], 0.0).is_err());
    /// ```
    pub fn new(position: Vector3, velocity: Vector3, mass: f64) -> Result<Self, NBodyError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(NBodyError::InvalidMass { body: 0, mass });
        }
        Ok(Body { position, velocity, mass })
    }

    /// Linear momentum `mass * velocity`.
    #[inline]
    pub fn momentum(&self) -> Vector3 {
        vector3::scale(&self.velocity, self.mass)
    }

    /// Kinetic energy `0.5 * mass * |v|²`.
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * vector3::norm2(&self.velocity)
    }
}
