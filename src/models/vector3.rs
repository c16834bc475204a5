//! Elementary arithmetic on 3-component vectors.
//!
//! These are free functions over `[f64; 3]` rather than operator impls so that
//! every call site spells out its operation order; the energy output depends
//! on the exact sequence of roundings.

/// A 3-component real vector `(x, y, z)`.
pub type Vector3 = [f64; 3];

pub const ZERO: Vector3 = [0.0, 0.0, 0.0];

/// Returns `x - y`.
///
/// # Example
/// ```
/// use rs_nbody::models::vector3;
/// assert_eq!(vector3::sub(&[3.0, 2.0, 1.0], &[1.0, 1.0, 1.0]), [2.0, 1.0, 0.0]);
/// ```
#[inline]
pub fn sub(x: &Vector3, y: &Vector3) -> Vector3 {
    [x[0] - y[0], x[1] - y[1], x[2] - y[2]]
}

/// `result += x`
#[inline]
pub fn add_assign(result: &mut Vector3, x: &Vector3) {
    for k in 0..3 {
        result[k] += x[k];
    }
}

/// `result -= x`
#[inline]
pub fn sub_assign(result: &mut Vector3, x: &Vector3) {
    for k in 0..3 {
        result[k] -= x[k];
    }
}

/// Squared Euclidean norm, summed `x² + y² + z²` left to right.
///
/// # Example
/// ```
/// use rs_nbody::models::vector3;
/// assert_eq!(vector3::norm2(&[1.0, 2.0, 2.0]), 9.0);
/// ```
#[inline]
pub fn norm2(x: &Vector3) -> f64 {
    x[0] * x[0] + x[1] * x[1] + x[2] * x[2]
}

/// Returns `k * x`.
#[inline]
pub fn scale(x: &Vector3, k: f64) -> Vector3 {
    [k * x[0], k * x[1], k * x[2]]
}

/// `result *= k`
#[inline]
pub fn scale_assign(result: &mut Vector3, k: f64) {
    for v in result.iter_mut() {
        *v *= k;
    }
}
