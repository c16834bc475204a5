use crate::models::{vector3, Body, Vector3};
use crate::simulation::PairCache;

/// Total energy: kinetic energy of every body minus `m_i m_j / r_ij` over every pair.
///
/// The terms are accumulated body by body, each body's kinetic term followed by
/// the potential terms of its pairs with higher-indexed bodies. `cache` must
/// hold the inverse distances of the current positions.
pub fn energy(bodies: &[Body], cache: &PairCache) -> f64 {
    let inv_r = cache.inv_r();
    let n = bodies.len();
    let mut e = 0.0;
    let mut p = 0;
    for i in 0..n {
        let a = &bodies[i];
        e += a.kinetic_energy();

        for b in &bodies[i + 1..n] {
            e -= (a.mass * b.mass) * inv_r[p];
            p += 1;
        }
    }
    e
}

/// Sum of `mass * velocity` over all bodies.
pub fn total_momentum(bodies: &[Body]) -> Vector3 {
    let mut p = vector3::ZERO;
    for body in bodies {
        vector3::add_assign(&mut p, &body.momentum());
    }
    p
}

/// Cancels the total momentum by adjusting the velocity of body 0.
///
/// # Examples
///
/// ```
/// use rs_nbody::models::Body;
/// use rs_nbody::simulation::{offset_momentum, total_momentum};
///
/// let mut bodies = vec![
///     Body::new([0.0; 3], [0.0; 3], 10.0).expect("Failed to create body"),
///     Body::new([1.0, 0.0, 0.0], [0.0, 2.0, 0.0], 1.0).expect("Failed to create body"),
/// ];
/// offset_momentum(&mut bodies);
///
/// assert_eq!(bodies[0].velocity, [0.0, -0.2, 0.0]);
/// assert_eq!(total_momentum(&bodies), [0.0, 0.0, 0.0]);
/// ```
pub fn offset_momentum(bodies: &mut [Body]) {
    let Some(first) = bodies.first() else { return };
    let inv_mass = 1.0 / first.mass;

    let mut p = total_momentum(bodies);
    vector3::scale_assign(&mut p, inv_mass);
    vector3::sub_assign(&mut bodies[0].velocity, &p);
}
