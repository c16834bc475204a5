use crate::models::{vector3, Body};
use crate::simulation::PairCache;

/// Advances `bodies` by one timestep `dt` using the forces implied by `cache`.
///
/// Velocities are updated first, one force evaluation per pair applied to both
/// bodies with opposite sign, walking the pairs in canonical order. Positions
/// are then moved with the finished velocities. `cache` must hold the distances
/// and inverse distances of the current positions.
///
/// # Examples
///
/// ```
/// use rs_nbody::models::Body;
/// use rs_nbody::simulation::{advance, PairCache};
///
/// let mut bodies = vec![
///     Body::new([-1.0, 0.0, 0.0], [0.0; 3], 1.0).expect("Failed to create body"),
///     Body::new([1.0, 0.0, 0.0], [0.0; 3], 1.0).expect("Failed to create body"),
/// ];
/// let mut cache = PairCache::new(bodies.len());
/// cache.calc_distances(&bodies);
/// cache.calc_inv_r();
///
/// advance(&mut bodies, &cache, 0.01);
///
/// // The bodies attract each other.
/// assert!(bodies[0].velocity[0] > 0.0);
/// assert!(bodies[1].velocity[0] < 0.0);
/// assert!(bodies[0].position[0] > -1.0);
/// ```
pub fn advance(bodies: &mut [Body], cache: &PairCache, dt: f64) {
    let (dr, r2, inv_r) = (cache.dr(), cache.r2(), cache.inv_r());

    for (p, &(i, j)) in cache.pairs().iter().enumerate() {
        let mag = dt * inv_r[p] / r2[p];

        let dv_a = vector3::scale(&dr[p], bodies[j].mass * mag);
        let dv_b = vector3::scale(&dr[p], bodies[i].mass * mag);
        vector3::sub_assign(&mut bodies[i].velocity, &dv_a);
        vector3::add_assign(&mut bodies[j].velocity, &dv_b);
    }

    for body in bodies.iter_mut() {
        let del_x = vector3::scale(&body.velocity, dt);
        vector3::add_assign(&mut body.position, &del_x);
    }
}
