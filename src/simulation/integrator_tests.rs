use approx::assert_relative_eq;
use crate::models::{Body, JOVIAN_BODIES};
use crate::simulation::{advance, offset_momentum, total_momentum, PairCache};

fn primed_cache(bodies: &[Body]) -> PairCache {
    let mut cache = PairCache::new(bodies.len());
    cache.calc_distances(bodies);
    cache.calc_inv_r();
    cache
}

#[test]
fn test_two_body_kicks_are_antiparallel() {
    let (m0, m1) = (3.0, 0.5);
    let mut bodies = vec![
        Body::new([0.0, 0.0, 0.0], [0.0; 3], m0).expect("Failed to create body"),
        Body::new([1.0, 2.0, -2.0], [0.0; 3], m1).expect("Failed to create body"),
    ];
    let cache = primed_cache(&bodies);
    advance(&mut bodies, &cache, 0.01);

    let dv0 = bodies[0].velocity;
    let dv1 = bodies[1].velocity;
    for k in 0..3 {
        // Equal and opposite momentum changes.
        assert_relative_eq!(m0 * dv0[k], -m1 * dv1[k], max_relative = 1e-14);
        // Each body is pulled towards the other.
        let towards_other = bodies[1].position[k] - bodies[0].position[k];
        assert!(dv0[k] * towards_other >= 0.0);
    }
    assert!(dv0.iter().any(|&v| v != 0.0));
}

#[test]
fn test_two_body_kick_magnitude() {
    // |dv0| = dt * m1 / r² for a body at rest.
    let dt = 0.01;
    let mut bodies = vec![
        Body::new([0.0, 0.0, 0.0], [0.0; 3], 1.0).expect("Failed to create body"),
        Body::new([2.0, 0.0, 0.0], [0.0; 3], 4.0).expect("Failed to create body"),
    ];
    let cache = primed_cache(&bodies);
    advance(&mut bodies, &cache, dt);
    assert_relative_eq!(bodies[0].velocity[0], dt * 4.0 / 4.0, max_relative = 1e-15);
    assert_relative_eq!(bodies[1].velocity[0], -dt * 1.0 / 4.0, max_relative = 1e-15);
}

#[test]
fn test_positions_use_updated_velocities() {
    let dt = 0.5;
    let mut bodies = vec![
        Body::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 1.0).expect("Failed to create body"),
        Body::new([10.0, 0.0, 0.0], [0.0, 1.0, 0.0], 1.0).expect("Failed to create body"),
    ];
    let cache = primed_cache(&bodies);
    let before = bodies.clone();
    advance(&mut bodies, &cache, dt);

    for (b, old) in bodies.iter().zip(before.iter()) {
        assert_ne!(b.velocity, old.velocity);
        for k in 0..3 {
            assert_eq!(b.position[k], old.position[k] + dt * b.velocity[k]);
        }
    }
}

#[test]
fn test_advance_conserves_momentum() {
    let mut bodies = JOVIAN_BODIES.to_vec();
    offset_momentum(&mut bodies);
    let mut cache = primed_cache(&bodies);
    for _ in 0..100 {
        advance(&mut bodies, &cache, 0.01);
        cache.calc_distances(&bodies);
        cache.calc_inv_r();
    }
    for p in total_momentum(&bodies) {
        assert!(p.abs() < 1e-12, "momentum component {} drifted", p);
    }
}

#[test]
fn test_single_body_drifts_freely() {
    let mut bodies = vec![Body::new([1.0, 1.0, 1.0], [0.5, -0.5, 0.25], 2.0).expect("Failed to create body")];
    let cache = primed_cache(&bodies);
    assert!(cache.is_empty());
    advance(&mut bodies, &cache, 2.0);
    assert_eq!(bodies[0].velocity, [0.5, -0.5, 0.25]);
    assert_eq!(bodies[0].position, [2.0, 0.0, 1.5]);
}
