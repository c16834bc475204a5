use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::models::{Body, JOVIAN_BODIES};
use crate::simulation::{energy, offset_momentum, total_momentum, PairCache};

fn primed_cache(bodies: &[Body]) -> PairCache {
    let mut cache = PairCache::new(bodies.len());
    cache.calc_distances(bodies);
    cache.calc_inv_r();
    cache
}

fn random_bodies(rng: &mut StdRng, n: usize) -> Vec<Body> {
    (0..n)
        .map(|_| {
            let position = [rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)];
            let velocity = [rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
            Body::new(position, velocity, rng.gen_range(0.01..40.0)).expect("Failed to create body")
        })
        .collect()
}

#[test]
fn test_two_body_energy() {
    let bodies = vec![
        Body::new([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 1.0).expect("Failed to create body"),
        Body::new([0.0, 2.0, 0.0], [0.0, 2.0, 0.0], 3.0).expect("Failed to create body"),
    ];
    let cache = primed_cache(&bodies);
    // 0.5 * 1 * 1 + 0.5 * 3 * 4 - 1 * 3 / 2
    assert_eq!(energy(&bodies, &cache), 5.0);
}

#[test]
fn test_energy_matches_direct_sum() {
    let bodies = JOVIAN_BODIES.to_vec();
    let cache = primed_cache(&bodies);

    let kinetic: f64 = bodies.iter().map(|b| b.kinetic_energy()).sum();
    let mut potential = 0.0;
    for i in 0..bodies.len() {
        for j in i + 1..bodies.len() {
            let r2: f64 = (0..3).map(|k| (bodies[i].position[k] - bodies[j].position[k]).powi(2)).sum();
            potential += bodies[i].mass * bodies[j].mass / r2.sqrt();
        }
    }
    assert_relative_eq!(energy(&bodies, &cache), kinetic - potential, max_relative = 1e-12);
}

#[test]
fn test_energy_does_not_mutate() {
    let bodies = JOVIAN_BODIES.to_vec();
    let cache = primed_cache(&bodies);
    let first = energy(&bodies, &cache);
    let second = energy(&bodies, &cache);
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(bodies, JOVIAN_BODIES.to_vec());
}

#[test]
fn test_offset_momentum_zeroes_total() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in 1..12 {
        let mut bodies = random_bodies(&mut rng, n);
        let before: Vec<Body> = bodies.clone();
        offset_momentum(&mut bodies);

        for p in total_momentum(&bodies) {
            assert!(p.abs() < 1e-10, "residual momentum {} with {} bodies", p, n);
        }
        // Only body 0 is touched.
        assert_eq!(&bodies[1..], &before[1..]);
        assert_eq!(bodies[0].position, before[0].position);
    }
}

#[test]
fn test_offset_momentum_on_jovian_system() {
    let mut bodies = JOVIAN_BODIES.to_vec();
    offset_momentum(&mut bodies);
    for p in total_momentum(&bodies) {
        assert!(p.abs() < 1e-15, "residual momentum {}", p);
    }
}

#[test]
fn test_offset_momentum_empty() {
    let mut bodies: Vec<Body> = Vec::new();
    offset_momentum(&mut bodies);
    assert_eq!(total_momentum(&bodies), [0.0, 0.0, 0.0]);
}
