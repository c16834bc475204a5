// src/models/solar_system.rs
//
// Initial conditions for the sun and the four jovian planets. Positions are in
// AU, velocities in AU/day before the DAYS_PER_YEAR scaling, masses in solar
// masses before the SOLAR_MASS scaling.
use crate::models::Body;
use crate::utils::{DAYS_PER_YEAR, SOLAR_MASS};

pub const JOVIAN_BODY_COUNT: usize = 5;

pub const SUN: Body = Body {
    position: [0.0, 0.0, 0.0],
    velocity: [0.0, 0.0, 0.0],
    mass: SOLAR_MASS,
};

pub const JUPITER: Body = Body {
    position: [
        4.84143144246472090e+00,
        -1.16032004402742839e+00,
        -1.03622044471123109e-01,
    ],
    velocity: [
        1.66007664274403694e-03 * DAYS_PER_YEAR,
        7.69901118419740425e-03 * DAYS_PER_YEAR,
        -6.90460016972063023e-05 * DAYS_PER_YEAR,
    ],
    mass: 9.54791938424326609e-04 * SOLAR_MASS,
};

pub const SATURN: Body = Body {
    position: [
        8.34336671824457987e+00,
        4.12479856412430479e+00,
        -4.03523417114321381e-01,
    ],
    velocity: [
        -2.76742510726862411e-03 * DAYS_PER_YEAR,
        4.99852801234917238e-03 * DAYS_PER_YEAR,
        2.30417297573763929e-05 * DAYS_PER_YEAR,
    ],
    mass: 2.85885980666130812e-04 * SOLAR_MASS,
};

pub const URANUS: Body = Body {
    position: [
        1.28943695621391310e+01,
        -1.51111514016986312e+01,
        -2.23307578892655734e-01,
    ],
    velocity: [
        2.96460137564761618e-03 * DAYS_PER_YEAR,
        2.37847173959480950e-03 * DAYS_PER_YEAR,
        -2.96589568540237556e-05 * DAYS_PER_YEAR,
    ],
    mass: 4.36624404335156298e-05 * SOLAR_MASS,
};

pub const NEPTUNE: Body = Body {
    position: [
        1.53796971148509165e+01,
        -2.59193146099879641e+01,
        1.79258772950371181e-01,
    ],
    velocity: [
        2.68067772490389322e-03 * DAYS_PER_YEAR,
        1.62824170038242295e-03 * DAYS_PER_YEAR,
        -9.51592254519715870e-05 * DAYS_PER_YEAR,
    ],
    mass: 5.15138902046611451e-05 * SOLAR_MASS,
};

/// The sun followed by Jupiter, Saturn, Uranus and Neptune. The sun sits at index 0.
pub const JOVIAN_BODIES: [Body; JOVIAN_BODY_COUNT] = [SUN, JUPITER, SATURN, URANUS, NEPTUNE];
