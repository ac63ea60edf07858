//! Shared fixtures for integration tests

#![allow(dead_code)]

use gravity_sandbox::{Body, Scalar, Simulation, SimulationConfig, Vector};

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Heavy stationary star at the origin: density 100, radius 100, mass 1e6
pub fn star() -> Body {
    Body::new(Vector::ZERO, Vector::ZERO, 100.0, 100.0, WHITE)
}

/// Light body at (500, 0) moving at (0, 180): density 1, radius 30, mass 900
pub fn planet() -> Body {
    Body::new(Vector::new(500.0, 0.0), Vector::new(0.0, 180.0), 1.0, 30.0, WHITE)
}

/// Simulation holding only `bodies`, with the given config
pub fn simulation_with(config: SimulationConfig, bodies: Vec<Body>) -> Simulation {
    let mut sim = Simulation::new(config).expect("valid config");
    for body in bodies {
        sim.add_body(body).expect("valid body");
    }
    sim
}

pub fn approx_eq(a: Scalar, b: Scalar, tolerance: Scalar) -> bool {
    (a - b).abs() <= tolerance
}

pub fn relative_error(value: Scalar, reference: Scalar) -> Scalar {
    ((value - reference) / reference).abs()
}
