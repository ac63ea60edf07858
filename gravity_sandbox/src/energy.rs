//! Conserved-quantity diagnostics

use crate::body::Body;
use crate::config::PhysicsConfig;
use crate::math::{Scalar, Vector};

/// Mechanical energy of a set of bodies at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub kinetic: Scalar,
    pub potential: Scalar,
}

impl EnergyReport {
    pub fn measure(bodies: &[Body], physics: &PhysicsConfig) -> Self {
        Self {
            kinetic: kinetic_energy(bodies),
            potential: potential_energy(bodies, physics.gravitational_constant, physics.softening),
        }
    }

    pub fn total(&self) -> Scalar {
        self.kinetic + self.potential
    }
}

/// Sum of 0.5 * m * v^2
pub fn kinetic_energy(bodies: &[Body]) -> Scalar {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass() * b.velocity.length_squared())
        .sum()
}

/// Sum of -G * m1 * m2 / r over unordered pairs
///
/// r^2 is floored at `softening`, matching the force model.
pub fn potential_energy(bodies: &[Body], g: Scalar, softening: Scalar) -> Scalar {
    let mut potential = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let r2 = (b.position - a.position).length_squared().max(softening);
            potential -= g * a.mass() * b.mass() / r2.sqrt();
        }
    }
    potential
}

/// Sum of m * v
pub fn total_momentum(bodies: &[Body]) -> Vector {
    bodies.iter().map(Body::momentum).sum()
}
