//! Numerical integration of body motion
//!
//! Velocity Verlet is the default scheme. It is second order and symplectic,
//! so the energy error of a bound orbit oscillates instead of growing over
//! the open-ended lifetime of an interactive session. Semi-implicit Euler is
//! kept as a cheaper first-order alternative; it is also symplectic but its
//! energy error is noticeably larger at the same step size.
//!
//! One step of velocity Verlet:
//! 1. x(t + dt) = x(t) + v(t) * dt + 0.5 * a(t) * dt^2
//! 2. recompute forces at x(t + dt)
//! 3. v(t + dt) = v(t) + 0.5 * (a(t) + a(t + dt)) * dt

use crate::body::Body;
use crate::forces::{accumulate_forces, force_from_sources};
use crate::math::{Scalar, Vector};
use serde::{Deserialize, Serialize};

/// Integration scheme used for every step of a simulation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegratorKind {
    #[default]
    VelocityVerlet,
    SemiImplicitEuler,
}

impl IntegratorKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::VelocityVerlet => "Velocity Verlet",
            Self::SemiImplicitEuler => "Semi-implicit Euler",
        }
    }

    pub fn order(self) -> usize {
        match self {
            Self::VelocityVerlet => 2,
            Self::SemiImplicitEuler => 1,
        }
    }

    /// Advance every body by `dt` under their mutual gravity
    pub fn step(self, bodies: &mut [Body], g: Scalar, softening: Scalar, dt: Scalar) {
        match self {
            Self::VelocityVerlet => {
                for body in bodies.iter_mut() {
                    body.force = Vector::ZERO;
                    integrate_position(body, dt);
                }
                accumulate_forces(bodies, g, softening);
                for body in bodies.iter_mut() {
                    integrate_velocity(body, dt);
                    finish_step(body);
                }
            }
            Self::SemiImplicitEuler => {
                for body in bodies.iter_mut() {
                    body.force = Vector::ZERO;
                }
                accumulate_forces(bodies, g, softening);
                for body in bodies.iter_mut() {
                    integrate_semi_implicit(body, dt);
                    finish_step(body);
                }
            }
        }
    }

    /// Advance a single body by `dt` in the field of fixed `sources`
    ///
    /// The sources are only read; their own motion is not simulated.
    pub fn step_in_field(
        self,
        body: &mut Body,
        sources: &[Body],
        g: Scalar,
        softening: Scalar,
        dt: Scalar,
    ) {
        match self {
            Self::VelocityVerlet => {
                integrate_position(body, dt);
                body.force = force_from_sources(body, sources, g, softening);
                integrate_velocity(body, dt);
            }
            Self::SemiImplicitEuler => {
                body.force = force_from_sources(body, sources, g, softening);
                integrate_semi_implicit(body, dt);
            }
        }
        finish_step(body);
    }
}

/// Verlet position phase, driven by the force of the previous step
pub fn integrate_position(body: &mut Body, dt: Scalar) {
    body.previous_position = body.position;
    body.position +=
        body.velocity * dt + body.previous_force * (0.5 * dt * dt * body.inverse_mass());
}

/// Verlet velocity phase, averaging the previous and current force
pub fn integrate_velocity(body: &mut Body, dt: Scalar) {
    body.velocity += (body.previous_force + body.force) * (0.5 * dt * body.inverse_mass());
}

/// Kick with the current force, then drift with the new velocity
pub fn integrate_semi_implicit(body: &mut Body, dt: Scalar) {
    body.velocity += body.force * (dt * body.inverse_mass());
    body.previous_position = body.position;
    body.position += body.velocity * dt;
}

/// Carry the force over to the next step and clear the accumulator
fn finish_step(body: &mut Body) {
    body.previous_force = body.force;
    body.force = Vector::ZERO;
}
