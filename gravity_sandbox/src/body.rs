//! Celestial bodies and the parameters used to spawn them

use crate::error::InvalidBodyError;
use crate::math::{Scalar, Vector};
use rand::Rng;

/// A body in the simulation with kinematic state and derived inverse mass
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Vector,
    /// Position before the most recent completed step, for render interpolation
    pub previous_position: Vector,
    pub velocity: Vector,
    /// Force accumulated during the current step
    pub force: Vector,
    /// Force of the previous step, needed by velocity Verlet
    pub previous_force: Vector,
    pub radius: Scalar,
    pub color: [f32; 4],
    density: Scalar,
    inverse_mass: Scalar,
}

impl Body {
    pub fn new(
        position: Vector,
        velocity: Vector,
        density: Scalar,
        radius: Scalar,
        color: [f32; 4],
    ) -> Self {
        Self {
            position,
            previous_position: position,
            velocity,
            force: Vector::ZERO,
            previous_force: Vector::ZERO,
            radius,
            color,
            density,
            inverse_mass: 1.0 / (density * radius * radius),
        }
    }

    /// Create a body from spawn parameters
    pub fn spawn(position: Vector, velocity: Vector, params: &SpawnParams) -> Self {
        Self::new(position, velocity, params.density, params.radius, params.color)
    }

    pub fn density(&self) -> Scalar {
        self.density
    }

    pub fn inverse_mass(&self) -> Scalar {
        self.inverse_mass
    }

    pub fn mass(&self) -> Scalar {
        1.0 / self.inverse_mass
    }

    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass()
    }

    /// Position blended between the last two steps, `alpha` in `[0, 1)`
    pub fn interpolated_position(&self, alpha: Scalar) -> Vector {
        self.previous_position.lerp(self.position, alpha)
    }

    /// Check the invariants a body must satisfy to enter the registry
    pub fn validate(&self) -> Result<(), InvalidBodyError> {
        if self.density.is_nan() || self.density <= 0.0 {
            return Err(InvalidBodyError::NonPositiveDensity(self.density));
        }
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(InvalidBodyError::NonPositiveRadius(self.radius));
        }
        if !self.position.is_finite() || !self.velocity.is_finite() || !self.inverse_mass.is_finite()
        {
            return Err(InvalidBodyError::NonFiniteState);
        }
        Ok(())
    }
}

/// Physical and visual attributes chosen when a spawn gesture starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnParams {
    pub density: Scalar,
    pub radius: Scalar,
    pub color: [f32; 4],
}

impl SpawnParams {
    pub fn new(density: Scalar, radius: Scalar, color: [f32; 4]) -> Self {
        Self {
            density,
            radius,
            color,
        }
    }

    /// Random density in `[1, 20]`, radius in `[20, 60]` and an opaque colour
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let density = (rng.gen::<Scalar>() * 20.0).max(1.0);
        let radius = (rng.gen::<Scalar>() * 60.0).max(20.0);
        let color = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>(), 1.0];
        Self::new(density, radius, color)
    }
}
