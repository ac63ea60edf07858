//! Trajectory preview for a body that has not been committed yet
//!
//! The preview integrates the candidate alone against a snapshot of the
//! registry. Registry bodies act as fixed gravity sources and do not move
//! during the preview, so the path is an approximation of what the full
//! mutual simulation will do once the body is released.

use crate::body::Body;
use crate::config::{PhysicsConfig, PredictionConfig};
use crate::integrator::IntegratorKind;
use crate::math::{Scalar, Vector};

#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPredictor {
    steps: usize,
    dt: Scalar,
    integrator: IntegratorKind,
}

impl TrajectoryPredictor {
    pub fn new(steps: usize, dt: Scalar, integrator: IntegratorKind) -> Self {
        Self {
            steps,
            dt,
            integrator,
        }
    }

    /// Predictor using the same integrator as the live simulation
    pub fn from_config(prediction: &PredictionConfig, physics: &PhysicsConfig) -> Self {
        Self::new(prediction.steps, prediction.dt, physics.integrator)
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn dt(&self) -> Scalar {
        self.dt
    }

    /// Simulated time covered by one preview
    pub fn horizon(&self) -> Scalar {
        self.steps as Scalar * self.dt
    }

    pub fn predict(&self, candidate: &Body, sources: &[Body], physics: &PhysicsConfig) -> Vec<Vector> {
        let mut path = Vec::with_capacity(self.steps);
        self.predict_into(candidate, sources, physics, &mut path);
        path
    }

    /// Like [`predict`](Self::predict) but reuses `path`'s allocation
    ///
    /// `path` is cleared and then holds one position per step, the
    /// candidate's position after that step.
    pub fn predict_into(
        &self,
        candidate: &Body,
        sources: &[Body],
        physics: &PhysicsConfig,
        path: &mut Vec<Vector>,
    ) {
        path.clear();
        path.reserve(self.steps);

        let mut body = candidate.clone();
        for _ in 0..self.steps {
            self.integrator.step_in_field(
                &mut body,
                sources,
                physics.gravitational_constant,
                physics.softening,
                self.dt,
            );
            path.push(body.position);
        }
    }
}

impl Default for TrajectoryPredictor {
    fn default() -> Self {
        Self::from_config(&PredictionConfig::default(), &PhysicsConfig::default())
    }
}
