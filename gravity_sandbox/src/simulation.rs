//! The simulation context owned by the host application
//!
//! `Simulation` bundles the body registry, the fixed-step scheduler, the
//! trajectory predictor and the state of an in-progress spawn gesture. The
//! host calls [`Simulation::advance`] once per rendered frame and forwards
//! pointer events to the `on_*` methods.

use crate::body::{Body, SpawnParams};
use crate::config::{PhysicsConfig, SimulationConfig};
use crate::constants::palette;
use crate::energy::{total_momentum, EnergyReport};
use crate::error::{ConfigError, InvalidBodyError};
use crate::math::{Scalar, Vector};
use crate::predictor::TrajectoryPredictor;
use crate::registry::{BodyId, BodyRegistry};
use crate::scheduler::FixedStepScheduler;

/// A body being configured by a press-and-drag gesture
#[derive(Debug, Clone)]
pub struct Candidate {
    pub body: Body,
    /// Where the gesture started; the drag vector from here is the launch velocity
    pub press_position: Vector,
}

/// The physics simulation state
pub struct Simulation {
    config: SimulationConfig,
    registry: BodyRegistry,
    scheduler: FixedStepScheduler,
    predictor: TrajectoryPredictor,
    candidate: Option<Candidate>,
    preview: Vec<Vector>,
    steps_taken: u64,
    simulated_time: Scalar,
    dropped_time: Scalar,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulationConfig) -> Self {
        let scheduler = FixedStepScheduler::new(config.physics.fixed_dt, config.physics.step_cap());
        let predictor = TrajectoryPredictor::from_config(&config.prediction, &config.physics);
        Self {
            config,
            registry: BodyRegistry::new(),
            scheduler,
            predictor,
            candidate: None,
            preview: Vec::new(),
            steps_taken: 0,
            simulated_time: 0.0,
            dropped_time: 0.0,
        }
    }

    /// Seed the four-body scene: a heavy star and three orbiters
    pub fn init_default_system(&mut self, center: Vector) -> Result<(), InvalidBodyError> {
        let scene = [
            Body::new(center, Vector::ZERO, 100.0, 100.0, palette::ORANGE),
            Body::new(
                center + Vector::new(500.0, 0.0),
                Vector::new(0.0, 3.0 * 60.0),
                1.0,
                30.0,
                palette::BLUE,
            ),
            Body::new(
                center - Vector::new(500.0, 0.0),
                Vector::new(0.0, -3.0 * 60.0),
                2.0,
                30.0,
                palette::RED,
            ),
            Body::new(
                center + Vector::new(0.0, 900.0),
                Vector::new(3.0 * 60.0, 0.0),
                10.0,
                50.0,
                palette::GREEN,
            ),
        ];
        for body in scene {
            self.registry.add(body)?;
        }
        Ok(())
    }

    /// Step the simulation forward by a frame duration in seconds
    ///
    /// Returns the interpolation factor for drawing bodies between their
    /// previous and current positions.
    pub fn advance(&mut self, frame_dt: Scalar) -> Scalar {
        let physics = &self.config.physics;
        let (integrator, g, softening) =
            (physics.integrator, physics.gravitational_constant, physics.softening);

        let bodies = self.registry.bodies_mut();
        let result = self
            .scheduler
            .advance(frame_dt, |dt| integrator.step(bodies, g, softening, dt));

        self.steps_taken += u64::from(result.steps);
        self.simulated_time += Scalar::from(result.steps) * self.scheduler.fixed_dt();
        self.dropped_time += result.dropped;

        // The preview must see the registry as the step loop left it
        if result.steps > 0 && self.candidate.is_some() {
            self.refresh_preview();
        }

        result.alpha
    }

    /// Validate and append a body
    pub fn add_body(&mut self, body: Body) -> Result<BodyId, InvalidBodyError> {
        self.registry.add(body)
    }

    /// Start a spawn gesture at `position`
    ///
    /// Invalid parameters are rejected up front so no preview is computed
    /// for a body that could never be committed.
    pub fn on_press_start(
        &mut self,
        position: Vector,
        params: SpawnParams,
    ) -> Result<(), InvalidBodyError> {
        let body = Body::spawn(position, Vector::ZERO, &params);
        if let Err(e) = body.validate() {
            log::warn!("Rejected spawn at {}: {}", position, e);
            return Err(e);
        }

        self.candidate = Some(Candidate {
            body,
            press_position: position,
        });
        self.refresh_preview();
        Ok(())
    }

    /// Update the launch velocity of the candidate and recompute its preview
    pub fn on_drag(&mut self, current: Vector) {
        let Some(candidate) = self.candidate.as_mut() else {
            return;
        };
        candidate.body.velocity = current - candidate.press_position;
        self.refresh_preview();
    }

    /// Finish the gesture and commit the candidate to the registry
    ///
    /// Returns `Ok(None)` when no gesture was in progress. A rejected body is
    /// discarded and the registry stays as it was.
    pub fn on_release(&mut self, current: Vector) -> Result<Option<BodyId>, InvalidBodyError> {
        let Some(mut candidate) = self.candidate.take() else {
            return Ok(None);
        };
        self.preview.clear();

        candidate.body.velocity = current - candidate.press_position;
        match self.registry.add(candidate.body) {
            Ok(id) => {
                log::debug!("Committed body {} at {}", id.index(), candidate.press_position);
                Ok(Some(id))
            }
            Err(e) => {
                log::warn!("Discarded spawned body: {}", e);
                Err(e)
            }
        }
    }

    /// Abandon the gesture without committing anything
    pub fn cancel_spawn(&mut self) {
        self.candidate = None;
        self.preview.clear();
    }

    /// Rerun the predictor for the current candidate, if any
    pub fn refresh_preview(&mut self) {
        match &self.candidate {
            Some(candidate) => self.predictor.predict_into(
                &candidate.body,
                self.registry.as_slice(),
                &self.config.physics,
                &mut self.preview,
            ),
            None => self.preview.clear(),
        }
    }

    /// Predicted path of the candidate, present while a gesture is active
    pub fn preview(&self) -> Option<&[Vector]> {
        self.candidate.as_ref().map(|_| self.preview.as_slice())
    }

    pub fn candidate(&self) -> Option<&Candidate> {
        self.candidate.as_ref()
    }

    pub fn bodies(&self) -> &[Body] {
        self.registry.as_slice()
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.config.physics
    }

    pub fn scheduler(&self) -> &FixedStepScheduler {
        &self.scheduler
    }

    pub fn energy(&self) -> EnergyReport {
        EnergyReport::measure(self.registry.as_slice(), &self.config.physics)
    }

    pub fn total_momentum(&self) -> Vector {
        total_momentum(self.registry.as_slice())
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Simulated time advanced by executed steps
    pub fn simulated_time(&self) -> Scalar {
        self.simulated_time
    }

    /// Simulated time discarded by the catch-up cap
    pub fn dropped_time(&self) -> Scalar {
        self.dropped_time
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid_config(SimulationConfig::default())
    }
}
