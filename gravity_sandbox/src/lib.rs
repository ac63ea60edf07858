//! 2D N-body Gravity Sandbox
//!
//! The simulation core of an interactive gravity toy: bodies attract each
//! other under Newtonian gravity and are advanced with a fixed-step
//! integrator that is independent of the host's frame rate. While the user
//! drags out the launch velocity of a new body, a trajectory preview shows
//! where it will go.
//!
//! - **Body registry**: append-only storage with stable ids
//! - **Force model**: softened pairwise gravity, O(N²)
//! - **Integrator**: velocity Verlet (default) or semi-implicit Euler
//! - **Scheduler**: accumulator that turns frame time into fixed steps
//! - **Predictor**: one-body preview against a frozen snapshot
//!
//! Windowing, input polling and drawing belong to the host.

pub mod body;
pub mod config;
pub mod energy;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod math;
pub mod predictor;
pub mod registry;
pub mod scheduler;
pub mod simulation;

pub use body::{Body, SpawnParams};
pub use config::{PhysicsConfig, PredictionConfig, SimulationConfig};
pub use energy::EnergyReport;
pub use error::{ConfigError, InvalidBodyError};
pub use integrator::IntegratorKind;
pub use math::{Scalar, Vector};
pub use predictor::TrajectoryPredictor;
pub use registry::{BodyId, BodyRegistry};
pub use scheduler::{Advance, FixedStepScheduler};
pub use simulation::{Candidate, Simulation};

/// Default tuning constants
pub mod constants {
    use crate::math::Scalar;

    /// Gravitational constant (scaled for screen-space units)
    pub const G: Scalar = 30.0;

    /// Floor for squared separation in the force model
    pub const SOFTENING: Scalar = 1e-2;

    /// Physics steps per simulated second
    pub const STEPS_PER_SECOND: u32 = 120;

    pub const FIXED_DT: Scalar = 1.0 / STEPS_PER_SECOND as Scalar;

    /// Catch-up cap: two simulated seconds per frame report
    pub const MAX_STEPS_PER_ADVANCE: u32 = 2 * STEPS_PER_SECOND;

    /// Points in a trajectory preview
    pub const PATH_POINTS: usize = 10_000;

    /// Colours of the default scene
    pub mod palette {
        pub const ORANGE: [f32; 4] = [1.0, 161.0 / 255.0, 0.0, 1.0];
        pub const BLUE: [f32; 4] = [0.0, 121.0 / 255.0, 241.0 / 255.0, 1.0];
        pub const RED: [f32; 4] = [230.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0, 1.0];
        pub const GREEN: [f32; 4] = [0.0, 228.0 / 255.0, 48.0 / 255.0, 1.0];
    }
}
