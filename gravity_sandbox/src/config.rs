//! Tunable simulation parameters
//!
//! Every field has a default from [`crate::constants`], so a TOML file only
//! needs to name the values it overrides:
//!
//! ```toml
//! [physics]
//! gravitational_constant = 30.0
//! integrator = "semi_implicit_euler"
//!
//! [prediction]
//! steps = 2000
//! ```

use crate::constants;
use crate::error::ConfigError;
use crate::integrator::IntegratorKind;
use crate::math::Scalar;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub prediction: PredictionConfig,
}

/// Parameters of the real-time simulation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravitational constant `G`
    pub gravitational_constant: Scalar,
    /// Floor applied to squared separation before dividing
    pub softening: Scalar,
    /// Size of one physics step in seconds
    pub fixed_dt: Scalar,
    /// Catch-up cap per frame report; `0` runs every owed step
    pub max_steps_per_advance: u32,
    pub integrator: IntegratorKind,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: constants::G,
            softening: constants::SOFTENING,
            fixed_dt: constants::FIXED_DT,
            max_steps_per_advance: constants::MAX_STEPS_PER_ADVANCE,
            integrator: IntegratorKind::default(),
        }
    }
}

/// Parameters of the spawn preview
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PredictionConfig {
    /// Number of predicted points
    pub steps: usize,
    /// Simulated time between two points
    pub dt: Scalar,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            steps: constants::PATH_POINTS,
            dt: constants::FIXED_DT,
        }
    }
}

impl PhysicsConfig {
    /// Catch-up cap as the scheduler expects it
    pub fn step_cap(&self) -> Option<u32> {
        (self.max_steps_per_advance > 0).then_some(self.max_steps_per_advance)
    }
}

impl SimulationConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) => {
                log::info!("Config file {} not readable ({}). Using defaults.", path.display(), e);
                Self::default()
            }
            Err(e) => {
                log::warn!("Rejected config file {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Reject values the scheduler or predictor cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if !(physics.fixed_dt > 0.0) || !physics.fixed_dt.is_finite() {
            return Err(ConfigError::invalid(format!(
                "physics.fixed_dt must be positive and finite, got {}",
                physics.fixed_dt
            )));
        }
        if !physics.softening.is_finite() || physics.softening <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "physics.softening must be positive and finite, got {}",
                physics.softening
            )));
        }
        if !physics.gravitational_constant.is_finite() {
            return Err(ConfigError::invalid("physics.gravitational_constant must be finite"));
        }
        let prediction = &self.prediction;
        if prediction.steps == 0 {
            return Err(ConfigError::invalid("prediction.steps must be at least 1"));
        }
        if !(prediction.dt > 0.0) || !prediction.dt.is_finite() {
            return Err(ConfigError::invalid(format!(
                "prediction.dt must be positive and finite, got {}",
                prediction.dt
            )));
        }
        Ok(())
    }
}
