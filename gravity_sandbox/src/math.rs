//! Numeric types shared by the simulation core

/// Floating point type used for all physics quantities
pub type Scalar = f64;

/// Two-dimensional vector in simulation units
pub type Vector = glam::DVec2;
