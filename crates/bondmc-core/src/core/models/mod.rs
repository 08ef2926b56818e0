//! # Models Module
//!
//! Data structures describing the particles of a simulation.
//!
//! - [`dimension`] - Runtime dimensionality (two or three displaced axes)
//! - [`ids`] - Particle identifiers
//! - [`system`] - Particle positions and their initial layouts

pub mod dimension;
pub mod ids;
pub mod system;
