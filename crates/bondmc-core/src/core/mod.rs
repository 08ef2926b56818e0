//! # Core Module
//!
//! Fundamental building blocks for bonded-particle Monte Carlo simulations.
//!
//! ## Architecture
//!
//! - **Particle Representation** ([`models`]) - Positions, dimensionality and initial layouts
//! - **Simulation Domain** ([`boundary`]) - Periodic and open boundary policies
//! - **Connectivity** ([`topology`]) - Bonds, angles and the per-particle neighbor index
//! - **Energy Calculations** ([`forcefield`]) - Bonded potentials and local energy sums
//! - **Randomness** ([`random`]) - The random stream consumed by the sampler
//!
//! Everything in this module is immutable during a run except particle positions and
//! the random stream, both of which are owned by the caller and passed in explicitly.

pub mod boundary;
pub mod forcefield;
pub mod models;
pub mod random;
pub mod topology;
