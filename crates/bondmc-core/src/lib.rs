//! # bondmc Core Library
//!
//! Metropolis Monte Carlo sampling for systems of bonded particles: a one-dimensional
//! chain or a two-dimensional mesh of particles held together by bond and angle
//! potentials.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless building blocks: particle models and
//!   dimensionality, boundary policies, the bond/angle topology with its per-particle
//!   neighbor index, bonded potentials, and the random stream abstraction.
//!
//! - **[`engine`]: The Logic Core.** The sampler itself. `MoveEngine` performs single
//!   particle trial moves using only the energy terms that reference the moved particle,
//!   and `SweepDriver` runs one sweep of such moves and reports the acceptance ratio.
//!
//! - **[`workflows`]: The Public API.** Builds every collaborator from a
//!   [`engine::config::SimulationConfig`] and runs a complete simulation.

pub mod core;
pub mod engine;
pub mod workflows;
