//! # Workflows Module
//!
//! High-level entry points that assemble the `core` collaborators and the `engine`
//! sampler into complete procedures.
//!
//! - [`simulate`] - Build a chain or mesh from a [`crate::engine::config::SimulationConfig`]
//!   and run a number of Metropolis sweeps over it.
//!
//! ```ignore
//! use bondmc::engine::progress::ProgressReporter;
//! use bondmc::workflows::simulate;
//!
//! let result = simulate::run(&config, &ProgressReporter::new())?;
//! println!("mean acceptance {:.3}", result.mean_acceptance());
//! ```

pub mod simulate;
