//! # Force Field Module
//!
//! Bonded interactions between particles and the energy sums built on top of them.
//!
//! ## Key Components
//!
//! - [`potentials`] - Pure bond and angle potential functions
//! - [`evaluator`] - The [`evaluator::LocalEnergyEvaluator`] seam and its default
//!   harmonic/cosine implementation
//! - [`params`] - Model coefficients (step size, force constants, rest length)
//! - [`energy`] - Local (per-particle) and whole-system energy sums
//! - [`term`] - Energy aggregation split into bond and angle contributions
//!
//! ## Usage
//!
//! The sampler only ever calls [`energy::local_energy`], which visits the terms listed
//! for one particle in the neighbor index. [`energy::system_energy`] visits every term
//! once and is meant for reporting and verification.
//!
//! ```ignore
//! use bondmc::core::forcefield::{energy, evaluator::HarmonicCosine};
//!
//! let e = energy::local_energy(positions, id, &index, &HarmonicCosine, &boundary, &params);
//! println!("bond {:.3} angle {:.3}", e.bond, e.angle);
//! ```

pub mod energy;
pub mod evaluator;
pub mod params;
pub(crate) mod potentials;
pub mod term;
