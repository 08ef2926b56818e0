//! # Engine Module
//!
//! The Metropolis sampler for bonded particle systems.
//!
//! ## Overview
//!
//! A sweep is a tight, single-threaded loop of trial moves. Each trial move displaces one
//! particle, evaluates the energy change using only the bonds and angles listed for that
//! particle in the neighbor index, and accepts or reverts the move with the Metropolis
//! criterion. Moves see the latest committed positions of their neighbours, including
//! neighbours moved earlier in the same sweep, so moves are never reordered or batched.
//!
//! ## Architecture
//!
//! - **Trial Moves** ([`moves`]) - `MoveEngine`: displacement, local energy delta, acceptance
//! - **Sweeps** ([`sweep`]) - `SweepDriver`: movable id range, sweep loop, acceptance ratio
//! - **Configuration** ([`config`]) - Simulation parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod moves;
pub mod progress;
pub mod sweep;

#[cfg(test)]
pub(crate) mod testing;
