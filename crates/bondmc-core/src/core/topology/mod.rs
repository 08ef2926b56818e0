//! # Topology Module
//!
//! Connectivity of the particle system: which particle pairs are bonded, which triples
//! form angles, and, per particle, which of those terms it participates in.
//!
//! ## Key Components
//!
//! - [`graph`] - [`graph::Topology`] construction for chains and meshes
//! - [`neighbors`] - The per-particle [`neighbors::NeighborIndex`] used for incremental
//!   energy evaluation
//!
//! Both are built once before sampling starts and are immutable for the run.
//!
//! ```ignore
//! use bondmc::core::topology::{graph::{Topology, TopologyKind}, neighbors::NeighborIndex};
//!
//! let topology = Topology::build(TopologyKind::Chain { num_particles: 64 })?;
//! let index = NeighborIndex::build(&topology)?;
//! assert!(index.record(10).bonds().len() <= index.capacity().bonds);
//! ```

pub mod graph;
pub mod neighbors;

use crate::core::models::ids::ParticleId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("Topology must contain at least one particle")]
    Empty,

    #[error("Mesh dimensions must be positive, got {nx} x {ny}")]
    InvalidMesh { nx: usize, ny: usize },

    #[error("Particle id {id} referenced by a {term} is out of range for {num_particles} particles")]
    IndexOutOfRange {
        id: ParticleId,
        term: &'static str,
        num_particles: usize,
    },

    #[error("Particle {id} participates in more than {capacity} {term}s")]
    CapacityExceeded {
        id: ParticleId,
        term: &'static str,
        capacity: usize,
    },
}
