use super::config::ConfigError;
use crate::core::boundary::{BoundaryError, BoundaryKind};
use crate::core::topology::TopologyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Topology construction failed: {source}")]
    Topology {
        #[from]
        source: TopologyError,
    },

    #[error("Invalid boundary: {source}")]
    Boundary {
        #[from]
        source: BoundaryError,
    },

    #[error("No movable particles: {num_particles} particle(s) under a {kind} boundary")]
    EmptyMovableRange {
        num_particles: usize,
        kind: BoundaryKind,
    },

    #[error("Position array holds {positions} particles but the neighbor index covers {indexed}")]
    ParticleCountMismatch { positions: usize, indexed: usize },
}
