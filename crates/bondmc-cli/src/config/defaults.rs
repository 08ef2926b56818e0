use crate::cli::BoundaryArg;
use bondmc::core::models::dimension::Dimension;

pub struct DefaultsConfig {
    pub dimension: Dimension,
    pub boundary: BoundaryArg,
    pub sweeps: usize,
    pub log_interval: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Two,
            boundary: BoundaryArg::Open,
            sweeps: 1000,
            log_interval: 100,
        }
    }
}
