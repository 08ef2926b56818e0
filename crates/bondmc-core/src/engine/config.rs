use crate::core::boundary::Boundary;
use crate::core::forcefield::params::ModelParams;
use crate::core::models::dimension::Dimension;
use crate::core::topology::graph::TopologyKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value {value} for '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub num_sweeps: usize,
    /// `None` draws a fresh seed from the operating system; the seed actually used is
    /// reported in the simulation result.
    pub seed: Option<u64>,
    /// Sweeps between progress log lines.
    pub log_interval: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub topology: TopologyKind,
    pub dimension: Dimension,
    pub boundary: Boundary,
    pub model: ModelParams,
    pub run: RunConfig,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    topology: Option<TopologyKind>,
    dimension: Option<Dimension>,
    boundary: Option<Boundary>,
    model: Option<ModelParams>,
    num_sweeps: Option<usize>,
    seed: Option<u64>,
    log_interval: Option<usize>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topology(mut self, kind: TopologyKind) -> Self {
        self.topology = Some(kind);
        self
    }
    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }
    pub fn model(mut self, model: ModelParams) -> Self {
        self.model = Some(model);
        self
    }
    pub fn num_sweeps(mut self, sweeps: usize) -> Self {
        self.num_sweeps = Some(sweeps);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn log_interval(mut self, interval: usize) -> Self {
        self.log_interval = Some(interval);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let model = self.model.ok_or(ConfigError::MissingParameter("model"))?;
        validate_model(&model)?;

        let num_sweeps = self
            .num_sweeps
            .ok_or(ConfigError::MissingParameter("num_sweeps"))?;
        if num_sweeps == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "num_sweeps",
                value: 0.0,
                reason: "at least one sweep is required",
            });
        }
        let log_interval = self.log_interval.unwrap_or(100);
        if log_interval == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "log_interval",
                value: 0.0,
                reason: "must be at least 1",
            });
        }

        Ok(SimulationConfig {
            topology: self
                .topology
                .ok_or(ConfigError::MissingParameter("topology"))?,
            dimension: self.dimension.unwrap_or_default(),
            boundary: self
                .boundary
                .ok_or(ConfigError::MissingParameter("boundary"))?,
            model,
            run: RunConfig {
                num_sweeps,
                seed: self.seed,
                log_interval,
            },
        })
    }
}

fn validate_model(model: &ModelParams) -> Result<(), ConfigError> {
    let positive = [
        ("displacement", model.displacement),
        ("equilibrium_length", model.equilibrium_length),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name,
                value,
                reason: "must be finite and positive",
            });
        }
    }
    let non_negative = [
        ("bond_coeff", model.bond_coeff),
        ("angle_coeff", model.angle_coeff),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name,
                value,
                reason: "must be finite and non-negative",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ModelParams {
        ModelParams {
            displacement: 0.2,
            bond_coeff: 50.0,
            angle_coeff: 5.0,
            equilibrium_length: 1.0,
        }
    }

    fn complete_builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
            .topology(TopologyKind::Chain { num_particles: 10 })
            .boundary(Boundary::open())
            .model(model())
            .num_sweeps(50)
    }

    #[test]
    fn build_applies_defaults_for_optional_values() {
        let config = complete_builder().build().unwrap();
        assert_eq!(config.dimension, Dimension::Two);
        assert_eq!(config.run.log_interval, 100);
        assert_eq!(config.run.seed, None);
        assert_eq!(config.run.num_sweeps, 50);
    }

    #[test]
    fn build_keeps_explicit_values() {
        let config = complete_builder()
            .dimension(Dimension::Three)
            .seed(Some(9))
            .log_interval(5)
            .build()
            .unwrap();
        assert_eq!(config.dimension, Dimension::Three);
        assert_eq!(config.run.seed, Some(9));
        assert_eq!(config.run.log_interval, 5);
    }

    #[test]
    fn build_reports_missing_topology() {
        let result = SimulationConfigBuilder::new()
            .boundary(Boundary::open())
            .model(model())
            .num_sweeps(1)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("topology")));
    }

    #[test]
    fn build_reports_missing_model() {
        let result = SimulationConfigBuilder::new()
            .topology(TopologyKind::Chain { num_particles: 3 })
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("model")));
    }

    #[test]
    fn build_rejects_non_positive_displacement() {
        let result = complete_builder()
            .model(ModelParams {
                displacement: 0.0,
                ..model()
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "displacement",
                ..
            })
        ));
    }

    #[test]
    fn build_rejects_negative_coefficients() {
        let result = complete_builder()
            .model(ModelParams {
                angle_coeff: -1.0,
                ..model()
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "angle_coeff",
                ..
            })
        ));
    }

    #[test]
    fn build_rejects_zero_sweeps() {
        let result = complete_builder().num_sweeps(0).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "num_sweeps",
                ..
            })
        ));
    }
}
