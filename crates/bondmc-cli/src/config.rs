mod defaults;

use crate::cli::{BoundaryArg, RunArgs};
use crate::error::{CliError, Result};
use bondmc::core::boundary::Boundary;
use bondmc::core::forcefield::params::ModelParams;
use bondmc::core::models::dimension::Dimension;
use bondmc::core::topology::graph::TopologyKind;
use bondmc::engine::config as core_config;
use clap::ValueEnum;
use defaults::DefaultsConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum TopologyType {
    Chain,
    Mesh,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialTopologyConfig {
    #[serde(rename = "type")]
    kind: Option<TopologyType>,
    #[serde(rename = "num-particles")]
    num_particles: Option<usize>,
    nx: Option<usize>,
    ny: Option<usize>,
    dimension: Option<Dimension>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBoundaryConfig {
    #[serde(rename = "type")]
    kind: Option<BoundaryArg>,
    #[serde(rename = "box-length")]
    box_length: Option<[f64; 3]>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialModelConfig {
    #[serde(rename = "params-file")]
    params_file: Option<PathBuf>,
    displacement: Option<f64>,
    #[serde(rename = "bond-coeff")]
    bond_coeff: Option<f64>,
    #[serde(rename = "angle-coeff")]
    angle_coeff: Option<f64>,
    #[serde(rename = "equilibrium-length")]
    equilibrium_length: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialRunConfig {
    sweeps: Option<usize>,
    seed: Option<u64>,
    #[serde(rename = "log-interval")]
    log_interval: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSimulationConfig {
    topology: Option<PartialTopologyConfig>,
    boundary: Option<PartialBoundaryConfig>,
    model: Option<PartialModelConfig>,
    run: Option<PartialRunConfig>,
}

impl PartialSimulationConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Builds the final simulation config. Precedence: CLI flags, then `--set` values,
    /// then the config file (and its model params file), then built-in defaults.
    pub fn merge_with_cli(
        mut self,
        args: &RunArgs,
    ) -> Result<core_config::SimulationConfig> {
        self.apply_set_values(&args.config.set_values)?;
        let defaults = DefaultsConfig::default();
        let base_dir = args
            .config
            .config
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let topology = self.topology_kind()?;
        let dimension = args
            .dimension
            .or(self.topology.as_ref().and_then(|t| t.dimension))
            .unwrap_or(defaults.dimension);
        let boundary = self.boundary_with_override(args.boundary)?;
        let model = self.model_params(&base_dir, args.displacement)?;

        let run_config = self.run.take().unwrap_or_default();
        let builder = core_config::SimulationConfigBuilder::new()
            .topology(topology)
            .dimension(dimension)
            .boundary(boundary)
            .model(model)
            .num_sweeps(args.sweeps.or(run_config.sweeps).unwrap_or(defaults.sweeps))
            .seed(args.seed.or(run_config.seed))
            .log_interval(run_config.log_interval.unwrap_or(defaults.log_interval));

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    /// Resolves only the topology and boundary, for commands that do not sample.
    pub fn resolve_layout(mut self, set_values: &[String]) -> Result<(TopologyKind, Boundary)> {
        self.apply_set_values(set_values)?;
        Ok((self.topology_kind()?, self.boundary_with_override(None)?))
    }

    fn topology_kind(&self) -> Result<TopologyKind> {
        let section = self.topology.as_ref().ok_or_else(|| {
            CliError::Config("`[topology]` section is required.".to_string())
        })?;
        let kind = section.kind.ok_or_else(|| {
            CliError::Config("`topology.type` is required ('chain' or 'mesh').".to_string())
        })?;
        match kind {
            TopologyType::Chain => {
                let num_particles = section.num_particles.ok_or_else(|| {
                    CliError::Config("A chain topology requires `num-particles`.".to_string())
                })?;
                Ok(TopologyKind::Chain { num_particles })
            }
            TopologyType::Mesh => match (section.nx, section.ny) {
                (Some(nx), Some(ny)) => Ok(TopologyKind::Mesh { nx, ny }),
                _ => Err(CliError::Config(
                    "A mesh topology requires both `nx` and `ny`.".to_string(),
                )),
            },
        }
    }

    fn boundary_with_override(&self, cli_kind: Option<BoundaryArg>) -> Result<Boundary> {
        let section = self.boundary.as_ref();
        let kind = cli_kind
            .or(section.and_then(|b| b.kind))
            .unwrap_or(DefaultsConfig::default().boundary);
        let box_length = section.and_then(|b| b.box_length);

        match kind {
            BoundaryArg::Open => {
                if box_length.is_some() {
                    debug!("Ignoring `boundary.box-length` for an open boundary.");
                }
                Ok(Boundary::open())
            }
            BoundaryArg::Periodic => {
                let lengths = box_length.ok_or_else(|| {
                    CliError::Config(
                        "A periodic boundary requires `boundary.box-length`.".to_string(),
                    )
                })?;
                Boundary::periodic(lengths).map_err(|e| CliError::Config(e.to_string()))
            }
        }
    }

    fn model_params(&self, base_dir: &Path, cli_displacement: Option<f64>) -> Result<ModelParams> {
        let section = self.model.as_ref();
        let from_file = match section.and_then(|m| m.params_file.as_ref()) {
            Some(file) => {
                let path = if file.is_absolute() {
                    file.clone()
                } else {
                    base_dir.join(file)
                };
                debug!("Loading model parameters from {:?}", path);
                Some(ModelParams::load(&path).map_err(|e| CliError::FileParsing {
                    path: path.clone(),
                    source: e.into(),
                })?)
            }
            None => None,
        };

        let pick = |inline: Option<f64>,
                    file_value: Option<f64>,
                    key: &str|
         -> Result<f64> {
            inline.or(file_value).ok_or_else(|| {
                CliError::Config(format!(
                    "`model.{}` is required either in the config file, a params file or via CLI argument.",
                    key
                ))
            })
        };

        Ok(ModelParams {
            displacement: pick(
                cli_displacement.or(section.and_then(|m| m.displacement)),
                from_file.map(|p| p.displacement),
                "displacement",
            )?,
            bond_coeff: pick(
                section.and_then(|m| m.bond_coeff),
                from_file.map(|p| p.bond_coeff),
                "bond-coeff",
            )?,
            angle_coeff: pick(
                section.and_then(|m| m.angle_coeff),
                from_file.map(|p| p.angle_coeff),
                "angle-coeff",
            )?,
            equilibrium_length: pick(
                section.and_then(|m| m.equilibrium_length),
                from_file.map(|p| p.equilibrium_length),
                "equilibrium-length",
            )?,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
                CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                ))
            })?;

            match key {
                "topology.type" => {
                    self.topology_mut().kind = Some(match value_str {
                        "chain" => TopologyType::Chain,
                        "mesh" => TopologyType::Mesh,
                        _ => return Err(invalid_value(key, value_str)),
                    });
                }
                "topology.num-particles" => {
                    self.topology_mut().num_particles = Some(parse_value(key, value_str)?);
                }
                "topology.nx" => self.topology_mut().nx = Some(parse_value(key, value_str)?),
                "topology.ny" => self.topology_mut().ny = Some(parse_value(key, value_str)?),
                "topology.dimension" => {
                    self.topology_mut().dimension = Some(parse_value(key, value_str)?);
                }
                "boundary.type" => {
                    self.boundary.get_or_insert_with(Default::default).kind = Some(
                        BoundaryArg::from_str(value_str, true)
                            .map_err(|_| invalid_value(key, value_str))?,
                    );
                }
                "model.displacement" => {
                    self.model_mut().displacement = Some(parse_value(key, value_str)?);
                }
                "model.bond-coeff" => {
                    self.model_mut().bond_coeff = Some(parse_value(key, value_str)?);
                }
                "model.angle-coeff" => {
                    self.model_mut().angle_coeff = Some(parse_value(key, value_str)?);
                }
                "model.equilibrium-length" => {
                    self.model_mut().equilibrium_length = Some(parse_value(key, value_str)?);
                }
                "run.sweeps" => self.run_mut().sweeps = Some(parse_value(key, value_str)?),
                "run.seed" => self.run_mut().seed = Some(parse_value(key, value_str)?),
                "run.log-interval" => {
                    self.run_mut().log_interval = Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }

    fn topology_mut(&mut self) -> &mut PartialTopologyConfig {
        self.topology.get_or_insert_with(Default::default)
    }

    fn model_mut(&mut self) -> &mut PartialModelConfig {
        self.model.get_or_insert_with(Default::default)
    }

    fn run_mut(&mut self) -> &mut PartialRunConfig {
        self.run.get_or_insert_with(Default::default)
    }
}

fn invalid_value(key: &str, value: &str) -> CliError {
    CliError::Config(format!("Invalid value for {}: {}", key, value))
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| invalid_value(key, value))
}
