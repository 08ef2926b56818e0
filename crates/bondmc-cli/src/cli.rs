use bondmc::core::models::dimension::Dimension;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "bondmc - Metropolis Monte Carlo sampling of bonded particle chains and meshes.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run Metropolis sweeps over a chain or mesh and print a summary.
    Run(RunArgs),
    /// Build the topology described by a config file and report its neighbor index.
    Inspect(InspectArgs),
}

/// Config file location and generic overrides shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to the simulation configuration file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S run.sweeps=500
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Override the number of sweeps.
    #[arg(short = 'n', long, value_name = "INT")]
    pub sweeps: Option<usize>,

    /// Override the random seed. Without a seed anywhere, one is drawn at random.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the number of displaced axes ('2d' or '3d').
    #[arg(short, long, value_name = "DIM")]
    pub dimension: Option<Dimension>,

    /// Override the boundary type.
    #[arg(short, long, value_enum)]
    pub boundary: Option<BoundaryArg>,

    /// Override the maximum trial displacement per axis.
    #[arg(long, value_name = "FLOAT")]
    pub displacement: Option<f64>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryArg {
    Periodic,
    Open,
}
