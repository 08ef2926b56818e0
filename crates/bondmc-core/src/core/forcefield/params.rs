use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Coefficients of the bonded model and the trial-move step size. Read-only for a run.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModelParams {
    /// Maximum displacement per axis of a trial move.
    pub displacement: f64,
    pub bond_coeff: f64,
    pub angle_coeff: f64,
    /// Rest length of every bond.
    pub equilibrium_length: f64,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl ModelParams {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
