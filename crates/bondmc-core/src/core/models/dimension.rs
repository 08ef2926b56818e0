use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of coordinate axes a trial move displaces.
///
/// Positions are always stored as three-component points. In two dimensions the `z`
/// component is never displaced and no random draw is spent on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    #[default]
    #[serde(alias = "2d", alias = "2")]
    Two,
    #[serde(alias = "3d", alias = "3")]
    Three,
}

impl Dimension {
    #[inline]
    pub const fn axes(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.axes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid dimension '{0}'. Expected '2d' or '3d'.")]
pub struct ParseDimensionError(String);

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "2d" | "two" => Ok(Dimension::Two),
            "3" | "3d" | "three" => Ok(Dimension::Three),
            _ => Err(ParseDimensionError(s.to_string())),
        }
    }
}
