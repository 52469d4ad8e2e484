//! Host configuration: group size, cut, ranking direction.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading or validating a [`TournamentConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings a host passes along with the ranked participants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Largest allowed group.
    pub max_group_size: usize,
    /// Who goes to the elimination: a fraction of the field if in (0, 1],
    /// an absolute count if above 1.
    pub cut: f64,
    /// Lower rating is better (the rating is a rank). Otherwise higher is better.
    pub rating_is_rank: bool,
    /// Sort planned group sizes descending instead of ascending.
    pub large_groups_first: bool,
    /// If > 0 the participants are teams. The scheduler treats them the same.
    pub team_ranking_n: usize,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            max_group_size: 7,
            cut: 0.8,
            rating_is_rank: true,
            large_groups_first: false,
            team_ranking_n: 0,
        }
    }
}

impl TournamentConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_group_size == 0 {
            return Err(ConfigError::Invalid("max_group_size must be positive".into()));
        }
        if !self.cut.is_finite() || self.cut <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "cut must be a positive fraction or count, got {}",
                self.cut
            )));
        }
        Ok(())
    }

    /// Number of finishers that go to the elimination out of `total`.
    pub fn resolve_cut(&self, total: usize) -> usize {
        let count = if self.cut <= 1.0 {
            self.cut * total as f64
        } else {
            self.cut
        };
        // Saturating float-to-int cast: NaN and negatives become 0.
        (count.round() as usize).min(total)
    }
}
