//! Analysis configuration.

use std::path::Path;

use roadworks_core::fields;
use serde::Deserialize;

/// Default minimum duration, in days, of a significant work.
pub const DEFAULT_SIGNIFICANT_WORK_THRESHOLD: i64 = 180;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum duration in days for a work to count as significant (inclusive)
    pub significant_work_threshold: i64,
    /// Field the records are grouped on
    pub group_field: String,
    /// Field the two snapshots are deduplicated on
    pub dedup_field: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            significant_work_threshold: DEFAULT_SIGNIFICANT_WORK_THRESHOLD,
            group_field: fields::ROAD.to_string(),
            dedup_field: fields::REFERENCE_NUMBER.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file; missing keys take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Override the significant-work threshold.
    pub fn with_threshold(mut self, days: i64) -> Self {
        self.significant_work_threshold = days;
        self
    }
}
