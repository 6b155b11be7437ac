//! Roadworks aggregation pipeline.
//!
//! Merges two snapshots, groups the result by road and derives the
//! per-road longest closure and significant-works list.

#![warn(missing_docs)]

pub mod config;
pub mod merge;
pub mod group;
pub mod longest;
pub mod significant;
pub mod pipeline;

pub use config::{AnalysisConfig, ConfigError, DEFAULT_SIGNIFICANT_WORK_THRESHOLD};
pub use merge::merge;
pub use group::{group_by, Group, Grouped};
pub use longest::{longest_per_group, DurationSummary, LongestByRoad};
pub use significant::{significant_per_group, SignificantByRoad};
pub use pipeline::{analyze, Analyzer, RoadworksAnalysis};

/// Error type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that abort an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// A work order's dates could not be parsed
    #[error("work order '{reference_number}' on road '{road}' has invalid dates")]
    InvalidDates {
        /// Road group being aggregated
        road: String,
        /// Reference number of the offending work order
        reference_number: String,
        /// Underlying date error
        #[source]
        source: roadworks_core::MalformedDateError,
    },
}

impl AnalysisError {
    /// The date error at the root of this failure.
    pub fn malformed_date(&self) -> &roadworks_core::MalformedDateError {
        match self {
            AnalysisError::InvalidDates { source, .. } => source,
        }
    }
}

/// Duration of `work`, tagging a date failure with the road and reference.
pub(crate) fn work_duration(road: &str, work: &roadworks_core::WorkOrder) -> Result<i64> {
    work.duration_days()
        .map_err(|source| AnalysisError::InvalidDates {
            road: road.to_string(),
            reference_number: work.reference_number().to_string(),
            source,
        })
}
