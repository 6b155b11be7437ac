//! The analysis pipeline - merge, group and aggregate.

use roadworks_core::RecordSet;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::group::{group_by, Grouped};
use crate::longest::{longest_per_group, LongestByRoad};
use crate::merge::merge;
use crate::significant::{significant_per_group, SignificantByRoad};
use crate::Result;

/// Everything derived from one pair of snapshots.
#[derive(Debug, Clone)]
pub struct RoadworksAnalysis {
    /// Threshold the significant works were selected with
    pub threshold_days: i64,
    /// Merged work orders grouped by road, busiest first
    pub grouped: Grouped,
    /// Longest closure per road
    pub longest: LongestByRoad,
    /// Significant works per road, longest first
    pub significant: SignificantByRoad,
}

impl RoadworksAnalysis {
    /// Number of work orders after the merge.
    pub fn total_works(&self) -> usize {
        self.grouped.total_works()
    }
}

/// Runs the aggregation pipeline:
/// ```text
/// Merge → Group → { Longest, Significant }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    /// Analyze two snapshots; `first` wins on duplicate keys.
    pub fn run(&self, first: RecordSet, second: RecordSet) -> Result<RoadworksAnalysis> {
        info!(
            "Merging snapshots of {} and {} work orders",
            first.len(),
            second.len()
        );
        let merged = merge(first, second, &self.config.dedup_field);

        let grouped = group_by(merged, &self.config.group_field);
        info!(
            "Grouped {} work orders into {} roads",
            grouped.total_works(),
            grouped.len()
        );

        let longest = longest_per_group(&grouped)?;
        let significant = significant_per_group(&grouped, self.config.significant_work_threshold)?;

        Ok(RoadworksAnalysis {
            threshold_days: self.config.significant_work_threshold,
            grouped,
            longest,
            significant,
        })
    }
}

/// Analyze two snapshots with `config`.
pub fn analyze(first: RecordSet, second: RecordSet, config: &AnalysisConfig) -> Result<RoadworksAnalysis> {
    Analyzer::new().with_config(config.clone()).run(first, second)
}
