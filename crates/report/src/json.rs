//! JSON report.

use roadworks_analysis::{DurationSummary, RoadworksAnalysis};
use roadworks_core::WorkOrder;
use serde::Serialize;

use crate::{ReportError, Result};

/// One road of the JSON report.
#[derive(Debug, Clone, Serialize)]
pub struct RoadEntry<'a> {
    /// Road name
    pub road: &'a str,
    /// Number of planned works on the road
    pub total_works: usize,
    /// Longest closure
    pub longest_work: &'a DurationSummary,
    /// Works at or over the threshold, longest first
    pub significant_works: &'a [WorkOrder],
}

/// JSON report formatter.
#[derive(Debug)]
pub struct JsonReport<'a> {
    analysis: &'a RoadworksAnalysis,
}

impl<'a> JsonReport<'a> {
    /// Create a formatter for `analysis`.
    pub fn new(analysis: &'a RoadworksAnalysis) -> Self {
        Self { analysis }
    }

    /// Road entries in grouping order.
    pub fn entries(&self) -> Result<Vec<RoadEntry<'a>>> {
        let analysis = self.analysis;
        analysis
            .grouped
            .iter()
            .map(|group| {
                let longest_work = analysis
                    .longest
                    .get(&group.key)
                    .ok_or_else(|| ReportError::MissingRoad(group.key.clone()))?;
                let significant_works = analysis
                    .significant
                    .get(&group.key)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                Ok(RoadEntry {
                    road: &group.key,
                    total_works: group.len(),
                    longest_work,
                    significant_works,
                })
            })
            .collect()
    }

    /// Render the entries as pretty-printed JSON.
    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries()?)?)
    }
}
