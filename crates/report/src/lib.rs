//! Report rendering for roadworks analyses.
//!
//! Turns a [`RoadworksAnalysis`] into an HTML page or a JSON document and
//! writes it to disk.

#![warn(missing_docs)]

pub mod html;
pub mod json;

use std::path::Path;

use roadworks_analysis::RoadworksAnalysis;
use tracing::info;

pub use html::HtmlReport;
pub use json::{JsonReport, RoadEntry};

/// Error type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while rendering or writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A work order's dates could not be parsed
    #[error("cannot render duration: {0}")]
    Date(#[from] roadworks_core::MalformedDateError),

    /// A road listed in the grouping has no aggregate
    #[error("no aggregate for road '{0}'")]
    MissingRoad(String),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Standalone HTML page
    #[default]
    Html,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        }
    }

    /// Render `analysis` in this format.
    pub fn render(self, analysis: &RoadworksAnalysis) -> Result<String> {
        match self {
            ReportFormat::Html => HtmlReport::new(analysis).render(),
            ReportFormat::Json => JsonReport::new(analysis).render(),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{}'", other)),
        }
    }
}

/// Render `analysis` and write it to `path`.
///
/// Nothing is written unless rendering succeeds.
pub fn write_report(analysis: &RoadworksAnalysis, format: ReportFormat, path: &Path) -> Result<()> {
    let content = format.render(analysis)?;
    std::fs::write(path, content)?;
    info!("Wrote {} report to {}", format.extension(), path.display());
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use roadworks_analysis::{analyze, AnalysisConfig, RoadworksAnalysis};
    use roadworks_core::{fields, RecordSet, WorkOrder};

    pub fn work(reference: &str, road: &str, start: &str, end: &str) -> WorkOrder {
        WorkOrder::new()
            .field_value(fields::REFERENCE_NUMBER, reference)
            .field_value(fields::ROAD, road)
            .field_value(fields::START_DATE, start)
            .field_value(fields::END_DATE, end)
    }

    pub fn sample_analysis() -> RoadworksAnalysis {
        let first: RecordSet = vec![
            work("R1", "M1", "2016-01-01T00:00:00", "2016-07-19T00:00:00")
                .field_value(fields::LOCATION, "J1 <north> & J2")
                .field_value(fields::DESCRIPTION, "Resurfacing"),
            work("R3", "A1", "2016-01-01T00:00:00", "2016-01-03T00:00:00"),
        ]
        .into();
        let second: RecordSet =
            vec![work("R2", "M1", "2016-03-01T00:00:00", "2016-03-11T00:00:00")].into();

        analyze(first, second, &AnalysisConfig::default()).unwrap()
    }
}
