//! Roadworks CLI - merge two planned-works snapshots into a per-road report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use roadworks_analysis::{AnalysisConfig, Analyzer};
use roadworks_report::{write_report, ReportFormat};
use roadworks_source::{RecordSource, XmlSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default report name, without extension.
const DEFAULT_REPORT_STEM: &str = "roadwork_data";

#[derive(Parser, Debug)]
#[command(name = "roadworks")]
#[command(about = "Per-road report of planned roadworks from two snapshots", long_about = None)]
struct Cli {
    /// First snapshot; wins on duplicate reference numbers
    first: PathBuf,

    /// Second snapshot
    second: PathBuf,

    /// Report path (default: roadwork_data.<format>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report format (html or json)
    #[arg(short, long, default_value = "html")]
    format: ReportFormat,

    /// Minimum duration in days of a significant work
    #[arg(short, long)]
    threshold: Option<i64>,

    /// JSON analysis configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Configuration file (if any) with command-line overrides applied.
    fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };
        if let Some(days) = self.threshold {
            config = config.with_threshold(days);
        }
        Ok(config)
    }

    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}.{}", DEFAULT_REPORT_STEM, self.format.extension()))
        })
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> Result<roadworks_core::RecordSet> {
    XmlSource::from_path(path)
        .records()
        .with_context(|| format!("Failed to read snapshot {}", path.display()))
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RunSummary {
    output: PathBuf,
    roads: usize,
    works: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Report \"{}\" generated successfully!", self.output.display())?;
        write!(f, "  Roads: {}, planned works: {}", self.roads, self.works)
    }
}

fn run(cli: &Cli) -> Result<RunSummary> {
    let config = cli.analysis_config()?;
    let first = load(&cli.first)?;
    let second = load(&cli.second)?;

    let analysis = Analyzer::new()
        .with_config(config)
        .run(first, second)
        .context("Analysis failed")?;
    info!(
        "Analyzed {} work orders on {} roads",
        analysis.total_works(),
        analysis.grouped.len()
    );

    let output = cli.output_path();
    write_report(&analysis, cli.format, &output)
        .with_context(|| format!("Failed to write report {}", output.display()))?;
    Ok(RunSummary {
        output,
        roads: analysis.grouped.len(),
        works: analysis.total_works(),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let summary = run(&cli)?;
    println!("{}", summary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"<ha_planned_works_set>
  <ha_planned_works>
    <reference_number>R1</reference_number>
    <road>M1</road>
    <start_date>2016-01-01T00:00:00</start_date>
    <end_date>2016-07-19T00:00:00</end_date>
  </ha_planned_works>
</ha_planned_works_set>"#;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::try_parse_from(["roadworks", "a.xml", "b.xml"]).unwrap();
        assert_eq!(cli.format, ReportFormat::Html);
        assert_eq!(cli.output_path(), PathBuf::from("roadwork_data.html"));
        assert_eq!(cli.analysis_config().unwrap(), AnalysisConfig::default());
    }

    #[test]
    fn test_cli_json_default_output() {
        let cli = Cli::try_parse_from(["roadworks", "a.xml", "b.xml", "--format", "json"]).unwrap();
        assert_eq!(cli.output_path(), PathBuf::from("roadwork_data.json"));
    }

    #[test]
    fn test_threshold_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_file(
            dir.path(),
            "config.json",
            r#"{"significant_work_threshold": 90, "group_field": "local_authority"}"#,
        );

        let args: Vec<std::ffi::OsString> = vec![
            "roadworks".into(),
            "a.xml".into(),
            "b.xml".into(),
            "--config".into(),
            config.into_os_string(),
            "--threshold".into(),
            "30".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let analysis_config = cli.analysis_config().unwrap();
        assert_eq!(analysis_config.significant_work_threshold, 30);
        assert_eq!(analysis_config.group_field, "local_authority");
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(dir.path(), "first.xml", SNAPSHOT);
        let second = write_file(dir.path(), "second.xml", "<ha_planned_works_set/>");
        let output = dir.path().join("report.html");

        let cli = Cli {
            first,
            second,
            output: Some(output.clone()),
            format: ReportFormat::Html,
            threshold: None,
            config: None,
            verbose: false,
        };

        let summary = run(&cli).unwrap();
        assert_eq!(summary.output, output);
        assert_eq!(summary.roads, 1);
        assert_eq!(summary.works, 1);
        assert_eq!(
            summary.to_string(),
            format!(
                "Report \"{}\" generated successfully!\n  Roads: 1, planned works: 1",
                output.display()
            )
        );
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<td>M1</td>"));
    }

    #[test]
    fn test_run_missing_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.html");

        let cli = Cli {
            first: dir.path().join("missing.xml"),
            second: dir.path().join("missing.xml"),
            output: Some(output.clone()),
            format: ReportFormat::Html,
            threshold: None,
            config: None,
            verbose: false,
        };

        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to read snapshot"));
        assert!(!output.exists());
    }
}
