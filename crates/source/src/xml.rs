//! XML snapshot source.
//!
//! A snapshot is a document whose root element holds one element per work
//! order; each child of a work order is one named text field:
//!
//! ```text
//! <ha_planned_works_set>
//!   <ha_planned_works>
//!     <reference_number>4400410</reference_number>
//!     <road>A1</road>
//!     ...
//!   </ha_planned_works>
//! </ha_planned_works_set>
//! ```

use std::path::{Path, PathBuf};

use roadworks_core::{RecordSet, WorkOrder};
use tracing::debug;

use crate::source::{RecordSource, Result, SourceError};

#[derive(Debug, Clone)]
enum Input {
    File(PathBuf),
    Text(String),
}

/// Reads work orders from an XML snapshot.
#[derive(Debug, Clone)]
pub struct XmlSource {
    input: Input,
}

impl XmlSource {
    /// Source backed by a file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::File(path.into()),
        }
    }

    /// Source backed by an in-memory document.
    pub fn from_text(xml: impl Into<String>) -> Self {
        Self {
            input: Input::Text(xml.into()),
        }
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<RecordSet> {
        let xml = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = Self::parse_str(&xml)?;
        debug!("Loaded {} work orders from {}", records.len(), path.display());
        Ok(records)
    }

    /// Parse a snapshot document.
    pub fn parse_str(xml: &str) -> Result<RecordSet> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(xml, options)?;

        Ok(doc
            .root_element()
            .children()
            .filter(|n| n.is_element())
            .map(|n| read_work_order(&n))
            .collect())
    }
}

impl RecordSource for XmlSource {
    fn records(&self) -> Result<RecordSet> {
        match &self.input {
            Input::File(path) => Self::load(path),
            Input::Text(xml) => Self::parse_str(xml),
        }
    }
}

fn read_work_order(node: &roxmltree::Node) -> WorkOrder {
    let mut work = WorkOrder::new();
    for child in node.children().filter(|n| n.is_element()) {
        work.push_field(child.tag_name().name(), child.text().unwrap_or(""));
    }
    work
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadworks_core::fields;
    use std::io::Write;

    const SNAPSHOT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ha_planned_works_set>
  <ha_planned_works>
    <reference_number>4400410</reference_number>
    <road>A1</road>
    <start_date>2016-03-01T00:00:00</start_date>
    <end_date>2016-03-31T06:00:00</end_date>
    <location>Junction 5 &amp; 6</location>
    <expected_delay>Slight (less than 10 mins)</expected_delay>
  </ha_planned_works>
  <ha_planned_works>
    <reference_number>4400411</reference_number>
    <road>M25</road>
    <description/>
  </ha_planned_works>
</ha_planned_works_set>
"#;

    #[test]
    fn test_parse_str_reads_fields() {
        let records = XmlSource::parse_str(SNAPSHOT).unwrap();
        assert_eq!(records.len(), 2);

        let first = records.iter().next().unwrap();
        assert_eq!(first.reference_number(), "4400410");
        assert_eq!(first.road(), "A1");
        assert_eq!(first.field(fields::LOCATION), "Junction 5 & 6");
        assert_eq!(first.duration_days().unwrap(), 30);
    }

    #[test]
    fn test_parse_str_missing_and_empty_fields() {
        let records = XmlSource::parse_str(SNAPSHOT).unwrap();
        let second = records.iter().nth(1).unwrap();
        assert_eq!(second.reference_number(), "4400411");
        assert_eq!(second.field(fields::DESCRIPTION), "");
        assert_eq!(second.start_date(), "");
    }

    #[test]
    fn test_parse_str_empty_root() {
        let records = XmlSource::parse_str("<ha_planned_works_set/>").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_str_invalid_xml() {
        let err = XmlSource::parse_str("<ha_planned_works_set>").unwrap_err();
        assert!(matches!(err, SourceError::Xml(_)));
    }

    #[test]
    fn test_parse_str_allows_doctype() {
        let xml = "<!DOCTYPE ha_planned_works_set><ha_planned_works_set><ha_planned_works><road>A1</road></ha_planned_works></ha_planned_works_set>";
        let records = XmlSource::parse_str(xml).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let source = XmlSource::from_path(file.path());
        let records = source.records().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = XmlSource::load(&dir.path().join("missing.xml")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_text_source() {
        let source = XmlSource::from_text(SNAPSHOT);
        assert_eq!(source.records().unwrap().len(), 2);
    }
}
