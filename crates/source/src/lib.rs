//! Record sources for the roadworks pipeline.
//!
//! This crate provides a trait-based source interface with an XML
//! implementation for the published planned-works snapshots.

#![warn(missing_docs)]

pub mod source;
pub mod xml;

pub use source::{RecordSource, SourceError, Result};
pub use xml::XmlSource;
