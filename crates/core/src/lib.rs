//! Roadworks core data models.
//!
//! This crate defines the planned-works record shared by every stage of
//! the roadworks pipeline, along with the day-span calculation used to
//! rank closures.

#![warn(missing_docs)]

// Records
mod work_order;
pub mod fields;

// Dates
mod date;

// Re-exports
pub use work_order::{WorkOrder, RecordSet};
pub use date::{days_between, MalformedDateError, DATE_FORMAT};
