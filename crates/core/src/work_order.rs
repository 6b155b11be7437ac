//! Work order model - one planned-roadworks record.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::date::{days_between, MalformedDateError};
use crate::fields;

/// A single named text field of a work order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Field {
    name: String,
    text: String,
}

/// A planned-roadworks record.
///
/// Fields are kept in document order. Lookups return the first field with
/// the requested name and fall back to an empty string, so a missing field
/// is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrder {
    fields: Vec<Field>,
}

impl WorkOrder {
    /// Create an empty work order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    pub fn field_value(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.push_field(name, text);
        self
    }

    /// Append a field.
    pub fn push_field(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.fields.push(Field {
            name: name.into(),
            text: text.into(),
        });
    }

    /// Text of the named field, or `""` when absent.
    pub fn field(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.text.as_str())
            .unwrap_or("")
    }

    /// Reference number (merge key).
    pub fn reference_number(&self) -> &str {
        self.field(fields::REFERENCE_NUMBER)
    }

    /// Road name (grouping key).
    pub fn road(&self) -> &str {
        self.field(fields::ROAD)
    }

    /// Start timestamp.
    pub fn start_date(&self) -> &str {
        self.field(fields::START_DATE)
    }

    /// End timestamp.
    pub fn end_date(&self) -> &str {
        self.field(fields::END_DATE)
    }

    /// Whole days between start and end.
    pub fn duration_days(&self) -> Result<i64, MalformedDateError> {
        days_between(self.start_date(), self.end_date())
    }
}

impl Serialize for WorkOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Repeated names keep the first value, matching `field`.
        let mut seen: Vec<&str> = Vec::with_capacity(self.fields.len());
        let mut map = serializer.serialize_map(None)?;
        for f in &self.fields {
            if seen.contains(&f.name.as_str()) {
                continue;
            }
            seen.push(&f.name);
            map.serialize_entry(&f.name, &f.text)?;
        }
        map.end()
    }
}

/// An ordered collection of work orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    works: Vec<WorkOrder>,
}

impl RecordSet {
    /// Create an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a work order.
    pub fn push(&mut self, work: WorkOrder) {
        self.works.push(work);
    }

    /// Number of work orders.
    pub fn len(&self) -> usize {
        self.works.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Work orders in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, WorkOrder> {
        self.works.iter()
    }
}

impl From<Vec<WorkOrder>> for RecordSet {
    fn from(works: Vec<WorkOrder>) -> Self {
        Self { works }
    }
}

impl FromIterator<WorkOrder> for RecordSet {
    fn from_iter<I: IntoIterator<Item = WorkOrder>>(iter: I) -> Self {
        Self {
            works: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = WorkOrder;
    type IntoIter = std::vec::IntoIter<WorkOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.works.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a WorkOrder;
    type IntoIter = std::slice::Iter<'a, WorkOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.works.iter()
    }
}
