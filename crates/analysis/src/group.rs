//! Grouping of work orders by a field value.

use std::collections::HashMap;

use roadworks_core::{RecordSet, WorkOrder};
use tracing::debug;

/// Work orders sharing one key value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Shared key value (`""` for records without the field)
    pub key: String,
    /// Members in first-seen order
    pub works: Vec<WorkOrder>,
}

impl Group {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.works.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}

/// Groups ordered by descending size; equal sizes keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouped {
    groups: Vec<Group>,
}

impl Grouped {
    /// Groups in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of work orders across all groups.
    pub fn total_works(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

impl<'a> IntoIterator for &'a Grouped {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition `records` by the value of `field_name`.
pub fn group_by(records: RecordSet, field_name: &str) -> Grouped {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for work in records {
        let key = work.field(field_name).to_string();
        if let Some(&i) = index.get(&key) {
            groups[i].works.push(work);
            continue;
        }
        index.insert(key.clone(), groups.len());
        groups.push(Group {
            key,
            works: vec![work],
        });
    }

    // Stable: ties keep first-appearance order.
    groups.sort_by(|a, b| b.len().cmp(&a.len()));

    debug!("Grouped work orders into {} groups by '{}'", groups.len(), field_name);
    Grouped { groups }
}
