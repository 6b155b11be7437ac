//! Longest closure per group.

use std::collections::HashMap;

use roadworks_core::{fields, WorkOrder};
use serde::Serialize;
use tracing::debug;

use crate::group::Grouped;
use crate::{work_duration, Result};

/// The longest single closure of a road.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationSummary {
    /// Span of the closure in whole days
    pub max_days: i64,
    /// Start timestamp
    pub start_date: String,
    /// End timestamp
    pub end_date: String,
    /// Reference number
    pub reference_number: String,
    /// Location
    pub location: String,
    /// Expected delay
    pub expected_delay: String,
    /// Description
    pub description: String,
    /// Traffic management
    pub traffic_management: String,
    /// Closure type
    pub closure_type: String,
    /// Local authority
    pub local_authority: String,
}

impl DurationSummary {
    /// Summarize `work`, whose span is `days`.
    pub fn from_work(work: &WorkOrder, days: i64) -> Self {
        Self {
            max_days: days,
            start_date: work.start_date().to_string(),
            end_date: work.end_date().to_string(),
            reference_number: work.reference_number().to_string(),
            location: work.field(fields::LOCATION).to_string(),
            expected_delay: work.field(fields::EXPECTED_DELAY).to_string(),
            description: work.field(fields::DESCRIPTION).to_string(),
            traffic_management: work.field(fields::TRAFFIC_MANAGEMENT).to_string(),
            closure_type: work.field(fields::CLOSURE_TYPE).to_string(),
            local_authority: work.field(fields::LOCAL_AUTHORITY).to_string(),
        }
    }
}

/// Longest closure keyed by road.
pub type LongestByRoad = HashMap<String, DurationSummary>;

/// Find the longest work of every group.
///
/// On equal spans the later record in the group wins. Any unparsable date
/// aborts the whole aggregation.
pub fn longest_per_group(grouped: &Grouped) -> Result<LongestByRoad> {
    let mut longest = LongestByRoad::with_capacity(grouped.len());

    for group in grouped {
        let mut works = group.works.iter();
        let Some(first) = works.next() else {
            continue;
        };

        let mut best = first;
        let mut best_days = work_duration(&group.key, first)?;
        for work in works {
            let days = work_duration(&group.key, work)?;
            if days >= best_days {
                best = work;
                best_days = days;
            }
        }

        debug!(
            "Longest work on '{}': {} ({} days)",
            group.key,
            best.reference_number(),
            best_days
        );
        longest.insert(group.key.clone(), DurationSummary::from_work(best, best_days));
    }

    Ok(longest)
}
