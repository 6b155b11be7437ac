//! Significant (long-running) works per group.

use std::collections::HashMap;

use roadworks_core::WorkOrder;
use tracing::debug;

use crate::group::Grouped;
use crate::{work_duration, Result};

/// Significant works keyed by road, longest first.
pub type SignificantByRoad = HashMap<String, Vec<WorkOrder>>;

/// Keep the works of each group lasting at least `threshold_days`.
///
/// Every group gets an entry, empty when nothing qualifies. Works are
/// sorted by descending duration; equal durations keep group order.
pub fn significant_per_group(grouped: &Grouped, threshold_days: i64) -> Result<SignificantByRoad> {
    let mut significant = SignificantByRoad::with_capacity(grouped.len());

    for group in grouped {
        let mut kept: Vec<(&WorkOrder, i64)> = Vec::new();
        for work in &group.works {
            let days = work_duration(&group.key, work)?;
            if days >= threshold_days {
                kept.push((work, days));
            }
        }
        kept.sort_by(|a, b| b.1.cmp(&a.1));

        debug!(
            "{} of {} works on '{}' last {} days or more",
            kept.len(),
            group.len(),
            group.key,
            threshold_days
        );
        significant.insert(
            group.key.clone(),
            kept.into_iter().map(|(work, _)| work.clone()).collect(),
        );
    }

    Ok(significant)
}
