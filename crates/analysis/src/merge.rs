//! Deduplicating merge of two snapshots.

use std::collections::HashSet;

use roadworks_core::RecordSet;
use tracing::debug;

/// Merge `first` and `second`, keeping the first record seen per key.
///
/// The result holds every record of `first` in order, followed by the
/// records of `second` whose `key_field` value was not seen before. Keys
/// compare literally, so two records with an empty key collapse to one.
pub fn merge(first: RecordSet, second: RecordSet, key_field: &str) -> RecordSet {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = RecordSet::new();
    let mut dropped = 0usize;

    let mut append_unseen = |works: RecordSet, merged: &mut RecordSet| {
        for work in works {
            if seen.insert(work.field(key_field).to_string()) {
                merged.push(work);
            } else {
                dropped += 1;
            }
        }
    };

    append_unseen(first, &mut merged);
    append_unseen(second, &mut merged);

    debug!("Merged {} work orders, dropped {} duplicates", merged.len(), dropped);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadworks_core::fields::REFERENCE_NUMBER;
    use roadworks_core::WorkOrder;
    use std::collections::BTreeSet;

    fn work(reference: &str, tag: &str) -> WorkOrder {
        WorkOrder::new()
            .field_value(REFERENCE_NUMBER, reference)
            .field_value("location", tag)
    }

    fn keys<'a>(records: &'a RecordSet, key_field: &'a str) -> impl Iterator<Item = &'a str> {
        records.iter().map(move |w| w.field(key_field))
    }

    fn locations(records: &RecordSet) -> Vec<&str> {
        records.iter().map(|w| w.field("location")).collect()
    }

    #[test]
    fn test_merge_order_and_dedup() {
        let a: RecordSet = vec![work("1", "a1"), work("2", "a2")].into();
        let b: RecordSet = vec![work("2", "b1"), work("3", "b2")].into();

        let merged = merge(a, b, REFERENCE_NUMBER);
        assert_eq!(locations(&merged), vec!["a1", "a2", "b2"]);
    }

    #[test]
    fn test_merge_dedups_within_first_set() {
        let a: RecordSet = vec![work("1", "a1"), work("1", "a2")].into();
        let merged = merge(a, RecordSet::new(), REFERENCE_NUMBER);
        assert_eq!(locations(&merged), vec!["a1"]);
    }

    #[test]
    fn test_merge_empty_reference_collapses() {
        let a: RecordSet = vec![work("", "a1")].into();
        let b: RecordSet = vec![work("", "b1"), WorkOrder::new().field_value("location", "b2")].into();

        let merged = merge(a, b, REFERENCE_NUMBER);
        assert_eq!(locations(&merged), vec!["a1"]);
    }

    #[test]
    fn test_merge_idempotent() {
        let a: RecordSet = vec![work("1", "a1"), work("2", "a2")].into();
        let b: RecordSet = vec![work("2", "b1"), work("3", "b2"), work("4", "b3")].into();

        let once = merge(a.clone(), b.clone(), REFERENCE_NUMBER);
        let twice = merge(once.clone(), b, REFERENCE_NUMBER);

        let once_keys: BTreeSet<_> = keys(&once, REFERENCE_NUMBER).collect();
        let twice_keys: BTreeSet<_> = keys(&twice, REFERENCE_NUMBER).collect();
        assert_eq!(once_keys, twice_keys);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_merge_calls_are_independent() {
        let a: RecordSet = vec![work("1", "a1")].into();
        let first = merge(a.clone(), RecordSet::new(), REFERENCE_NUMBER);
        let second = merge(a, RecordSet::new(), REFERENCE_NUMBER);
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_merge_both_empty() {
        let merged = merge(RecordSet::new(), RecordSet::new(), REFERENCE_NUMBER);
        assert!(merged.is_empty());
    }
}
