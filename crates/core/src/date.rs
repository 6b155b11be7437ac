//! Day-span calculation between work-order timestamps.

use chrono::NaiveDateTime;

/// Timestamp format used by the published snapshots.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const SECONDS_PER_DAY: i64 = 86_400;

/// A timestamp did not match [`DATE_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed date '{value}': {source}")]
pub struct MalformedDateError {
    /// The text that failed to parse
    pub value: String,

    /// Underlying parse failure
    #[source]
    pub source: chrono::ParseError,
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, MalformedDateError> {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT).map_err(|source| MalformedDateError {
        value: value.to_string(),
        source,
    })
}

/// Whole days between `start` and `end`.
///
/// The span is signed: an `end` before `start` yields a negative count.
/// Partial days round toward negative infinity, so `-1h` counts as `-1`.
pub fn days_between(start: &str, end: &str) -> Result<i64, MalformedDateError> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    let seconds = (end - start).num_seconds();
    Ok(seconds.div_euclid(SECONDS_PER_DAY))
}
