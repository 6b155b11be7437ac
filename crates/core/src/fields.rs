//! Well-known field names of a planned-works record.

/// Unique identifier of a work order; the merge key.
pub const REFERENCE_NUMBER: &str = "reference_number";
/// Road the works take place on; the grouping key.
pub const ROAD: &str = "road";
/// Start timestamp (`YYYY-MM-DDTHH:MM:SS`).
pub const START_DATE: &str = "start_date";
/// End timestamp (`YYYY-MM-DDTHH:MM:SS`).
pub const END_DATE: &str = "end_date";
/// Free-text location.
pub const LOCATION: &str = "location";
/// Expected delay band.
pub const EXPECTED_DELAY: &str = "expected_delay";
/// Free-text description.
pub const DESCRIPTION: &str = "description";
/// Traffic management in place.
pub const TRAFFIC_MANAGEMENT: &str = "traffic_management";
/// Closure type.
pub const CLOSURE_TYPE: &str = "closure_type";
/// Responsible local authority.
pub const LOCAL_AUTHORITY: &str = "local_authority";
