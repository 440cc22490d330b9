use serde::{Deserialize, Serialize};

/// one scheduled traversal of a network edge by a trip. times are seconds
/// since service-day midnight and may exceed 86400 for service continuing
/// past midnight; end_time is always >= start_time.
///
/// times are stored as f64 so that all boundary comparisons against the
/// host's (possibly jittery) floating-point query time happen in one
/// numeric domain.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripInstance {
    pub trip_id: String,
    pub start_time: f64,
    pub end_time: f64,
}
