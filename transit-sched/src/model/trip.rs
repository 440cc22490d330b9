use super::restriction_code::RestrictionCode;
use serde::{Deserialize, Serialize};

/// a scheduled trip. its service_id references the calendar pattern that
/// decides which days the trip runs; its restriction codes decide which
/// riders may board.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Trip {
    pub trip_id: String,
    /// the route this trip belongs to. a route may run many trips.
    pub route_id: String,
    /// service pattern shared by trips with the same weekly calendar.
    pub service_id: String,
    pub wheelchair_accessible: RestrictionCode,
    pub bikes_allowed: RestrictionCode,
}
