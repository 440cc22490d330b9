use super::cost_query::ServiceDayMode;
use crate::model::{RestrictionCode, Trip};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const USE_SPECIFIC_DATES_OPTION: &str = "UseSpecificDates";
pub const CACHE_ON_EVERY_SOLVE_OPTION: &str = "CacheOnEverySolve";
pub const RIDING_A_BICYCLE_OPTION: &str = "RidingABicycle";
pub const TRAVELING_WITH_WHEELCHAIR_OPTION: &str = "TravelingWithWheelchair";
pub const EXCLUDE_TRIP_IDS_OPTION: &str = "ExcludeTripIds";
pub const EXCLUDE_ROUTE_IDS_OPTION: &str = "ExcludeRouteIds";

/// rider accessibility and exclusion rules, resolved once per evaluation
/// cycle from the host's named options. parsing never fails: a malformed
/// boolean reads as false and a malformed or blank list reads as empty, so
/// one bad option cannot take down a whole solve.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RestrictionFilter {
    pub use_specific_dates: bool,
    pub cache_on_every_solve: bool,
    pub riding_bicycle: bool,
    pub using_wheelchair: bool,
    pub exclude_trip_ids: HashSet<String>,
    pub exclude_route_ids: HashSet<String>,
}

impl RestrictionFilter {
    /// reads the filter from a weakly-typed options document, typically the
    /// host's solver parameter bag serialized to JSON.
    pub fn from_options(options: &serde_json::Value) -> RestrictionFilter {
        RestrictionFilter {
            use_specific_dates: read_bool(options, USE_SPECIFIC_DATES_OPTION),
            cache_on_every_solve: read_bool(options, CACHE_ON_EVERY_SOLVE_OPTION),
            riding_bicycle: read_bool(options, RIDING_A_BICYCLE_OPTION),
            using_wheelchair: read_bool(options, TRAVELING_WITH_WHEELCHAIR_OPTION),
            exclude_trip_ids: read_id_list(options, EXCLUDE_TRIP_IDS_OPTION),
            exclude_route_ids: read_id_list(options, EXCLUDE_ROUTE_IDS_OPTION),
        }
    }

    /// the eligibility mode this filter selects for queries in its cycle.
    pub fn service_day_mode(&self) -> ServiceDayMode {
        if self.use_specific_dates {
            ServiceDayMode::SpecificDate
        } else {
            ServiceDayMode::WeekdayPattern
        }
    }

    /// true when this trip may not be ridden under the filter, regardless of
    /// the query time.
    pub fn restricts(&self, trip: &Trip) -> bool {
        (self.riding_bicycle && trip.bikes_allowed == RestrictionCode::NotAllowed)
            || (self.using_wheelchair
                && trip.wheelchair_accessible == RestrictionCode::NotAllowed)
            || self.exclude_trip_ids.contains(&trip.trip_id)
            || self.exclude_route_ids.contains(&trip.route_id)
    }
}

fn read_bool(options: &serde_json::Value, key: &str) -> bool {
    match options.get(key) {
        Some(serde_json::Value::Bool(b)) => *b,
        Some(serde_json::Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn read_id_list(options: &serde_json::Value, key: &str) -> HashSet<String> {
    match options.get(key) {
        Some(serde_json::Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect(),
        _ => HashSet::new(),
    }
}
