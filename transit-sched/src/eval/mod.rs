pub mod cost_ops;
mod cost_query;
mod edge_cost;
mod restriction_filter;
mod service_day;

pub use cost_ops::{evaluate, SECONDS_PER_DAY, TOLERANCE};
pub use cost_query::{CostQuery, Direction, ServiceDayMode};
pub use edge_cost::EdgeCost;
pub use restriction_filter::{
    RestrictionFilter, CACHE_ON_EVERY_SOLVE_OPTION, EXCLUDE_ROUTE_IDS_OPTION,
    EXCLUDE_TRIP_IDS_OPTION, RIDING_A_BICYCLE_OPTION, TRAVELING_WITH_WHEELCHAIR_OPTION,
    USE_SPECIFIC_DATES_OPTION,
};
pub use service_day::ServiceDay;
