//! time-dependent edge cost evaluation for scheduled transit networks.
//!
//! a path search host calls [`eval::evaluate`] once per edge-traversal
//! attempt, passing an edge id and a point in time. the answer is the
//! minimum wait-plus-ride cost of traversing that edge in minutes, or
//! [`eval::EdgeCost::Unavailable`] when no scheduled service covers the
//! query. schedule data is read once from a relational [`store::ScheduleStore`]
//! into an immutable [`cache::ScheduleCache`] shared by all queries.

pub mod cache;
pub mod eval;
pub mod model;
pub mod schedule_error;
pub mod store;
