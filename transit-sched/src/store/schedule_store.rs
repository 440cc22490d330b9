use super::row::{CalendarDateRow, CalendarRow, LineFeatureRow, ScheduleRow, TripRow};
use crate::schedule_error::ScheduleError;

pub const CALENDAR_TABLE: &str = "calendar";
pub const CALENDAR_DATES_TABLE: &str = "calendar_dates";
pub const TRIPS_TABLE: &str = "trips";
pub const LINEFEATURES_TABLE: &str = "linefeatures";
pub const SCHEDULES_TABLE: &str = "schedules";

/// a queryable relational source for schedule data, as produced by the GTFS
/// ingestion step. the cache builder reads each table exactly once through
/// this interface; implementations do not need to cache anything themselves.
///
/// the row getters may assume their table exists. callers probe with
/// [`table_exists`] first, which matters for the two calendar tables since
/// a source may carry either one alone.
///
/// [`table_exists`]: ScheduleStore::table_exists
pub trait ScheduleStore {
    fn table_exists(&self, table: &str) -> Result<bool, ScheduleError>;
    fn calendar_rows(&self) -> Result<Vec<CalendarRow>, ScheduleError>;
    fn calendar_date_rows(&self) -> Result<Vec<CalendarDateRow>, ScheduleError>;
    fn trip_rows(&self) -> Result<Vec<TripRow>, ScheduleError>;
    fn line_feature_rows(&self) -> Result<Vec<LineFeatureRow>, ScheduleError>;
    fn schedule_rows(&self) -> Result<Vec<ScheduleRow>, ScheduleError>;
}
