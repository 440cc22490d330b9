mod row;
mod schedule_store;
mod sqlite_store;

pub use row::{CalendarDateRow, CalendarRow, LineFeatureRow, ScheduleRow, TripRow};
pub use schedule_store::{
    ScheduleStore, CALENDAR_DATES_TABLE, CALENDAR_TABLE, LINEFEATURES_TABLE, SCHEDULES_TABLE,
    TRIPS_TABLE,
};
pub use sqlite_store::SqliteScheduleStore;
