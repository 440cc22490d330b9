//! raw rows as read from the schedule store, before any structural parsing.
//! dates stay as yyyymmdd text and coded columns stay as integers here; the
//! cache builder decides which parse failures are fatal.

/// a row of the calendar table: one weekly pattern per service_id.
#[derive(Debug, Clone)]
pub struct CalendarRow {
    pub service_id: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub start_date: String,
    pub end_date: String,
}

/// a row of the calendar_dates table: a dated exception to a weekly pattern.
#[derive(Debug, Clone)]
pub struct CalendarDateRow {
    pub service_id: String,
    pub date: String,
    /// 1 = service added on this date, 2 = service removed
    pub exception_type: i64,
}

/// a row of the trips table.
#[derive(Debug, Clone)]
pub struct TripRow {
    pub trip_id: String,
    pub route_id: String,
    pub service_id: String,
    pub wheelchair_accessible: Option<i64>,
    pub bikes_allowed: Option<i64>,
}

/// a row of the linefeatures table, mapping a stable source feature id to
/// the network edge id assigned by the (external) edge-id assignment step.
/// edge_id is null for features the assignment step never reached.
#[derive(Debug, Clone)]
pub struct LineFeatureRow {
    pub source_feature_id: i64,
    pub edge_id: Option<i64>,
}

/// a row of the schedules table: one trip instance over one source feature,
/// with start and end in seconds since service-day midnight.
#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub trip_id: String,
    pub source_feature_id: i64,
    pub start_time: i64,
    pub end_time: i64,
}
