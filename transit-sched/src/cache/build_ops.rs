//! builds a [`ScheduleCache`] from a [`ScheduleStore`] in one pass over each
//! table. structural failures in the calendar and trip tables are fatal for
//! the whole build; unresolvable references in the edge index and schedules
//! tables are skipped row by row. the asymmetry is intentional: calendar and
//! trip rows carry structural dates and keys the evaluator cannot work
//! around, while a dangling feature or trip reference only removes one
//! instance from consideration.

use super::build_observer::{BuildObserver, CancellationToken};
use super::schedule_cache::ScheduleCache;
use crate::model::date_codec;
use crate::model::{Calendar, EdgeId, ExceptionKind, RestrictionCode, Trip, TripInstance};
use crate::schedule_error::ScheduleError;
use crate::store::{
    ScheduleStore, CALENDAR_DATES_TABLE, CALENDAR_TABLE, LINEFEATURES_TABLE, SCHEDULES_TABLE,
    TRIPS_TABLE,
};
use chrono::NaiveDate;
use itertools::Itertools;
use std::collections::HashMap;

/// outcome of a cache build. cancellation is a normal outcome, not an error:
/// the caller keeps whatever cache it had before.
pub enum BuildResult {
    Built(ScheduleCache),
    Cancelled,
}

/// reads the schedule store into an immutable [`ScheduleCache`].
///
/// # Arguments
///
/// * `store`    - relational source holding the five schedule tables
/// * `observer` - progress collaborator, called once per source row
/// * `cancel`   - cooperative cancellation signal checked between rows
///
/// # Returns
///
/// the built cache, [`BuildResult::Cancelled`] if the signal was raised
/// mid-build, or a fatal error describing the first structural problem found.
pub fn build<S: ScheduleStore>(
    store: &S,
    observer: &mut dyn BuildObserver,
    cancel: &CancellationToken,
) -> Result<BuildResult, ScheduleError> {
    let (has_calendar, has_dates) = validate_tables(store)?;

    let calendars = match load_calendars(store, has_calendar, observer, cancel)? {
        Some(calendars) => calendars,
        None => return Ok(BuildResult::Cancelled),
    };
    let exceptions = match load_exceptions(store, has_dates, observer, cancel)? {
        Some(exceptions) => exceptions,
        None => return Ok(BuildResult::Cancelled),
    };
    if calendars.is_empty() && exceptions.is_empty() {
        return Err(ScheduleError::DataIntegrityError(String::from(
            "both calendar tables are empty; no service pattern can ever match",
        )));
    }

    let trips = match load_trips(store, &calendars, &exceptions, observer, cancel)? {
        Some(trips) => trips,
        None => return Ok(BuildResult::Cancelled),
    };
    let edge_index = match load_edge_index(store, observer, cancel)? {
        Some(edge_index) => edge_index,
        None => return Ok(BuildResult::Cancelled),
    };
    let instances = match load_instances(store, &edge_index, observer, cancel)? {
        Some(instances) => instances,
        None => return Ok(BuildResult::Cancelled),
    };

    let cache = ScheduleCache::new(trips, calendars, exceptions, instances);
    log::info!(
        "built schedule cache: {} trips, {} edges, {} instances",
        cache.trip_count(),
        cache.edge_count(),
        cache.instance_count()
    );
    Ok(BuildResult::Built(cache))
}

/// confirms the store carries the three required tables plus at least one of
/// the two calendar tables. returns which calendar tables are present.
fn validate_tables<S: ScheduleStore>(store: &S) -> Result<(bool, bool), ScheduleError> {
    let mut missing: Vec<&str> = vec![];
    for table in [TRIPS_TABLE, LINEFEATURES_TABLE, SCHEDULES_TABLE] {
        if !store.table_exists(table)? {
            missing.push(table);
        }
    }
    if !missing.is_empty() {
        return Err(ScheduleError::ConfigurationError(format!(
            "schedule store is missing required tables: {}",
            missing.iter().join(", ")
        )));
    }
    let has_calendar = store.table_exists(CALENDAR_TABLE)?;
    let has_dates = store.table_exists(CALENDAR_DATES_TABLE)?;
    if !has_calendar && !has_dates {
        return Err(ScheduleError::ConfigurationError(format!(
            "schedule store has neither a '{CALENDAR_TABLE}' nor a '{CALENDAR_DATES_TABLE}' table"
        )));
    }
    Ok((has_calendar, has_dates))
}

fn parse_service_date(table: &str, text: &str) -> Result<NaiveDate, ScheduleError> {
    date_codec::parse_service_date(text).map_err(|e| ScheduleError::RowParseError {
        table: String::from(table),
        message: format!("invalid service date '{text}': {e}"),
    })
}

/// loads the weekly calendar patterns, keyed by service_id. a malformed date
/// here is fatal: the range is structural to every eligibility decision.
/// returns Ok(None) when the build was cancelled.
fn load_calendars<S: ScheduleStore>(
    store: &S,
    has_calendar: bool,
    observer: &mut dyn BuildObserver,
    cancel: &CancellationToken,
) -> Result<Option<HashMap<String, Calendar>>, ScheduleError> {
    let mut calendars: HashMap<String, Calendar> = HashMap::new();
    if !has_calendar {
        return Ok(Some(calendars));
    }
    for (i, row) in store.calendar_rows()?.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        observer.on_row(CALENDAR_TABLE, i + 1);
        let calendar = Calendar {
            start_date: parse_service_date(CALENDAR_TABLE, &row.start_date)?,
            end_date: parse_service_date(CALENDAR_TABLE, &row.end_date)?,
            service_id: row.service_id,
            monday: row.monday,
            tuesday: row.tuesday,
            wednesday: row.wednesday,
            thursday: row.thursday,
            friday: row.friday,
            saturday: row.saturday,
            sunday: row.sunday,
        };
        calendars.insert(calendar.service_id.clone(), calendar);
    }
    Ok(Some(calendars))
}

/// loads per-date exceptions, keyed by service_id then date. malformed dates
/// and unknown exception kinds are fatal, same policy as the calendar table.
/// returns Ok(None) when the build was cancelled.
fn load_exceptions<S: ScheduleStore>(
    store: &S,
    has_dates: bool,
    observer: &mut dyn BuildObserver,
    cancel: &CancellationToken,
) -> Result<Option<HashMap<String, HashMap<NaiveDate, ExceptionKind>>>, ScheduleError> {
    let mut exceptions: HashMap<String, HashMap<NaiveDate, ExceptionKind>> = HashMap::new();
    if !has_dates {
        return Ok(Some(exceptions));
    }
    for (i, row) in store.calendar_date_rows()?.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        observer.on_row(CALENDAR_DATES_TABLE, i + 1);
        let date = parse_service_date(CALENDAR_DATES_TABLE, &row.date)?;
        let kind = ExceptionKind::from_exception_type(row.exception_type).ok_or_else(|| {
            ScheduleError::RowParseError {
                table: String::from(CALENDAR_DATES_TABLE),
                message: format!(
                    "exception_type {} for service_id '{}' is not 1 (added) or 2 (removed)",
                    row.exception_type, row.service_id
                ),
            }
        })?;
        exceptions.entry(row.service_id).or_default().insert(date, kind);
    }
    Ok(Some(exceptions))
}

/// loads trips keyed by trip_id. unknown restriction codes degrade to
/// [`RestrictionCode::NoData`], but a service_id with no calendar data
/// anywhere is a data-integrity fault. returns Ok(None) when cancelled.
fn load_trips<S: ScheduleStore>(
    store: &S,
    calendars: &HashMap<String, Calendar>,
    exceptions: &HashMap<String, HashMap<NaiveDate, ExceptionKind>>,
    observer: &mut dyn BuildObserver,
    cancel: &CancellationToken,
) -> Result<Option<HashMap<String, Trip>>, ScheduleError> {
    let rows = store.trip_rows()?;
    if rows.is_empty() {
        return Err(ScheduleError::DataIntegrityError(format!(
            "'{TRIPS_TABLE}' table is empty"
        )));
    }
    let mut trips: HashMap<String, Trip> = HashMap::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        observer.on_row(TRIPS_TABLE, i + 1);
        if !calendars.contains_key(&row.service_id) && !exceptions.contains_key(&row.service_id) {
            return Err(ScheduleError::DataIntegrityError(format!(
                "trip_id '{}' has service_id '{}' with no entry in either '{CALENDAR_TABLE}' or '{CALENDAR_DATES_TABLE}'",
                row.trip_id, row.service_id
            )));
        }
        let trip = Trip {
            trip_id: row.trip_id,
            route_id: row.route_id,
            service_id: row.service_id,
            wheelchair_accessible: RestrictionCode::from_source_code(row.wheelchair_accessible),
            bikes_allowed: RestrictionCode::from_source_code(row.bikes_allowed),
        };
        trips.insert(trip.trip_id.clone(), trip);
    }
    Ok(Some(trips))
}

/// loads the precomputed source-feature-to-edge mapping. features the
/// assignment step never reached carry a null edge id and are dropped one by
/// one; a wholly unassigned table means the step was never run at all, which
/// is fatal. returns Ok(None) when cancelled.
fn load_edge_index<S: ScheduleStore>(
    store: &S,
    observer: &mut dyn BuildObserver,
    cancel: &CancellationToken,
) -> Result<Option<HashMap<i64, EdgeId>>, ScheduleError> {
    let rows = store.line_feature_rows()?;
    let total = rows.len();
    let mut edge_index: HashMap<i64, EdgeId> = HashMap::with_capacity(total);
    let mut unassigned = 0usize;
    for (i, row) in rows.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        observer.on_row(LINEFEATURES_TABLE, i + 1);
        match row.edge_id {
            Some(edge_id) if edge_id >= 0 => {
                edge_index.insert(row.source_feature_id, edge_id as EdgeId);
            }
            _ => unassigned += 1,
        }
    }
    if unassigned == total {
        return Err(ScheduleError::DataIntegrityError(format!(
            "no line features carry an edge id; run the edge id assignment step before building ({total} rows, all unassigned)"
        )));
    }
    if unassigned > 0 {
        log::warn!("{unassigned} of {total} line features have no assigned edge id");
    }
    Ok(Some(edge_index))
}

/// loads trip instances grouped per edge, resolving each through the edge
/// index. instances over an unindexed source feature are skipped silently,
/// as are rows violating end_time >= start_time. returns Ok(None) when
/// cancelled.
fn load_instances<S: ScheduleStore>(
    store: &S,
    edge_index: &HashMap<i64, EdgeId>,
    observer: &mut dyn BuildObserver,
    cancel: &CancellationToken,
) -> Result<Option<HashMap<EdgeId, Vec<TripInstance>>>, ScheduleError> {
    let rows = store.schedule_rows()?;
    if rows.is_empty() {
        return Err(ScheduleError::DataIntegrityError(format!(
            "'{SCHEDULES_TABLE}' table is empty"
        )));
    }
    let mut instances: HashMap<EdgeId, Vec<TripInstance>> = HashMap::new();
    let mut unresolved = 0usize;
    let mut inverted = 0usize;
    for (i, row) in rows.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        observer.on_row(SCHEDULES_TABLE, i + 1);
        let edge_id = match edge_index.get(&row.source_feature_id) {
            Some(edge_id) => *edge_id,
            None => {
                log::debug!(
                    "skipping instance of trip '{}': source feature {} has no edge id",
                    row.trip_id,
                    row.source_feature_id
                );
                unresolved += 1;
                continue;
            }
        };
        if row.end_time < row.start_time {
            log::warn!(
                "skipping instance of trip '{}' on edge {}: end_time {} precedes start_time {}",
                row.trip_id,
                edge_id,
                row.end_time,
                row.start_time
            );
            inverted += 1;
            continue;
        }
        instances.entry(edge_id).or_default().push(TripInstance {
            trip_id: row.trip_id,
            start_time: row.start_time as f64,
            end_time: row.end_time as f64,
        });
    }
    for edge_instances in instances.values_mut() {
        edge_instances.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    }
    if unresolved > 0 || inverted > 0 {
        log::debug!("skipped {unresolved} unresolved and {inverted} inverted schedule rows");
    }
    Ok(Some(instances))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::store::SqliteScheduleStore;

    pub const FULL_SCHEMA: &str = r#"
        CREATE TABLE calendar (
            service_id TEXT, monday INTEGER, tuesday INTEGER, wednesday INTEGER,
            thursday INTEGER, friday INTEGER, saturday INTEGER, sunday INTEGER,
            start_date TEXT, end_date TEXT
        );
        CREATE TABLE calendar_dates (service_id TEXT, date TEXT, exception_type INTEGER);
        CREATE TABLE trips (
            trip_id TEXT, route_id TEXT, service_id TEXT,
            wheelchair_accessible INTEGER, bikes_allowed INTEGER
        );
        CREATE TABLE linefeatures (source_feature_id INTEGER, edge_id INTEGER);
        CREATE TABLE schedules (
            trip_id TEXT, source_feature_id INTEGER, start_time INTEGER, end_time INTEGER
        );
    "#;

    /// an empty store carrying all five tables.
    pub fn store_with_schema() -> SqliteScheduleStore {
        let store = SqliteScheduleStore::open_in_memory().unwrap();
        store.connection().execute_batch(FULL_SCHEMA).unwrap();
        store
    }

    /// a store with one weekday service 'WK' (Mon-Fri, all of 2020), one trip
    /// 'T1' on route 'R1', and one instance on edge 42 running 08:00-08:05.
    pub fn seeded_store() -> SqliteScheduleStore {
        let store = store_with_schema();
        store
            .connection()
            .execute_batch(
                r#"
                INSERT INTO calendar VALUES ('WK', 1, 1, 1, 1, 1, 0, 0, '20200101', '20201231');
                INSERT INTO trips VALUES ('T1', 'R1', 'WK', 0, 0);
                INSERT INTO linefeatures VALUES (7, 42);
                INSERT INTO schedules VALUES ('T1', 7, 28800, 29100);
                "#,
            )
            .unwrap();
        store
    }
}

#[cfg(test)]
mod test {
    use super::fixtures::{seeded_store, store_with_schema};
    use super::{build, BuildResult};
    use crate::cache::{BuildObserver, CancellationToken, NoopObserver, ScheduleCache};
    use crate::eval::{evaluate, CostQuery, Direction, EdgeCost, RestrictionFilter, ServiceDayMode};
    use crate::model::RestrictionCode;
    use crate::schedule_error::ScheduleError;
    use crate::store::SqliteScheduleStore;
    use chrono::NaiveDate;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn build_ok(store: &SqliteScheduleStore) -> ScheduleCache {
        match build(store, &mut NoopObserver, &CancellationToken::new()) {
            Ok(BuildResult::Built(cache)) => cache,
            Ok(BuildResult::Cancelled) => panic!("build unexpectedly cancelled"),
            Err(e) => panic!("build failed: {e}"),
        }
    }

    fn build_err(store: &SqliteScheduleStore) -> ScheduleError {
        match build(store, &mut NoopObserver, &CancellationToken::new()) {
            Ok(_) => panic!("expected build to fail"),
            Err(e) => e,
        }
    }

    fn monday() -> NaiveDate {
        // 2020-01-06 was a Monday
        NaiveDate::from_ymd_opt(2020, 1, 6).unwrap()
    }

    fn forward_query(seconds: f64) -> CostQuery {
        CostQuery {
            date: monday(),
            seconds_since_midnight: seconds,
            direction: Direction::Forward,
            mode: ServiceDayMode::WeekdayPattern,
        }
    }

    #[test]
    fn test_build_answers_basic_forward_query() {
        init_logger();
        let store = seeded_store();
        let cache = build_ok(&store);
        let cost = evaluate(
            &cache,
            42,
            &forward_query(28200.0),
            &RestrictionFilter::default(),
        );
        assert_eq!(cost, EdgeCost::Minutes(15.0));
    }

    #[test]
    fn test_missing_required_table_is_configuration_error() {
        let store = SqliteScheduleStore::open_in_memory().unwrap();
        store
            .connection()
            .execute_batch("CREATE TABLE calendar (service_id TEXT);")
            .unwrap();
        match build_err(&store) {
            ScheduleError::ConfigurationError(msg) => {
                assert!(msg.contains("trips"));
                assert!(msg.contains("linefeatures"));
                assert!(msg.contains("schedules"));
            }
            other => panic!("expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_both_calendar_tables_is_configuration_error() {
        let store = SqliteScheduleStore::open_in_memory().unwrap();
        store
            .connection()
            .execute_batch(
                r#"
                CREATE TABLE trips (trip_id TEXT, route_id TEXT, service_id TEXT, wheelchair_accessible INTEGER, bikes_allowed INTEGER);
                CREATE TABLE linefeatures (source_feature_id INTEGER, edge_id INTEGER);
                CREATE TABLE schedules (trip_id TEXT, source_feature_id INTEGER, start_time INTEGER, end_time INTEGER);
                "#,
            )
            .unwrap();
        match build_err(&store) {
            ScheduleError::ConfigurationError(msg) => {
                assert!(msg.contains("calendar"));
            }
            other => panic!("expected ConfigurationError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_calendar_tables_are_data_integrity_error() {
        let store = store_with_schema();
        match build_err(&store) {
            ScheduleError::DataIntegrityError(msg) => {
                assert!(msg.contains("calendar"));
            }
            other => panic!("expected DataIntegrityError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_trips_table_is_data_integrity_error() {
        let store = store_with_schema();
        store
            .connection()
            .execute_batch(
                "INSERT INTO calendar VALUES ('WK', 1, 1, 1, 1, 1, 0, 0, '20200101', '20201231');",
            )
            .unwrap();
        match build_err(&store) {
            ScheduleError::DataIntegrityError(msg) => assert!(msg.contains("trips")),
            other => panic!("expected DataIntegrityError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_schedules_table_is_data_integrity_error() {
        let store = store_with_schema();
        store
            .connection()
            .execute_batch(
                r#"
                INSERT INTO calendar VALUES ('WK', 1, 1, 1, 1, 1, 0, 0, '20200101', '20201231');
                INSERT INTO trips VALUES ('T1', 'R1', 'WK', 0, 0);
                INSERT INTO linefeatures VALUES (7, 42);
                "#,
            )
            .unwrap();
        match build_err(&store) {
            ScheduleError::DataIntegrityError(msg) => assert!(msg.contains("schedules")),
            other => panic!("expected DataIntegrityError, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_calendar_date_is_row_parse_error() {
        let store = seeded_store();
        store
            .connection()
            .execute_batch(
                "INSERT INTO calendar VALUES ('BAD', 1, 0, 0, 0, 0, 0, 0, '2020-01-01', '20201231');",
            )
            .unwrap();
        match build_err(&store) {
            ScheduleError::RowParseError { table, message } => {
                assert_eq!(table, "calendar");
                assert!(message.contains("2020-01-01"));
            }
            other => panic!("expected RowParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_exception_type_is_row_parse_error() {
        let store = seeded_store();
        store
            .connection()
            .execute_batch("INSERT INTO calendar_dates VALUES ('WK', '20200106', 9);")
            .unwrap();
        match build_err(&store) {
            ScheduleError::RowParseError { table, message } => {
                assert_eq!(table, "calendar_dates");
                assert!(message.contains('9'));
            }
            other => panic!("expected RowParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_restriction_codes_default_to_no_data() {
        let store = seeded_store();
        store
            .connection()
            .execute_batch(
                r#"
                INSERT INTO trips VALUES ('T2', 'R1', 'WK', 9, NULL);
                INSERT INTO schedules VALUES ('T2', 7, 30000, 30300);
                "#,
            )
            .unwrap();
        let cache = build_ok(&store);
        let trip = cache.trip("T2").unwrap();
        assert_eq!(trip.wheelchair_accessible, RestrictionCode::NoData);
        assert_eq!(trip.bikes_allowed, RestrictionCode::NoData);
    }

    #[test]
    fn test_trip_with_unknown_service_is_data_integrity_error() {
        let store = seeded_store();
        store
            .connection()
            .execute_batch("INSERT INTO trips VALUES ('T9', 'R1', 'GHOST', 0, 0);")
            .unwrap();
        match build_err(&store) {
            ScheduleError::DataIntegrityError(msg) => {
                assert!(msg.contains("T9"));
                assert!(msg.contains("GHOST"));
            }
            other => panic!("expected DataIntegrityError, got {other:?}"),
        }
    }

    #[test]
    fn test_null_edge_ids_are_skipped_individually() {
        init_logger();
        let store = seeded_store();
        store
            .connection()
            .execute_batch(
                r#"
                INSERT INTO linefeatures VALUES (8, NULL);
                INSERT INTO schedules VALUES ('T1', 8, 30000, 30300);
                "#,
            )
            .unwrap();
        let cache = build_ok(&store);
        // the instance over the unassigned feature is dropped silently
        assert_eq!(cache.instance_count(), 1);
        assert!(cache.instances_for_edge(42).is_some());
    }

    #[test]
    fn test_all_null_edge_ids_is_data_integrity_error() {
        let store = store_with_schema();
        store
            .connection()
            .execute_batch(
                r#"
                INSERT INTO calendar VALUES ('WK', 1, 1, 1, 1, 1, 0, 0, '20200101', '20201231');
                INSERT INTO trips VALUES ('T1', 'R1', 'WK', 0, 0);
                INSERT INTO linefeatures VALUES (7, NULL);
                INSERT INTO linefeatures VALUES (8, NULL);
                INSERT INTO schedules VALUES ('T1', 7, 28800, 29100);
                "#,
            )
            .unwrap();
        match build_err(&store) {
            ScheduleError::DataIntegrityError(msg) => assert!(msg.contains("edge id")),
            other => panic!("expected DataIntegrityError, got {other:?}"),
        }
    }

    #[test]
    fn test_instance_over_unknown_feature_is_skipped() {
        let store = seeded_store();
        store
            .connection()
            .execute_batch("INSERT INTO schedules VALUES ('T1', 999, 30000, 30300);")
            .unwrap();
        let cache = build_ok(&store);
        assert_eq!(cache.instance_count(), 1);
    }

    #[test]
    fn test_cancellation_is_an_outcome_not_an_error() {
        let store = seeded_store();
        let cancel = CancellationToken::new();
        cancel.cancel();
        match build(&store, &mut NoopObserver, &cancel) {
            Ok(BuildResult::Cancelled) => {}
            Ok(BuildResult::Built(_)) => panic!("expected cancellation"),
            Err(e) => panic!("expected cancellation, got error: {e}"),
        }
    }

    #[test]
    fn test_observer_sees_each_table() {
        struct Recording(Vec<(String, usize)>);
        impl BuildObserver for Recording {
            fn on_row(&mut self, table: &str, rows_processed: usize) {
                self.0.push((String::from(table), rows_processed));
            }
        }
        let store = seeded_store();
        let mut observer = Recording(vec![]);
        match build(&store, &mut observer, &CancellationToken::new()) {
            Ok(BuildResult::Built(_)) => {}
            _ => panic!("expected successful build"),
        }
        let tables: Vec<&str> = observer.0.iter().map(|(t, _)| t.as_str()).collect();
        assert!(tables.contains(&"calendar"));
        assert!(tables.contains(&"trips"));
        assert!(tables.contains(&"linefeatures"));
        assert!(tables.contains(&"schedules"));
        assert_eq!(observer.0.iter().filter(|(t, _)| t == "trips").count(), 1);
    }

    #[test]
    fn test_rebuild_from_unchanged_store_is_idempotent() {
        let store = seeded_store();
        let first = build_ok(&store);
        let second = build_ok(&store);
        let filter = RestrictionFilter::default();
        for seconds in [0.0, 28200.0, 28800.0, 29100.0, 29400.0, 86000.0] {
            for direction in [Direction::Forward, Direction::Backward] {
                let query = CostQuery {
                    date: monday(),
                    seconds_since_midnight: seconds,
                    direction,
                    mode: ServiceDayMode::WeekdayPattern,
                };
                assert_eq!(
                    evaluate(&first, 42, &query, &filter),
                    evaluate(&second, 42, &query, &filter)
                );
            }
        }
    }
}
