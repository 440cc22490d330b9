use super::row::{CalendarDateRow, CalendarRow, LineFeatureRow, ScheduleRow, TripRow};
use super::schedule_store::ScheduleStore;
use crate::schedule_error::ScheduleError;
use rusqlite::Connection;
use std::path::Path;

/// a [`ScheduleStore`] backed by the SQLite database written by the GTFS
/// ingestion step.
pub struct SqliteScheduleStore {
    conn: Connection,
}

impl SqliteScheduleStore {
    /// opens the schedule database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SqliteScheduleStore, ScheduleError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScheduleError::ConfigurationError(format!(
                "schedule database not found at '{}'",
                path.to_str().unwrap_or_default()
            )));
        }
        let conn = Connection::open(path)?;
        Ok(SqliteScheduleStore { conn })
    }

    /// opens an empty in-memory schedule database.
    pub fn open_in_memory() -> Result<SqliteScheduleStore, ScheduleError> {
        let conn = Connection::open_in_memory()?;
        Ok(SqliteScheduleStore { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ScheduleStore for SqliteScheduleStore {
    fn table_exists(&self, table: &str) -> Result<bool, ScheduleError> {
        let mut stmt = self
            .conn
            .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")?;
        let exists = stmt.exists([table])?;
        Ok(exists)
    }

    fn calendar_rows(&self) -> Result<Vec<CalendarRow>, ScheduleError> {
        let mut stmt = self.conn.prepare(
            "SELECT service_id, monday, tuesday, wednesday, thursday, friday, saturday, sunday, start_date, end_date FROM calendar",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(CalendarRow {
                service_id: row.get(0)?,
                monday: row.get(1)?,
                tuesday: row.get(2)?,
                wednesday: row.get(3)?,
                thursday: row.get(4)?,
                friday: row.get(5)?,
                saturday: row.get(6)?,
                sunday: row.get(7)?,
                start_date: row.get(8)?,
                end_date: row.get(9)?,
            })
        })?;
        let collected = rows.collect::<Result<Vec<_>, rusqlite::Error>>()?;
        Ok(collected)
    }

    fn calendar_date_rows(&self) -> Result<Vec<CalendarDateRow>, ScheduleError> {
        let mut stmt = self
            .conn
            .prepare("SELECT service_id, date, exception_type FROM calendar_dates")?;
        let rows = stmt.query_map([], |row| {
            Ok(CalendarDateRow {
                service_id: row.get(0)?,
                date: row.get(1)?,
                exception_type: row.get(2)?,
            })
        })?;
        let collected = rows.collect::<Result<Vec<_>, rusqlite::Error>>()?;
        Ok(collected)
    }

    fn trip_rows(&self) -> Result<Vec<TripRow>, ScheduleError> {
        let mut stmt = self.conn.prepare(
            "SELECT trip_id, route_id, service_id, wheelchair_accessible, bikes_allowed FROM trips",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(TripRow {
                trip_id: row.get(0)?,
                route_id: row.get(1)?,
                service_id: row.get(2)?,
                wheelchair_accessible: row.get(3)?,
                bikes_allowed: row.get(4)?,
            })
        })?;
        let collected = rows.collect::<Result<Vec<_>, rusqlite::Error>>()?;
        Ok(collected)
    }

    fn line_feature_rows(&self) -> Result<Vec<LineFeatureRow>, ScheduleError> {
        let mut stmt = self
            .conn
            .prepare("SELECT source_feature_id, edge_id FROM linefeatures")?;
        let rows = stmt.query_map([], |row| {
            Ok(LineFeatureRow {
                source_feature_id: row.get(0)?,
                edge_id: row.get(1)?,
            })
        })?;
        let collected = rows.collect::<Result<Vec<_>, rusqlite::Error>>()?;
        Ok(collected)
    }

    fn schedule_rows(&self) -> Result<Vec<ScheduleRow>, ScheduleError> {
        let mut stmt = self.conn.prepare(
            "SELECT trip_id, source_feature_id, start_time, end_time FROM schedules",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ScheduleRow {
                trip_id: row.get(0)?,
                source_feature_id: row.get(1)?,
                start_time: row.get(2)?,
                end_time: row.get(3)?,
            })
        })?;
        let collected = rows.collect::<Result<Vec<_>, rusqlite::Error>>()?;
        Ok(collected)
    }
}
