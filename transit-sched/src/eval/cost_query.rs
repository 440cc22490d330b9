use super::service_day::ServiceDay;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// which end of the edge the search is expanding from. forward searches wait
/// for the next departure; backward searches look for the latest arrival.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// how eligibility reads the calendar. under [`WeekdayPattern`] only the
/// weekly booleans matter; under [`SpecificDate`] the date range and per-date
/// exceptions apply as well.
///
/// [`WeekdayPattern`]: ServiceDayMode::WeekdayPattern
/// [`SpecificDate`]: ServiceDayMode::SpecificDate
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceDayMode {
    WeekdayPattern,
    SpecificDate,
}

/// one cost question: a calendar date (which also fixes the weekday), the
/// time of day in seconds since midnight, a traversal direction, and the
/// eligibility mode.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct CostQuery {
    pub date: NaiveDate,
    /// may carry floating-point jitter from the host's time arithmetic;
    /// all boundary comparisons absorb it with [`TOLERANCE`].
    ///
    /// [`TOLERANCE`]: super::cost_ops::TOLERANCE
    pub seconds_since_midnight: f64,
    pub direction: Direction,
    pub mode: ServiceDayMode,
}

impl CostQuery {
    /// the service day eligibility is evaluated against, per the query mode.
    pub fn service_day(&self) -> ServiceDay {
        match self.mode {
            ServiceDayMode::WeekdayPattern => ServiceDay::Weekday(self.date.weekday()),
            ServiceDayMode::SpecificDate => ServiceDay::Date(self.date),
        }
    }
}
