use crate::model::{Calendar, EdgeId, ExceptionKind, Trip, TripInstance};
use chrono::NaiveDate;
use std::collections::HashMap;

/// the immutable build product of [`build_ops::build`]: every table of the
/// schedule store loaded, parsed, and keyed for evaluation. a cache is never
/// mutated after its build; share it behind an `Arc` and read it from any
/// number of search threads without synchronization.
///
/// [`build_ops::build`]: super::build_ops::build
pub struct ScheduleCache {
    trips: HashMap<String, Trip>,
    calendars: HashMap<String, Calendar>,
    exceptions: HashMap<String, HashMap<NaiveDate, ExceptionKind>>,
    instances: HashMap<EdgeId, Vec<TripInstance>>,
}

impl ScheduleCache {
    pub fn new(
        trips: HashMap<String, Trip>,
        calendars: HashMap<String, Calendar>,
        exceptions: HashMap<String, HashMap<NaiveDate, ExceptionKind>>,
        instances: HashMap<EdgeId, Vec<TripInstance>>,
    ) -> ScheduleCache {
        ScheduleCache {
            trips,
            calendars,
            exceptions,
            instances,
        }
    }

    /// all trip instances scheduled over the given edge, sorted by start time.
    pub fn instances_for_edge(&self, edge_id: EdgeId) -> Option<&[TripInstance]> {
        self.instances.get(&edge_id).map(|xs| xs.as_slice())
    }

    pub fn trip(&self, trip_id: &str) -> Option<&Trip> {
        self.trips.get(trip_id)
    }

    pub fn calendar(&self, service_id: &str) -> Option<&Calendar> {
        self.calendars.get(service_id)
    }

    pub fn exception(&self, service_id: &str, date: &NaiveDate) -> Option<ExceptionKind> {
        self.exceptions
            .get(service_id)
            .and_then(|dates| dates.get(date))
            .copied()
    }

    pub fn edge_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instance_count(&self) -> usize {
        self.instances.values().map(|xs| xs.len()).sum()
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}
