//! the temporal cost evaluation at the heart of the crate: given an edge and
//! a point in time, find the minimum wait-plus-ride cost over all eligible
//! trip instances, including service that crosses midnight in either
//! direction. everything here is a pure function over the immutable cache;
//! an inconsistent query degrades to [`EdgeCost::Unavailable`] rather than
//! failing mid-search.

use super::cost_query::{CostQuery, Direction};
use super::edge_cost::EdgeCost;
use super::restriction_filter::RestrictionFilter;
use super::service_day::ServiceDay;
use crate::cache::ScheduleCache;
use crate::model::{EdgeId, ExceptionKind, TripInstance};
use chrono::Datelike;

/// absorbs floating-point jitter in the host's time arithmetic in every
/// boundary comparison below.
pub const TOLERANCE: f64 = 0.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// evaluates the minimum cost of traversing an edge at a point in time.
///
/// # Arguments
///
/// * `cache`   - immutable schedule data for the active source
/// * `edge_id` - network edge being traversed
/// * `query`   - date, time of day, direction, and eligibility mode
/// * `filter`  - rider accessibility and exclusion rules for this cycle
///
/// # Returns
///
/// the cost in minutes, or [`EdgeCost::Unavailable`] when no eligible
/// instance covers the query time.
pub fn evaluate(
    cache: &ScheduleCache,
    edge_id: EdgeId,
    query: &CostQuery,
    filter: &RestrictionFilter,
) -> EdgeCost {
    let instances = match cache.instances_for_edge(edge_id) {
        Some(instances) if !instances.is_empty() => instances,
        _ => return EdgeCost::Unavailable,
    };
    let day = query.service_day();
    let seconds = query.seconds_since_midnight;

    let mut best = f64::INFINITY;
    // latest start time over every instance on this edge, ignoring
    // eligibility. decides whether late-running service from the prior
    // service day could still be active at the query time.
    let mut max_start = f64::NEG_INFINITY;
    for instance in instances {
        max_start = max_start.max(instance.start_time);
        if !eligible(cache, instance, filter, &day) {
            continue;
        }
        accumulate(instance, query.direction, seconds, &mut best);
    }

    // next service day, Forward only: when the best same-day candidate
    // crosses midnight, an early trip tomorrow may still beat it.
    if query.direction == Direction::Forward
        && best.is_finite()
        && seconds + best > SECONDS_PER_DAY
    {
        if let Some(next_day) = day.next() {
            for instance in instances {
                if !eligible(cache, instance, filter, &next_day) {
                    continue;
                }
                if instance.start_time < (best - (SECONDS_PER_DAY - seconds)) - TOLERANCE {
                    best = best.min(SECONDS_PER_DAY + instance.end_time - seconds);
                }
            }
        }
    }

    // previous service day: trips that started yesterday with times past
    // 86400 may cover the query time. applied for both directions.
    if seconds - TOLERANCE <= max_start - SECONDS_PER_DAY {
        if let Some(prev_day) = day.prev() {
            let effective_seconds = SECONDS_PER_DAY + seconds;
            for instance in instances {
                if !eligible(cache, instance, filter, &prev_day) {
                    continue;
                }
                accumulate(instance, query.direction, effective_seconds, &mut best);
            }
        }
    }

    if best.is_finite() {
        EdgeCost::Minutes(best / 60.0)
    } else {
        EdgeCost::Unavailable
    }
}

/// folds one instance's candidate cost into the running minimum. forward
/// traversal waits for an instance that has not yet started and pays through
/// to its arrival; backward traversal needs one that has already arrived and
/// pays back to its departure.
fn accumulate(instance: &TripInstance, direction: Direction, seconds: f64, best: &mut f64) {
    match direction {
        Direction::Forward => {
            if instance.start_time >= seconds - TOLERANCE {
                *best = best.min(instance.end_time - seconds);
            }
        }
        Direction::Backward => {
            if instance.end_time <= seconds + TOLERANCE {
                *best = best.min(seconds - instance.start_time);
            }
        }
    }
}

/// true when the instance's trip resolves, passes the filter, and its
/// service runs on the given day. a trip_id missing from the trips table is
/// tolerated by excluding the instance.
fn eligible(
    cache: &ScheduleCache,
    instance: &TripInstance,
    filter: &RestrictionFilter,
    day: &ServiceDay,
) -> bool {
    let trip = match cache.trip(&instance.trip_id) {
        Some(trip) => trip,
        None => return false,
    };
    if filter.restricts(trip) {
        return false;
    }
    service_runs_on(cache, &trip.service_id, day)
}

/// applies the eligibility rules for one service on one day. a Removed
/// exception takes precedence over every other rule; an Added exception
/// admits the day outright; otherwise the weekly pattern decides, limited
/// to the calendar's date range when the day is a specific date.
pub fn service_runs_on(cache: &ScheduleCache, service_id: &str, day: &ServiceDay) -> bool {
    match day {
        ServiceDay::Weekday(weekday) => cache
            .calendar(service_id)
            .map(|c| c.runs_on(*weekday))
            .unwrap_or(false),
        ServiceDay::Date(date) => match cache.exception(service_id, date) {
            Some(ExceptionKind::Removed) => false,
            Some(ExceptionKind::Added) => true,
            None => cache
                .calendar(service_id)
                .map(|c| c.contains(*date) && c.runs_on(date.weekday()))
                .unwrap_or(false),
        },
    }
}
