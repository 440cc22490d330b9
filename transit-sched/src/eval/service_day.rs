use chrono::{Datelike, NaiveDate, Weekday};

/// the scheduling day an instance's eligibility is tested against. cross-
/// midnight passes step this forward or backward one day: weekdays wrap
/// around the week, dates move along the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDay {
    Weekday(Weekday),
    Date(NaiveDate),
}

impl ServiceDay {
    /// the day of the week this service day falls on.
    pub fn weekday(&self) -> Weekday {
        match self {
            ServiceDay::Weekday(weekday) => *weekday,
            ServiceDay::Date(date) => date.weekday(),
        }
    }

    /// the following service day. None only at the end of the representable
    /// calendar, where a cross-midnight pass has nothing to evaluate.
    pub fn next(&self) -> Option<ServiceDay> {
        match self {
            ServiceDay::Weekday(weekday) => Some(ServiceDay::Weekday(weekday.succ())),
            ServiceDay::Date(date) => date.succ_opt().map(ServiceDay::Date),
        }
    }

    /// the preceding service day.
    pub fn prev(&self) -> Option<ServiceDay> {
        match self {
            ServiceDay::Weekday(weekday) => Some(ServiceDay::Weekday(weekday.pred())),
            ServiceDay::Date(date) => date.pred_opt().map(ServiceDay::Date),
        }
    }
}
