use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// the weekly service pattern for one service_id: which days of the week the
/// service runs, over an inclusive calendar date range.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Calendar {
    pub service_id: String,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    /// first date of service, inclusive
    pub start_date: NaiveDate,
    /// last date of service, inclusive
    pub end_date: NaiveDate,
}

impl Calendar {
    /// tests the weekday boolean matching the given day of the week.
    pub fn runs_on(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// tests membership in the inclusive [start_date, end_date] range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[cfg(test)]
mod test {
    use super::Calendar;
    use chrono::{NaiveDate, Weekday};

    fn weekday_calendar() -> Calendar {
        Calendar {
            service_id: String::from("WK"),
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: false,
            sunday: false,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
        }
    }

    #[test]
    fn test_runs_on_weekday_booleans() {
        let c = weekday_calendar();
        assert!(c.runs_on(Weekday::Mon));
        assert!(c.runs_on(Weekday::Fri));
        assert!(!c.runs_on(Weekday::Sat));
        assert!(!c.runs_on(Weekday::Sun));
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        let c = weekday_calendar();
        assert!(c.contains(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()));
        assert!(c.contains(NaiveDate::from_ymd_opt(2020, 12, 31).unwrap()));
        assert!(!c.contains(NaiveDate::from_ymd_opt(2019, 12, 31).unwrap()));
        assert!(!c.contains(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()));
    }
}
