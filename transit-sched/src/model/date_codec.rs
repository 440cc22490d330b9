//! helpers for dates stored in the schedule database which (should) have
//! yyyymmdd format, as written by the GTFS ingestion step.

use chrono::NaiveDate;

pub const SERVICE_DATE_FORMAT: &str = "%Y%m%d";

/// parses an eight-digit service date such as "20200106".
pub fn parse_service_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), SERVICE_DATE_FORMAT)
}

#[cfg(test)]
mod test {
    use super::parse_service_date;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_service_date() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        assert_eq!(parse_service_date("20200106").unwrap(), expected);
        assert_eq!(parse_service_date(" 20200106 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_service_date_rejects_malformed() {
        assert!(parse_service_date("2020-01-06").is_err());
        assert!(parse_service_date("202001").is_err());
        assert!(parse_service_date("").is_err());
    }
}
