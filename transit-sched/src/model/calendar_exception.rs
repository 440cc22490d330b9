use serde::{Deserialize, Serialize};

/// a per-date override to a service_id's normal weekly pattern.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionKind {
    /// service runs on this date even if the weekly pattern says otherwise
    Added,
    /// service does not run on this date, overriding all other rules
    Removed,
}

impl ExceptionKind {
    /// maps the source exception_type column (1=Added, 2=Removed). any other
    /// value is malformed structural data and yields None.
    pub fn from_exception_type(value: i64) -> Option<ExceptionKind> {
        match value {
            1 => Some(ExceptionKind::Added),
            2 => Some(ExceptionKind::Removed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ExceptionKind;

    #[test]
    fn test_from_exception_type() {
        assert_eq!(
            ExceptionKind::from_exception_type(1),
            Some(ExceptionKind::Added)
        );
        assert_eq!(
            ExceptionKind::from_exception_type(2),
            Some(ExceptionKind::Removed)
        );
        assert_eq!(ExceptionKind::from_exception_type(0), None);
        assert_eq!(ExceptionKind::from_exception_type(3), None);
    }
}
