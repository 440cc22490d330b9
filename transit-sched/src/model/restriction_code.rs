use serde::{Deserialize, Serialize};

/// rider accessibility marking on a trip, for wheelchair or bicycle carriage.
/// mirrors the GTFS coding where 0/absent means no information.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionCode {
    NoData,
    Allowed,
    NotAllowed,
}

impl RestrictionCode {
    /// maps a source restriction column (null/0=no data, 1=allowed,
    /// 2=not allowed). out-of-range codes are tolerated as [`NoData`]
    /// rather than failing the build.
    ///
    /// [`NoData`]: RestrictionCode::NoData
    pub fn from_source_code(code: Option<i64>) -> RestrictionCode {
        match code {
            Some(1) => RestrictionCode::Allowed,
            Some(2) => RestrictionCode::NotAllowed,
            _ => RestrictionCode::NoData,
        }
    }
}
