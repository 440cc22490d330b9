#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("schedule source misconfigured: {0}")]
    ConfigurationError(String),
    #[error("schedule source failed integrity check: {0}")]
    DataIntegrityError(String),
    #[error("failed to parse row in '{table}' table: {message}")]
    RowParseError { table: String, message: String },
    #[error("failure reading from schedule store: {0}")]
    StoreReadError(#[from] rusqlite::Error),
}
