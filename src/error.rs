// Engine error type
// Only structurally invalid top-level input is a hard error; individual
// malformed records are logged and skipped by the normalizer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A date string could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date '{0}'")]
    InvalidDate(String),

    /// A time string could not be parsed as `HH:MM`.
    #[error("invalid time '{0}'")]
    InvalidTime(String),

    /// A required field is absent or has the wrong JSON type.
    #[error("missing or malformed field '{0}'")]
    MissingField(&'static str),

    /// The top-level input is not the expected JSON shape.
    #[error("expected a JSON array of {0} records")]
    InvalidInput(&'static str),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
