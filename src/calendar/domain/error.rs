//! Error types for calendar arithmetic and rule parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned by pure calendar and rule operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarDomainError {
    /// Stepping from the given date left chrono's representable range.
    #[error("date arithmetic overflowed stepping from {0}")]
    DateOutOfRange(NaiveDate),

    /// The supplied hearing date is not a recognised date or timestamp.
    #[error("invalid hearing date '{0}', expected an ISO-8601 date or timestamp")]
    InvalidHearingDate(String),

    /// The day offset in a rule does not fit in a `u32`.
    #[error("day offset '{0}' is out of range")]
    OffsetOutOfRange(String),
}
