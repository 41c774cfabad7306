//! Reference-data port for public holidays.

use crate::calendar::domain::{Division, PublicHoliday};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for holiday lookups.
pub type HolidayLookupResult<T> = Result<T, HolidayLookupError>;

/// Source of published public holidays.
///
/// Calls are synchronous and made once per working-day calculation. The
/// calendar neither retries nor times out; implementations decide how long
/// a lookup may block.
#[cfg_attr(test, mockall::automock)]
pub trait PublicHolidayLookup: Send + Sync {
    /// Returns the holidays for `division` dated within `from..=to`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayLookupError`] when reference data is unavailable.
    fn public_holidays(
        &self,
        division: &Division,
        from: NaiveDate,
        to: NaiveDate,
    ) -> HolidayLookupResult<Vec<PublicHoliday>>;
}

/// Errors returned by holiday lookup implementations.
#[derive(Debug, Clone, Error)]
pub enum HolidayLookupError {
    /// The reference data has no calendar for the division.
    #[error("no holiday calendar for division {0}")]
    UnknownDivision(Division),

    /// Lookup-layer failure.
    #[error("holiday lookup failed: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl HolidayLookupError {
    /// Wraps a lookup error.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
