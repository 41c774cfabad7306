//! Working-day arithmetic backed by published public holidays.

use crate::calendar::{
    domain::{CalendarConfig, CalendarDomainError, HolidaySet, StepDirection, step_working_days},
    ports::{HolidayLookupError, PublicHolidayLookup},
};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by business-calendar calculations.
#[derive(Debug, Clone, Error)]
pub enum CalendarError {
    /// Date arithmetic failed.
    #[error(transparent)]
    Domain(#[from] CalendarDomainError),
    /// The holiday lookup failed.
    #[error(transparent)]
    HolidayLookup(#[from] HolidayLookupError),
}

/// Result type for business-calendar calculations.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Steps dates by working days, skipping weekends and the configured
/// division's public holidays.
#[derive(Clone)]
pub struct BusinessCalendar<L>
where
    L: PublicHolidayLookup,
{
    lookup: Arc<L>,
    config: CalendarConfig,
}

impl<L> BusinessCalendar<L>
where
    L: PublicHolidayLookup,
{
    /// Creates a calendar using the default configuration.
    #[must_use]
    pub fn new(lookup: Arc<L>) -> Self {
        Self::with_config(lookup, CalendarConfig::default())
    }

    /// Creates a calendar using `config`.
    #[must_use]
    pub const fn with_config(lookup: Arc<L>, config: CalendarConfig) -> Self {
        Self { lookup, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the date `days` working days after `date`.
    ///
    /// Holidays are fetched for `date..=date + window`; holidays beyond the
    /// window are not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HolidayLookup`] when the lookup fails, or
    /// [`CalendarError::Domain`] when the walk overflows the date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use casework::calendar::{
    ///     adapters::memory::InMemoryHolidayCalendar, services::BusinessCalendar,
    /// };
    /// use chrono::NaiveDate;
    ///
    /// let calendar = BusinessCalendar::new(Arc::new(InMemoryHolidayCalendar::new()));
    /// let friday = NaiveDate::from_ymd_opt(2024, 1, 12).expect("valid date");
    /// let monday = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
    /// assert_eq!(calendar.plus_working_days(friday, 1).expect("in range"), monday);
    /// ```
    pub fn plus_working_days(&self, date: NaiveDate, days: u32) -> CalendarResult<NaiveDate> {
        self.walk(date, days, StepDirection::Forward)
    }

    /// Returns the date `days` working days before `date`.
    ///
    /// Holidays are fetched for `date - window..=date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::HolidayLookup`] when the lookup fails, or
    /// [`CalendarError::Domain`] when the walk overflows the date range.
    pub fn minus_working_days(&self, date: NaiveDate, days: u32) -> CalendarResult<NaiveDate> {
        self.walk(date, days, StepDirection::Backward)
    }

    fn walk(
        &self,
        date: NaiveDate,
        days: u32,
        direction: StepDirection,
    ) -> CalendarResult<NaiveDate> {
        let (from, to) = direction.holiday_window(date, self.config.holiday_window_days)?;
        let holidays: HolidaySet = self
            .lookup
            .public_holidays(&self.config.division, from, to)
            .inspect_err(|err| {
                tracing::warn!(
                    division = %self.config.division,
                    %from,
                    %to,
                    "holiday lookup failed: {err}"
                );
            })?
            .into_iter()
            .collect();

        let result = step_working_days(date, days, direction, &holidays)?;
        tracing::debug!(
            %date,
            days,
            ?direction,
            holidays = holidays.len(),
            %result,
            "stepped working days"
        );
        Ok(result)
    }
}
