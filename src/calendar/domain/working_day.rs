//! Working-day stepping over a known holiday set.

use super::{CalendarDomainError, HolidaySet};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Direction in which the calendar is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl StepDirection {
    /// Moves `date` one calendar day in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDomainError::DateOutOfRange`] at the ends of the
    /// representable date range.
    pub fn step(self, date: NaiveDate) -> Result<NaiveDate, CalendarDomainError> {
        let next = match self {
            Self::Forward => date.succ_opt(),
            Self::Backward => date.pred_opt(),
        };
        next.ok_or(CalendarDomainError::DateOutOfRange(date))
    }

    /// Returns the inclusive `(from, to)` range of holidays to fetch when
    /// walking from `date` in this direction.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDomainError::DateOutOfRange`] when the window end
    /// cannot be represented.
    pub fn holiday_window(
        self,
        date: NaiveDate,
        days: u32,
    ) -> Result<(NaiveDate, NaiveDate), CalendarDomainError> {
        let span = Days::new(u64::from(days));
        match self {
            Self::Forward => date
                .checked_add_days(span)
                .map(|end| (date, end))
                .ok_or(CalendarDomainError::DateOutOfRange(date)),
            Self::Backward => date
                .checked_sub_days(span)
                .map(|start| (start, date))
                .ok_or(CalendarDomainError::DateOutOfRange(date)),
        }
    }
}

/// Returns `true` when `date` is neither a weekend day nor a holiday.
#[must_use]
pub fn is_working_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(date)
}

/// Advances `start` by `count` working days in `direction`.
///
/// Each iteration moves one calendar day and then keeps moving while the
/// candidate is a weekend or holiday, so every iteration consumes exactly
/// one working day. A `count` of zero returns `start` unchanged, even when
/// `start` itself is not a working day.
///
/// # Errors
///
/// Returns [`CalendarDomainError::DateOutOfRange`] when the walk leaves the
/// representable date range.
pub fn step_working_days(
    start: NaiveDate,
    count: u32,
    direction: StepDirection,
    holidays: &HolidaySet,
) -> Result<NaiveDate, CalendarDomainError> {
    let mut candidate = start;
    for _ in 0..count {
        candidate = direction.step(candidate)?;
        while !is_working_day(candidate, holidays) {
            candidate = direction.step(candidate)?;
        }
    }
    Ok(candidate)
}
