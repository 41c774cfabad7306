//! Due-date rule evaluation.

use crate::calendar::{
    domain::{
        CalendarDomainError, DueDateRule, RuleBase, RuleOffset, end_of_day_timestamp,
        end_of_day_value, parse_hearing_date,
    },
    ports::PublicHolidayLookup,
    services::{BusinessCalendar, CalendarError},
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Errors returned while evaluating a due-date rule.
#[derive(Debug, Clone, Error)]
pub enum DueDateError {
    /// The rule references `hearingDate` but no hearing date was supplied.
    #[error("due date rule '{0}' references hearingDate but no hearing date was supplied")]
    InvalidDueDateCalculationRule(String),
    /// The rule or hearing date could not be interpreted.
    #[error(transparent)]
    Domain(#[from] CalendarDomainError),
    /// The working-day calculation failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Result type for due-date evaluation.
pub type DueDateResult<T> = Result<T, DueDateError>;

/// Interprets due-date formulas against a business calendar.
///
/// "Today" is the UTC date reported by the injected clock.
#[derive(Clone)]
pub struct DueDateRuleEvaluator<L, C>
where
    L: PublicHolidayLookup,
    C: Clock + Send + Sync,
{
    calendar: BusinessCalendar<L>,
    clock: Arc<C>,
}

impl<L, C> DueDateRuleEvaluator<L, C>
where
    L: PublicHolidayLookup,
    C: Clock + Send + Sync,
{
    /// Creates an evaluator.
    #[must_use]
    pub const fn new(calendar: BusinessCalendar<L>, clock: Arc<C>) -> Self {
        Self { calendar, clock }
    }

    /// Evaluates `rule` and formats the result as
    /// `yyyy-MM-ddT23:59:59.000Z`.
    ///
    /// # Errors
    ///
    /// Returns [`DueDateError::InvalidDueDateCalculationRule`] when the rule
    /// needs a hearing date that was not supplied, [`DueDateError::Domain`]
    /// when the hearing date or offset cannot be parsed, and
    /// [`DueDateError::Calendar`] when the holiday lookup fails.
    ///
    /// The missing hearing date is reported before the offset is read.
    /// A sign with no digits is a zero offset, but a digit run too large
    /// for a `u32` is rejected with `OffsetOutOfRange` instead of being
    /// silently truncated; this is a deliberate departure from treating
    /// every malformed offset as a non-error.
    pub fn evaluate(&self, rule: &str, hearing_date: Option<&str>) -> DueDateResult<String> {
        let date = self.evaluate_to_calendar_date(rule, hearing_date)?;
        Ok(end_of_day_timestamp(date))
    }

    /// Evaluates `rule` and returns the due instant as a value.
    ///
    /// The instant is midnight of the computed date plus 23 hours 59
    /// minutes, which differs from the formatted output of
    /// [`Self::evaluate`] by 59 seconds.
    ///
    /// # Errors
    ///
    /// As for [`Self::evaluate`].
    pub fn evaluate_as_date(
        &self,
        rule: &str,
        hearing_date: Option<&str>,
    ) -> DueDateResult<DateTime<Utc>> {
        let date = self.evaluate_to_calendar_date(rule, hearing_date)?;
        Ok(end_of_day_value(date)?)
    }

    fn evaluate_to_calendar_date(
        &self,
        rule: &str,
        hearing_date: Option<&str>,
    ) -> DueDateResult<NaiveDate> {
        let base = match (RuleBase::of(rule), hearing_date) {
            (RuleBase::HearingDate, None) => {
                return Err(DueDateError::InvalidDueDateCalculationRule(rule.to_owned()));
            }
            (RuleBase::HearingDate, Some(value)) => parse_hearing_date(value)?,
            (RuleBase::Today, _) => self.clock.utc().date_naive(),
        };

        let parsed = DueDateRule::parse(rule)?;
        let due = match parsed.offset() {
            RuleOffset::Plus(days) => self.calendar.plus_working_days(base, days)?,
            RuleOffset::Minus(days) => self.calendar.minus_working_days(base, days)?,
            RuleOffset::None => base,
        };
        tracing::debug!(rule, %base, %due, "evaluated due date rule");
        Ok(due)
    }
}
