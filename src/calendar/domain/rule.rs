//! Due-date formula parsing and end-of-day formatting.
//!
//! A rule looks like `${now()+3d}` or `${hearingDate-1d}`. Only the
//! `hearingDate` token, the sign and the first run of digits carry meaning;
//! braces, parentheses and the `d` suffix are decoration.

use super::CalendarDomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

/// Literal token selecting the hearing date as the base date.
const HEARING_DATE_TOKEN: &str = "hearingDate";

/// Naive timestamp layout accepted for hearing dates without an offset.
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Date layout accepted for plain hearing dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output layout of formatted due dates.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 0) {
    Some(time) => time,
    None => NaiveTime::MIN,
};

/// Minutes added to midnight by the value-returning path (23h59m).
const END_OF_DAY_OFFSET_MINUTES: i64 = 23 * 60 + 59;

/// The date a rule is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleBase {
    /// The caller's current date.
    Today,
    /// The hearing date supplied alongside the rule.
    HearingDate,
}

impl RuleBase {
    /// Reads the base selector of a rule formula.
    ///
    /// Only the presence of the `hearingDate` token matters, so this never
    /// fails and can be checked before the offset is parsed.
    #[must_use]
    pub fn of(raw: &str) -> Self {
        if raw.contains(HEARING_DATE_TOKEN) {
            Self::HearingDate
        } else {
            Self::Today
        }
    }
}

/// Signed working-day offset applied to the base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleOffset {
    /// No sign present; the base date is used as is.
    None,
    /// Move forward by the given number of working days.
    Plus(u32),
    /// Move backward by the given number of working days.
    Minus(u32),
}

/// A parsed due-date formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueDateRule {
    raw: String,
    base: RuleBase,
    offset: RuleOffset,
}

impl DueDateRule {
    /// Parses a rule formula.
    ///
    /// A sign with no digits after it yields an offset of zero rather than
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarDomainError::OffsetOutOfRange`] when the digit run
    /// does not fit in a `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use casework::calendar::domain::{DueDateRule, RuleBase, RuleOffset};
    ///
    /// let rule = DueDateRule::parse("${hearingDate - 2d}").expect("valid rule");
    /// assert_eq!(rule.base(), RuleBase::HearingDate);
    /// assert_eq!(rule.offset(), RuleOffset::Minus(2));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, CalendarDomainError> {
        let base = RuleBase::of(raw);
        let sanitized = sanitize(raw);
        let offset = if sanitized.contains('+') {
            RuleOffset::Plus(first_digit_run(&sanitized)?)
        } else if sanitized.contains('-') {
            RuleOffset::Minus(first_digit_run(&sanitized)?)
        } else {
            RuleOffset::None
        };

        Ok(Self {
            raw: raw.to_owned(),
            base,
            offset,
        })
    }

    /// Returns the rule text as supplied.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the base date selector.
    #[must_use]
    pub const fn base(&self) -> RuleBase {
        self.base
    }

    /// Returns the working-day offset.
    #[must_use]
    pub const fn offset(&self) -> RuleOffset {
        self.offset
    }
}

/// Keeps ASCII letters, digits, `+` and `-`.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '+' || *ch == '-')
        .collect()
}

fn first_digit_run(sanitized: &str) -> Result<u32, CalendarDomainError> {
    let digits: String = sanitized
        .chars()
        .skip_while(|ch| !ch.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse()
        .map_err(|_| CalendarDomainError::OffsetOutOfRange(digits))
}

/// Extracts the calendar date from a hearing date.
///
/// Accepts RFC 3339 timestamps (the date is taken in the timestamp's own
/// offset), naive `yyyy-MM-ddTHH:mm:ss[.fff]` timestamps, and plain
/// `yyyy-MM-dd` dates.
///
/// # Errors
///
/// Returns [`CalendarDomainError::InvalidHearingDate`] when none of the
/// layouts match.
pub fn parse_hearing_date(value: &str) -> Result<NaiveDate, CalendarDomainError> {
    let trimmed = value.trim();
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| {
            NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT)
                .map(|timestamp| timestamp.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_FORMAT))
        .map_err(|_| CalendarDomainError::InvalidHearingDate(value.to_owned()))
}

/// Formats `date` as `yyyy-MM-ddT23:59:59.000Z`.
///
/// # Examples
///
/// ```
/// use casework::calendar::domain::end_of_day_timestamp;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 9).expect("valid date");
/// assert_eq!(end_of_day_timestamp(date), "2024-01-09T23:59:59.000Z");
/// ```
#[must_use]
pub fn end_of_day_timestamp(date: NaiveDate) -> String {
    date.and_time(END_OF_DAY)
        .and_utc()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Returns midnight of `date` plus 23 hours 59 minutes, in UTC.
///
/// This is 23:59:00, 59 seconds earlier than the instant written by
/// [`end_of_day_timestamp`]. Both are kept as callers depend on each.
///
/// The start-of-day value is clamped to the calendar date before the
/// offset is added, so any time of day carried by the base date is
/// discarded. No clamping to 23:59:59 happens afterwards.
///
/// # Errors
///
/// Returns [`CalendarDomainError::DateOutOfRange`] when the result cannot
/// be represented.
pub fn end_of_day_value(date: NaiveDate) -> Result<DateTime<Utc>, CalendarDomainError> {
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::minutes(END_OF_DAY_OFFSET_MINUTES))
        .map(|timestamp| timestamp.and_utc())
        .ok_or(CalendarDomainError::DateOutOfRange(date))
}
