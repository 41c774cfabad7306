//! Shared helpers for integration tests.

use casework::calendar::domain::{Division, PublicHoliday};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to mid-morning UTC on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(9, 30, 0).expect("valid time").and_utc())
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parses a `yyyy-MM-dd` date.
///
/// # Errors
///
/// Returns an error when the text is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("invalid date '{value}': {err}"))
}

/// Builds an England and Wales bank holiday.
pub fn bank_holiday(title: &str, date: NaiveDate) -> PublicHoliday {
    PublicHoliday::new(
        format!("{}-{date}", Division::DEFAULT),
        Division::default(),
        title,
        date,
    )
}

