//! In-memory holiday calendar for tests and embedded reference data.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::calendar::{
    domain::{Division, PublicHoliday},
    ports::{HolidayLookupError, HolidayLookupResult, PublicHolidayLookup},
};

/// Thread-safe holiday calendar backed by a fixed list of holidays.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHolidayCalendar {
    holidays: Arc<RwLock<Vec<PublicHoliday>>>,
}

impl InMemoryHolidayCalendar {
    /// Creates an empty calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar pre-populated with `holidays`.
    #[must_use]
    pub fn with_holidays(holidays: impl IntoIterator<Item = PublicHoliday>) -> Self {
        Self {
            holidays: Arc::new(RwLock::new(holidays.into_iter().collect())),
        }
    }

    /// Publishes an additional holiday.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayLookupError::Lookup`] when the internal lock is
    /// poisoned.
    pub fn publish(&self, holiday: PublicHoliday) -> HolidayLookupResult<()> {
        let mut holidays = self
            .holidays
            .write()
            .map_err(|err| HolidayLookupError::lookup(std::io::Error::other(err.to_string())))?;
        holidays.push(holiday);
        Ok(())
    }
}

impl PublicHolidayLookup for InMemoryHolidayCalendar {
    fn public_holidays(
        &self,
        division: &Division,
        from: NaiveDate,
        to: NaiveDate,
    ) -> HolidayLookupResult<Vec<PublicHoliday>> {
        let holidays = self
            .holidays
            .read()
            .map_err(|err| HolidayLookupError::lookup(std::io::Error::other(err.to_string())))?;
        Ok(holidays
            .iter()
            .filter(|holiday| &holiday.division == division)
            .filter(|holiday| (from..=to).contains(&holiday.date))
            .cloned()
            .collect())
    }
}
