//! Public holiday and division types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Jurisdictional grouping that selects the applicable holiday calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Division(String);

impl Division {
    /// Division used when no other is configured.
    pub const DEFAULT: &'static str = "england-and-wales";

    /// Creates a division from its identifier, trimming surrounding
    /// whitespace.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        Self(raw.trim().to_owned())
    }

    /// Returns the division identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Division {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl AsRef<str> for Division {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published public holiday, as returned by reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// Reference-data identifier of the holiday.
    pub id: String,
    /// Division the holiday applies to.
    pub division: Division,
    /// Display title, for example "Christmas Day".
    pub title: String,
    /// Calendar date of the holiday.
    pub date: NaiveDate,
}

impl PublicHoliday {
    /// Creates a holiday record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        division: Division,
        title: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            division,
            title: title.into(),
            date,
        }
    }
}

/// Set of non-working dates consulted while stepping through the calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet(BTreeSet<NaiveDate>);

impl HolidaySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` when `date` is a holiday.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    /// Returns the number of distinct holiday dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no holidays are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<PublicHoliday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = PublicHoliday>>(iter: I) -> Self {
        iter.into_iter().map(|holiday| holiday.date).collect()
    }
}
