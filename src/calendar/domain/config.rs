//! Calendar configuration.

use super::Division;
use serde::{Deserialize, Serialize};

/// Configuration for business-calendar lookups.
///
/// # Examples
///
/// ```
/// use casework::calendar::domain::CalendarConfig;
///
/// let config = CalendarConfig::default();
/// assert_eq!(config.division.as_str(), "england-and-wales");
/// assert_eq!(config.holiday_window_days, 30);
///
/// let scotland = CalendarConfig::default().with_division("scotland");
/// assert_eq!(scotland.division.as_str(), "scotland");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Division whose public holidays are skipped.
    pub division: Division,
    /// Number of calendar days of holidays fetched around the start date.
    ///
    /// Holidays beyond this window are not consulted, so offsets that walk
    /// past it are computed against an incomplete holiday set.
    pub holiday_window_days: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            division: Division::default(),
            holiday_window_days: 30,
        }
    }
}

impl CalendarConfig {
    /// Replaces the configured division.
    #[must_use]
    pub fn with_division(mut self, division: impl Into<String>) -> Self {
        self.division = Division::new(division);
        self
    }

    /// Replaces the holiday window length.
    #[must_use]
    pub const fn with_holiday_window_days(mut self, days: u32) -> Self {
        self.holiday_window_days = days;
        self
    }
}
