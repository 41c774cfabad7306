//! Domain model for business-calendar calculations.
//!
//! Everything here is pure: holiday sets are supplied by the caller, and the
//! current date is resolved by the services layer from an injected clock.

mod config;
mod error;
mod holiday;
mod rule;
mod working_day;

pub use config::CalendarConfig;
pub use error::CalendarDomainError;
pub use holiday::{Division, HolidaySet, PublicHoliday};
pub use rule::{
    DueDateRule, RuleBase, RuleOffset, end_of_day_timestamp, end_of_day_value, parse_hearing_date,
};
pub use working_day::{StepDirection, is_working_day, step_working_days};
