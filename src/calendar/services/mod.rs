//! Application services for working-day and due-date calculations.

mod business_calendar;
mod due_date;

pub use business_calendar::{BusinessCalendar, CalendarError, CalendarResult};
pub use due_date::{DueDateError, DueDateResult, DueDateRuleEvaluator};
