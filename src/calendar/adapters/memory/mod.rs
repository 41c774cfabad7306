//! In-memory adapters for calendar ports.

mod holiday;

pub use holiday::InMemoryHolidayCalendar;
