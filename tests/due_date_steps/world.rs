//! Shared world state for due-date rule BDD scenarios.

use casework::calendar::{adapters::memory::InMemoryHolidayCalendar, services::DueDateError};
use chrono::NaiveDate;
use rstest::fixture;

/// Scenario world for due-date rule behaviour tests.
#[derive(Default)]
pub struct DueDateWorld {
    /// Bank holidays known to the scenario.
    pub holidays: InMemoryHolidayCalendar,
    /// The date the evaluator treats as today.
    pub today: Option<NaiveDate>,
    /// Hearing date passed to the evaluator, as written in the scenario.
    pub hearing_date: Option<String>,
    /// Outcome of the most recent evaluation.
    pub result: Option<Result<String, DueDateError>>,
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DueDateWorld {
    DueDateWorld::default()
}
