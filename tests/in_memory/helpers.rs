//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use casework::{
    calendar::{
        adapters::memory::InMemoryHolidayCalendar,
        services::{BusinessCalendar, DueDateRuleEvaluator},
    },
    task::{
        adapters::memory::InMemoryTaskEventStore, domain::ChangeAuthor,
        services::TaskLifecycleService,
    },
};
use chrono::NaiveDate;
use rstest::fixture;
use tracing_subscriber::EnvFilter;

use crate::common::{FixedClock, bank_holiday};

/// Task service backed by an in-memory event store.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskEventStore>;

/// Due-date evaluator backed by the in-memory holiday calendar.
pub type TestEvaluator = DueDateRuleEvaluator<InMemoryHolidayCalendar, FixedClock>;

/// Routes service logs to the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    if installed.is_err() {
        tracing::trace!("test subscriber already installed");
    }
}

/// Provides a fresh in-memory event store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryTaskEventStore> {
    init_tracing();
    Arc::new(InMemoryTaskEventStore::new())
}

/// Provides the author used by listener-issued commands.
#[fixture]
pub fn listener() -> ChangeAuthor {
    ChangeAuthor::new("Workflow Listener", "system-listener")
}

/// England and Wales bank holidays around the 2022 platinum jubilee and
/// Christmas 2023.
#[fixture]
pub fn bank_holidays() -> InMemoryHolidayCalendar {
    let entries = [
        ("Spring bank holiday", (2022, 6, 2)),
        ("Platinum Jubilee bank holiday", (2022, 6, 3)),
        ("Christmas Day", (2023, 12, 25)),
        ("Boxing Day", (2023, 12, 26)),
        ("New Year's Day", (2024, 1, 1)),
    ];
    InMemoryHolidayCalendar::with_holidays(entries.into_iter().filter_map(
        |(title, (year, month, day))| {
            NaiveDate::from_ymd_opt(year, month, day).map(|date| bank_holiday(title, date))
        },
    ))
}

/// Builds an evaluator whose "today" is `today`.
pub fn evaluator_on(calendar: InMemoryHolidayCalendar, today: NaiveDate) -> TestEvaluator {
    init_tracing();
    DueDateRuleEvaluator::new(
        BusinessCalendar::new(Arc::new(calendar)),
        Arc::new(FixedClock::on(today)),
    )
}
