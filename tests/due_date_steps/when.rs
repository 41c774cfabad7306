//! When steps for due-date rule BDD scenarios.

use std::sync::Arc;

use super::world::DueDateWorld;
use crate::common::FixedClock;
use casework::calendar::services::{BusinessCalendar, DueDateRuleEvaluator};
use rstest_bdd_macros::when;

#[when(r#"the rule "{rule}" is evaluated"#)]
fn rule_is_evaluated(world: &mut DueDateWorld, rule: String) -> Result<(), eyre::Report> {
    let today = world
        .today
        .ok_or_else(|| eyre::eyre!("scenario did not set today"))?;
    let calendar = BusinessCalendar::new(Arc::new(world.holidays.clone()));
    let evaluator = DueDateRuleEvaluator::new(calendar, Arc::new(FixedClock::on(today)));

    world.result = Some(evaluator.evaluate(&rule, world.hearing_date.as_deref()));
    Ok(())
}
