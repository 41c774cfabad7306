//! Given steps for due-date rule BDD scenarios.

use super::world::DueDateWorld;
use crate::common::{bank_holiday, parse_date};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"bank holidays on "{first}" and "{second}""#)]
fn bank_holidays_on(
    world: &mut DueDateWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for (title, raw) in [("First bank holiday", first), ("Second bank holiday", second)] {
        let date = parse_date(&raw)?;
        world
            .holidays
            .publish(bank_holiday(title, date))
            .wrap_err("publish bank holiday")?;
    }
    Ok(())
}

#[given(r#"today is "{date}""#)]
fn today_is(world: &mut DueDateWorld, date: String) -> Result<(), eyre::Report> {
    world.today = Some(parse_date(&date)?);
    Ok(())
}

#[given(r#"the hearing is on "{date}""#)]
fn hearing_is_on(world: &mut DueDateWorld, date: String) -> Result<(), eyre::Report> {
    parse_date(&date)?;
    world.hearing_date = Some(date);
    Ok(())
}
