//! Then steps for due-date rule BDD scenarios.

use super::world::DueDateWorld;
use casework::calendar::services::DueDateError;
use rstest_bdd_macros::then;

fn result(world: &DueDateWorld) -> Result<&Result<String, DueDateError>, eyre::Report> {
    world
        .result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no rule was evaluated"))
}

#[then(r#"the due date is "{expected}""#)]
fn due_date_is(world: &DueDateWorld, expected: String) -> Result<(), eyre::Report> {
    match result(world)? {
        Ok(actual) => {
            eyre::ensure!(*actual == expected, "expected {expected}, found {actual}");
            Ok(())
        }
        Err(err) => Err(eyre::eyre!("evaluation failed: {err}")),
    }
}

#[then("evaluation fails with an invalid rule error")]
fn evaluation_fails_with_invalid_rule(world: &DueDateWorld) -> Result<(), eyre::Report> {
    let outcome = result(world)?;
    eyre::ensure!(
        matches!(outcome, Err(DueDateError::InvalidDueDateCalculationRule(_))),
        "expected an invalid rule error, found {outcome:?}"
    );
    Ok(())
}
