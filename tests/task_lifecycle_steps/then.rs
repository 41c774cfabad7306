//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use casework::task::domain::{AssignmentType, TaskEvent, TaskLifecycle};
use rstest_bdd_macros::then;

fn last_events(world: &TaskLifecycleWorld) -> Result<&[TaskEvent], eyre::Report> {
    world
        .last_events
        .as_deref()
        .ok_or_else(|| eyre::eyre!("missing command result"))
}

#[then(r#"a "{kind}" assignment is recorded with details "{details}""#)]
fn assignment_recorded(
    world: &TaskLifecycleWorld,
    kind: String,
    details: String,
) -> Result<(), eyre::Report> {
    let expected_type = AssignmentType::try_from(kind.as_str())
        .map_err(|err| eyre::eyre!("invalid assignment type in scenario: {err}"))?;
    let events = last_events(world)?;

    let [TaskEvent::Assigned(assigned)] = events else {
        return Err(eyre::eyre!("expected one TaskAssigned event, got {events:?}"));
    };
    eyre::ensure!(
        assigned.assignment_type == expected_type,
        "expected {expected_type}, found {}",
        assigned.assignment_type
    );
    eyre::ensure!(
        assigned.details == details,
        "expected details {details:?}, found {:?}",
        assigned.details
    );
    Ok(())
}

#[then(r#"a work queue change is recorded with details "{details}""#)]
fn work_queue_change_recorded(
    world: &TaskLifecycleWorld,
    details: String,
) -> Result<(), eyre::Report> {
    let events = last_events(world)?;

    let [TaskEvent::WorkqueueUpdated(updated)] = events else {
        return Err(eyre::eyre!(
            "expected one TaskWorkqueueUpdated event, got {events:?}"
        ));
    };
    eyre::ensure!(
        updated.details == details,
        "expected details {details:?}, found {:?}",
        updated.details
    );
    Ok(())
}

#[then("the last command recorded no events")]
fn no_events_recorded(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let events = last_events(world)?;
    eyre::ensure!(events.is_empty(), "expected no events, got {events:?}");
    Ok(())
}

#[then(r#"the task lifecycle is "{lifecycle}""#)]
fn task_lifecycle_is(world: &TaskLifecycleWorld, lifecycle: String) -> Result<(), eyre::Report> {
    let expected = TaskLifecycle::try_from(lifecycle.as_str())
        .map_err(|err| eyre::eyre!("invalid lifecycle in scenario: {err}"))?;
    let task = run_async(world.service.load_task(world.task_id()?))?;

    eyre::ensure!(
        task.lifecycle() == expected,
        "expected lifecycle {}, found {}",
        expected.as_str(),
        task.lifecycle().as_str()
    );
    Ok(())
}
