//! In-memory integration tests for task lifecycle recording.

use std::sync::Arc;

use casework::task::{
    adapters::memory::InMemoryTaskEventStore,
    domain::{
        AssignTask, AssignmentType, ChangeAuthor, CompleteTask, CreateTask, DeleteTask, TaskEvent,
        TaskId, TaskLifecycle, UpdateTask,
    },
    ports::{TaskEventStore, TaskEventStoreError},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use chrono::{TimeZone, Utc};
use rstest::rstest;

use super::helpers::{TestTaskService, listener, store};

fn create_command(id: TaskId, author: ChangeAuthor) -> CreateTask {
    CreateTask::new(id, author)
        .with_task_type("list-hearing", "List hearing")
        .with_reference("URN-84KD1192")
        .with_work_queue("wq-listing", "Listing")
        .with_jurisdiction("CROWN")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_is_persisted_in_order(
    store: Arc<InMemoryTaskEventStore>,
    listener: ChangeAuthor,
) -> Result<(), eyre::Report> {
    let service = TestTaskService::new(Arc::clone(&store));
    let id = TaskId::new();

    service
        .record_task_created(create_command(id, listener.clone()))
        .await?;
    service
        .record_task_assigned(AssignTask::to(id, "user-ana", "Ana Patel", listener.clone()))
        .await?;
    service
        .record_task_assigned(AssignTask::to(id, "user-tom", "Tom Reid", listener.clone()))
        .await?;
    service
        .record_task_assigned(AssignTask::unassign(id, listener.clone()))
        .await?;
    let deleted_at = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).single();
    let deleted_at = deleted_at.ok_or_else(|| eyre::eyre!("invalid deletion instant"))?;
    service
        .record_task_deleted(DeleteTask::new(
            id,
            Some("Duplicate task".to_owned()),
            deleted_at,
            listener,
        ))
        .await?;

    let stream = store.load(id).await?;
    let kinds: Vec<&str> = stream.iter().map(TaskEvent::event_type).collect();
    eyre::ensure!(
        kinds
            == [
                "TaskCreated",
                "TaskAssigned",
                "TaskAssigned",
                "TaskAssigned",
                "TaskDeleted"
            ],
        "unexpected event order: {kinds:?}"
    );

    let assignment_types: Vec<AssignmentType> = stream
        .iter()
        .filter_map(|event| match event {
            TaskEvent::Assigned(assigned) => Some(assigned.assignment_type),
            _ => None,
        })
        .collect();
    eyre::ensure!(
        assignment_types
            == [
                AssignmentType::Assigned,
                AssignmentType::Reassigned,
                AssignmentType::Unassigned
            ],
        "unexpected assignment types: {assignment_types:?}"
    );

    let task = service.load_task(id).await?;
    eyre::ensure!(task.lifecycle() == TaskLifecycle::Deleted, "task should be deleted");
    eyre::ensure!(task.deletion_reason() == Some("Duplicate task"), "reason mismatch");
    eyre::ensure!(task.deleted_date() == Some(deleted_at), "deletion date mismatch");
    eyre::ensure!(task.assignee().is_none(), "task should be unassigned");
    eyre::ensure!(task.version() == 5, "unexpected version {}", task.version());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn streams_are_isolated_per_task(
    store: Arc<InMemoryTaskEventStore>,
    listener: ChangeAuthor,
) -> Result<(), eyre::Report> {
    let service = TestTaskService::new(Arc::clone(&store));
    let first = TaskId::new();
    let second = TaskId::new();

    service
        .record_task_created(create_command(first, listener.clone()))
        .await?;
    service
        .record_task_created(create_command(second, listener.clone()))
        .await?;
    service
        .record_task_completed(CompleteTask::new(first, Utc::now(), listener))
        .await?;

    eyre::ensure!(store.load(first).await?.len() == 2, "first stream length");
    eyre::ensure!(store.load(second).await?.len() == 1, "second stream length");
    eyre::ensure!(
        service.load_task(second).await?.lifecycle() == TaskLifecycle::Open,
        "second task should remain open"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_loads_as_uncreated(
    store: Arc<InMemoryTaskEventStore>,
) -> Result<(), eyre::Report> {
    let service = TestTaskService::new(store);

    let task = service.load_task(TaskId::new()).await?;

    eyre::ensure!(task.lifecycle() == TaskLifecycle::Uncreated, "expected uncreated");
    eyre::ensure!(task.version() == 0, "expected version 0");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_commands_never_lose_events(
    store: Arc<InMemoryTaskEventStore>,
    listener: ChangeAuthor,
) -> Result<(), eyre::Report> {
    let service = Arc::new(TaskLifecycleService::new(Arc::clone(&store)));
    let id = TaskId::new();
    service
        .record_task_created(create_command(id, listener.clone()))
        .await?;

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let task_service = Arc::clone(&service);
            let author = listener.clone();
            tokio::spawn(async move {
                let name = format!("Clerk {n}");
                task_service
                    .record_task_assigned(AssignTask::to(id, format!("user-{n}"), name, author))
                    .await
            })
        })
        .collect();

    let mut recorded = 1;
    for handle in handles {
        match handle.await? {
            Ok(events) => recorded += events.len(),
            Err(TaskLifecycleError::Store(TaskEventStoreError::VersionConflict { .. })) => {}
            Err(other) => return Err(other.into()),
        }
    }

    let stream = store.load(id).await?;
    eyre::ensure!(
        stream.len() == recorded,
        "stream holds {} events but {recorded} were acknowledged",
        stream.len()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_current_values_is_a_no_op(
    store: Arc<InMemoryTaskEventStore>,
    listener: ChangeAuthor,
) -> Result<(), eyre::Report> {
    let service = TestTaskService::new(Arc::clone(&store));
    let id = TaskId::new();
    service
        .record_task_created(create_command(id, listener.clone()))
        .await?;

    let events = service
        .record_task_updated(UpdateTask::new(
            id,
            None,
            Some("wq-listing".to_owned()),
            Some("Listing".to_owned()),
            listener,
        ))
        .await?;

    eyre::ensure!(events.is_empty(), "expected no events, got {events:?}");
    eyre::ensure!(store.load(id).await?.len() == 1, "stream should be unchanged");
    Ok(())
}
