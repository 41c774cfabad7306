//! Service layer that applies task commands against stored event streams.

use crate::task::{
    domain::{AssignTask, CompleteTask, CreateTask, DeleteTask, Task, TaskEvent, TaskId, UpdateTask},
    ports::{TaskEventStore, TaskEventStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Event store operation failed.
    #[error(transparent)]
    Store(#[from] TaskEventStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Each command loads the task's stream, replays it, decides the new events
/// against the replayed state and appends them with the stream length as
/// the expected version. The decided events are returned so callers can
/// forward them.
#[derive(Clone)]
pub struct TaskLifecycleService<S>
where
    S: TaskEventStore,
{
    store: Arc<S>,
}

impl<S> TaskLifecycleService<S>
where
    S: TaskEventStore,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Rebuilds the current state of a task from its stream.
    ///
    /// A task with no events is returned in the uncreated state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the stream cannot be
    /// loaded.
    pub async fn load_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let events = self.store.load(id).await?;
        Ok(Task::replay(id, &events))
    }

    /// Records creation of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when loading or appending
    /// fails, including version conflicts.
    pub async fn record_task_created(
        &self,
        command: CreateTask,
    ) -> TaskLifecycleResult<Vec<TaskEvent>> {
        self.handle(command.id, "record_task_created", |task| {
            task.record_task_created(command)
        })
        .await
    }

    /// Records an assignment change.
    ///
    /// # Errors
    ///
    /// As for [`Self::record_task_created`].
    pub async fn record_task_assigned(
        &self,
        command: AssignTask,
    ) -> TaskLifecycleResult<Vec<TaskEvent>> {
        self.handle(command.id, "record_task_assigned", |task| {
            task.record_task_assigned(command)
        })
        .await
    }

    /// Records completion of a task.
    ///
    /// # Errors
    ///
    /// As for [`Self::record_task_created`].
    pub async fn record_task_completed(
        &self,
        command: CompleteTask,
    ) -> TaskLifecycleResult<Vec<TaskEvent>> {
        self.handle(command.id, "record_task_completed", |task| {
            task.record_task_completed(command)
        })
        .await
    }

    /// Records deletion of a task.
    ///
    /// # Errors
    ///
    /// As for [`Self::record_task_created`].
    pub async fn record_task_deleted(
        &self,
        command: DeleteTask,
    ) -> TaskLifecycleResult<Vec<TaskEvent>> {
        self.handle(command.id, "record_task_deleted", |task| {
            task.record_task_deleted(command)
        })
        .await
    }

    /// Records requested due-date and work-queue values.
    ///
    /// Returns an empty list, and appends nothing, when neither changed.
    ///
    /// # Errors
    ///
    /// As for [`Self::record_task_created`].
    pub async fn record_task_updated(
        &self,
        command: UpdateTask,
    ) -> TaskLifecycleResult<Vec<TaskEvent>> {
        self.handle(command.id, "record_task_updated", |task| {
            task.record_task_updated(command)
        })
        .await
    }

    async fn handle(
        &self,
        id: TaskId,
        operation: &'static str,
        decide: impl FnOnce(&Task) -> Vec<TaskEvent> + Send,
    ) -> TaskLifecycleResult<Vec<TaskEvent>> {
        let task = self.load_task(id).await?;
        if task.lifecycle().is_terminal() {
            tracing::warn!(
                task_id = %id,
                lifecycle = task.lifecycle().as_str(),
                operation,
                "command received for a task in a terminal state"
            );
        }

        let events = decide(&task);
        if events.is_empty() {
            tracing::debug!(task_id = %id, operation, "command produced no observable change");
            return Ok(events);
        }

        self.store.append(id, task.version(), &events).await?;
        tracing::info!(
            task_id = %id,
            operation,
            version = task.version(),
            events = ?events.iter().map(TaskEvent::event_type).collect::<Vec<_>>(),
            "appended task events"
        );
        Ok(events)
    }
}
