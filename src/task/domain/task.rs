//! Task aggregate state, event fold and command decisions.
//!
//! [`Task`] is never mutated in place: [`Task::apply`] returns the next
//! state for an event, and the `record_*` methods compare a command against
//! the current state and return the events it implies. Persistence and
//! replay live outside the domain.

use super::{
    AssignTask, Assignee, AssignmentType, CompleteTask, CreateTask, DeleteTask,
    ParseTaskLifecycleError, TaskAssigned, TaskCompleted, TaskCreated, TaskDeleted,
    TaskDueDateUpdated, TaskEvent, TaskId, TaskWorkqueueUpdated, UpdateTask, WorkQueue,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskLifecycle {
    /// No creation event has been folded yet.
    #[default]
    Uncreated,
    /// The task exists and can be worked.
    Open,
    /// The task was completed. Terminal.
    Completed,
    /// The task was deleted. Terminal.
    Deleted,
}

impl TaskLifecycle {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uncreated => "uncreated",
            Self::Open => "open",
            Self::Completed => "completed",
            Self::Deleted => "deleted",
        }
    }

    /// Returns `true` for completed and deleted tasks.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Deleted)
    }

    /// Moves to `next` unless already terminal.
    const fn advance(self, next: Self) -> Self {
        if self.is_terminal() { self } else { next }
    }
}

impl TryFrom<&str> for TaskLifecycle {
    type Error = ParseTaskLifecycleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "uncreated" => Ok(Self::Uncreated),
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            "deleted" => Ok(Self::Deleted),
            _ => Err(ParseTaskLifecycleError(value.to_owned())),
        }
    }
}

/// Task aggregate state, derived by folding the task's own events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    lifecycle: TaskLifecycle,
    task_type_id: Option<String>,
    task_type: Option<String>,
    reference: Option<String>,
    note: Option<String>,
    created_date: Option<DateTime<Utc>>,
    hearing_date: Option<DateTime<Utc>>,
    court_id: Option<String>,
    jurisdiction: Option<String>,
    due_date: Option<DateTime<Utc>>,
    work_queue: Option<WorkQueue>,
    assignee: Option<Assignee>,
    completed_date: Option<DateTime<Utc>>,
    deletion_reason: Option<String>,
    deleted_date: Option<DateTime<Utc>>,
    version: u64,
}

impl Task {
    /// Returns the state of a task before any event has been folded.
    #[must_use]
    pub const fn uncreated(id: TaskId) -> Self {
        Self {
            id,
            lifecycle: TaskLifecycle::Uncreated,
            task_type_id: None,
            task_type: None,
            reference: None,
            note: None,
            created_date: None,
            hearing_date: None,
            court_id: None,
            jurisdiction: None,
            due_date: None,
            work_queue: None,
            assignee: None,
            completed_date: None,
            deletion_reason: None,
            deleted_date: None,
            version: 0,
        }
    }

    /// Folds `events`, in order, onto an uncreated task.
    #[must_use]
    pub fn replay<'a>(id: TaskId, events: impl IntoIterator<Item = &'a TaskEvent>) -> Self {
        events
            .into_iter()
            .fold(Self::uncreated(id), |task, event| task.apply(event))
    }

    /// Returns the state after `event`.
    ///
    /// Field values always follow the event. The lifecycle never leaves a
    /// terminal state once reached.
    #[must_use]
    pub fn apply(self, event: &TaskEvent) -> Self {
        let version = self.version.saturating_add(1);
        match event {
            TaskEvent::Created(created) => Self {
                lifecycle: self.lifecycle.advance(TaskLifecycle::Open),
                task_type_id: created.task_type_id.clone(),
                task_type: created.task_type.clone(),
                reference: created.reference.clone(),
                note: created.note.clone(),
                created_date: created.created_date,
                hearing_date: created.hearing_date,
                court_id: created.court_id.clone(),
                jurisdiction: created.jurisdiction.clone(),
                due_date: created.due_date,
                work_queue: WorkQueue::from_parts(
                    created.work_queue.clone(),
                    created.work_queue_name.clone(),
                ),
                version,
                ..self
            },
            TaskEvent::Assigned(assigned) => Self {
                assignee: Assignee::from_parts(
                    assigned.assign_to.clone(),
                    assigned.assign_name.clone(),
                ),
                version,
                ..self
            },
            TaskEvent::Completed(completed) => Self {
                lifecycle: self.lifecycle.advance(TaskLifecycle::Completed),
                completed_date: Some(completed.completed_date),
                version,
                ..self
            },
            TaskEvent::Deleted(deleted) => Self {
                lifecycle: self.lifecycle.advance(TaskLifecycle::Deleted),
                deletion_reason: deleted.deletion_reason.clone(),
                deleted_date: Some(deleted.deleted_date),
                version,
                ..self
            },
            TaskEvent::DueDateUpdated(updated) => Self {
                due_date: updated.due_date,
                version,
                ..self
            },
            TaskEvent::WorkqueueUpdated(updated) => Self {
                work_queue: WorkQueue::from_parts(
                    updated.work_queue.clone(),
                    updated.work_queue_name.clone(),
                ),
                version,
                ..self
            },
        }
    }

    /// Records creation. Always emits exactly one [`TaskCreated`].
    #[must_use]
    pub fn record_task_created(&self, command: CreateTask) -> Vec<TaskEvent> {
        vec![TaskEvent::Created(TaskCreated {
            id: command.id,
            task_type_id: command.task_type_id,
            task_type: command.task_type,
            reference: command.reference,
            note: command.note,
            created_date: command.created_date,
            due_date: command.due_date,
            hearing_date: command.hearing_date,
            work_queue: command.work_queue_id,
            work_queue_name: command.work_queue_name,
            court_id: command.court_id,
            jurisdiction: command.jurisdiction,
            change_author: command.change_author,
        })]
    }

    /// Records an assignment change. Always emits exactly one
    /// [`TaskAssigned`], even when the assignee is unchanged.
    #[must_use]
    pub fn record_task_assigned(&self, command: AssignTask) -> Vec<TaskEvent> {
        let next = Assignee::from_parts(command.assign_to_id, command.assign_to_name);
        let (assignment_type, details) = describe_assignment(self.assignee.as_ref(), next.as_ref());
        let (assign_to, assign_name) = next.map(|a| (a.id, a.name)).unzip();

        vec![TaskEvent::Assigned(TaskAssigned {
            id: command.id,
            assign_to,
            assign_name,
            assignment_type,
            details,
            change_author: command.change_author,
        })]
    }

    /// Records completion. Always emits exactly one [`TaskCompleted`].
    #[must_use]
    pub fn record_task_completed(&self, command: CompleteTask) -> Vec<TaskEvent> {
        vec![TaskEvent::Completed(TaskCompleted {
            id: command.id,
            completed_date: command.completed_at,
            change_author: command.change_author,
        })]
    }

    /// Records deletion. Always emits exactly one [`TaskDeleted`].
    #[must_use]
    pub fn record_task_deleted(&self, command: DeleteTask) -> Vec<TaskEvent> {
        vec![TaskEvent::Deleted(TaskDeleted {
            id: command.id,
            deletion_reason: command.deletion_reason,
            deleted_date: command.deleted_at,
            change_author: command.change_author,
        })]
    }

    /// Records requested due-date and work-queue values.
    ///
    /// Emits a [`TaskDueDateUpdated`] when the due date differs and a
    /// [`TaskWorkqueueUpdated`] when the work queue pair differs, in that
    /// order. Returns an empty list when neither changed.
    #[must_use]
    pub fn record_task_updated(&self, command: UpdateTask) -> Vec<TaskEvent> {
        let mut events = Vec::with_capacity(2);

        if command.due_date != self.due_date {
            events.push(TaskEvent::DueDateUpdated(TaskDueDateUpdated {
                id: command.id,
                due_date: command.due_date,
                change_author: command.change_author.clone(),
            }));
        }

        let next = WorkQueue::from_parts(command.work_queue_id, command.work_queue_name);
        if let Some(details) = describe_work_queue_change(self.work_queue.as_ref(), next.as_ref()) {
            let (work_queue, work_queue_name) = next.map(|q| (q.id, q.name)).unzip();
            events.push(TaskEvent::WorkqueueUpdated(TaskWorkqueueUpdated {
                id: command.id,
                work_queue,
                work_queue_name,
                details,
                change_author: command.change_author,
            }));
        }

        events
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the lifecycle flag.
    #[must_use]
    pub const fn lifecycle(&self) -> TaskLifecycle {
        self.lifecycle
    }

    /// Returns the number of events folded into this state.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the current due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the current work queue.
    #[must_use]
    pub const fn work_queue(&self) -> Option<&WorkQueue> {
        self.work_queue.as_ref()
    }

    /// Returns the current assignee.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Assignee> {
        self.assignee.as_ref()
    }

    /// Returns the workflow task type identifier.
    #[must_use]
    pub fn task_type_id(&self) -> Option<&str> {
        self.task_type_id.as_deref()
    }

    /// Returns the workflow task type name.
    #[must_use]
    pub fn task_type(&self) -> Option<&str> {
        self.task_type.as_deref()
    }

    /// Returns the business reference.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Returns the note.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the creation timestamp reported at creation.
    #[must_use]
    pub const fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    /// Returns the related hearing date.
    #[must_use]
    pub const fn hearing_date(&self) -> Option<DateTime<Utc>> {
        self.hearing_date
    }

    /// Returns the court identifier.
    #[must_use]
    pub fn court_id(&self) -> Option<&str> {
        self.court_id.as_deref()
    }

    /// Returns the jurisdiction.
    #[must_use]
    pub fn jurisdiction(&self) -> Option<&str> {
        self.jurisdiction.as_deref()
    }

    /// Returns when the task was completed.
    #[must_use]
    pub const fn completed_date(&self) -> Option<DateTime<Utc>> {
        self.completed_date
    }

    /// Returns why the task was deleted.
    #[must_use]
    pub fn deletion_reason(&self) -> Option<&str> {
        self.deletion_reason.as_deref()
    }

    /// Returns when the task was deleted.
    #[must_use]
    pub const fn deleted_date(&self) -> Option<DateTime<Utc>> {
        self.deleted_date
    }
}

fn describe_assignment(
    previous: Option<&Assignee>,
    next: Option<&Assignee>,
) -> (AssignmentType, String) {
    match (previous, next) {
        (None, Some(assignee)) => (
            AssignmentType::Assigned,
            format!("Assigned to: {}", assignee.name),
        ),
        (Some(from), Some(to)) => (
            AssignmentType::Reassigned,
            format!("Re-assigned from: {}, to: {}", from.name, to.name),
        ),
        (Some(from), None) => (
            AssignmentType::Unassigned,
            format!("Un-assigned from: {}", from.name),
        ),
        (None, None) => (AssignmentType::Unassigned, "Un-assigned from: ".to_owned()),
    }
}

fn describe_work_queue_change(
    previous: Option<&WorkQueue>,
    next: Option<&WorkQueue>,
) -> Option<String> {
    match (previous, next) {
        (None, None) => None,
        (Some(from), Some(to)) if from == to => None,
        (None, Some(queue)) => Some(format!("Assigned to WorkQueue: {}", queue.name)),
        (Some(from), Some(to)) => Some(format!(
            "Re-assigned WorkQueue from: {}, to: {}",
            from.name, to.name
        )),
        (Some(queue), None) => Some(format!("Removed from WorkQueue: {}", queue.name)),
    }
}
