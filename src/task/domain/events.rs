//! Domain events emitted by the task aggregate.
//!
//! Events serialise as internally tagged JSON with camelCase fields so that
//! collaborators can persist and forward them without translation:
//!
//! ```
//! use casework::task::domain::{ChangeAuthor, TaskDueDateUpdated, TaskEvent, TaskId};
//!
//! let event = TaskEvent::DueDateUpdated(TaskDueDateUpdated {
//!     id: TaskId::new(),
//!     due_date: None,
//!     change_author: ChangeAuthor::new("Jo Clerk", "user-17"),
//! });
//! let json = serde_json::to_value(&event).expect("event serialises");
//! assert_eq!(json["eventType"], "TaskDueDateUpdated");
//! assert_eq!(json["changeAuthorId"], "user-17");
//! ```

use super::{ChangeAuthor, ParseAssignmentTypeError, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an assignment changed relative to the previous assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentType {
    /// The task had no assignee before.
    Assigned,
    /// The task moved from one assignee to another.
    Reassigned,
    /// The task no longer has an assignee.
    Unassigned,
}

impl AssignmentType {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "ASSIGNED",
            Self::Reassigned => "REASSIGNED",
            Self::Unassigned => "UNASSIGNED",
        }
    }
}

impl TryFrom<&str> for AssignmentType {
    type Error = ParseAssignmentTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "ASSIGNED" => Ok(Self::Assigned),
            "REASSIGNED" => Ok(Self::Reassigned),
            "UNASSIGNED" => Ok(Self::Unassigned),
            _ => Err(ParseAssignmentTypeError(value.to_owned())),
        }
    }
}

impl fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreated {
    /// Task identifier.
    pub id: TaskId,
    /// Workflow task type identifier.
    pub task_type_id: Option<String>,
    /// Workflow task type name.
    pub task_type: Option<String>,
    /// Business reference, such as a case URN.
    pub reference: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
    /// When the task was created in the workflow engine.
    pub created_date: Option<DateTime<Utc>>,
    /// Initial due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Hearing the task relates to.
    pub hearing_date: Option<DateTime<Utc>>,
    /// Initial work queue identifier.
    pub work_queue: Option<String>,
    /// Initial work queue name.
    pub work_queue_name: Option<String>,
    /// Court identifier.
    pub court_id: Option<String>,
    /// Jurisdiction, for example "CROWN" or "MAGISTRATES".
    pub jurisdiction: Option<String>,
    /// Author of the change.
    #[serde(flatten)]
    pub change_author: ChangeAuthor,
}

/// A task's assignee changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAssigned {
    /// Task identifier.
    pub id: TaskId,
    /// New assignee identifier, absent when unassigned.
    pub assign_to: Option<String>,
    /// New assignee name, absent when unassigned.
    pub assign_name: Option<String>,
    /// Kind of assignment change.
    pub assignment_type: AssignmentType,
    /// Human-readable description of the change.
    pub details: String,
    /// Author of the change.
    #[serde(flatten)]
    pub change_author: ChangeAuthor,
}

/// A task was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompleted {
    /// Task identifier.
    pub id: TaskId,
    /// When the task was completed.
    pub completed_date: DateTime<Utc>,
    /// Author of the change.
    #[serde(flatten)]
    pub change_author: ChangeAuthor,
}

/// A task was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDeleted {
    /// Task identifier.
    pub id: TaskId,
    /// Why the task was deleted.
    pub deletion_reason: Option<String>,
    /// When the task was deleted.
    pub deleted_date: DateTime<Utc>,
    /// Author of the change.
    #[serde(flatten)]
    pub change_author: ChangeAuthor,
}

/// A task's due date changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDueDateUpdated {
    /// Task identifier.
    pub id: TaskId,
    /// New due date, absent when cleared.
    pub due_date: Option<DateTime<Utc>>,
    /// Author of the change.
    #[serde(flatten)]
    pub change_author: ChangeAuthor,
}

/// A task's work queue changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskWorkqueueUpdated {
    /// Task identifier.
    pub id: TaskId,
    /// New work queue identifier, absent when removed.
    pub work_queue: Option<String>,
    /// New work queue name, absent when removed.
    pub work_queue_name: Option<String>,
    /// Human-readable description of the change.
    pub details: String,
    /// Author of the change.
    #[serde(flatten)]
    pub change_author: ChangeAuthor,
}

/// Every event the task aggregate can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "eventType")]
pub enum TaskEvent {
    /// See [`TaskCreated`].
    #[serde(rename = "TaskCreated")]
    Created(TaskCreated),
    /// See [`TaskAssigned`].
    #[serde(rename = "TaskAssigned")]
    Assigned(TaskAssigned),
    /// See [`TaskCompleted`].
    #[serde(rename = "TaskCompleted")]
    Completed(TaskCompleted),
    /// See [`TaskDeleted`].
    #[serde(rename = "TaskDeleted")]
    Deleted(TaskDeleted),
    /// See [`TaskDueDateUpdated`].
    #[serde(rename = "TaskDueDateUpdated")]
    DueDateUpdated(TaskDueDateUpdated),
    /// See [`TaskWorkqueueUpdated`].
    #[serde(rename = "TaskWorkqueueUpdated")]
    WorkqueueUpdated(TaskWorkqueueUpdated),
}

impl TaskEvent {
    /// Returns the identifier of the task the event belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::Created(event) => event.id,
            Self::Assigned(event) => event.id,
            Self::Completed(event) => event.id,
            Self::Deleted(event) => event.id,
            Self::DueDateUpdated(event) => event.id,
            Self::WorkqueueUpdated(event) => event.id,
        }
    }

    /// Returns the author attributed to the event.
    #[must_use]
    pub const fn change_author(&self) -> &ChangeAuthor {
        match self {
            Self::Created(event) => &event.change_author,
            Self::Assigned(event) => &event.change_author,
            Self::Completed(event) => &event.change_author,
            Self::Deleted(event) => &event.change_author,
            Self::DueDateUpdated(event) => &event.change_author,
            Self::WorkqueueUpdated(event) => &event.change_author,
        }
    }

    /// Returns the wire name of the event type.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Created(_) => "TaskCreated",
            Self::Assigned(_) => "TaskAssigned",
            Self::Completed(_) => "TaskCompleted",
            Self::Deleted(_) => "TaskDeleted",
            Self::DueDateUpdated(_) => "TaskDueDateUpdated",
            Self::WorkqueueUpdated(_) => "TaskWorkqueueUpdated",
        }
    }
}
