//! Commands accepted by the task aggregate.
//!
//! Only the task identifier is mandatory; every other absent value is a
//! legitimate input (for example an absent assignee means "unassign").

use super::{ChangeAuthor, TaskId};
use chrono::{DateTime, Utc};

/// Records the creation of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    /// Task identifier.
    pub id: TaskId,
    /// Workflow task type identifier.
    pub task_type_id: Option<String>,
    /// Workflow task type name.
    pub task_type: Option<String>,
    /// Business reference.
    pub reference: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
    /// Creation timestamp reported by the workflow engine.
    pub created_date: Option<DateTime<Utc>>,
    /// Initial due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Related hearing date.
    pub hearing_date: Option<DateTime<Utc>>,
    /// Initial work queue identifier.
    pub work_queue_id: Option<String>,
    /// Initial work queue name.
    pub work_queue_name: Option<String>,
    /// Court identifier.
    pub court_id: Option<String>,
    /// Jurisdiction.
    pub jurisdiction: Option<String>,
    /// Author of the change.
    pub change_author: ChangeAuthor,
}

impl CreateTask {
    /// Creates a command with only the mandatory fields set.
    #[must_use]
    pub const fn new(id: TaskId, change_author: ChangeAuthor) -> Self {
        Self {
            id,
            task_type_id: None,
            task_type: None,
            reference: None,
            note: None,
            created_date: None,
            due_date: None,
            hearing_date: None,
            work_queue_id: None,
            work_queue_name: None,
            court_id: None,
            jurisdiction: None,
            change_author,
        }
    }

    /// Sets the task type identifier and name.
    #[must_use]
    pub fn with_task_type(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.task_type_id = Some(id.into());
        self.task_type = Some(name.into());
        self
    }

    /// Sets the business reference.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Sets the note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn with_created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = Some(created_date);
        self
    }

    /// Sets the initial due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the hearing date.
    #[must_use]
    pub const fn with_hearing_date(mut self, hearing_date: DateTime<Utc>) -> Self {
        self.hearing_date = Some(hearing_date);
        self
    }

    /// Sets the initial work queue.
    #[must_use]
    pub fn with_work_queue(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.work_queue_id = Some(id.into());
        self.work_queue_name = Some(name.into());
        self
    }

    /// Sets the court identifier.
    #[must_use]
    pub fn with_court_id(mut self, court_id: impl Into<String>) -> Self {
        self.court_id = Some(court_id.into());
        self
    }

    /// Sets the jurisdiction.
    #[must_use]
    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }
}

/// Records a change of assignee. Both halves absent means "unassign".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTask {
    /// Task identifier.
    pub id: TaskId,
    /// New assignee identifier.
    pub assign_to_id: Option<String>,
    /// New assignee name.
    pub assign_to_name: Option<String>,
    /// Author of the change.
    pub change_author: ChangeAuthor,
}

impl AssignTask {
    /// Creates an assignment command.
    #[must_use]
    pub const fn new(
        id: TaskId,
        assign_to_id: Option<String>,
        assign_to_name: Option<String>,
        change_author: ChangeAuthor,
    ) -> Self {
        Self {
            id,
            assign_to_id,
            assign_to_name,
            change_author,
        }
    }

    /// Assigns the task to `assignee_id` / `assignee_name`.
    #[must_use]
    pub fn to(
        id: TaskId,
        assignee_id: impl Into<String>,
        assignee_name: impl Into<String>,
        change_author: ChangeAuthor,
    ) -> Self {
        Self::new(
            id,
            Some(assignee_id.into()),
            Some(assignee_name.into()),
            change_author,
        )
    }

    /// Removes the current assignee.
    #[must_use]
    pub const fn unassign(id: TaskId, change_author: ChangeAuthor) -> Self {
        Self::new(id, None, None, change_author)
    }
}

/// Records completion of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteTask {
    /// Task identifier.
    pub id: TaskId,
    /// When the task was completed.
    pub completed_at: DateTime<Utc>,
    /// Author of the change.
    pub change_author: ChangeAuthor,
}

impl CompleteTask {
    /// Creates a completion command.
    #[must_use]
    pub const fn new(id: TaskId, completed_at: DateTime<Utc>, change_author: ChangeAuthor) -> Self {
        Self {
            id,
            completed_at,
            change_author,
        }
    }
}

/// Records deletion of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTask {
    /// Task identifier.
    pub id: TaskId,
    /// Why the task was deleted.
    pub deletion_reason: Option<String>,
    /// When the task was deleted.
    pub deleted_at: DateTime<Utc>,
    /// Author of the change.
    pub change_author: ChangeAuthor,
}

impl DeleteTask {
    /// Creates a deletion command.
    #[must_use]
    pub const fn new(
        id: TaskId,
        deletion_reason: Option<String>,
        deleted_at: DateTime<Utc>,
        change_author: ChangeAuthor,
    ) -> Self {
        Self {
            id,
            deletion_reason,
            deleted_at,
            change_author,
        }
    }
}

/// Requests new values for the diff-gated fields of a task.
///
/// The values replace the current ones wholesale: an absent due date clears
/// it and an absent work queue pair removes the task from its queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTask {
    /// Task identifier.
    pub id: TaskId,
    /// Requested due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Requested work queue identifier.
    pub work_queue_id: Option<String>,
    /// Requested work queue name.
    pub work_queue_name: Option<String>,
    /// Author of the change.
    pub change_author: ChangeAuthor,
}

impl UpdateTask {
    /// Creates an update command.
    #[must_use]
    pub const fn new(
        id: TaskId,
        due_date: Option<DateTime<Utc>>,
        work_queue_id: Option<String>,
        work_queue_name: Option<String>,
        change_author: ChangeAuthor,
    ) -> Self {
        Self {
            id,
            due_date,
            work_queue_id,
            work_queue_name,
            change_author,
        }
    }
}
