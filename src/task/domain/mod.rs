//! Domain model for the task lifecycle state engine.
//!
//! A task's state is never stored directly. It is rebuilt by folding the
//! events the task has emitted, and each command is decided against that
//! state so that only observable changes produce new events.

mod commands;
mod error;
mod events;
mod ids;
mod task;

pub use commands::{AssignTask, CompleteTask, CreateTask, DeleteTask, UpdateTask};
pub use error::{ParseAssignmentTypeError, ParseTaskLifecycleError};
pub use events::{
    AssignmentType, TaskAssigned, TaskCompleted, TaskCreated, TaskDeleted, TaskDueDateUpdated,
    TaskEvent, TaskWorkqueueUpdated,
};
pub use ids::{Assignee, ChangeAuthor, TaskId, WorkQueue};
pub use task::{Task, TaskLifecycle};
