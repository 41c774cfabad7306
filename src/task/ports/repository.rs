//! Event store port for task event streams.

use crate::task::domain::{TaskEvent, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task event store operations.
pub type TaskEventStoreResult<T> = Result<T, TaskEventStoreError>;

/// Append-only storage of per-task event streams.
///
/// The store is the only concurrency control for a task: appends carry the
/// stream length the caller decided against, and a mismatch is rejected.
#[async_trait]
pub trait TaskEventStore: Send + Sync {
    /// Loads the ordered event stream of a task.
    ///
    /// Returns an empty stream for a task with no events.
    async fn load(&self, id: TaskId) -> TaskEventStoreResult<Vec<TaskEvent>>;

    /// Appends `events` to the stream of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEventStoreError::VersionConflict`] when the stream no
    /// longer has `expected_version` events.
    async fn append(
        &self,
        id: TaskId,
        expected_version: u64,
        events: &[TaskEvent],
    ) -> TaskEventStoreResult<()>;
}

/// Errors returned by task event store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskEventStoreError {
    /// Another writer appended to the stream since it was loaded.
    #[error("version conflict for task {id}: expected {expected}, found {actual}")]
    VersionConflict {
        /// Task identifier.
        id: TaskId,
        /// Stream length the caller decided against.
        expected: u64,
        /// Stream length found at append time.
        actual: u64,
    },

    /// An event does not belong to the stream it was appended to.
    #[error("event for task {event_task} appended to stream of task {stream}")]
    ForeignEvent {
        /// Stream being appended to.
        stream: TaskId,
        /// Task the event belongs to.
        event_task: TaskId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskEventStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
