//! In-memory event store for task lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{TaskEvent, TaskId},
    ports::{TaskEventStore, TaskEventStoreError, TaskEventStoreResult},
};

/// Thread-safe in-memory task event store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskEventStore {
    state: Arc<RwLock<InMemoryTaskEventState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskEventState {
    streams: HashMap<TaskId, Vec<TaskEvent>>,
}

impl InMemoryTaskEventStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn stream_version(events: Option<&Vec<TaskEvent>>) -> u64 {
    events.map_or(0, |stream| u64::try_from(stream.len()).unwrap_or(u64::MAX))
}

#[async_trait]
impl TaskEventStore for InMemoryTaskEventStore {
    async fn load(&self, id: TaskId) -> TaskEventStoreResult<Vec<TaskEvent>> {
        let state = self.state.read().map_err(|err| {
            TaskEventStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.streams.get(&id).cloned().unwrap_or_default())
    }

    async fn append(
        &self,
        id: TaskId,
        expected_version: u64,
        events: &[TaskEvent],
    ) -> TaskEventStoreResult<()> {
        if let Some(foreign) = events.iter().find(|event| event.task_id() != id) {
            return Err(TaskEventStoreError::ForeignEvent {
                stream: id,
                event_task: foreign.task_id(),
            });
        }

        let mut state = self.state.write().map_err(|err| {
            TaskEventStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let actual = stream_version(state.streams.get(&id));
        if actual != expected_version {
            return Err(TaskEventStoreError::VersionConflict {
                id,
                expected: expected_version,
                actual,
            });
        }

        state
            .streams
            .entry(id)
            .or_default()
            .extend_from_slice(events);
        Ok(())
    }
}
