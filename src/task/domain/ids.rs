//! Identifier and paired-reference types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a workflow task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity attributed to a state-changing command.
///
/// Presence of either half is not validated here; listeners reject
/// commands without an author before they reach the aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChangeAuthor {
    /// Display name of the author.
    #[serde(rename = "changeAuthor")]
    pub name: String,
    /// Identifier of the author.
    #[serde(rename = "changeAuthorId")]
    pub id: String,
}

impl ChangeAuthor {
    /// Creates a change author.
    #[must_use]
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Work queue a task is routed to.
///
/// Identifier and name are always set and cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkQueue {
    /// Work queue identifier.
    pub id: String,
    /// Work queue display name.
    pub name: String,
}

impl WorkQueue {
    /// Creates a work queue reference.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Pairs an optional identifier and name.
    ///
    /// Returns `None` only when both halves are absent; a missing half of a
    /// partial pair becomes an empty string.
    #[must_use]
    pub fn from_parts(id: Option<String>, name: Option<String>) -> Option<Self> {
        pair(id, name).map(|(queue_id, queue_name)| Self::new(queue_id, queue_name))
    }
}

/// Person or team a task is assigned to.
///
/// Identifier and name are always set and cleared together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignee {
    /// Assignee identifier.
    pub id: String,
    /// Assignee display name.
    pub name: String,
}

impl Assignee {
    /// Creates an assignee reference.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Pairs an optional identifier and name, as [`WorkQueue::from_parts`].
    #[must_use]
    pub fn from_parts(id: Option<String>, name: Option<String>) -> Option<Self> {
        pair(id, name).map(|(assignee_id, assignee_name)| Self::new(assignee_id, assignee_name))
    }
}

fn pair(id: Option<String>, name: Option<String>) -> Option<(String, String)> {
    if id.is_none() && name.is_none() {
        return None;
    }
    Some((id.unwrap_or_default(), name.unwrap_or_default()))
}
