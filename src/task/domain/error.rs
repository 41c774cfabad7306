//! Error types for parsing task domain values.

use thiserror::Error;

/// Error returned while parsing a task lifecycle from storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task lifecycle: {0}")]
pub struct ParseTaskLifecycleError(pub String);

/// Error returned while parsing an assignment type from storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown assignment type: {0}")]
pub struct ParseAssignmentTypeError(pub String);
