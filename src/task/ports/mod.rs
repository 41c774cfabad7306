//! Port contracts for the task lifecycle state engine.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{TaskEventStore, TaskEventStoreError, TaskEventStoreResult};
