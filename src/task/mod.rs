//! Task lifecycle state engine.
//!
//! Workflow tasks are event-sourced aggregates. Commands issued by workflow
//! listeners are compared against the task's replayed state, and only
//! observable changes are recorded as events, each carrying a
//! human-readable description of the change for downstream consumers. The
//! module follows hexagonal architecture:
//!
//! - Domain types, the event fold and command decisions in [`domain`]
//! - The event store contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
