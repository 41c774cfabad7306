//! Casework: task lifecycle and due-date engine for workflow integrations.
//!
//! This crate holds the self-contained core of an integration layer that
//! drives workflow tasks in response to hearing, application and document
//! events. Workflow plumbing, reference-data clients and message dispatch
//! are collaborators outside this crate.
//!
//! # Architecture
//!
//! Casework follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Event-sourced task aggregate that records only observable
//!   changes
//! - [`calendar`]: Working-day arithmetic and due-date rule evaluation

pub mod calendar;
pub mod task;
