//! Step definitions for task lifecycle BDD scenarios.

pub mod then;
