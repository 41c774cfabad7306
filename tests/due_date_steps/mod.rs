//! Step definitions for due-date rule BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
