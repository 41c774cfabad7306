//! Unit tests for the task lifecycle state engine.
