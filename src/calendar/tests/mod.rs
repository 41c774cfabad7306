//! Unit tests for business-calendar calculations.
