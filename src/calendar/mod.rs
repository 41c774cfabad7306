//! Business-calendar arithmetic and due-date rule evaluation.
//!
//! Due dates are expressed as short formulas such as `${now()+5d}` or
//! `${hearingDate-2d}` and resolved against a calendar that skips weekends
//! and the public holidays published for a division. The module follows
//! hexagonal architecture:
//!
//! - Domain types and pure date arithmetic in [`domain`]
//! - The public-holiday lookup contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The [`services::BusinessCalendar`] and [`services::DueDateRuleEvaluator`]
//!   orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
