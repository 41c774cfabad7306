//! Port contracts for business-calendar calculations.

pub mod holiday_lookup;

pub use holiday_lookup::{HolidayLookupError, HolidayLookupResult, PublicHolidayLookup};

#[cfg(test)]
pub use holiday_lookup::MockPublicHolidayLookup;
