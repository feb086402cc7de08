//! # date-kit
//!
//! Deterministic date utilities.
//!
//! Every function is pure: dates are immutable values, and the "now" anchor
//! for relative phrasing is passed in by the caller rather than read from the
//! system clock.
//!
//! ## Modules
//!
//! - [`date`] — the [`CalendarDate`] value type and calendar-day arithmetic
//! - [`business`] — weekend/business-day checks, next business day, range counts
//! - [`recurrence`] — N dates at a daily/weekly/monthly/yearly cadence
//! - [`relative`] — "2 day(s) ago" / "3 day(s) from now"
//! - [`format`] — `YYYY-MM-DD` style patterns and readable month names
//! - [`timezone`] — timezone conversion through a provider trait
//! - [`error`] — Error types

pub mod business;
pub mod date;
pub mod error;
pub mod format;
pub mod recurrence;
pub mod relative;
pub mod timezone;

pub use business::{
    business_days_between, checked_next_business_day, is_business_day, is_weekend,
    next_business_day,
};
pub use date::{add_days, checked_add_days, CalendarDate};
pub use error::DateError;
pub use format::{format_date, to_readable_string};
pub use recurrence::{
    recurring_dates, recurring_dates_with_options, Frequency, MonthOverflow, RecurrenceOptions,
    RecurrenceRequest,
};
pub use relative::{relative_time, time_ago, time_until, RelativeTime, TimeUnit};
pub use timezone::{
    convert_time_zone, convert_time_zone_with, parse_timezone, IanaTimeZones, TimeZoneProvider,
};
