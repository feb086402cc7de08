//! Relative-time phrasing ("2 day(s) ago", "3 day(s) from now").
//!
//! The caller supplies `now`; nothing here reads the system clock. Years are
//! a flat 365 days with no leap adjustment, which is intentional: the phrase
//! is an approximation.

use std::fmt;

use serde::Serialize;

use crate::date::CalendarDate;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// The unit a relative time is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Day,
    Hour,
    Minute,
    Second,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
        }
    }
}

/// An absolute distance between two instants, bucketed into its largest
/// whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeTime {
    pub amount: u64,
    pub unit: TimeUnit,
}

impl RelativeTime {
    /// Bucket a whole-second distance into years, days, hours, minutes or seconds.
    pub fn from_seconds(seconds: u64) -> Self {
        let buckets = [
            (SECONDS_PER_YEAR, TimeUnit::Year),
            (SECONDS_PER_DAY, TimeUnit::Day),
            (SECONDS_PER_HOUR, TimeUnit::Hour),
            (SECONDS_PER_MINUTE, TimeUnit::Minute),
        ];
        buckets
            .iter()
            .find(|(size, _)| seconds >= *size)
            .map(|&(size, unit)| RelativeTime {
                amount: seconds / size,
                unit,
            })
            .unwrap_or(RelativeTime {
                amount: seconds,
                unit: TimeUnit::Second,
            })
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(s)", self.amount, self.unit.as_str())
    }
}

/// The distance between `date` and `now`, ignoring direction.
///
/// Sub-second remainders are truncated.
pub fn relative_time(date: CalendarDate, now: CalendarDate) -> RelativeTime {
    let seconds = (now.to_utc() - date.to_utc()).num_seconds().unsigned_abs();
    RelativeTime::from_seconds(seconds)
}

/// How long ago `date` was, seen from `now`.
///
/// # Examples
///
/// ```
/// use date_kit::{add_days, time_ago, CalendarDate};
///
/// let now = CalendarDate::parse("2024-11-19T12:00:00Z").unwrap();
/// assert_eq!(time_ago(add_days(now, -2), now), "2 day(s) ago");
/// ```
pub fn time_ago(date: CalendarDate, now: CalendarDate) -> String {
    format!("{} ago", relative_time(date, now))
}

/// How far `date` lies ahead of `now`.
///
/// # Examples
///
/// ```
/// use date_kit::{add_days, time_until, CalendarDate};
///
/// let now = CalendarDate::parse("2024-11-19T12:00:00Z").unwrap();
/// assert_eq!(time_until(add_days(now, 3), now), "3 day(s) from now");
/// ```
pub fn time_until(date: CalendarDate, now: CalendarDate) -> String {
    format!("{} from now", relative_time(date, now))
}

// ── Tests ───────────────────────────────────────────────────────────────────
