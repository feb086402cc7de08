//! Weekend and business-day classification.
//!
//! A business day is Monday through Friday in the date's own zone. There is
//! no holiday calendar.

use chrono::Weekday;
use tracing::trace;

use crate::date::{checked_add_days, CalendarDate};

/// True iff the date falls on a Saturday or Sunday.
pub fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True iff the date falls on Monday through Friday.
///
/// Always equal to `!is_weekend(date)`.
pub fn is_business_day(date: CalendarDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}

/// The first business day strictly after `date`.
///
/// The input itself is never returned, even when it is a business day. The
/// search takes at most three steps (Friday to Monday).
///
/// # Examples
///
/// ```
/// use date_kit::{next_business_day, CalendarDate};
///
/// let friday = CalendarDate::parse("2024-11-22").unwrap();
/// let monday = CalendarDate::parse("2024-11-25").unwrap();
/// assert_eq!(next_business_day(friday), monday);
/// ```
///
/// # Panics
///
/// Panics if no business day follows `date` within chrono's representable
/// range. Use [`checked_next_business_day`] near the range limits.
pub fn next_business_day(date: CalendarDate) -> CalendarDate {
    match checked_next_business_day(date) {
        Some(next) => next,
        None => panic!("no business day after {} is in range", date.to_utc()),
    }
}

/// Like [`next_business_day`], but returns `None` instead of panicking at the
/// end of chrono's range.
pub fn checked_next_business_day(date: CalendarDate) -> Option<CalendarDate> {
    (1..=7)
        .map_while(|offset| checked_add_days(date, offset))
        .find(|next| is_business_day(*next))
}

/// Count business days in the closed interval `[start, end]`.
///
/// Steps one calendar day at a time from `start` while the stepped instant is
/// not after `end`, so both endpoints count. Every step is measured from
/// `start`, keeping its wall-clock time even after crossing a DST gap.
/// Returns 0 when `end < start`. Counting stops at the end of chrono's range.
///
/// # Examples
///
/// ```
/// use date_kit::{business_days_between, CalendarDate};
///
/// let start = CalendarDate::parse("2024-11-20").unwrap();
/// let end = CalendarDate::parse("2024-11-27").unwrap();
/// assert_eq!(business_days_between(start, end), 6);
/// ```
pub fn business_days_between(start: CalendarDate, end: CalendarDate) -> usize {
    let mut count = 0;
    let mut offset = 0;
    let mut current = Some(start);
    while let Some(day) = current.filter(|day| *day <= end) {
        if is_business_day(day) {
            count += 1;
        }
        offset += 1;
        current = checked_add_days(start, offset);
    }
    trace!(%start, %end, count, "counted business days");
    count
}

// ── Tests ───────────────────────────────────────────────────────────────────
