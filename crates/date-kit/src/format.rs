//! String rendering of calendar dates.

use crate::date::CalendarDate;

/// Month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Substitute `YYYY`, `MM` and `DD` in `pattern`.
///
/// Only the first occurrence of each token is replaced, in that order. `YYYY`
/// is the unpadded year; `MM` and `DD` are zero-padded to two digits. All
/// other text is copied as-is.
///
/// # Examples
///
/// ```
/// use date_kit::{format_date, CalendarDate};
///
/// let date = CalendarDate::parse("2024-11-19").unwrap();
/// assert_eq!(format_date(date, "YYYY-MM-DD"), "2024-11-19");
/// assert_eq!(format_date(date, "DD/MM/YYYY"), "19/11/2024");
/// ```
pub fn format_date(date: CalendarDate, pattern: &str) -> String {
    pattern
        .replacen("YYYY", &date.year().to_string(), 1)
        .replacen("MM", &format!("{:02}", date.month()), 1)
        .replacen("DD", &format!("{:02}", date.day()), 1)
}

/// `"<day> <month name> <year>"`, e.g. `"19 november 2024"`.
pub fn to_readable_string(date: CalendarDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// Name of a 1-based month. Out-of-range values cannot come from a
/// `CalendarDate` and map to an empty string.
fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or_default()
}

// ── Tests ───────────────────────────────────────────────────────────────────
