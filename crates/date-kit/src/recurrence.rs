//! Recurring date generation at a fixed cadence.
//!
//! Each occurrence's calendar day is derived from the previous one, never from
//! the start date, so a monthly series that clamps once (January 31 to
//! February 29) stays on the clamped day afterwards.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::{DateError, Result};

// ── Frequency ───────────────────────────────────────────────────────────────

/// The step applied between consecutive occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// +1 calendar day.
    Daily,
    /// +7 calendar days.
    Weekly,
    /// +1 calendar month, subject to [`MonthOverflow`].
    Monthly,
    /// +1 calendar year, subject to [`MonthOverflow`] on February 29.
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl FromStr for Frequency {
    type Err = DateError;

    /// Accepts `daily`, `weekly`, `monthly` or `yearly`, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            _ => Err(DateError::InvalidFrequency(format!(
                "'{}' (expected daily, weekly, monthly or yearly)",
                s.trim()
            ))),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// How a monthly or yearly step resolves a day-of-month the target month lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthOverflow {
    /// Use the last day of the target month (January 31 + 1 month = February 28/29).
    #[default]
    Clamp,
    /// Carry the surplus days into the next month (January 31 2023 + 1 month = March 3).
    Roll,
}

/// Options for [`recurring_dates_with_options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceOptions {
    #[serde(default, skip_serializing_if = "is_default_overflow")]
    pub month_overflow: MonthOverflow,
}

// ── RecurrenceRequest ───────────────────────────────────────────────────────

/// A start date, a cadence and a count, expanded by [`RecurrenceRequest::expand`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceRequest {
    pub start: CalendarDate,
    pub frequency: Frequency,
    pub occurrences: usize,
    #[serde(flatten)]
    pub options: RecurrenceOptions,
}

fn is_default_overflow(overflow: &MonthOverflow) -> bool {
    *overflow == MonthOverflow::default()
}

impl RecurrenceRequest {
    pub fn new(start: CalendarDate, frequency: Frequency, occurrences: usize) -> Self {
        Self {
            start,
            frequency,
            occurrences,
            options: RecurrenceOptions::default(),
        }
    }

    /// Build a request from a frequency token such as `"weekly"`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidFrequency`] for any unrecognized token.
    pub fn parse(start: CalendarDate, frequency: &str, occurrences: usize) -> Result<Self> {
        Ok(Self::new(start, frequency.parse()?, occurrences))
    }

    pub fn with_month_overflow(mut self, month_overflow: MonthOverflow) -> Self {
        self.options.month_overflow = month_overflow;
        self
    }

    /// Generate the dates this request describes.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::OutOfRange`] if a step leaves the representable range.
    pub fn expand(&self) -> Result<Vec<CalendarDate>> {
        recurring_dates_with_options(self.start, self.frequency, self.occurrences, &self.options)
    }
}

// ── recurring_dates ─────────────────────────────────────────────────────────

/// Generate `occurrences` dates at a fixed cadence, clamping month overflow.
///
/// See [`recurring_dates_with_options`].
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if a step leaves the representable range.
///
/// # Examples
///
/// ```
/// use date_kit::{recurring_dates, CalendarDate, Frequency};
///
/// let start = CalendarDate::parse("2024-01-31").unwrap();
/// let dates = recurring_dates(start, Frequency::Monthly, 3).unwrap();
/// let days: Vec<_> = dates.iter().map(|d| (d.month(), d.day())).collect();
/// assert_eq!(days, vec![(1, 31), (2, 29), (3, 29)]);
/// ```
pub fn recurring_dates(
    start: CalendarDate,
    frequency: Frequency,
    occurrences: usize,
) -> Result<Vec<CalendarDate>> {
    recurring_dates_with_options(start, frequency, occurrences, &RecurrenceOptions::default())
}

/// Generate `occurrences` dates at a fixed cadence.
///
/// The first element is `start` unmodified; each later element is the
/// previous one advanced by a single step:
///
/// - `Daily` — +1 calendar day
/// - `Weekly` — +7 calendar days
/// - `Monthly` — +1 calendar month
/// - `Yearly` — +1 calendar year
///
/// Steps are taken on the calendar day alone; every later occurrence carries
/// the wall-clock time of `start`, so a DST gap on one occurrence does not
/// shift the ones after it. Month and year steps resolve a missing
/// day-of-month with `options.month_overflow`. Zero occurrences yield an
/// empty vector.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] if a step leaves the representable range.
pub fn recurring_dates_with_options(
    start: CalendarDate,
    frequency: Frequency,
    occurrences: usize,
    options: &RecurrenceOptions,
) -> Result<Vec<CalendarDate>> {
    debug!(
        %start,
        %frequency,
        occurrences,
        overflow = ?options.month_overflow,
        "expanding recurrence"
    );

    let out_of_range =
        || DateError::OutOfRange(format!("{} from {}", frequency, start.to_utc()));
    let mut dates = Vec::with_capacity(occurrences);
    if occurrences > 0 {
        dates.push(start);
    }
    if occurrences < 2 {
        return Ok(dates);
    }

    let anchor = start.checked_naive_local().ok_or_else(out_of_range)?;
    let mut day = anchor.date();
    for _ in 1..occurrences {
        day = step(day, frequency, options.month_overflow).ok_or_else(|| {
            DateError::OutOfRange(format!("{} after {} from {}", frequency, day, start.to_utc()))
        })?;
        let next = start
            .with_local(day.and_time(anchor.time()))
            .ok_or_else(out_of_range)?;
        dates.push(next);
    }
    Ok(dates)
}

/// Advance a calendar day by one step of `frequency`.
fn step(day: NaiveDate, frequency: Frequency, overflow: MonthOverflow) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => day.checked_add_days(Days::new(1)),
        Frequency::Weekly => day.checked_add_days(Days::new(7)),
        Frequency::Monthly => add_months(day, 1, overflow),
        Frequency::Yearly => add_months(day, 12, overflow),
    }
}

fn add_months(day: NaiveDate, months: u32, overflow: MonthOverflow) -> Option<NaiveDate> {
    match overflow {
        MonthOverflow::Clamp => day.checked_add_months(Months::new(months)),
        MonthOverflow::Roll => {
            // Surplus days spill over: from the 1st of the target month, walk day - 1 days.
            let first = day.with_day(1)?.checked_add_months(Months::new(months))?;
            first.checked_add_days(Days::new(u64::from(day.day() - 1)))
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
