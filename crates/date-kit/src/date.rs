//! The [`CalendarDate`] value type and plain day arithmetic.
//!
//! A `CalendarDate` is an instant paired with the IANA zone its calendar
//! fields are read in. Every operation returns a new value; nothing is
//! mutated in place.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone,
    Timelike, Utc, Weekday,
};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DateError, Result};
use crate::timezone::parse_timezone;

/// An immutable instant with calendar field accessors.
///
/// Equality, ordering and hashing follow the instant only: the same moment
/// viewed from two zones compares equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    inner: DateTime<Tz>,
}

impl CalendarDate {
    /// Midnight UTC on the given day. `month` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDatetime`] if the fields do not name a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// A UTC wall-clock instant. `month` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDatetime`] if the fields are out of range.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        Tz::UTC
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self::from)
            .ok_or_else(|| {
                DateError::InvalidDatetime(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02} is not a valid UTC datetime"
                ))
            })
    }

    /// Wrap a UTC instant; calendar fields are read in UTC.
    pub fn from_utc(instant: DateTime<Utc>) -> Self {
        Self {
            inner: instant.with_timezone(&Tz::UTC),
        }
    }

    /// Parse an RFC 3339 datetime or a bare `YYYY-MM-DD` date (midnight UTC).
    ///
    /// Fields of a plain RFC 3339 value are read in UTC. A trailing IANA zone
    /// annotation, as in `2024-01-15T13:00:00+01:00[Europe/Brussels]`, keeps
    /// the instant given by the offset and reads the fields in that zone.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDatetime`] if the input is neither form, or
    /// [`DateError::UnknownTimeZone`] if the annotation names no IANA zone.
    ///
    /// # Examples
    ///
    /// ```
    /// use date_kit::CalendarDate;
    ///
    /// let date = CalendarDate::parse("2024-11-19").unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2024, 11, 19));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some((stamp, zone)) = s.strip_suffix(']').and_then(|rest| rest.split_once('[')) {
            let tz = parse_timezone(zone)?;
            return Self::parse(stamp).map(|date| date.in_zone(tz));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_utc(dt.with_timezone(&Utc)));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| DateError::InvalidDatetime(format!("'{}': {}", s, e)))
            .and_then(|date| Self::from_ymd(date.year(), date.month(), date.day()))
    }

    /// The same instant, with calendar fields read in `tz`.
    pub fn in_zone(self, tz: Tz) -> Self {
        Self {
            inner: self.inner.with_timezone(&tz),
        }
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Month of the year, 1-based (January = 1).
    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.inner.weekday().num_days_from_sunday()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub fn timezone(&self) -> Tz {
        self.inner.timezone()
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.inner.with_timezone(&Utc)
    }

    /// Wall-clock date and time in this value's zone, or `None` when the
    /// offset pushes it past chrono's range.
    pub(crate) fn checked_naive_local(&self) -> Option<NaiveDateTime> {
        let offset = self.inner.offset().fix().local_minus_utc();
        self.inner
            .naive_utc()
            .checked_add_signed(Duration::seconds(i64::from(offset)))
    }

    pub fn to_rfc3339(&self) -> String {
        self.inner.to_rfc3339()
    }

    /// Re-anchor a wall-clock time in this value's zone.
    ///
    /// Ambiguous times (DST fall-back) take the earlier instant. Times skipped
    /// by a DST gap are read with the UTC offset in force before the gap, which
    /// moves them forward past it. `None` near the ends of chrono's range.
    pub(crate) fn with_local(self, naive: NaiveDateTime) -> Option<Self> {
        let tz = self.inner.timezone();
        let inner = match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                let day_before = naive.checked_sub_days(Days::new(1))?;
                let before_gap = tz.offset_from_utc_datetime(&day_before).fix();
                let utc = naive.checked_sub_signed(Duration::seconds(i64::from(
                    before_gap.local_minus_utc(),
                )))?;
                tz.from_utc_datetime(&utc)
            }
        };
        Some(Self { inner })
    }
}

impl From<DateTime<Tz>> for CalendarDate {
    fn from(inner: DateTime<Tz>) -> Self {
        Self { inner }
    }
}

impl From<DateTime<Utc>> for CalendarDate {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_utc(instant)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.to_rfc3339())
    }
}

/// Serializes as RFC 3339. Values outside UTC carry a `[Zone/Name]` suffix
/// so that deserializing reads the fields in the same zone.
impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let tz = self.inner.timezone();
        if tz == Tz::UTC {
            serializer.serialize_str(&self.inner.to_rfc3339())
        } else {
            serializer.serialize_str(&format!("{}[{}]", self.inner.to_rfc3339(), tz.name()))
        }
    }
}

/// Deserializes from the same forms [`CalendarDate::parse`] accepts.
impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ── add_days ────────────────────────────────────────────────────────────────

/// Shift a date by `days` calendar days (negative moves backwards).
///
/// Works on the wall clock of the date's own zone, so the time of day is kept
/// across DST transitions and month/year boundaries roll over naturally
/// (January 32 is February 1).
///
/// # Panics
///
/// Panics if the result falls outside chrono's representable range (about
/// ±262,000 years), like chrono's own arithmetic operators.
///
/// # Examples
///
/// ```
/// use date_kit::{add_days, format_date, CalendarDate};
///
/// let date = CalendarDate::parse("2024-11-19").unwrap();
/// assert_eq!(format_date(add_days(date, 5), "YYYY-MM-DD"), "2024-11-24");
/// ```
pub fn add_days(date: CalendarDate, days: i64) -> CalendarDate {
    match checked_add_days(date, days) {
        Some(shifted) => shifted,
        None => panic!("adding {days} day(s) to {} is out of range", date.to_utc()),
    }
}

/// Like [`add_days`], but returns `None` instead of panicking at the range limits.
pub fn checked_add_days(date: CalendarDate, days: i64) -> Option<CalendarDate> {
    if days == 0 {
        return Some(date);
    }
    let local = date.checked_naive_local()?;
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        local.checked_add_days(step)?
    } else {
        local.checked_sub_days(step)?
    };
    date.with_local(shifted)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    #[test]
    fn test_parse_bare_date_is_midnight_utc() {
        let d = date("2024-11-19");
        assert_eq!(d.to_rfc3339(), "2024-11-19T00:00:00+00:00");
        assert_eq!(d.timezone(), Tz::UTC);
    }

    #[test]
    fn test_parse_rfc3339_keeps_instant() {
        let d = date("2024-06-15T10:00:00-04:00");
        assert_eq!(d.hour(), 14);
        assert_eq!(d.day(), 15);
    }

    #[test]
    fn test_parse_invalid_returns_error() {
        let err = CalendarDate::parse("19/11/2024").unwrap_err().to_string();
        assert!(err.contains("Invalid datetime"), "got: {err}");
    }

    #[test]
    fn test_from_ymd_rejects_february_30() {
        let err = CalendarDate::from_ymd(2024, 2, 30).unwrap_err();
        assert!(matches!(err, DateError::InvalidDatetime(_)));
    }

    #[test]
    fn test_day_of_week_is_sunday_based() {
        assert_eq!(date("2024-11-24").day_of_week(), 0); // Sunday
        assert_eq!(date("2024-11-25").day_of_week(), 1); // Monday
        assert_eq!(date("2024-11-23").day_of_week(), 6); // Saturday
    }

    #[test]
    fn test_equality_follows_instant_not_zone() {
        let utc = date("2024-01-15T12:00:00Z");
        let brussels = utc.in_zone(chrono_tz::Europe::Brussels);
        assert_eq!(utc, brussels);
        assert_eq!(brussels.hour(), 13);
    }

    #[test]
    fn test_serde_roundtrip_as_string() {
        let d = date("2024-11-19T08:30:00Z");
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-11-19T08:30:00+00:00\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_serde_roundtrip_keeps_zone_fields() {
        let brussels = date("2024-01-15T12:00:00Z").in_zone(chrono_tz::Europe::Brussels);
        let json = serde_json::to_string(&brussels).unwrap();
        assert_eq!(json, "\"2024-01-15T13:00:00+01:00[Europe/Brussels]\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, brussels);
        assert_eq!(back.hour(), 13);
        assert_eq!(back.timezone(), chrono_tz::Europe::Brussels);

        // Friday evening in New York is already Saturday in UTC.
        let friday = date("2024-11-23T04:30:00Z").in_zone(chrono_tz::America::New_York);
        let back: CalendarDate =
            serde_json::from_str(&serde_json::to_string(&friday).unwrap()).unwrap();
        assert_eq!(back.weekday(), Weekday::Fri);
        assert_eq!((back.day(), back.hour()), (22, 23));
    }

    #[test]
    fn test_parse_zone_annotation() {
        let d = date("2024-07-15T14:00:00+02:00[Europe/Brussels]");
        assert_eq!(d, date("2024-07-15T12:00:00Z"));
        assert_eq!(d.hour(), 14);

        let err = CalendarDate::parse("2024-07-15T14:00:00+02:00[Mars/Olympus_Mons]").unwrap_err();
        assert!(matches!(err, DateError::UnknownTimeZone(_)));
    }

    #[test]
    fn test_add_days_forward() {
        assert_eq!(add_days(date("2024-11-19"), 5), date("2024-11-24"));
    }

    #[test]
    fn test_add_days_negative() {
        assert_eq!(add_days(date("2024-03-01"), -1), date("2024-02-29"));
    }

    #[test]
    fn test_add_days_rolls_month_and_year() {
        assert_eq!(add_days(date("2024-01-31"), 1), date("2024-02-01"));
        assert_eq!(add_days(date("2024-12-31"), 1), date("2025-01-01"));
    }

    #[test]
    fn test_add_days_zero_is_identity() {
        let d = date("2024-11-19T17:45:12Z");
        assert_eq!(add_days(d, 0), d);
    }

    #[test]
    fn test_checked_add_days_at_range_limit() {
        let max = CalendarDate::from_utc(DateTime::<Utc>::MAX_UTC);
        assert!(checked_add_days(max, 1).is_none());
        assert_eq!(checked_add_days(max, -1).map(|d| d < max), Some(true));
    }

    #[test]
    fn test_checked_add_days_zoned_near_range_limit() {
        let tokyo = CalendarDate::from_utc(DateTime::<Utc>::MAX_UTC - Duration::hours(1))
            .in_zone(chrono_tz::Asia::Tokyo);
        assert!(checked_add_days(tokyo, 1).is_none());

        let new_york = CalendarDate::from_utc(DateTime::<Utc>::MIN_UTC + Duration::hours(1))
            .in_zone(chrono_tz::America::New_York);
        assert!(checked_add_days(new_york, -1).is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_add_days_panics_past_range_limit() {
        add_days(CalendarDate::from_utc(DateTime::<Utc>::MAX_UTC), 1);
    }

    #[test]
    fn test_add_days_keeps_wall_clock_across_dst() {
        // Brussels springs forward on 2024-03-31: 23h between the two noons.
        let before = date("2024-03-30T11:00:00Z").in_zone(chrono_tz::Europe::Brussels);
        let after = add_days(before, 1);
        assert_eq!(after.hour(), 12);
        assert_eq!(after.day(), 31);
        assert_eq!((after.to_utc() - before.to_utc()).num_hours(), 23);
    }

    #[test]
    fn test_add_days_into_dst_gap_moves_forward() {
        // 02:30 on 2024-03-31 does not exist in Brussels.
        let before = date("2024-03-30T01:30:00Z").in_zone(chrono_tz::Europe::Brussels);
        assert_eq!(before.hour(), 2);
        let after = add_days(before, 1);
        assert_eq!(after.day(), 31);
        assert_eq!(after.hour(), 3);
        assert_eq!(after.minute(), 30);
    }
}
