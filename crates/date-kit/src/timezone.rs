//! Timezone conversion behind a small capability trait.
//!
//! Conversion never moves the instant; it only changes the zone the calendar
//! fields are read in. The IANA database itself comes from `chrono-tz`.

use chrono_tz::Tz;
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::{DateError, Result};

/// Anything that can re-express an instant in a named zone.
pub trait TimeZoneProvider {
    /// Express `instant` in `zone`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::UnknownTimeZone`] if `zone` is not recognized.
    fn convert(&self, instant: &CalendarDate, zone: &str) -> Result<CalendarDate>;
}

/// The IANA timezone database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaTimeZones;

impl TimeZoneProvider for IanaTimeZones {
    fn convert(&self, instant: &CalendarDate, zone: &str) -> Result<CalendarDate> {
        let tz = parse_timezone(zone)?;
        Ok(instant.in_zone(tz))
    }
}

/// Parse an IANA timezone name into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| DateError::UnknownTimeZone(format!("'{}'", s)))
}

/// Convert a date to `zone` using the bundled IANA database.
///
/// # Errors
///
/// Returns [`DateError::UnknownTimeZone`] if `zone` is not a valid IANA name.
///
/// # Examples
///
/// ```
/// use date_kit::{convert_time_zone, CalendarDate};
///
/// let winter = CalendarDate::parse("2024-01-15T12:00:00Z").unwrap();
/// let brussels = convert_time_zone(winter, "Europe/Brussels").unwrap();
/// assert_eq!(brussels.hour(), 13);
/// ```
pub fn convert_time_zone(date: CalendarDate, zone: &str) -> Result<CalendarDate> {
    convert_time_zone_with(&IanaTimeZones, date, zone)
}

/// Convert a date to `zone` through the given provider, returning its result unchanged.
///
/// # Errors
///
/// Whatever the provider reports, typically [`DateError::UnknownTimeZone`].
pub fn convert_time_zone_with<P: TimeZoneProvider + ?Sized>(
    provider: &P,
    date: CalendarDate,
    zone: &str,
) -> Result<CalendarDate> {
    debug!(%date, zone, "converting timezone");
    provider.convert(&date, zone)
}

// ── Tests ───────────────────────────────────────────────────────────────────
