//! Julian Date ↔ calendar conversions.
//!
//! Gregorian-calendar algorithm (Meeus, *Astronomical Algorithms*, ch. 7).
//! Every timestamp is read as UTC.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Milliseconds in a day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Date from a Gregorian calendar date with fractional day.
///
/// January and February are treated as months 13 and 14 of the previous
/// year; `B = 2 − A + ⌊A/4⌋` is the Gregorian century correction.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Calendar date `(year, month, fractional day)` from a Julian Date.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian Date of a UTC instant.
pub fn date_to_julian(date: &DateTime<Utc>) -> f64 {
    let seconds = f64::from(date.second()) + f64::from(date.nanosecond()) * 1e-9;
    let day_frac = f64::from(date.day())
        + f64::from(date.hour()) / 24.0
        + f64::from(date.minute()) / 1440.0
        + seconds / 86_400.0;
    calendar_to_jd(date.year(), date.month(), day_frac)
}

/// UTC instant of a Julian Date, rounded to the millisecond.
///
/// Julian Dates outside chrono's representable range saturate at
/// [`DateTime::<Utc>::MIN_UTC`] / [`DateTime::<Utc>::MAX_UTC`].
pub fn julian_to_date(jd: f64) -> DateTime<Utc> {
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.is_nan() {
        return DateTime::<Utc>::MIN_UTC;
    }
    DateTime::from_timestamp_millis(millis as i64).unwrap_or(if millis < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
