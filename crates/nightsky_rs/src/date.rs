//! Parsing of user-supplied instants.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::NightskyError;

/// Parse an instant.
///
/// Accepts RFC 3339 with any offset, or a naive `YYYY-MM-DDThh:mm:ss[.f]`
/// or `YYYY-MM-DD` taken as UTC.
pub fn parse_utc_date(s: &str) -> Result<DateTime<Utc>, NightskyError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| NightskyError::InvalidDate(s.to_string()))
}
