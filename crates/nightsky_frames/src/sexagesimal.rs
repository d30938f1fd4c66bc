//! Parsing and formatting of RA/Dec strings.
//!
//! Accepted inputs:
//! - decimal degrees for either kind: `"41.5"`, `"-41.5°"`
//! - RA in hours: `"12h 30m 45s"`, `"12:30:45"`, `"12 30 45.5"`
//! - Dec in degrees: `"+41° 16' 09\""`, `"-41:16:09"`, `"-0 30 00"`
//!
//! A Dec sign applies to the whole magnitude, so `"-0 30 00"` is −0.5°.

use std::fmt::{Display, Formatter};

use nightsky_time::normalize_angle;
use serde::{Deserialize, Serialize};

use crate::error::ParseCoordinateError;

/// Which coordinate a string is meant to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateKind {
    /// Right ascension.
    Ra,
    /// Declination.
    Dec,
}

impl Display for CoordinateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ra => write!(f, "RA"),
            Self::Dec => write!(f, "Dec"),
        }
    }
}

const RA_SEPARATORS: &[char] = &['h', 'H', 'm', 'M', 's', 'S', ':'];
const DEC_SEPARATORS: &[char] = &['°', 'd', 'D', '\'', '′', '"', '″', 'm', 's', ':'];

/// Parse a coordinate string to degrees, reporting why it failed.
pub fn try_parse_coordinate(input: &str, kind: CoordinateKind) -> Result<f64, ParseCoordinateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseCoordinateError::Empty);
    }

    if let Some(deg) = parse_decimal_degrees(trimmed) {
        return check_range(deg, kind, input);
    }

    let unrecognized = || ParseCoordinateError::Unrecognized {
        kind,
        input: input.to_string(),
    };

    let (negative, body) = split_sign(trimmed);
    let separators = match kind {
        CoordinateKind::Ra => RA_SEPARATORS,
        CoordinateKind::Dec => DEC_SEPARATORS,
    };
    let fields = split_fields(body, separators).ok_or_else(unrecognized)?;

    let out_of_range = || ParseCoordinateError::OutOfRange {
        kind,
        input: input.to_string(),
    };
    let (major, minutes, seconds) = (fields[0], fields[1], fields.get(2).copied().unwrap_or(0.0));
    if minutes >= 60.0 || seconds >= 60.0 {
        return Err(out_of_range());
    }
    let magnitude = major + minutes / 60.0 + seconds / 3600.0;

    match kind {
        CoordinateKind::Ra => {
            if negative || major >= 24.0 {
                return Err(out_of_range());
            }
            Ok(magnitude * 15.0)
        }
        CoordinateKind::Dec => {
            if magnitude > 90.0 {
                return Err(out_of_range());
            }
            Ok(if negative { -magnitude } else { magnitude })
        }
    }
}

/// Parse a coordinate string to degrees.
///
/// Returns `None` when the string matches no accepted pattern or a field
/// is out of range. Callers must treat `None` as "cannot use this input".
pub fn parse_coordinate(input: &str, kind: CoordinateKind) -> Option<f64> {
    try_parse_coordinate(input, kind).ok()
}

/// Plain decimal number, optionally followed by a degree sign.
fn parse_decimal_degrees(s: &str) -> Option<f64> {
    let number = s.strip_suffix('°').unwrap_or(s).trim_end();
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || "+-.".contains(c)) {
        return None;
    }
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn check_range(deg: f64, kind: CoordinateKind, input: &str) -> Result<f64, ParseCoordinateError> {
    let ok = match kind {
        CoordinateKind::Ra => (0.0..360.0).contains(&deg),
        CoordinateKind::Dec => (-90.0..=90.0).contains(&deg),
    };
    if ok {
        Ok(deg)
    } else {
        Err(ParseCoordinateError::OutOfRange {
            kind,
            input: input.to_string(),
        })
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest.trim_start())
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest.trim_start())
    } else {
        (false, s)
    }
}

/// Split `d m [s]` fields on whitespace or any of `separators`.
///
/// Only the last field may carry a fractional part; every field must be an
/// unsigned decimal.
fn split_fields(body: &str, separators: &[char]) -> Option<Vec<f64>> {
    let parts: Vec<&str> = body
        .split(|c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|p| !p.is_empty())
        .collect();
    if !(2..=3).contains(&parts.len()) {
        return None;
    }
    let last = parts.len() - 1;
    let mut fields = Vec::with_capacity(parts.len());
    for (i, part) in parts.iter().enumerate() {
        let allowed_dot = i == last;
        if !part
            .chars()
            .all(|c| c.is_ascii_digit() || (allowed_dot && c == '.'))
        {
            return None;
        }
        fields.push(part.parse::<f64>().ok()?);
    }
    Some(fields)
}

/// Format RA (degrees) as `"HHh MMm SS.Ss"`.
pub fn format_ra(ra_deg: f64) -> String {
    let tenths = (normalize_angle(ra_deg) / 15.0 * 36_000.0).round() as u64 % (24 * 36_000);
    let hours = tenths / 36_000;
    let minutes = tenths % 36_000 / 600;
    let secs_tenths = tenths % 600;
    format!(
        "{hours:02}h {minutes:02}m {:02}.{}s",
        secs_tenths / 10,
        secs_tenths % 10
    )
}

/// Format Dec (degrees) as `"+DD° MM' SS\""`.
pub fn format_dec(dec_deg: f64) -> String {
    let dec = dec_deg.clamp(-90.0, 90.0);
    let total = (dec.abs() * 3600.0).round() as u64;
    let sign = if dec < 0.0 && total > 0 { '-' } else { '+' };
    let degrees = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;
    format!("{sign}{degrees:02}° {minutes:02}' {seconds:02}\"")
}
