//! Equatorial ↔ horizontal (Alt/Az) conversion.
//!
//! Azimuth is measured from North (0°) through East (90°).
//! Hour angle H = LST − RA, positive west of the meridian.

use nightsky_time::normalize_angle;
use serde::{Deserialize, Serialize};

/// Equatorial coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialPosition {
    /// Right ascension in degrees, range [0, 360).
    pub ra: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec: f64,
}

impl EquatorialPosition {
    /// Create a position, wrapping RA into [0, 360).
    pub fn new(ra: f64, dec: f64) -> Self {
        Self {
            ra: normalize_angle(ra),
            dec,
        }
    }

    /// Right ascension in hours, range [0, 24).
    pub fn ra_hours(&self) -> f64 {
        self.ra / 15.0
    }
}

/// Horizontal coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    /// Altitude above the horizon, range [-90, 90].
    pub altitude: f64,
    /// Azimuth from North through East, range [0, 360).
    pub azimuth: f64,
}

/// Clamp the argument of `asin`/`acos` into [-1, 1].
///
/// Rounding can push a mathematically unit value slightly past ±1 at the
/// poles, the zenith, or exactly on the horizon.
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Denominators below this are treated as a degenerate (pole/zenith) geometry.
const DEGENERATE: f64 = 1e-12;

/// Convert RA/Dec to altitude/azimuth for an observer latitude and LST.
///
/// All angles in degrees.
pub fn ra_dec_to_alt_az(ra: f64, dec: f64, lat: f64, lst: f64) -> HorizontalPosition {
    let h = (lst - ra).to_radians();
    let dec_r = dec.to_radians();
    let lat_r = lat.to_radians();

    let sin_alt = dec_r.sin() * lat_r.sin() + dec_r.cos() * lat_r.cos() * h.cos();
    let alt = clamp_unit(sin_alt).asin();

    let denom = alt.cos() * lat_r.cos();
    let azimuth = if denom.abs() < DEGENERATE {
        0.0
    } else {
        let cos_az = (dec_r.sin() - alt.sin() * lat_r.sin()) / denom;
        let az = clamp_unit(cos_az).acos().to_degrees();
        // West of the meridian the law-of-cosines angle is mirrored.
        if h.sin() > 0.0 { 360.0 - az } else { az }
    };

    HorizontalPosition {
        altitude: alt.to_degrees(),
        azimuth: normalize_angle(azimuth),
    }
}

/// Convert altitude/azimuth back to RA/Dec for an observer latitude and LST.
///
/// All angles in degrees.
pub fn alt_az_to_ra_dec(alt: f64, az: f64, lat: f64, lst: f64) -> EquatorialPosition {
    let alt_r = alt.to_radians();
    let az_r = az.to_radians();
    let lat_r = lat.to_radians();

    let sin_dec = alt_r.sin() * lat_r.sin() + alt_r.cos() * lat_r.cos() * az_r.cos();
    let dec = clamp_unit(sin_dec).asin();

    let denom = lat_r.cos() * dec.cos();
    let hour_angle = if denom.abs() < DEGENERATE {
        0.0
    } else {
        let cos_h = (alt_r.sin() - lat_r.sin() * dec.sin()) / denom;
        let h = clamp_unit(cos_h).acos().to_degrees();
        // East of the meridian the hour angle is negative.
        if az_r.sin() > 0.0 { 360.0 - h } else { h }
    };

    EquatorialPosition {
        ra: normalize_angle(lst - hour_angle),
        dec: dec.to_degrees(),
    }
}
