//! Greenwich and local mean sidereal time.
//!
//! GMST polynomial: IAU 1982 (Aoki et al.), expressed in degrees as in
//! Meeus eq. 12.4. Input Julian Dates are UTC, taken as UT1.

use crate::angle::normalize_angle;
use crate::julian::{J2000_JD, julian_centuries};

/// Ratio of a mean solar day to a mean sidereal day.
///
/// Sidereal time advances this many sidereal seconds per civil second.
pub const SIDEREAL_TO_SOLAR: f64 = 1.002_737_909_35;

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// GMST = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
/// where d = JD − 2451545.0 and T = d / 36525.
pub fn gmst_deg(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = julian_centuries(jd);
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_angle(gmst)
}

/// Local Mean Sidereal Time in degrees for an east-positive longitude.
pub fn lst_deg(jd: f64, longitude_deg: f64) -> f64 {
    normalize_angle(gmst_deg(jd) + longitude_deg)
}
