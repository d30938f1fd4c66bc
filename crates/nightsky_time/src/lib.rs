//! Angle and time primitives for the night-sky engine.
//!
//! This crate provides:
//! - Degree/radian conversion and angle normalization
//! - Julian Date ↔ calendar / `DateTime<Utc>` conversions
//! - Greenwich and local mean sidereal time (IAU 1982)
//!
//! All wall-clock input is treated as UTC. At the precision of the
//! downstream formulas UTC, UT1 and TT are interchangeable.

pub mod angle;
pub mod julian;
pub mod sidereal;

pub use angle::{normalize_angle, normalize_angle_signed, to_degrees, to_radians};
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, MILLIS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd,
    date_to_julian, jd_to_calendar, julian_centuries, julian_to_date,
};
pub use sidereal::{SIDEREAL_TO_SOLAR, gmst_deg, lst_deg};
