//! Lunar phase, low-precision position, and parallax-corrected rise/set.
//!
//! Phase comes from the mean lunation counted from a reference new moon;
//! position from the mean longitude/anomaly/argument of latitude with the
//! single dominant periodic term in each coordinate. Expect errors of a
//! degree or two in longitude and a few thousand km in distance.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, TimeDelta, Utc};
use nightsky_frames::{ecliptic_to_equatorial, mean_obliquity_deg};
use nightsky_riseset::{RiseTransitSet, STANDARD_REFRACTION_DEG, calculate_rise_transit_set};
use nightsky_time::{J2000_JD, MILLIS_PER_DAY, date_to_julian, normalize_angle};
use serde::{Deserialize, Serialize};

use crate::sun::local_noon_jd;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;

/// Reference new moon: 2000-01-06 18:14 UTC.
pub const NEW_MOON_REF_JD: f64 = 2_451_550.259_722;

/// Earth equatorial radius used for lunar parallax, km.
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Mean Earth–Moon distance, km.
pub const MOON_MEAN_DISTANCE_KM: f64 = 384_400.0;

/// Apparent lunar diameter at mean distance, degrees.
pub const MOON_MEAN_DIAMETER_DEG: f64 = 0.5181;

/// Named phase, one per 45° bin centred on the principal phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhaseName {
    const BINS: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Bin for a phase angle in degrees; New Moon spans [337.5°, 22.5°).
    pub fn from_phase_angle(phase_deg: f64) -> Self {
        let index = (normalize_angle(phase_deg + 22.5) / 45.0).floor() as usize;
        Self::BINS[index.min(7)]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::NewMoon => "🌑",
            Self::WaxingCrescent => "🌒",
            Self::FirstQuarter => "🌓",
            Self::WaxingGibbous => "🌔",
            Self::FullMoon => "🌕",
            Self::WaningGibbous => "🌖",
            Self::LastQuarter => "🌗",
            Self::WaningCrescent => "🌘",
        }
    }
}

impl Display for MoonPhaseName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase state of the Moon at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    /// Phase angle in degrees [0, 360); 0 = new, 180 = full.
    pub phase: f64,
    /// Illuminated fraction of the disc in percent [0, 100].
    pub illumination: f64,
    /// Days since the last mean new moon.
    pub age_days: f64,
    pub name: MoonPhaseName,
    pub next_new: DateTime<Utc>,
    pub next_full: DateTime<Utc>,
}

impl MoonPhase {
    /// Waxing half of the lunation.
    pub fn is_waxing(&self) -> bool {
        self.phase < 180.0
    }
}

fn days_delta(days: f64) -> TimeDelta {
    TimeDelta::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

/// Mean-lunation phase at `date`.
pub fn calculate_moon_phase(date: &DateTime<Utc>) -> MoonPhase {
    let jd = date_to_julian(date);
    let age = (jd - NEW_MOON_REF_JD).rem_euclid(SYNODIC_MONTH);
    let phase = normalize_angle(age / SYNODIC_MONTH * 360.0);
    let illumination = (1.0 - phase.to_radians().cos()) / 2.0 * 100.0;

    let mut to_full = SYNODIC_MONTH / 2.0 - age;
    if to_full < 0.0 {
        to_full += SYNODIC_MONTH;
    }

    MoonPhase {
        phase,
        illumination,
        age_days: age,
        name: MoonPhaseName::from_phase_angle(phase),
        next_new: *date + days_delta(SYNODIC_MONTH - age),
        next_full: *date + days_delta(to_full),
    }
}

/// Geocentric Moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPosition {
    /// Right ascension in degrees, range [0, 360).
    pub ra: f64,
    /// Declination in degrees.
    pub dec: f64,
    pub distance_km: f64,
    pub distance_earth_radii: f64,
    /// Apparent diameter in degrees.
    pub angular_diameter_deg: f64,
    pub ecliptic_longitude: f64,
    pub ecliptic_latitude: f64,
}

/// Moon position at a Julian Date.
pub fn moon_position_jd(jd: f64) -> MoonPosition {
    let d = jd - J2000_JD;
    let l = normalize_angle(218.316 + 13.176_396 * d);
    let m = normalize_angle(134.963 + 13.064_993 * d).to_radians();
    let f = normalize_angle(93.272 + 13.229_350 * d).to_radians();

    let lon = normalize_angle(l + 6.289 * m.sin());
    let lat = 5.128 * f.sin();
    let distance_km = 385_001.0 - 20_905.0 * m.cos();

    let eq = ecliptic_to_equatorial(lon, lat, mean_obliquity_deg(jd));
    MoonPosition {
        ra: eq.ra,
        dec: eq.dec,
        distance_km,
        distance_earth_radii: distance_km / EARTH_RADIUS_KM,
        angular_diameter_deg: MOON_MEAN_DIAMETER_DEG * MOON_MEAN_DISTANCE_KM / distance_km,
        ecliptic_longitude: lon,
        ecliptic_latitude: lat,
    }
}

/// Moon position at a UTC instant.
pub fn approximate_moon_position(date: &DateTime<Utc>) -> MoonPosition {
    moon_position_jd(date_to_julian(date))
}

/// Altitude of the Moon's centre when its upper limb touches the horizon.
///
/// Horizontal parallax raises it; refraction and the semidiameter lower it.
pub fn moon_horizon_deg(position: &MoonPosition) -> f64 {
    let parallax = (1.0 / position.distance_earth_radii).asin().to_degrees();
    parallax - STANDARD_REFRACTION_DEG - position.angular_diameter_deg / 2.0
}

/// Moonrise, transit and moonset on the observer's local day.
///
/// The Moon's coordinates are frozen at local mean noon; its ~13°/day
/// motion makes the result good to roughly an hour.
pub fn calculate_moon_rise_transit_set(
    lat_deg: f64,
    lon_deg: f64,
    date: &DateTime<Utc>,
) -> RiseTransitSet {
    let moon = moon_position_jd(local_noon_jd(date, lon_deg));
    calculate_rise_transit_set(
        moon.ra,
        moon.dec,
        lat_deg,
        lon_deg,
        date,
        moon_horizon_deg(&moon),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn phase_bins() {
        assert_eq!(MoonPhaseName::from_phase_angle(0.0), MoonPhaseName::NewMoon);
        assert_eq!(MoonPhaseName::from_phase_angle(350.0), MoonPhaseName::NewMoon);
        assert_eq!(MoonPhaseName::from_phase_angle(22.5), MoonPhaseName::WaxingCrescent);
        assert_eq!(MoonPhaseName::from_phase_angle(90.0), MoonPhaseName::FirstQuarter);
        assert_eq!(MoonPhaseName::from_phase_angle(180.0), MoonPhaseName::FullMoon);
        assert_eq!(MoonPhaseName::from_phase_angle(270.0), MoonPhaseName::LastQuarter);
        assert_eq!(MoonPhaseName::from_phase_angle(337.4), MoonPhaseName::WaningCrescent);
    }

    #[test]
    fn labels_and_emoji() {
        assert_eq!(MoonPhaseName::FullMoon.to_string(), "Full Moon");
        assert_eq!(MoonPhaseName::FirstQuarter.emoji(), "🌓");
    }

    #[test]
    fn reference_epoch_is_new() {
        let d = Utc.with_ymd_and_hms(2000, 1, 6, 18, 14, 0).unwrap();
        let p = calculate_moon_phase(&d);
        assert!(p.age_days < 1e-3 || p.age_days > SYNODIC_MONTH - 1e-3, "{}", p.age_days);
        assert!(p.illumination < 0.01);
        assert_eq!(p.name, MoonPhaseName::NewMoon);
    }

    #[test]
    fn known_full_moon() {
        // Full moon 2024-01-25 17:54 UTC.
        let d = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let p = calculate_moon_phase(&d);
        assert!((p.phase - 180.0).abs() < 10.0, "phase = {}", p.phase);
        assert!(p.illumination > 99.0);
        assert_eq!(p.name, MoonPhaseName::FullMoon);
    }

    #[test]
    fn phase_repeats_after_one_lunation() {
        let d = Utc.with_ymd_and_hms(2023, 5, 2, 7, 30, 0).unwrap();
        let a = calculate_moon_phase(&d);
        let b = calculate_moon_phase(&(d + days_delta(SYNODIC_MONTH)));
        let diff = (a.phase - b.phase).abs();
        assert!(diff < 1.0 || diff > 359.0, "{} vs {}", a.phase, b.phase);
    }

    #[test]
    fn next_events_are_in_the_future() {
        let d = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let p = calculate_moon_phase(&d);
        assert!(p.is_waxing());
        assert!(p.next_full > d && p.next_new > p.next_full);
        assert!((p.next_new - d).num_hours() as f64 <= SYNODIC_MONTH * 24.0);

        // Waning: full moon is more than half a lunation away.
        let w = Utc.with_ymd_and_hms(2024, 1, 30, 0, 0, 0).unwrap();
        let q = calculate_moon_phase(&w);
        assert!(!q.is_waxing());
        assert!(q.next_new < q.next_full);
    }

    #[test]
    fn position_stays_in_bounds() {
        for day in 0..60 {
            let d = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap() + TimeDelta::days(day);
            let m = approximate_moon_position(&d);
            assert!((0.0..360.0).contains(&m.ra));
            assert!(m.dec.abs() < 29.0, "dec = {}", m.dec);
            assert!((356_000.0..407_000.0).contains(&m.distance_km));
            assert!((0.48..0.56).contains(&m.angular_diameter_deg));
        }
    }

    #[test]
    fn horizon_correction_is_dominated_by_parallax() {
        let m = moon_position_jd(J2000_JD);
        let h0 = moon_horizon_deg(&m);
        let parallax = (1.0 / m.distance_earth_radii).asin().to_degrees();
        assert!((0.89..1.01).contains(&parallax), "parallax = {parallax}");
        assert!(h0 > 0.0 && h0 < 0.25, "h0 = {h0}");
    }

    #[test]
    fn mid_latitude_moon_rises_and_sets() {
        let d = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let rts = calculate_moon_rise_transit_set(40.0, -74.0, &d);
        let (rise, transit, set) = (rts.rise().unwrap(), rts.transit().unwrap(), rts.set().unwrap());
        assert!(rise < transit && transit < set);
    }
}
