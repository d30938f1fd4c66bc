//! Generic rise/transit/set solver.
//!
//! Standard spherical-astronomy hour-angle method: the body's RA/Dec are
//! held fixed over the day, the transit is the meridian crossing nearest
//! local mean midnight, and rise/set sit symmetrically around it at
//! ±H converted from sidereal to civil time.

use chrono::{DateTime, TimeDelta, Utc};
use nightsky_time::{
    SIDEREAL_TO_SOLAR, date_to_julian, julian_to_date, lst_deg, normalize_angle_signed,
};

use crate::riseset_types::RiseTransitSet;

/// Denominators below this are treated as a polar geometry.
const DEGENERATE: f64 = 1e-12;

/// Julian Date (UTC) of local mean midnight starting the observer's day.
///
/// The local day is the UTC calendar day of `date + longitude/15 h`.
pub fn local_midnight_jd(date: &DateTime<Utc>, longitude_deg: f64) -> f64 {
    let offset_days = longitude_deg / 360.0;
    let jd_local = date_to_julian(date) + offset_days;
    (jd_local - 0.5).floor() + 0.5 - offset_days
}

/// Cosine of the hour angle at which a body crosses `horizon_deg`.
///
/// `cos H = (sin h₀ − sin φ sin δ) / (cos φ cos δ)`. Values below −1 mean
/// the body never drops to `h₀`; above 1 it never reaches it. At a pole or
/// for δ = ±90° the altitude is constant and ±∞ is returned accordingly.
pub fn hour_angle_cosine(dec_deg: f64, lat_deg: f64, horizon_deg: f64) -> f64 {
    let phi = lat_deg.to_radians();
    let dec = dec_deg.to_radians();
    let h0 = horizon_deg.to_radians();

    let denom = phi.cos() * dec.cos();
    if denom.abs() < DEGENERATE {
        let sin_alt = phi.sin() * dec.sin();
        return if sin_alt >= h0.sin() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    (h0.sin() - phi.sin() * dec.sin()) / denom
}

/// Civil-time offset for an hour angle in degrees.
///
/// The hour angle advances 15° per sidereal hour, which is
/// `1 / SIDEREAL_TO_SOLAR` of a civil hour.
pub fn hour_angle_to_delta(deg: f64) -> TimeDelta {
    let hours = deg / 15.0 / SIDEREAL_TO_SOLAR;
    TimeDelta::milliseconds((hours * 3_600_000.0).round() as i64)
}

/// Meridian crossing of `ra_deg` nearest the reference instant `jd_ref`.
pub fn transit_near_jd(ra_deg: f64, longitude_deg: f64, jd_ref: f64) -> DateTime<Utc> {
    let lst0 = lst_deg(jd_ref, longitude_deg);
    let diff = normalize_angle_signed(ra_deg - lst0);
    julian_to_date(jd_ref) + hour_angle_to_delta(diff)
}

/// Time the body crosses the local meridian nearest local mean midnight.
///
/// LST at local midnight is compared with the body's RA; the signed
/// difference in (−180°, 180°] is converted from sidereal to civil time.
pub fn calculate_transit(ra_deg: f64, longitude_deg: f64, date: &DateTime<Utc>) -> DateTime<Utc> {
    transit_near_jd(ra_deg, longitude_deg, local_midnight_jd(date, longitude_deg))
}

/// Rise, transit and set for a body at fixed RA/Dec.
///
/// `horizon_deg` is the altitude of the body's reference point at rise/set:
/// [`crate::STAR_HORIZON_DEG`] for point sources, [`crate::SUN_HORIZON_DEG`]
/// for the Sun, a parallax-corrected value for the Moon.
pub fn calculate_rise_transit_set(
    ra_deg: f64,
    dec_deg: f64,
    lat_deg: f64,
    lon_deg: f64,
    date: &DateTime<Utc>,
    horizon_deg: f64,
) -> RiseTransitSet {
    let cos_h = hour_angle_cosine(dec_deg, lat_deg, horizon_deg);

    if cos_h > 1.0 {
        return RiseTransitSet::NeverRises;
    }

    let transit = calculate_transit(ra_deg, lon_deg, date);
    if cos_h < -1.0 {
        return RiseTransitSet::Circumpolar { transit };
    }

    let half_arc = hour_angle_to_delta(cos_h.acos().to_degrees());
    RiseTransitSet::Normal {
        rise: transit - half_arc,
        transit,
        set: transit + half_arc,
    }
}
