//! Golden tests for the generic rise/transit/set solver with bright stars
//! seen from Greenwich (51.4769°N, 0°).
//!
//! J2000 catalog positions; the semi-diurnal arcs were computed
//! independently from the hour-angle formula with the standard −0.5667°
//! refraction horizon.

use chrono::{DateTime, TimeZone, Utc};
use nightsky_riseset::{RiseTransitSet, STAR_HORIZON_DEG, calculate_rise_transit_set};

const LAT: f64 = 51.4769;

fn date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
}

/// Sirius: α 101.287°, δ −16.716°. Up for about 9.15 h.
#[test]
fn sirius_is_up_about_nine_hours() {
    let r = calculate_rise_transit_set(101.287, -16.716, LAT, 0.0, &date(), STAR_HORIZON_DEG);
    let RiseTransitSet::Normal { rise, transit, set } = r else {
        panic!("expected a normal day, got {r:?}");
    };
    let hours = (set - rise).num_milliseconds() as f64 / 3_600_000.0;
    assert!((hours - 9.15).abs() < 0.02, "up for {hours} h");
    assert_eq!(transit - rise, set - transit);
}

/// Vega: δ +38.784° is just inside the circumpolar limit at this latitude.
#[test]
fn vega_is_circumpolar() {
    let r = calculate_rise_transit_set(279.235, 38.784, LAT, 0.0, &date(), STAR_HORIZON_DEG);
    assert!(r.is_circumpolar(), "{r:?}");
}

/// Canopus: δ −52.696° never clears the southern horizon.
#[test]
fn canopus_never_rises() {
    let r = calculate_rise_transit_set(95.988, -52.696, LAT, 0.0, &date(), STAR_HORIZON_DEG);
    assert!(r.never_rises());
    assert_eq!(r.transit(), None);
}

/// The same star transits about 3 min 56 s earlier each day.
#[test]
fn transit_advances_by_a_sidereal_day() {
    let d1 = date();
    let d2 = d1 + chrono::TimeDelta::days(1);
    let t1 = calculate_rise_transit_set(101.287, -16.716, LAT, 0.0, &d1, STAR_HORIZON_DEG)
        .transit()
        .unwrap();
    let t2 = calculate_rise_transit_set(101.287, -16.716, LAT, 0.0, &d2, STAR_HORIZON_DEG)
        .transit()
        .unwrap();
    let gap = (t2 - t1).num_seconds();
    assert!((gap - 86_164).abs() <= 2, "gap {gap} s");
}
