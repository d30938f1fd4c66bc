//! Golden-value integration tests for the low-precision ephemerides.
//!
//! Reference values from Meeus, "Astronomical Algorithms" (2nd ed.) worked
//! examples and widely published 2020–2024 event dates. Tolerances reflect
//! the accuracy of the mean-element series, not of the references.

use chrono::{TimeZone, Utc};
use nightsky_bodies::{
    MoonPhaseName, Planet, calculate_moon_phase, moon_position_jd, planet_position_jd,
    sun_position_jd,
};
use nightsky_time::calendar_to_jd;

/// Meeus example 25.a: Sun on 1992 Oct 13.0.
#[test]
fn sun_meeus_25a() {
    let s = sun_position_jd(calendar_to_jd(1992, 10, 13.0));
    assert!(
        (s.ecliptic_longitude - 199.909).abs() < 0.02,
        "longitude {}",
        s.ecliptic_longitude
    );
    assert!((s.dec - (-7.785)).abs() < 0.02, "dec {}", s.dec);
    assert!((s.distance_au - 0.997_66).abs() < 1e-4, "R {}", s.distance_au);
}

/// Meeus example 47.a: Moon on 1992 Apr 12.0.
#[test]
fn moon_meeus_47a() {
    let m = moon_position_jd(calendar_to_jd(1992, 4, 12.0));
    assert!(
        (m.ecliptic_longitude - 133.163).abs() < 2.0,
        "longitude {}",
        m.ecliptic_longitude
    );
    assert!((m.ecliptic_latitude - (-3.229)).abs() < 0.2, "latitude {}", m.ecliptic_latitude);
    assert!((m.distance_km - 368_409.7).abs() < 5_000.0, "distance {}", m.distance_km);
}

/// Meeus example 33.a: Venus on 1992 Dec 20.0, α = 21h04m41.5s, δ = −18°53′16″.
#[test]
fn venus_meeus_33a() {
    let v = planet_position_jd(Planet::Venus, calendar_to_jd(1992, 12, 20.0)).unwrap();
    assert!((v.ra - 316.173).abs() < 0.2, "ra {}", v.ra);
    assert!((v.dec - (-18.888)).abs() < 0.1, "dec {}", v.dec);
    assert!((v.distance_au - 0.910_947).abs() < 1e-3, "distance {}", v.distance_au);
}

/// Mars opposition 2020-Oct-13 23:20 UTC.
#[test]
fn mars_opposition_2020() {
    let jd = calendar_to_jd(2020, 10, 13.0 + 23.333 / 24.0);
    let m = planet_position_jd(Planet::Mars, jd).unwrap();
    assert!(
        m.relative_longitude_deg.abs() > 179.0,
        "relative longitude {}",
        m.relative_longitude_deg
    );
    assert!((m.distance_au - 0.419).abs() < 0.01, "distance {}", m.distance_au);
    assert!(m.illumination_pct > 99.0);
}

/// Jupiter opposition 2023-Nov-03 05 UTC.
#[test]
fn jupiter_opposition_2023() {
    let jd = calendar_to_jd(2023, 11, 3.0 + 5.0 / 24.0);
    let j = planet_position_jd(Planet::Jupiter, jd).unwrap();
    assert!(j.elongation_deg > 178.0, "elongation {}", j.elongation_deg);
    assert!((j.angular_diameter_arcsec - 49.0).abs() < 1.5, "diameter {}", j.angular_diameter_arcsec);
}

/// New moon 2024-Jan-11 11:57 UTC; full moon 2024-Jan-25 17:54 UTC.
#[test]
fn lunation_january_2024() {
    let new = calculate_moon_phase(&Utc.with_ymd_and_hms(2024, 1, 11, 11, 57, 0).unwrap());
    assert_eq!(new.name, MoonPhaseName::NewMoon);
    assert!(new.illumination < 1.0);

    let full = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
    let predicted = new.next_full;
    let hours = (predicted - full).num_minutes().abs() as f64 / 60.0;
    assert!(hours < 18.0, "next full off by {hours:.1} h ({predicted})");
}
