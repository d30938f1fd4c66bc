//! Golden-value integration tests for planetary event search.
//!
//! Reference dates are widely published almanac values. The search has
//! day resolution and runs on mean elements, so most checks allow ±2 days.

use chrono::{DateTime, TimeZone, Utc};
use nightsky_bodies::Planet;
use nightsky_search::{
    ElongationSide, EventQuery, EventSearchConfig, PlanetaryEventKind, StationType,
    greatest_elongation, next_planetary_event, next_station,
};

fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_minutes().abs() as f64 / 1440.0
}

/// Mars opposition 2020-Oct-13.
#[test]
fn mars_opposition_2020() {
    let c = EventSearchConfig::default();
    let e = next_planetary_event(Planet::Mars, &utc(2020, 6, 1), EventQuery::Opposition, &c)
        .expect("search should succeed")
        .expect("should find an opposition");
    assert_eq!(e.kind, PlanetaryEventKind::Opposition);
    let diff = days_between(e.date, utc(2020, 10, 13));
    assert!(diff <= 2.0, "Mars opposition off by {diff:.1} days: {}", e.date);
    assert!(e.elongation_deg > 175.0);
}

/// Jupiter opposition 2023-Nov-03.
#[test]
fn jupiter_opposition_2023() {
    let c = EventSearchConfig::default();
    let e = next_planetary_event(Planet::Jupiter, &utc(2023, 6, 1), EventQuery::Opposition, &c)
        .unwrap()
        .unwrap();
    let diff = days_between(e.date, utc(2023, 11, 3));
    assert!(diff <= 2.0, "Jupiter opposition off by {diff:.1} days: {}", e.date);
}

/// Saturn opposition 2024-Sep-08.
#[test]
fn saturn_opposition_2024() {
    let c = EventSearchConfig::default();
    let e = next_planetary_event(Planet::Saturn, &utc(2024, 5, 1), EventQuery::Opposition, &c)
        .unwrap()
        .unwrap();
    let diff = days_between(e.date, utc(2024, 9, 8));
    assert!(diff <= 2.0, "Saturn opposition off by {diff:.1} days: {}", e.date);
}

/// Jupiter conjunction 2024-May-18.
#[test]
fn jupiter_conjunction_2024() {
    let c = EventSearchConfig::default();
    let e = next_planetary_event(Planet::Jupiter, &utc(2024, 3, 1), EventQuery::Conjunction, &c)
        .unwrap()
        .unwrap();
    assert_eq!(e.kind, PlanetaryEventKind::Conjunction);
    let diff = days_between(e.date, utc(2024, 5, 18));
    assert!(diff <= 2.0, "Jupiter conjunction off by {diff:.1} days: {}", e.date);
}

/// Venus inferior conjunction 2023-Aug-13, superior conjunction 2024-Jun-04.
#[test]
fn venus_conjunctions() {
    let c = EventSearchConfig::default();
    let inf = next_planetary_event(Planet::Venus, &utc(2023, 6, 1), EventQuery::Conjunction, &c)
        .unwrap()
        .unwrap();
    assert_eq!(inf.kind, PlanetaryEventKind::InferiorConjunction);
    assert!(days_between(inf.date, utc(2023, 8, 13)) <= 2.0, "{}", inf.date);
    assert!(inf.distance_au < 0.35);

    let sup = next_planetary_event(Planet::Venus, &utc(2024, 3, 1), EventQuery::Conjunction, &c)
        .unwrap()
        .unwrap();
    assert_eq!(sup.kind, PlanetaryEventKind::SuperiorConjunction);
    assert!(days_between(sup.date, utc(2024, 6, 4)) <= 2.0, "{}", sup.date);
}

/// Mercury inferior conjunction 2024-Apr-11.
///
/// Mercury's elongation changes by several degrees a day here, so the
/// day-stepped scan can land a day or two from the true instant.
#[test]
fn mercury_inferior_conjunction_is_coarse() {
    let c = EventSearchConfig::default();
    let e = next_planetary_event(Planet::Mercury, &utc(2024, 3, 20), EventQuery::Conjunction, &c)
        .unwrap()
        .unwrap();
    assert_eq!(e.kind, PlanetaryEventKind::InferiorConjunction);
    let diff = days_between(e.date, utc(2024, 4, 11));
    assert!(diff <= 2.0, "Mercury conjunction off by {diff:.1} days: {}", e.date);
}

/// Venus greatest eastern elongation 2023-Jun-04 (45.4°), western 2023-Oct-23 (46.4°).
#[test]
fn venus_greatest_elongations_2023() {
    let c = EventSearchConfig::default();
    let east = greatest_elongation(Planet::Venus, &utc(2023, 3, 1), None, &c)
        .unwrap()
        .unwrap();
    assert_eq!(east.side, ElongationSide::East);
    assert!(days_between(east.date, utc(2023, 6, 4)) <= 2.0, "{}", east.date);
    assert!((east.elongation_deg - 45.4).abs() < 0.5, "{}", east.elongation_deg);

    let west = greatest_elongation(Planet::Venus, &utc(2023, 8, 1), Some(ElongationSide::West), &c)
        .unwrap()
        .unwrap();
    assert_eq!(west.side, ElongationSide::West);
    assert!(days_between(west.date, utc(2023, 10, 23)) <= 2.0, "{}", west.date);
    assert!((west.elongation_deg - 46.4).abs() < 0.5, "{}", west.elongation_deg);
}

/// Mercury greatest eastern elongation 2024-Mar-24 (18.7°).
#[test]
fn mercury_greatest_elongation_march_2024() {
    let c = EventSearchConfig::default();
    let e = greatest_elongation(Planet::Mercury, &utc(2024, 3, 1), None, &c)
        .unwrap()
        .unwrap();
    assert_eq!(e.side, ElongationSide::East);
    assert!(days_between(e.date, utc(2024, 3, 24)) <= 2.0, "{}", e.date);
    assert!((e.elongation_deg - 18.7).abs() < 0.5, "{}", e.elongation_deg);
}

/// Mars stations 2024-Dec-07 (retrograde) and 2025-Feb-24 (direct).
#[test]
fn mars_stations_2024_2025() {
    let c = EventSearchConfig::default();
    let retro = next_station(Planet::Mars, &utc(2024, 11, 1), &c).unwrap().unwrap();
    assert_eq!(retro.station_type, StationType::StationRetrograde);
    assert!(days_between(retro.date, utc(2024, 12, 7)) < 2.0, "{}", retro.date);

    let direct = next_station(Planet::Mars, &utc(2024, 12, 20), &c).unwrap().unwrap();
    assert_eq!(direct.station_type, StationType::StationDirect);
    assert!(days_between(direct.date, utc(2025, 2, 24)) < 2.0, "{}", direct.date);
}

/// Mercury station retrograde 2024-Apr-01.
#[test]
fn mercury_station_april_2024() {
    let c = EventSearchConfig::default();
    let s = next_station(Planet::Mercury, &utc(2024, 3, 1), &c).unwrap().unwrap();
    assert_eq!(s.station_type, StationType::StationRetrograde);
    assert!(days_between(s.date, utc(2024, 4, 1)) < 2.0, "{}", s.date);
    assert!((0.0..360.0).contains(&s.ecliptic_longitude));
}
