//! Integration tests for the nightsky_rs convenience layer.

use chrono::{TimeZone, Utc};
use nightsky_rs::*;

fn catalog() -> Vec<CatalogObject> {
    serde_json::from_str(
        r#"[
            {"id": "M31", "name": "Andromeda Galaxy", "ra": 0.7123, "dec": 41.269,
             "magnitude": 3.4, "size_arcmin": 178.0},
            {"id": "M42", "name": "Orion Nebula", "ra": "05h 35m 17.3s",
             "dec": "-05° 23' 28\"", "magnitude": 4.0, "size_arcmin": 85.0},
            {"id": "M7", "ra": 268.47, "dec": -34.79, "magnitude": 3.3},
            {"id": "broken", "ra": "??", "dec": 0.0, "magnitude": 1.0}
        ]"#,
    )
    .unwrap()
}

/// New York, mid-January, 21:00 EST: Orion near the meridian in the
/// south, Andromeda sinking in the west, M7 below the horizon.
#[test]
fn winter_evening_in_new_york() {
    let observer = parse_observer_location("40.7128N, 74.0060W").unwrap();
    let date = parse_utc_date("2024-01-16T02:00:00Z").unwrap();
    assert!(is_nighttime(&observer, &date));

    let cat = catalog();
    let ranked = tonight(&cat, &observer, &date, 8).unwrap();
    let ids: Vec<&str> = ranked.iter().map(|r| r.object.id.as_str()).collect();
    assert_eq!(ids.len(), 2, "{ids:?}");
    assert!(ids.contains(&"M42") && ids.contains(&"M31"));
    assert!(!ids.contains(&"M7"));

    let m42 = ranked.iter().find(|r| r.object.id == "M42").unwrap();
    assert!((m42.current_altitude - 42.4).abs() < 0.5, "M42 alt {}", m42.current_altitude);
    assert_eq!(
        CardinalDirection::from_azimuth(m42.current_azimuth),
        CardinalDirection::S
    );
    let m31 = ranked.iter().find(|r| r.object.id == "M31").unwrap();
    assert!(CardinalDirection::W.contains(m31.current_azimuth));
}

#[test]
fn tonight_serializes() {
    let observer = Observer::new(40.7128, -74.006);
    let date = Utc.with_ymd_and_hms(2024, 1, 16, 2, 0, 0).unwrap();
    let cat = catalog();
    let ranked = tonight(&cat, &observer, &date, 5).unwrap();
    let json = serde_json::to_value(&ranked).unwrap();
    let first = &json[0];
    assert!(first["object"]["id"].is_string());
    assert!(first["visibility_score"].as_u64().unwrap() <= 100);
    assert!(first["is_optimal"].is_boolean());
}

#[test]
fn moon_summary_round_trips_through_json() {
    let observer = Observer::new(-33.87, 151.21);
    let date = Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap();
    let info = moon_info(&observer, &date);
    let json = serde_json::to_value(info).unwrap();
    assert!(json["rise_transit_set"]["kind"].is_string());
    assert!(json["phase"]["illumination"].as_f64().unwrap() < 5.0);
}

#[test]
fn search_is_reachable_from_the_facade() {
    let date = parse_utc_date("2024-01-01").unwrap();
    let mars = parse_planet("mars").unwrap();
    let station = next_station(mars, &date, &EventSearchConfig::default())
        .unwrap()
        .unwrap();
    assert_eq!(station.station_type, StationType::StationRetrograde);
    assert!(station.date > date);
}
