//! Observer location strings and ground distances.

use nightsky_riseset::Observer;

use crate::error::LocationError;

/// Mean Earth radius for great-circle distances, km.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Parse `"lat, lon"`, `"lat lon"` or `"40.7N 74.0W"` into an observer.
///
/// Fields are split on a comma when one is present, else on whitespace;
/// extra fields are ignored. An `S` in the first field or a `W` in the
/// second negates it.
pub fn parse_observer_location(input: &str) -> Result<Observer, LocationError> {
    let s = input.trim().to_uppercase();
    if s.is_empty() {
        return Err(LocationError::Empty);
    }

    let parts: Vec<&str> = if s.contains(',') {
        s.split(',').map(str::trim).collect()
    } else {
        s.split_whitespace().collect()
    };
    let [lat_str, lon_str, ..] = parts.as_slice() else {
        return Err(LocationError::Unrecognized(input.to_string()));
    };

    let field = |raw: &str, negate_on: char| -> Result<f64, LocationError> {
        let digits: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        let v: f64 = digits
            .parse()
            .map_err(|_| LocationError::Unrecognized(input.to_string()))?;
        Ok(if raw.contains(negate_on) { -v } else { v })
    };
    let lat = field(lat_str, 'S')?;
    let lon = field(lon_str, 'W')?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(LocationError::OutOfRange { lat, lon });
    }
    Ok(Observer {
        latitude: lat,
        longitude: lon,
    })
}

/// Great-circle distance between two points, km (haversine).
pub fn ground_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (p1, p2) = (lat1.to_radians(), lat2.to_radians());
    let dp = p2 - p1;
    let dl = (lon2 - lon1).to_radians();
    let h = (dp / 2.0).sin().powi(2) + p1.cos() * p2.cos() * (dl / 2.0).sin().powi(2);
    2.0 * EARTH_MEAN_RADIUS_KM * h.sqrt().min(1.0).asin()
}
