//! Heuristic observability score.

use crate::catalog::CatalogObject;

/// Maximum contribution of the altitude term.
const ALTITUDE_POINTS: f64 = 50.0;
/// Maximum contribution of the magnitude-margin term.
const MAGNITUDE_POINTS: f64 = 30.0;
/// Maximum contribution of the apparent-size term.
const SIZE_POINTS: f64 = 20.0;

/// Altitude band in which the altitude term is at its maximum, degrees.
pub const COMFORT_BAND_DEG: (f64, f64) = (30.0, 70.0);

fn altitude_term(altitude: f64) -> f64 {
    let (low, high) = COMFORT_BAND_DEG;
    if altitude < low {
        ALTITUDE_POINTS * altitude / low
    } else if altitude <= high {
        ALTITUDE_POINTS
    } else {
        // Overhead strain.
        ALTITUDE_POINTS - (altitude - high) / 2.0
    }
}

fn magnitude_term(magnitude: f64, limiting_mag: f64) -> f64 {
    (10.0 * (limiting_mag - magnitude)).clamp(0.0, MAGNITUDE_POINTS)
}

fn size_term(size_arcmin: Option<f64>) -> f64 {
    size_arcmin.map_or(0.0, |s| (s / 3.0).clamp(0.0, SIZE_POINTS))
}

/// Score in `[0, 100]` for observing `object` at `altitude` degrees under
/// a sky with the given limiting magnitude.
///
/// Below the horizon the score is always 0.
pub fn calculate_visibility_score(object: &CatalogObject, altitude: f64, limiting_mag: f64) -> u8 {
    if !(altitude >= 0.0) {
        return 0;
    }
    let total = altitude_term(altitude)
        + magnitude_term(object.magnitude, limiting_mag)
        + size_term(object.size_arcmin);
    total.clamp(0.0, 100.0).round() as u8
}

/// Whether `altitude` lies strictly inside the comfort band.
pub fn is_optimal_altitude(altitude: f64) -> bool {
    let (low, high) = COMFORT_BAND_DEG;
    altitude > low && altitude < high
}
