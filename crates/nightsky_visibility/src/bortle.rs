//! Bortle dark-sky scale.
//!
//! Class → naked-eye limiting magnitude and Sky Quality Meter reading
//! (mag/arcsec²). Values are the commonly quoted midpoints of each class.

use serde::Serialize;

/// One row of the Bortle scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BortleInfo {
    /// Class 1 (darkest) to 9 (brightest).
    pub class: u8,
    pub name: &'static str,
    /// Naked-eye limiting magnitude at the zenith.
    pub limiting_magnitude: f64,
    /// Sky Quality Meter reading, mag/arcsec².
    pub sqm: f64,
}

const fn row(class: u8, name: &'static str, limiting_magnitude: f64, sqm: f64) -> BortleInfo {
    BortleInfo {
        class,
        name,
        limiting_magnitude,
        sqm,
    }
}

/// The nine classes, darkest first.
pub const BORTLE_SCALE: [BortleInfo; 9] = [
    row(1, "Excellent dark-sky site", 7.8, 21.99),
    row(2, "Typical truly dark site", 7.3, 21.89),
    row(3, "Rural sky", 6.8, 21.69),
    row(4, "Rural/suburban transition", 6.3, 20.49),
    row(5, "Suburban sky", 5.8, 19.50),
    row(6, "Bright suburban sky", 5.3, 18.94),
    row(7, "Suburban/urban transition", 4.8, 18.38),
    row(8, "City sky", 4.3, 17.80),
    row(9, "Inner-city sky", 4.0, 17.0),
];

/// Row for a class in 1..=9.
pub fn get_bortle_info(class: u8) -> Option<&'static BortleInfo> {
    BORTLE_SCALE.iter().find(|b| b.class == class)
}

/// SQM reading for a class in 1..=9.
pub fn bortle_to_sqm(class: u8) -> Option<f64> {
    get_bortle_info(class).map(|b| b.sqm)
}

/// Limiting magnitude for a class in 1..=9.
pub fn bortle_limiting_magnitude(class: u8) -> Option<f64> {
    get_bortle_info(class).map(|b| b.limiting_magnitude)
}

/// Class for an SQM reading: the darkest class whose threshold it meets.
pub fn sqm_to_bortle(sqm: f64) -> u8 {
    BORTLE_SCALE[..8]
        .iter()
        .find(|b| sqm >= b.sqm)
        .map_or(9, |b| b.class)
}
