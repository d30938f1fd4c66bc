//! Cartesian → spherical conversion and vector angles.
//!
//! Distances keep whatever unit the input vector uses (AU for the
//! planetary engine).

use std::f64::consts::TAU;

use crate::horizontal::clamp_unit;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, same unit as the input.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    let lon = y.atan2(x).rem_euclid(TAU);
    let lat = clamp_unit(z / r).asin();

    SphericalCoords {
        lon_deg: lon.to_degrees() % 360.0,
        lat_deg: lat.to_degrees(),
        distance: r,
    }
}

/// Angle between two vectors in degrees, range [0, 180].
///
/// Uses `atan2(|a×b|, a·b)`, exact at both ends of the range. Returns 0
/// if either vector has zero length.
pub fn vector_angle_deg(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2];
    let cross = [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ];
    let cross_norm = (cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2]).sqrt();
    if cross_norm == 0.0 && dot == 0.0 {
        // At least one zero-length vector.
        return 0.0;
    }
    cross_norm.atan2(dot).to_degrees()
}
