//! Ecliptic → equatorial rotation about the equinox direction.

use nightsky_time::normalize_angle;

use crate::horizontal::{EquatorialPosition, clamp_unit};

/// Convert ecliptic longitude/latitude to RA/Dec for an obliquity, all in degrees.
pub fn ecliptic_to_equatorial(lon: f64, lat: f64, obliquity: f64) -> EquatorialPosition {
    let l = lon.to_radians();
    let b = lat.to_radians();
    let e = obliquity.to_radians();

    let ra = (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos());
    let sin_dec = b.sin() * e.cos() + b.cos() * e.sin() * l.sin();

    EquatorialPosition {
        ra: normalize_angle(ra.to_degrees()),
        dec: clamp_unit(sin_dec).asin().to_degrees(),
    }
}

/// Rotate an ecliptic Cartesian vector into the equatorial frame.
pub fn ecliptic_vector_to_equatorial(v: &[f64; 3], obliquity: f64) -> [f64; 3] {
    let (s, c) = obliquity.to_radians().sin_cos();
    [v[0], c * v[1] - s * v[2], s * v[1] + c * v[2]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spherical::cartesian_to_spherical;

    const EPS_J2000: f64 = 23.439_291_111;

    #[test]
    fn vernal_equinox_maps_to_origin() {
        let p = ecliptic_to_equatorial(0.0, 0.0, EPS_J2000);
        assert!(p.ra.abs() < 1e-12 || (p.ra - 360.0).abs() < 1e-12);
        assert!(p.dec.abs() < 1e-12);
    }

    #[test]
    fn summer_solstice_dec_equals_obliquity() {
        let p = ecliptic_to_equatorial(90.0, 0.0, EPS_J2000);
        assert!((p.ra - 90.0).abs() < 1e-9);
        assert!((p.dec - EPS_J2000).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        // → α = 116.328942°, δ = 28.026183°
        let p = ecliptic_to_equatorial(113.215_630, 6.684_170, EPS_J2000);
        assert!((p.ra - 116.328_942).abs() < 1e-5, "ra = {}", p.ra);
        assert!((p.dec - 28.026_183).abs() < 1e-5, "dec = {}", p.dec);
    }

    #[test]
    fn vector_rotation_matches_angles() {
        let (lon, lat) = (200.0_f64, -3.0_f64);
        let v = [
            lat.to_radians().cos() * lon.to_radians().cos(),
            lat.to_radians().cos() * lon.to_radians().sin(),
            lat.to_radians().sin(),
        ];
        let eq = cartesian_to_spherical(&ecliptic_vector_to_equatorial(&v, EPS_J2000));
        let p = ecliptic_to_equatorial(lon, lat, EPS_J2000);
        assert!((eq.lon_deg - p.ra).abs() < 1e-9);
        assert!((eq.lat_deg - p.dec).abs() < 1e-9);
    }
}
