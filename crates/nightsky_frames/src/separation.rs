//! Angular separation between two equatorial positions.

use crate::horizontal::clamp_unit;

/// Angular distance in degrees via the spherical law of cosines.
///
/// Loses precision below roughly one degree; use
/// [`angular_distance_haversine`] for close pairs.
pub fn angular_distance(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    if ra1 == ra2 && dec1 == dec2 {
        return 0.0;
    }
    let (d1, d2) = (dec1.to_radians(), dec2.to_radians());
    let dra = (ra2 - ra1).to_radians();
    let cos_d = d1.sin() * d2.sin() + d1.cos() * d2.cos() * dra.cos();
    clamp_unit(cos_d).acos().to_degrees()
}

/// Angular distance in degrees via the haversine formula.
///
/// Numerically stable for small separations.
pub fn angular_distance_haversine(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let (d1, d2) = (dec1.to_radians(), dec2.to_radians());
    let half_ddec = (d2 - d1) / 2.0;
    let half_dra = (ra2 - ra1).to_radians() / 2.0;
    let a = half_ddec.sin().powi(2) + d1.cos() * d2.cos() * half_dra.sin().powi(2);
    (2.0 * a.clamp(0.0, 1.0).sqrt().asin()).to_degrees()
}
