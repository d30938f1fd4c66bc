//! Mean obliquity of the ecliptic.
//!
//! IAU 1980 expression (Lieske et al. 1977; Meeus eq. 22.2).

use nightsky_time::julian_centuries;

/// Mean obliquity at J2000.0: 23° 26′ 21.448″.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111;

/// Mean obliquity of the ecliptic in degrees at a Julian Date.
///
/// ε = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let arcsec = -46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    OBLIQUITY_J2000_DEG + arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert!((mean_obliquity_deg(2_451_545.0) - OBLIQUITY_J2000_DEG).abs() < 1e-12);
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 April 10, 0h TD: ε0 = 23°26′27.407″ = 23.440946°
        let eps = mean_obliquity_deg(2_446_895.5);
        assert!((eps - 23.440_946).abs() < 1e-5, "ε = {eps}");
    }

    #[test]
    fn decreasing_over_time() {
        assert!(mean_obliquity_deg(2_469_807.5) < mean_obliquity_deg(2_451_545.0));
    }
}
