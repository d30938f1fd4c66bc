//! Degree/radian conversion and angle wrapping.

/// Degrees to radians.
pub fn to_radians(deg: f64) -> f64 {
    deg.to_radians()
}

/// Radians to degrees.
pub fn to_degrees(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_angle(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_angle_signed(deg: f64) -> f64 {
    let r = normalize_angle(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_angle(0.0), 0.0);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_angle(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_angle(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_angle(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_angle(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_angle(-1e-18);
        assert!((0.0..360.0).contains(&r), "got {r}");
    }

    #[test]
    fn normalize_idempotent() {
        for &x in &[-1234.5, -360.0, -0.25, 0.0, 12.0, 359.999, 360.0, 1e6, -1e-14] {
            let once = normalize_angle(x);
            assert_eq!(normalize_angle(once), once, "x = {x}");
            assert!((0.0..360.0).contains(&once), "x = {x} → {once}");
        }
    }

    #[test]
    fn signed_range() {
        assert_eq!(normalize_angle_signed(180.0), 180.0);
        assert_eq!(normalize_angle_signed(-180.0), 180.0);
        assert!((normalize_angle_signed(190.0) - (-170.0)).abs() < 1e-12);
        assert!((normalize_angle_signed(-190.0) - 170.0).abs() < 1e-12);
        assert!((normalize_angle_signed(359.0) - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn radians_roundtrip() {
        let x = 123.456;
        assert!((to_degrees(to_radians(x)) - x).abs() < 1e-12);
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
    }
}
