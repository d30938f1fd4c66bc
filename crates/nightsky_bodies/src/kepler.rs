//! Kepler's equation and heliocentric ecliptic positions.

use nightsky_time::normalize_angle_signed;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::elements::{Planet, get_planet_elements};

/// Newton iteration cap for Kepler's equation.
pub const KEPLER_MAX_ITERATIONS: u32 = 10;

/// Stop once the eccentric-anomaly correction falls below this, degrees.
pub const KEPLER_TOLERANCE_DEG: f64 = 1e-4;

/// Outcome of [`solve_kepler`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E, degrees.
    pub eccentric_anomaly_deg: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Whether the last correction was below [`KEPLER_TOLERANCE_DEG`].
    pub converged: bool,
}

/// Solve `M = E − e·sin E` for E, all angles in degrees.
///
/// Newton–Raphson from `E₀ = M + e*·sin M` where `e* = e·180/π` is the
/// eccentricity expressed in degrees.
pub fn solve_kepler(mean_anomaly_deg: f64, e: f64) -> KeplerSolution {
    let e_star = e.to_degrees();
    let m = mean_anomaly_deg;
    let mut ecc = m + e_star * m.to_radians().sin();

    for iteration in 1..=KEPLER_MAX_ITERATIONS {
        let dm = m - (ecc - e_star * ecc.to_radians().sin());
        let de = dm / (1.0 - e * ecc.to_radians().cos());
        ecc += de;
        if de.abs() < KEPLER_TOLERANCE_DEG {
            return KeplerSolution {
                eccentric_anomaly_deg: ecc,
                iterations: iteration,
                converged: true,
            };
        }
    }

    debug!(mean_anomaly_deg, e, "kepler iteration did not converge");
    KeplerSolution {
        eccentric_anomaly_deg: ecc,
        iterations: KEPLER_MAX_ITERATIONS,
        converged: false,
    }
}

/// Heliocentric position in the J2000 ecliptic frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricPosition {
    /// Cartesian coordinates in AU.
    pub xyz: [f64; 3],
    /// Sun–planet distance in AU.
    pub distance_au: f64,
    /// True anomaly ν in degrees, range (−180, 180].
    pub true_anomaly_deg: f64,
}

/// Heliocentric ecliptic position of `planet` at `jd`.
pub fn calculate_heliocentric_position(planet: Planet, jd: f64) -> HeliocentricPosition {
    let el = get_planet_elements(planet, jd);
    let omega = el.arg_perihelion().to_radians();
    let node = el.long_node.to_radians();
    let incl = el.i.to_radians();
    let mean_anomaly = normalize_angle_signed(el.l - el.long_peri);

    let ecc = solve_kepler(mean_anomaly, el.e).eccentric_anomaly_deg.to_radians();

    // Orbital-plane coordinates, x' toward perihelion.
    let xp = el.a * (ecc.cos() - el.e);
    let yp = el.a * (1.0 - el.e * el.e).sqrt() * ecc.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp;
    let y = (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp;
    let z = (so * si) * xp + (co * si) * yp;

    HeliocentricPosition {
        xyz: [x, y, z],
        distance_au: xp.hypot(yp),
        true_anomaly_deg: yp.atan2(xp).to_degrees(),
    }
}
