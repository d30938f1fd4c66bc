//! Geocentric planet positions and illumination geometry.

use chrono::{DateTime, Utc};
use nightsky_frames::{
    EquatorialPosition, cartesian_to_spherical, clamp_unit, ecliptic_to_equatorial,
    mean_obliquity_deg, vector_angle_deg,
};
use nightsky_riseset::{RiseTransitSet, STAR_HORIZON_DEG, calculate_rise_transit_set};
use nightsky_time::{date_to_julian, normalize_angle_signed};
use serde::{Deserialize, Serialize};

use crate::elements::Planet;
use crate::kepler::calculate_heliocentric_position;
use crate::sun::local_noon_jd;

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Arcseconds per radian.
const ARCSEC_PER_RAD: f64 = 206_264.806;

/// Geocentric view of a planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Right ascension in degrees, range [0, 360).
    pub ra: f64,
    /// Declination in degrees.
    pub dec: f64,
    /// Earth–planet distance, AU.
    pub distance_au: f64,
    /// Sun–planet distance, AU.
    pub heliocentric_distance_au: f64,
    /// Angular distance from the Sun, degrees [0, 180].
    pub elongation_deg: f64,
    /// Ecliptic longitude relative to the Sun, degrees (−180, 180];
    /// positive east of the Sun (evening sky).
    pub relative_longitude_deg: f64,
    /// Sun–planet–Earth angle, degrees [0, 180].
    pub phase_angle_deg: f64,
    /// Illuminated fraction of the disc, percent.
    pub illumination_pct: f64,
    pub angular_diameter_arcsec: f64,
    /// Geocentric ecliptic longitude (J2000 ecliptic), degrees [0, 360).
    pub ecliptic_longitude: f64,
    /// Geocentric ecliptic latitude, degrees.
    pub ecliptic_latitude: f64,
}

impl PlanetPosition {
    pub fn equatorial(&self) -> EquatorialPosition {
        EquatorialPosition {
            ra: self.ra,
            dec: self.dec,
        }
    }
}

/// Geocentric position of `planet` at `jd`; `None` for Earth.
pub fn planet_position_jd(planet: Planet, jd: f64) -> Option<PlanetPosition> {
    if planet == Planet::Earth {
        return None;
    }

    let target = calculate_heliocentric_position(planet, jd);
    let earth = calculate_heliocentric_position(Planet::Earth, jd);

    let geo = [
        target.xyz[0] - earth.xyz[0],
        target.xyz[1] - earth.xyz[1],
        target.xyz[2] - earth.xyz[2],
    ];
    let to_sun = [-earth.xyz[0], -earth.xyz[1], -earth.xyz[2]];

    let ecl = cartesian_to_spherical(&geo);
    let sun_lon = cartesian_to_spherical(&to_sun).lon_deg;
    let eq = ecliptic_to_equatorial(ecl.lon_deg, ecl.lat_deg, mean_obliquity_deg(jd));

    let r = target.distance_au;
    let delta = ecl.distance;
    let big_r = earth.distance_au;
    let cos_phase = clamp_unit((r * r + delta * delta - big_r * big_r) / (2.0 * r * delta));

    Some(PlanetPosition {
        planet,
        ra: eq.ra,
        dec: eq.dec,
        distance_au: delta,
        heliocentric_distance_au: r,
        elongation_deg: vector_angle_deg(&geo, &to_sun),
        relative_longitude_deg: normalize_angle_signed(ecl.lon_deg - sun_lon),
        phase_angle_deg: cos_phase.acos().to_degrees(),
        illumination_pct: (1.0 + cos_phase) / 2.0 * 100.0,
        angular_diameter_arcsec: 2.0 * planet.mean_radius_km() / (delta * AU_KM) * ARCSEC_PER_RAD,
        ecliptic_longitude: ecl.lon_deg,
        ecliptic_latitude: ecl.lat_deg,
    })
}

/// Geocentric position of `planet` at `date`; `None` for Earth.
pub fn calculate_planet_position(planet: Planet, date: &DateTime<Utc>) -> Option<PlanetPosition> {
    planet_position_jd(planet, date_to_julian(date))
}

/// Rise, transit and set of a planet on the observer's local day.
///
/// Coordinates are taken at local mean noon; `None` for Earth.
pub fn calculate_planet_rise_transit_set(
    planet: Planet,
    lat_deg: f64,
    lon_deg: f64,
    date: &DateTime<Utc>,
) -> Option<RiseTransitSet> {
    let pos = planet_position_jd(planet, local_noon_jd(date, lon_deg))?;
    Some(calculate_rise_transit_set(
        pos.ra,
        pos.dec,
        lat_deg,
        lon_deg,
        date,
        STAR_HORIZON_DEG,
    ))
}
