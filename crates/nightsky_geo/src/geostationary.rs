//! Look angles to geostationary satellites.
//!
//! A GEO satellite sits over the equator at a fixed longitude, so its
//! azimuth and elevation depend only on the observer's latitude and the
//! longitude difference. Spherical Earth, no refraction.

use nightsky_time::{normalize_angle, normalize_angle_signed};
use serde::{Deserialize, Serialize};

use self::SatelliteCategory::{Communications, Weather};

/// WGS84 equatorial radius, km.
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.137;
/// Geostationary orbit radius from Earth's center, km.
pub const GEO_RADIUS_KM: f64 = 42_164.17;
/// Beyond this latitude the GEO belt never clears the horizon, degrees.
pub const MAX_VISIBLE_LATITUDE_DEG: f64 = 81.3;
/// Default elevation cutoff for listing satellites, degrees.
pub const DEFAULT_MIN_ELEVATION_DEG: f64 = 5.0;
/// Default number of arc samples: one every 5° of longitude.
pub const DEFAULT_ARC_POINTS: usize = 72;

const DEGENERATE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SatelliteCategory {
    Weather,
    Communications,
}

/// A satellite in the geostationary belt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoSatellite {
    pub name: &'static str,
    pub norad_id: u32,
    /// Orbital longitude, degrees east.
    pub longitude: f64,
    pub category: SatelliteCategory,
    pub operator: &'static str,
}

const fn sat(
    name: &'static str,
    norad_id: u32,
    longitude: f64,
    category: SatelliteCategory,
    operator: &'static str,
) -> GeoSatellite {
    GeoSatellite {
        name,
        norad_id,
        longitude,
        category,
        operator,
    }
}

/// Well-known weather and communications satellites.
pub const MAJOR_GEO_SATELLITES: [GeoSatellite; 15] = [
    sat("GOES-18", 54743, -137.0, Weather, "NOAA"),
    sat("GOES-16", 41866, -75.2, Weather, "NOAA"),
    sat("Himawari-8", 40267, 140.7, Weather, "JMA"),
    sat("Himawari-9", 41836, 140.7, Weather, "JMA"),
    sat("Meteosat-11", 40732, 0.0, Weather, "EUMETSAT"),
    sat("Meteosat-10", 38552, 9.5, Weather, "EUMETSAT"),
    sat("INSAT-3D", 39216, 82.0, Weather, "ISRO"),
    sat("INSAT-3DR", 41752, 74.0, Weather, "ISRO"),
    sat("FY-4A", 41882, 104.7, Weather, "CMA"),
    sat("GK-2A", 43823, 128.2, Weather, "KMA"),
    sat("Intelsat 901", 24709, 27.5, Communications, "Intelsat"),
    sat("SES-1", 36516, -101.0, Communications, "SES"),
    sat("Galaxy 19", 33376, -97.0, Communications, "Intelsat"),
    sat("Eutelsat 36B", 37816, 36.0, Communications, "Eutelsat"),
    sat("AsiaSat 5", 35812, 100.5, Communications, "AsiaSat"),
];

/// Direction and distance from an observer to a point of the GEO belt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLookAngles {
    /// Degrees from North through East, [0, 360).
    pub azimuth: f64,
    /// Degrees above the horizon; negative when below it.
    pub elevation: f64,
    pub slant_range_km: f64,
    /// Satellite longitude minus observer longitude, (−180, 180].
    pub delta_longitude: f64,
}

impl GeoLookAngles {
    pub fn is_visible(&self) -> bool {
        self.elevation >= 0.0
    }
}

/// Look angles from `(observer_lat, observer_lon)` to the GEO belt at
/// `sat_longitude`.
///
/// `None` when the observer is beyond [`MAX_VISIBLE_LATITUDE_DEG`].
pub fn calculate_geo_look_angles(
    observer_lat: f64,
    observer_lon: f64,
    sat_longitude: f64,
) -> Option<GeoLookAngles> {
    if observer_lat.abs() > MAX_VISIBLE_LATITUDE_DEG {
        return None;
    }

    let delta_lon = normalize_angle_signed(sat_longitude - observer_lon);
    let (sin_lat, cos_lat) = observer_lat.to_radians().sin_cos();
    let (sin_d, cos_d) = delta_lon.to_radians().sin_cos();

    // Initial great-circle bearing to the sub-satellite point on the equator.
    let azimuth = normalize_angle(sin_d.atan2(-sin_lat * cos_d).to_degrees());

    // Central angle between observer and sub-satellite point.
    let cos_c = cos_lat * cos_d;
    let sin_c = (1.0 - cos_c * cos_c).max(0.0).sqrt();
    let elevation = if sin_c < DEGENERATE {
        90.0_f64.copysign(cos_c)
    } else {
        (cos_c - EARTH_EQUATORIAL_RADIUS_KM / GEO_RADIUS_KM)
            .atan2(sin_c)
            .to_degrees()
    };

    let slant_range_km = (GEO_RADIUS_KM * GEO_RADIUS_KM
        + EARTH_EQUATORIAL_RADIUS_KM * EARTH_EQUATORIAL_RADIUS_KM
        - 2.0 * GEO_RADIUS_KM * EARTH_EQUATORIAL_RADIUS_KM * cos_c)
        .sqrt();

    Some(GeoLookAngles {
        azimuth,
        elevation,
        slant_range_km,
        delta_longitude: delta_lon,
    })
}

/// A catalog satellite with its look angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisibleGeoSatellite<'a> {
    pub satellite: &'a GeoSatellite,
    #[serde(flatten)]
    pub look: GeoLookAngles,
}

/// Satellites at or above `min_elevation`, sorted by azimuth.
pub fn visible_geo_satellites<'a>(
    observer_lat: f64,
    observer_lon: f64,
    satellites: &'a [GeoSatellite],
    min_elevation: f64,
) -> Vec<VisibleGeoSatellite<'a>> {
    let mut visible: Vec<VisibleGeoSatellite<'a>> = satellites
        .iter()
        .filter_map(|satellite| {
            let look = calculate_geo_look_angles(observer_lat, observer_lon, satellite.longitude)?;
            (look.is_visible() && look.elevation >= min_elevation)
                .then_some(VisibleGeoSatellite { satellite, look })
        })
        .collect();
    visible.sort_by(|a, b| a.look.azimuth.total_cmp(&b.look.azimuth));
    visible
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoArcPoint {
    /// Orbital longitude of the sample, degrees east.
    pub longitude: f64,
    pub azimuth: f64,
    pub elevation: f64,
}

/// The part of the GEO belt above an observer's horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoArc {
    pub points: Vec<GeoArcPoint>,
    /// Highest sampled elevation, 0 when nothing is visible.
    pub max_elevation: f64,
    pub min_azimuth: Option<f64>,
    pub max_azimuth: Option<f64>,
}

/// Sample `num_points` longitudes evenly from −180° and keep those above
/// the horizon.
pub fn geostationary_arc(observer_lat: f64, observer_lon: f64, num_points: usize) -> GeoArc {
    let step = if num_points == 0 {
        0.0
    } else {
        360.0 / num_points as f64
    };
    let points: Vec<GeoArcPoint> = (0..num_points)
        .filter_map(|i| {
            let longitude = -180.0 + i as f64 * step;
            let look = calculate_geo_look_angles(observer_lat, observer_lon, longitude)?;
            look.is_visible().then_some(GeoArcPoint {
                longitude,
                azimuth: look.azimuth,
                elevation: look.elevation,
            })
        })
        .collect();

    let max_elevation = points.iter().map(|p| p.elevation).fold(0.0, f64::max);
    let min_azimuth = points.iter().map(|p| p.azimuth).min_by(f64::total_cmp);
    let max_azimuth = points.iter().map(|p| p.azimuth).max_by(f64::total_cmp);
    GeoArc {
        points,
        max_elevation,
        min_azimuth,
        max_azimuth,
    }
}

/// Case-insensitive lookup in [`MAJOR_GEO_SATELLITES`].
pub fn find_geo_satellite(name: &str) -> Option<&'static GeoSatellite> {
    MAJOR_GEO_SATELLITES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

pub fn geo_satellites_in_category(
    category: SatelliteCategory,
) -> impl Iterator<Item = &'static GeoSatellite> {
    MAJOR_GEO_SATELLITES
        .iter()
        .filter(move |s| s.category == category)
}
