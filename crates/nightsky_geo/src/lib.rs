//! Ground geometry for observers.
//!
//! This crate provides:
//! - Parsing of free-form `"lat, lon"` observer strings
//! - Great-circle ground distance
//! - Eight-point compass sectors for filtering by azimuth
//! - Look angles to the geostationary belt and a table of well-known
//!   GEO satellites

pub mod direction;
pub mod error;
pub mod geostationary;
pub mod location;

pub use direction::CardinalDirection;
pub use error::LocationError;
pub use geostationary::{
    DEFAULT_ARC_POINTS, DEFAULT_MIN_ELEVATION_DEG, EARTH_EQUATORIAL_RADIUS_KM, GEO_RADIUS_KM,
    GeoArc, GeoArcPoint, GeoLookAngles, GeoSatellite, MAJOR_GEO_SATELLITES,
    MAX_VISIBLE_LATITUDE_DEG, SatelliteCategory, VisibleGeoSatellite, calculate_geo_look_angles,
    find_geo_satellite, geo_satellites_in_category, geostationary_arc, visible_geo_satellites,
};
pub use location::{EARTH_MEAN_RADIUS_KM, ground_distance_km, parse_observer_location};
