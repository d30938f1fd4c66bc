//! Convenience wrapper for the night-sky ephemeris and visibility engine.
//!
//! Bundles the per-body crates behind observer-level functions that take an
//! [`Observer`] and a UTC instant and return serializable summaries.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use nightsky_rs::*;
//!
//! let observer = parse_observer_location("40.7128N, 74.0060W")?;
//! let date = parse_utc_date("2024-03-20T02:00:00Z")?;
//!
//! let moon = moon_info(&observer, &date);
//! println!("{} {:.0}% lit", moon.phase.name, moon.phase.illumination);
//! for p in visible_planets(&observer, &date).iter().filter(|p| p.is_visible) {
//!     println!("{:<8} alt {:5.1}°", p.position.planet, p.horizontal.altitude);
//! }
//! ```

pub mod convenience;
pub mod date;
pub mod error;

pub use convenience::{
    MoonInfo, PlanetInfo, SunInfo, horizontal, is_nighttime, moon_info, parse_planet,
    planet_info, sun_info, tonight, visible_planets,
};
pub use date::parse_utc_date;
pub use error::NightskyError;

// Re-export the building blocks so callers only need `nightsky_rs`.
pub use nightsky_bodies::{
    MoonPhase, MoonPhaseName, MoonPosition, Planet, PlanetPosition, SunPosition, SunRiseSet,
    TwilightTimes, generate_moon_svg,
};
pub use nightsky_frames::{
    CoordinateKind, EquatorialPosition, HorizontalPosition, format_dec, format_ra,
    parse_coordinate,
};
pub use nightsky_geo::{
    CardinalDirection, DEFAULT_ARC_POINTS, DEFAULT_MIN_ELEVATION_DEG, GeoArc, GeoLookAngles,
    GeoSatellite, LocationError, MAJOR_GEO_SATELLITES, VisibleGeoSatellite, geostationary_arc,
    ground_distance_km, parse_observer_location, visible_geo_satellites,
};
pub use nightsky_riseset::{Observer, RiseTransitSet, TwilightEvent};
pub use nightsky_search::{
    ElongationSide, EventQuery, EventSearchConfig, GreatestElongation, PlanetaryEvent,
    PlanetaryEventKind, SearchError, StationEvent, StationType, greatest_elongation,
    is_planet_retrograde, next_planetary_event, next_station,
};
pub use nightsky_time::{date_to_julian, julian_to_date};
pub use nightsky_visibility::{
    BortleInfo, CatalogObject, CoordinateValue, RankedObject, get_bortle_info,
    object_rise_transit_set, rank_objects_by_visibility, sqm_to_bortle,
};
