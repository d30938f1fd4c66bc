//! Coordinate frame helpers for the night-sky engine.
//!
//! Provides the mean obliquity of the ecliptic, equatorial ↔ horizontal
//! and ecliptic → equatorial conversions, angular separations, and
//! sexagesimal parsing/formatting for RA and Dec.

pub mod ecliptic;
pub mod error;
pub mod horizontal;
pub mod obliquity;
pub mod separation;
pub mod sexagesimal;
pub mod spherical;

pub use ecliptic::{ecliptic_to_equatorial, ecliptic_vector_to_equatorial};
pub use error::ParseCoordinateError;
pub use horizontal::{
    EquatorialPosition, HorizontalPosition, alt_az_to_ra_dec, clamp_unit, ra_dec_to_alt_az,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use separation::{angular_distance, angular_distance_haversine};
pub use sexagesimal::{
    CoordinateKind, format_dec, format_ra, parse_coordinate, try_parse_coordinate,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, vector_angle_deg};
