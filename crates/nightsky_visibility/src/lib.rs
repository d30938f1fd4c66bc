//! Observability of deep-sky catalog objects.
//!
//! - [`catalog`]: catalog records with mixed RA/Dec encodings
//! - [`score`]: the 0–100 visibility heuristic
//! - [`ranking`]: current alt/az, filtering and ordering of a catalog
//! - [`bortle`]: the Bortle dark-sky scale

pub mod bortle;
pub mod catalog;
pub mod ranking;
pub mod score;

pub use bortle::{
    BORTLE_SCALE, BortleInfo, bortle_limiting_magnitude, bortle_to_sqm, get_bortle_info,
    sqm_to_bortle,
};
pub use catalog::{CatalogObject, CoordinateValue, decode_dec, decode_ra};
pub use ranking::{RankedObject, object_rise_transit_set, rank_objects_by_visibility};
pub use score::{COMFORT_BAND_DEG, calculate_visibility_score, is_optimal_altitude};
