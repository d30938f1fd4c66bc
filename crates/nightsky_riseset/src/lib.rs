//! Rise, transit and set times for any body with known RA/Dec.
//!
//! This crate provides:
//! - The [`Observer`] location type shared by every downstream crate
//! - Horizon-angle constants and the twilight event ladder
//! - A generic hour-angle solver reused for the Sun, Moon, planets and
//!   catalog objects, each supplying its own horizon angle

pub mod riseset;
pub mod riseset_types;

pub use riseset::{
    calculate_rise_transit_set, calculate_transit, hour_angle_cosine, hour_angle_to_delta,
    local_midnight_jd, transit_near_jd,
};
pub use riseset_types::{
    Observer, RiseTransitSet, STANDARD_REFRACTION_DEG, STAR_HORIZON_DEG, SUN_HORIZON_DEG,
    TwilightEvent,
};
