//! Planetary event search.
//!
//! This crate provides:
//! - One-day finite-difference retrograde detection
//! - Day-stepped opposition, conjunction and greatest-elongation search
//! - Stationary point search (coarse scan + bisection)
//!
//! Every search is bounded by a multiple of the planet's synodic period and
//! returns `Ok(None)` when the event has no meaning for the planet or does
//! not complete within that span.

pub mod error;
pub mod search;
pub mod search_types;

pub use error::SearchError;
pub use search::{
    daily_motion_deg, greatest_elongation, is_planet_retrograde, next_planetary_event,
    next_station,
};
pub use search_types::{
    ElongationSide, EventQuery, EventSearchConfig, GreatestElongation, MAX_SCAN_STEPS,
    MIN_STEP_DAYS, PlanetaryEvent, PlanetaryEventKind, StationEvent, StationType,
};
