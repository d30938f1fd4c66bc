//! Low-precision ephemerides for the Sun, Moon and planets.
//!
//! This crate provides:
//! - Solar position, sunrise/sunset and the twilight ladder
//! - Lunar phase, position, rise/set and a phase silhouette
//! - Planetary positions from JPL approximate Keplerian elements
//!
//! Accuracy is that of the underlying mean-element series: about 0.01°
//! for the Sun, a degree or two for the Moon, arcminutes for planets.

pub mod elements;
pub mod kepler;
pub mod moon;
pub mod moon_svg;
pub mod planets;
pub mod sun;

pub use elements::{OrbitalElements, Planet, get_planet_elements};
pub use kepler::{
    HeliocentricPosition, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE_DEG, KeplerSolution,
    calculate_heliocentric_position, solve_kepler,
};
pub use moon::{
    MoonPhase, MoonPhaseName, MoonPosition, SYNODIC_MONTH, approximate_moon_position,
    calculate_moon_phase, calculate_moon_rise_transit_set, moon_horizon_deg, moon_position_jd,
};
pub use moon_svg::generate_moon_svg;
pub use planets::{
    AU_KM, PlanetPosition, calculate_planet_position, calculate_planet_rise_transit_set,
    planet_position_jd,
};
pub use sun::{
    SunPosition, SunRiseSet, TwilightTimes, approximate_sun_position, calculate_sun_rise_set,
    calculate_twilight_times, is_sun_down, local_noon, local_noon_jd, sun_position_jd,
};
