//! Ranking a catalog by current observability.

use chrono::{DateTime, Utc};
use nightsky_frames::{ParseCoordinateError, ra_dec_to_alt_az};
use nightsky_riseset::{RiseTransitSet, STAR_HORIZON_DEG, calculate_rise_transit_set};
use nightsky_time::{date_to_julian, lst_deg};
use serde::Serialize;
use tracing::warn;

use crate::catalog::CatalogObject;
use crate::score::{calculate_visibility_score, is_optimal_altitude};

/// A catalog entry with its current sky position and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedObject<'a> {
    pub object: &'a CatalogObject,
    /// Degrees, always > 0 in a ranking.
    pub current_altitude: f64,
    pub current_azimuth: f64,
    pub visibility_score: u8,
    /// Above the horizon and no fainter than the limiting magnitude.
    pub is_visible: bool,
    /// Altitude strictly between 30° and 70°.
    pub is_optimal: bool,
}

/// Rank `objects` for an observer at `date`.
///
/// Every object is placed at one shared local sidereal time. Objects at or
/// below the horizon are dropped, the rest are sorted by descending score.
/// Ties keep catalog order. Records whose coordinates cannot be decoded
/// are skipped.
pub fn rank_objects_by_visibility<'a>(
    objects: &'a [CatalogObject],
    latitude: f64,
    longitude: f64,
    date: &DateTime<Utc>,
    limiting_mag: f64,
) -> Vec<RankedObject<'a>> {
    let lst = lst_deg(date_to_julian(date), longitude);

    let mut ranked: Vec<RankedObject<'a>> = objects
        .iter()
        .filter_map(|object| {
            let eq = match object.equatorial() {
                Ok(eq) => eq,
                Err(err) => {
                    warn!(id = %object.id, %err, "skipping catalog object");
                    return None;
                }
            };
            let hz = ra_dec_to_alt_az(eq.ra, eq.dec, latitude, lst);
            Some(RankedObject {
                object,
                current_altitude: hz.altitude,
                current_azimuth: hz.azimuth,
                visibility_score: calculate_visibility_score(object, hz.altitude, limiting_mag),
                is_visible: hz.altitude > 0.0 && object.magnitude <= limiting_mag,
                is_optimal: is_optimal_altitude(hz.altitude),
            })
        })
        .filter(|r| r.current_altitude > 0.0)
        .collect();

    ranked.sort_by(|a, b| b.visibility_score.cmp(&a.visibility_score));
    ranked
}

/// Rise, transit and set of a catalog object on the observer's local day.
pub fn object_rise_transit_set(
    object: &CatalogObject,
    latitude: f64,
    longitude: f64,
    date: &DateTime<Utc>,
) -> Result<RiseTransitSet, ParseCoordinateError> {
    let eq = object.equatorial()?;
    Ok(calculate_rise_transit_set(
        eq.ra,
        eq.dec,
        latitude,
        longitude,
        date,
        STAR_HORIZON_DEG,
    ))
}
