//! Retrograde detection and day-stepped event search.
//!
//! Oppositions, conjunctions and greatest elongations are found by stepping
//! forward one day at a time and tracking the elongation: the best sample
//! is reported once the elongation has moved past it by more than
//! `departure_deg`. This is a coarse heuristic with day resolution, bounded
//! by `span_factor` synodic periods. Fast geometries (Mercury near inferior
//! conjunction) can land a day or two away from the true instant.
//!
//! Stations use a coarse scan of ecliptic longitude speed for a sign
//! change, refined by bisection.

use chrono::{DateTime, Utc};
use nightsky_bodies::{Planet, PlanetPosition, planet_position_jd};
use nightsky_time::{date_to_julian, julian_to_date, normalize_angle_signed};
use tracing::debug;

use crate::error::SearchError;
use crate::search_types::{
    ElongationSide, EventQuery, EventSearchConfig, GreatestElongation, PlanetaryEvent,
    PlanetaryEventKind, StationEvent, StationType,
};

/// Geocentric ecliptic longitude change over one day starting at `jd`,
/// wrap-corrected into (−180°, 180°]. `None` for Earth.
pub fn daily_motion_deg(planet: Planet, jd: f64) -> Option<f64> {
    let now = planet_position_jd(planet, jd)?;
    let next = planet_position_jd(planet, jd + 1.0)?;
    Some(normalize_angle_signed(
        next.ecliptic_longitude - now.ecliptic_longitude,
    ))
}

/// Whether `planet` moves westward along the ecliptic over the day after
/// `date`. `None` for Earth.
pub fn is_planet_retrograde(planet: Planet, date: &DateTime<Utc>) -> Option<bool> {
    daily_motion_deg(planet, date_to_julian(date)).map(|motion| motion < 0.0)
}

/// Synodic period of a planet that can be searched; `None` for Earth.
fn search_span(planet: Planet, config: &EventSearchConfig) -> Option<usize> {
    planet
        .synodic_period_days()
        .map(|synodic| config.max_steps(synodic))
}

/// Step forward from `jd_start` and return the sample at the first local
/// maximum of `value`.
///
/// A sample only becomes a candidate after the value has risen at least
/// once, so a start just past a maximum is not reported. The candidate is
/// accepted once a later sample falls more than `departure_deg` below it.
fn scan_for_maximum<F>(
    planet: Planet,
    jd_start: f64,
    config: &EventSearchConfig,
    value: F,
) -> Option<(f64, PlanetPosition)>
where
    F: Fn(&PlanetPosition) -> f64,
{
    let max_steps = search_span(planet, config)?;
    let mut prev = value(&planet_position_jd(planet, jd_start)?);
    let mut best: Option<(f64, f64, PlanetPosition)> = None;

    for k in 1..=max_steps {
        let jd = jd_start + k as f64 * config.step_days;
        let pos = planet_position_jd(planet, jd)?;
        let v = value(&pos);

        if v > prev {
            if best.as_ref().is_none_or(|&(_, best_v, _)| v > best_v) {
                best = Some((jd, v, pos));
            }
        } else if let Some((best_jd, best_v, best_pos)) = best {
            if best_v - v > config.departure_deg {
                debug!(%planet, steps = k, best_jd, "extremum accepted");
                return Some((best_jd, best_pos));
            }
        }
        prev = v;
    }

    debug!(%planet, max_steps, "search span exhausted without an extremum");
    None
}

/// Classify a conjunction found for `planet`.
fn conjunction_kind(planet: Planet, pos: &PlanetPosition) -> PlanetaryEventKind {
    if !planet.is_inferior() {
        PlanetaryEventKind::Conjunction
    } else if pos.distance_au < 1.0 {
        PlanetaryEventKind::InferiorConjunction
    } else {
        PlanetaryEventKind::SuperiorConjunction
    }
}

/// Next opposition or conjunction of `planet` after `date`.
///
/// Returns `Ok(None)` for Earth, for an opposition of Mercury or Venus, and
/// when no event completes within the search span.
pub fn next_planetary_event(
    planet: Planet,
    date: &DateTime<Utc>,
    query: EventQuery,
    config: &EventSearchConfig,
) -> Result<Option<PlanetaryEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if planet == Planet::Earth {
        return Ok(None);
    }
    if query == EventQuery::Opposition && planet.is_inferior() {
        return Ok(None);
    }

    let jd_start = date_to_julian(date);
    let found = match query {
        EventQuery::Opposition => scan_for_maximum(planet, jd_start, config, |p| p.elongation_deg),
        EventQuery::Conjunction => {
            scan_for_maximum(planet, jd_start, config, |p| -p.elongation_deg)
        }
    };

    Ok(found.map(|(jd, pos)| PlanetaryEvent {
        planet,
        kind: match query {
            EventQuery::Opposition => PlanetaryEventKind::Opposition,
            EventQuery::Conjunction => conjunction_kind(planet, &pos),
        },
        date: julian_to_date(jd),
        elongation_deg: pos.elongation_deg,
        distance_au: pos.distance_au,
    }))
}

/// Next greatest elongation of Mercury or Venus after `date`.
///
/// With `side = None` the first maximum on either side is reported;
/// otherwise only maxima on that side of the Sun are considered. Returns
/// `Ok(None)` for superior planets and Earth.
pub fn greatest_elongation(
    planet: Planet,
    date: &DateTime<Utc>,
    side: Option<ElongationSide>,
    config: &EventSearchConfig,
) -> Result<Option<GreatestElongation>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !planet.is_inferior() {
        return Ok(None);
    }

    // Elongation signed by side: east positive.
    let signed = |p: &PlanetPosition| p.elongation_deg.copysign(p.relative_longitude_deg);
    let jd_start = date_to_julian(date);
    let found = match side {
        None => scan_for_maximum(planet, jd_start, config, |p| p.elongation_deg),
        Some(ElongationSide::East) => scan_for_maximum(planet, jd_start, config, signed),
        Some(ElongationSide::West) => scan_for_maximum(planet, jd_start, config, |p| -signed(p)),
    };

    Ok(found.map(|(jd, pos)| GreatestElongation {
        planet,
        date: julian_to_date(jd),
        elongation_deg: pos.elongation_deg,
        side: ElongationSide::from_relative_longitude(pos.relative_longitude_deg),
    }))
}

/// Ecliptic longitude speed in degrees/day by central difference.
fn longitude_speed(planet: Planet, jd: f64) -> Option<f64> {
    let before = planet_position_jd(planet, jd - 0.5)?;
    let after = planet_position_jd(planet, jd + 0.5)?;
    Some(normalize_angle_signed(
        after.ecliptic_longitude - before.ecliptic_longitude,
    ))
}

/// Bisect the speed sign change between `t_a` and `t_b`.
fn bisect_station(
    planet: Planet,
    mut t_a: f64,
    mut v_a: f64,
    mut t_b: f64,
    config: &EventSearchConfig,
) -> Option<f64> {
    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        let v_mid = longitude_speed(planet, t_mid)?;

        if v_a * v_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            v_a = v_mid;
        }

        if (t_b - t_a).abs() < config.convergence_days {
            break;
        }
    }
    Some(0.5 * (t_a + t_b))
}

/// Next stationary point of `planet` after `date`.
///
/// Returns `Ok(None)` for Earth and when no station falls within the span.
pub fn next_station(
    planet: Planet,
    date: &DateTime<Utc>,
    config: &EventSearchConfig,
) -> Result<Option<StationEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let Some(max_steps) = search_span(planet, config) else {
        return Ok(None);
    };

    let jd_start = date_to_julian(date);
    let Some(mut v_prev) = longitude_speed(planet, jd_start) else {
        return Ok(None);
    };
    let mut t_prev = jd_start;

    for k in 1..=max_steps {
        let t_curr = jd_start + k as f64 * config.step_days;
        let Some(v_curr) = longitude_speed(planet, t_curr) else {
            return Ok(None);
        };

        if v_prev * v_curr < 0.0 {
            let Some(t_station) = bisect_station(planet, t_prev, v_prev, t_curr, config) else {
                return Ok(None);
            };
            let Some(pos) = planet_position_jd(planet, t_station) else {
                return Ok(None);
            };
            let station_type = if v_prev > 0.0 {
                StationType::StationRetrograde
            } else {
                StationType::StationDirect
            };
            debug!(%planet, steps = k, t_station, ?station_type, "station found");
            return Ok(Some(StationEvent {
                planet,
                date: julian_to_date(t_station),
                ecliptic_longitude: pos.ecliptic_longitude,
                station_type,
            }));
        }

        t_prev = t_curr;
        v_prev = v_curr;
    }

    Ok(None)
}
