use chrono::{DateTime, Utc};
use nightsky_bodies::{
    MoonPhase, MoonPosition, Planet, PlanetPosition, SunPosition, SunRiseSet, TwilightTimes,
    approximate_moon_position, approximate_sun_position, calculate_moon_phase,
    calculate_moon_rise_transit_set, calculate_planet_position, calculate_planet_rise_transit_set,
    calculate_sun_rise_set, calculate_twilight_times, is_sun_down, local_noon_jd, sun_position_jd,
};
use nightsky_frames::{HorizontalPosition, ra_dec_to_alt_az};
use nightsky_riseset::{Observer, RiseTransitSet, SUN_HORIZON_DEG};
use nightsky_search::is_planet_retrograde;
use nightsky_time::{date_to_julian, lst_deg};
use nightsky_visibility::{CatalogObject, RankedObject, get_bortle_info, rank_objects_by_visibility};
use serde::Serialize;

use crate::error::NightskyError;

/// Alt/az of an RA/Dec for `observer` at `date`.
pub fn horizontal(observer: &Observer, ra: f64, dec: f64, date: &DateTime<Utc>) -> HorizontalPosition {
    let lst = lst_deg(date_to_julian(date), observer.longitude);
    ra_dec_to_alt_az(ra, dec, observer.latitude, lst)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunInfo {
    pub position: SunPosition,
    pub horizontal: HorizontalPosition,
    pub rise_set: SunRiseSet,
    pub twilight: TwilightTimes,
}

/// Sun position, sunrise/sunset and twilight for the observer's local day.
pub fn sun_info(observer: &Observer, date: &DateTime<Utc>) -> SunInfo {
    let position = approximate_sun_position(date);
    let noon = sun_position_jd(local_noon_jd(date, observer.longitude));
    SunInfo {
        position,
        horizontal: horizontal(observer, position.ra, position.dec, date),
        rise_set: calculate_sun_rise_set(
            &noon,
            observer.latitude,
            observer.longitude,
            date,
            SUN_HORIZON_DEG,
        ),
        twilight: calculate_twilight_times(observer.latitude, observer.longitude, date),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonInfo {
    pub phase: MoonPhase,
    pub position: MoonPosition,
    /// Geocentric alt/az; no topocentric parallax correction.
    pub horizontal: HorizontalPosition,
    pub rise_transit_set: RiseTransitSet,
}

/// Phase, position and rise/set of the Moon.
pub fn moon_info(observer: &Observer, date: &DateTime<Utc>) -> MoonInfo {
    let position = approximate_moon_position(date);
    MoonInfo {
        phase: calculate_moon_phase(date),
        position,
        horizontal: horizontal(observer, position.ra, position.dec, date),
        rise_transit_set: calculate_moon_rise_transit_set(
            observer.latitude,
            observer.longitude,
            date,
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetInfo {
    pub position: PlanetPosition,
    pub horizontal: HorizontalPosition,
    pub is_visible: bool,
    pub is_retrograde: bool,
    pub rise_transit_set: RiseTransitSet,
}

/// Position, alt/az and rise/set of one planet; `None` for Earth.
pub fn planet_info(planet: Planet, observer: &Observer, date: &DateTime<Utc>) -> Option<PlanetInfo> {
    let position = calculate_planet_position(planet, date)?;
    let hz = horizontal(observer, position.ra, position.dec, date);
    Some(PlanetInfo {
        position,
        horizontal: hz,
        is_visible: hz.altitude > 0.0,
        is_retrograde: is_planet_retrograde(planet, date)?,
        rise_transit_set: calculate_planet_rise_transit_set(
            planet,
            observer.latitude,
            observer.longitude,
            date,
        )?,
    })
}

/// Every planet other than Earth, in order from the Sun, above the
/// horizon or not.
pub fn visible_planets(observer: &Observer, date: &DateTime<Utc>) -> Vec<PlanetInfo> {
    Planet::OBSERVABLE
        .into_iter()
        .filter_map(|p| planet_info(p, observer, date))
        .collect()
}

/// Whether the Sun's upper limb is below the horizon.
pub fn is_nighttime(observer: &Observer, date: &DateTime<Utc>) -> bool {
    is_sun_down(observer.latitude, observer.longitude, date)
}

/// Catalog ranked for a sky of the given Bortle class.
pub fn tonight<'a>(
    catalog: &'a [CatalogObject],
    observer: &Observer,
    date: &DateTime<Utc>,
    bortle_class: u8,
) -> Result<Vec<RankedObject<'a>>, NightskyError> {
    let info = get_bortle_info(bortle_class).ok_or(NightskyError::InvalidBortleClass(bortle_class))?;
    Ok(rank_objects_by_visibility(
        catalog,
        observer.latitude,
        observer.longitude,
        date,
        info.limiting_magnitude,
    ))
}

/// Case-insensitive planet name; Earth is rejected.
pub fn parse_planet(name: &str) -> Result<Planet, NightskyError> {
    Planet::from_name(name)
        .filter(|p| *p != Planet::Earth)
        .ok_or_else(|| NightskyError::UnknownPlanet(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn greenwich() -> Observer {
        Observer::new(51.48, 0.0)
    }

    #[test]
    fn midnight_is_night_and_noon_is_not() {
        let night = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert!(is_nighttime(&greenwich(), &night));
        assert!(!is_nighttime(&greenwich(), &noon));
    }

    #[test]
    fn sun_info_at_noon() {
        let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
        let s = sun_info(&greenwich(), &noon);
        assert!((s.horizontal.altitude - 62.0).abs() < 0.5, "alt {}", s.horizontal.altitude);
        assert!(s.rise_set.sunrise.is_some() && s.rise_set.sunset.is_some());
        assert!(s.twilight.astronomical_dusk.is_none(), "no astronomical night at midsummer");
    }

    #[test]
    fn seven_planets_reported() {
        let d = Utc.with_ymd_and_hms(2024, 1, 15, 22, 0, 0).unwrap();
        let planets = visible_planets(&greenwich(), &d);
        assert_eq!(planets.len(), 7);
        assert!(planets.iter().all(|p| p.is_visible == (p.horizontal.altitude > 0.0)));
        assert_eq!(planets[0].position.planet, Planet::Mercury);
    }

    #[test]
    fn moon_info_is_consistent() {
        let d = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
        let m = moon_info(&greenwich(), &d);
        assert!(m.phase.illumination > 95.0);
        assert!((0.0..360.0).contains(&m.horizontal.azimuth));
    }

    #[test]
    fn tonight_rejects_bad_bortle() {
        let d = Utc.with_ymd_and_hms(2024, 1, 15, 22, 0, 0).unwrap();
        let r = tonight(&[], &greenwich(), &d, 10);
        assert_eq!(r, Err(NightskyError::InvalidBortleClass(10)));
        assert_eq!(tonight(&[], &greenwich(), &d, 4), Ok(Vec::new()));
    }

    #[test]
    fn planet_names() {
        assert_eq!(parse_planet("JUPITER"), Ok(Planet::Jupiter));
        assert!(parse_planet("earth").is_err());
        assert!(parse_planet("pluto").is_err());
    }
}
