//! Low-precision solar ephemeris, sunrise/sunset and twilight.
//!
//! Mean-element Sun (Astronomical Almanac low-precision formulae), good to
//! about 0.01° over 1950–2050. Rise/set use the hour-angle method with the
//! Sun's RA/Dec frozen at local mean noon.

use chrono::{DateTime, TimeDelta, Utc};
use nightsky_frames::{ecliptic_to_equatorial, mean_obliquity_deg, ra_dec_to_alt_az};
use nightsky_riseset::{
    SUN_HORIZON_DEG, TwilightEvent, hour_angle_cosine, hour_angle_to_delta, local_midnight_jd,
    transit_near_jd,
};
use nightsky_time::{J2000_JD, date_to_julian, julian_to_date, lst_deg, normalize_angle};
use serde::{Deserialize, Serialize};

/// Geocentric Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunPosition {
    /// Right ascension in degrees, range [0, 360).
    pub ra: f64,
    /// Declination in degrees.
    pub dec: f64,
    /// Earth–Sun distance in AU.
    pub distance_au: f64,
    /// Geometric ecliptic longitude of date, degrees [0, 360).
    pub ecliptic_longitude: f64,
}

/// Sun position at a Julian Date.
pub fn sun_position_jd(jd: f64) -> SunPosition {
    let d = jd - J2000_JD;
    let g = normalize_angle(357.529 + 0.985_600_28 * d).to_radians();
    let l = normalize_angle(280.459 + 0.985_647_36 * d);

    let lambda = normalize_angle(l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin());
    let distance_au = 1.000_14 - 0.016_71 * g.cos() - 0.000_14 * (2.0 * g).cos();

    let eq = ecliptic_to_equatorial(lambda, 0.0, mean_obliquity_deg(jd));
    SunPosition {
        ra: eq.ra,
        dec: eq.dec,
        distance_au,
        ecliptic_longitude: lambda,
    }
}

/// Sun position at a UTC instant.
pub fn approximate_sun_position(date: &DateTime<Utc>) -> SunPosition {
    sun_position_jd(date_to_julian(date))
}

/// Julian Date of local mean noon on the observer's local day.
pub fn local_noon_jd(date: &DateTime<Utc>, longitude_deg: f64) -> f64 {
    local_midnight_jd(date, longitude_deg) + 0.5
}

/// Local mean noon on the observer's local day.
pub fn local_noon(date: &DateTime<Utc>, longitude_deg: f64) -> DateTime<Utc> {
    julian_to_date(local_noon_jd(date, longitude_deg))
}

/// Sunrise, solar noon and sunset for one local day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunRiseSet {
    pub sunrise: Option<DateTime<Utc>>,
    /// Meridian crossing nearest local mean noon.
    pub transit: DateTime<Utc>,
    pub sunset: Option<DateTime<Utc>>,
    /// Sun never drops to the horizon angle.
    pub polar_day: bool,
    /// Sun never reaches the horizon angle.
    pub polar_night: bool,
}

/// Rise and set of the Sun across `horizon_deg` on the local day of `date`.
///
/// `sun` should be evaluated near local noon of that day (see
/// [`local_noon_jd`]); its RA fixes the transit and its Dec the hour angle.
pub fn calculate_sun_rise_set(
    sun: &SunPosition,
    lat_deg: f64,
    lon_deg: f64,
    date: &DateTime<Utc>,
    horizon_deg: f64,
) -> SunRiseSet {
    let transit = transit_near_jd(sun.ra, lon_deg, local_noon_jd(date, lon_deg));
    let cos_h = hour_angle_cosine(sun.dec, lat_deg, horizon_deg);

    if cos_h < -1.0 {
        return SunRiseSet {
            sunrise: None,
            transit,
            sunset: None,
            polar_day: true,
            polar_night: false,
        };
    }
    if cos_h > 1.0 {
        return SunRiseSet {
            sunrise: None,
            transit,
            sunset: None,
            polar_day: false,
            polar_night: true,
        };
    }

    let half_arc = hour_angle_to_delta(cos_h.acos().to_degrees());
    SunRiseSet {
        sunrise: Some(transit - half_arc),
        transit,
        sunset: Some(transit + half_arc),
        polar_day: false,
        polar_night: false,
    }
}

/// Sunrise/sunset and the three twilight pairs for one local day.
///
/// A field is `None` when the Sun does not cross that altitude on this day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwilightTimes {
    pub astronomical_dawn: Option<DateTime<Utc>>,
    pub nautical_dawn: Option<DateTime<Utc>>,
    pub civil_dawn: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub solar_noon: DateTime<Utc>,
    pub sunset: Option<DateTime<Utc>>,
    pub civil_dusk: Option<DateTime<Utc>>,
    pub nautical_dusk: Option<DateTime<Utc>>,
    pub astronomical_dusk: Option<DateTime<Utc>>,
    /// Hours from tonight's astronomical dusk to tomorrow's astronomical dawn.
    pub darkness_duration_hours: Option<f64>,
}

impl TwilightTimes {
    /// Time of a single event.
    pub fn get(&self, event: TwilightEvent) -> Option<DateTime<Utc>> {
        match event {
            TwilightEvent::AstronomicalDawn => self.astronomical_dawn,
            TwilightEvent::NauticalDawn => self.nautical_dawn,
            TwilightEvent::CivilDawn => self.civil_dawn,
            TwilightEvent::Sunrise => self.sunrise,
            TwilightEvent::Sunset => self.sunset,
            TwilightEvent::CivilDusk => self.civil_dusk,
            TwilightEvent::NauticalDusk => self.nautical_dusk,
            TwilightEvent::AstronomicalDusk => self.astronomical_dusk,
        }
    }
}

/// Twilight ladder for the observer's local day containing `date`.
pub fn calculate_twilight_times(lat_deg: f64, lon_deg: f64, date: &DateTime<Utc>) -> TwilightTimes {
    twilight_for_day(lat_deg, lon_deg, date, true)
}

/// `with_darkness` recurses exactly once, into the following day.
fn twilight_for_day(
    lat_deg: f64,
    lon_deg: f64,
    date: &DateTime<Utc>,
    with_darkness: bool,
) -> TwilightTimes {
    let sun = sun_position_jd(local_noon_jd(date, lon_deg));
    let crossing = |event: TwilightEvent| {
        let rs = calculate_sun_rise_set(&sun, lat_deg, lon_deg, date, event.horizon_deg());
        if event.is_rising() { rs.sunrise } else { rs.sunset }
    };

    let mut times = TwilightTimes {
        astronomical_dawn: crossing(TwilightEvent::AstronomicalDawn),
        nautical_dawn: crossing(TwilightEvent::NauticalDawn),
        civil_dawn: crossing(TwilightEvent::CivilDawn),
        sunrise: crossing(TwilightEvent::Sunrise),
        solar_noon: transit_near_jd(sun.ra, lon_deg, local_noon_jd(date, lon_deg)),
        sunset: crossing(TwilightEvent::Sunset),
        civil_dusk: crossing(TwilightEvent::CivilDusk),
        nautical_dusk: crossing(TwilightEvent::NauticalDusk),
        astronomical_dusk: crossing(TwilightEvent::AstronomicalDusk),
        darkness_duration_hours: None,
    };

    if with_darkness {
        let tomorrow = *date + TimeDelta::days(1);
        let next = twilight_for_day(lat_deg, lon_deg, &tomorrow, false);
        times.darkness_duration_hours = match (times.astronomical_dusk, next.astronomical_dawn) {
            (Some(dusk), Some(dawn)) => Some((dawn - dusk).num_milliseconds() as f64 / 3_600_000.0),
            _ => None,
        };
    }
    times
}

/// Whether the Sun's upper limb is below the refracted horizon at `date`.
pub fn is_sun_down(lat_deg: f64, lon_deg: f64, date: &DateTime<Utc>) -> bool {
    let jd = date_to_julian(date);
    let sun = sun_position_jd(jd);
    let lst = lst_deg(jd, lon_deg);
    ra_dec_to_alt_az(sun.ra, sun.dec, lat_deg, lst).altitude < SUN_HORIZON_DEG
}
