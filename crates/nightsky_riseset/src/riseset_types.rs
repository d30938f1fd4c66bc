//! Types for rise/transit/set and twilight calculations.
//!
//! Provides the observer location, horizon-angle constants, the twilight
//! event ladder, and the tagged rise/transit/set result.

use chrono::{DateTime, Utc};
use nightsky_time::normalize_angle_signed;
use serde::{Deserialize, Serialize};

/// Standard atmospheric refraction at the horizon, degrees (34′).
pub const STANDARD_REFRACTION_DEG: f64 = 0.5667;

/// Horizon angle for point sources: stars, planets, catalog objects.
pub const STAR_HORIZON_DEG: f64 = -STANDARD_REFRACTION_DEG;

/// Horizon angle for the Sun's upper limb: refraction plus 16′ semidiameter.
pub const SUN_HORIZON_DEG: f64 = -0.8333;

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude: f64,
}

impl Observer {
    /// Create an observer, clamping latitude and wrapping longitude into range.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: if (-180.0..=180.0).contains(&longitude) {
                longitude
            } else {
                normalize_angle_signed(longitude)
            },
        }
    }
}

/// Solar horizon crossings, ordered from the darkest dawn to the darkest dusk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwilightEvent {
    /// Sun center at −18°, rising.
    AstronomicalDawn,
    /// Sun center at −12°, rising.
    NauticalDawn,
    /// Sun center at −6°, rising.
    CivilDawn,
    /// Upper limb on the refracted horizon, rising.
    Sunrise,
    /// Upper limb on the refracted horizon, setting.
    Sunset,
    /// Sun center at −6°, setting.
    CivilDusk,
    /// Sun center at −12°, setting.
    NauticalDusk,
    /// Sun center at −18°, setting.
    AstronomicalDusk,
}

impl TwilightEvent {
    /// All eight events in chronological order for a normal day.
    pub const ALL: [Self; 8] = [
        Self::AstronomicalDawn,
        Self::NauticalDawn,
        Self::CivilDawn,
        Self::Sunrise,
        Self::Sunset,
        Self::CivilDusk,
        Self::NauticalDusk,
        Self::AstronomicalDusk,
    ];

    /// Altitude of the Sun's center at this event, degrees.
    pub fn horizon_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => SUN_HORIZON_DEG,
            Self::CivilDawn | Self::CivilDusk => -6.0,
            Self::NauticalDawn | Self::NauticalDusk => -12.0,
            Self::AstronomicalDawn | Self::AstronomicalDusk => -18.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::AstronomicalDawn => "Astronomical dawn",
            Self::NauticalDawn => "Nautical dawn",
            Self::CivilDawn => "Civil dawn",
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::CivilDusk => "Civil dusk",
            Self::NauticalDusk => "Nautical dusk",
            Self::AstronomicalDusk => "Astronomical dusk",
        }
    }

    /// Whether this is a morning event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }
}

/// Outcome of a rise/transit/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiseTransitSet {
    /// Rises, culminates and sets: `rise ≤ transit ≤ set`.
    Normal {
        rise: DateTime<Utc>,
        transit: DateTime<Utc>,
        set: DateTime<Utc>,
    },
    /// Never drops below the horizon angle; only the transit is meaningful.
    Circumpolar { transit: DateTime<Utc> },
    /// Never reaches the horizon angle.
    NeverRises,
}

impl RiseTransitSet {
    /// Rise time, if the body rises.
    pub fn rise(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Normal { rise, .. } => Some(*rise),
            _ => None,
        }
    }

    /// Upper transit time, if the body ever clears the horizon angle.
    pub fn transit(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Normal { transit, .. } | Self::Circumpolar { transit } => Some(*transit),
            Self::NeverRises => None,
        }
    }

    /// Set time, if the body sets.
    pub fn set(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Normal { set, .. } => Some(*set),
            _ => None,
        }
    }

    pub fn is_circumpolar(&self) -> bool {
        matches!(self, Self::Circumpolar { .. })
    }

    pub fn never_rises(&self) -> bool {
        matches!(self, Self::NeverRises)
    }
}
