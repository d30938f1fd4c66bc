//! Types for planetary event and station search.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use nightsky_bodies::Planet;
use serde::{Deserialize, Serialize};

/// Which elongation extremum to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventQuery {
    /// Elongation maximum near 180°. Superior planets only.
    Opposition,
    /// Elongation minimum near 0°.
    Conjunction,
}

/// Kind of event found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetaryEventKind {
    Opposition,
    /// Conjunction of a superior planet (always behind the Sun).
    Conjunction,
    /// Inferior planet between Earth and Sun.
    InferiorConjunction,
    /// Inferior planet beyond the Sun.
    SuperiorConjunction,
}

impl Display for PlanetaryEventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Opposition => "opposition",
            Self::Conjunction => "conjunction",
            Self::InferiorConjunction => "inferior conjunction",
            Self::SuperiorConjunction => "superior conjunction",
        })
    }
}

/// An opposition or conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryEvent {
    pub planet: Planet,
    pub kind: PlanetaryEventKind,
    /// Day-resolution event time.
    pub date: DateTime<Utc>,
    /// Elongation at `date`, degrees.
    pub elongation_deg: f64,
    /// Earth–planet distance at `date`, AU.
    pub distance_au: f64,
}

/// Side of the Sun as seen from Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElongationSide {
    /// East of the Sun: evening sky.
    East,
    /// West of the Sun: morning sky.
    West,
}

impl ElongationSide {
    /// Side for a longitude relative to the Sun, positive eastward.
    pub fn from_relative_longitude(relative_longitude_deg: f64) -> Self {
        if relative_longitude_deg >= 0.0 {
            Self::East
        } else {
            Self::West
        }
    }
}

impl Display for ElongationSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::East => "east",
            Self::West => "west",
        })
    }
}

/// A greatest elongation of Mercury or Venus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreatestElongation {
    pub planet: Planet,
    pub date: DateTime<Utc>,
    pub elongation_deg: f64,
    pub side: ElongationSide,
}

/// Station type: retrograde or direct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    /// Longitude speed crosses from positive to negative (starts retrograde).
    StationRetrograde,
    /// Longitude speed crosses from negative to positive (ends retrograde).
    StationDirect,
}

impl Display for StationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::StationRetrograde => "stationary retrograde",
            Self::StationDirect => "stationary direct",
        })
    }
}

/// A stationary point (ecliptic longitude speed crosses zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationEvent {
    pub planet: Planet,
    pub date: DateTime<Utc>,
    /// Geocentric ecliptic longitude at the station, degrees [0, 360).
    pub ecliptic_longitude: f64,
    pub station_type: StationType,
}

/// Configuration for the day-stepped event searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventSearchConfig {
    /// Scan step in days (default 1).
    pub step_days: f64,
    /// Search span as a multiple of the synodic period (default 1.5).
    pub span_factor: f64,
    /// Stop once the tracked quantity has moved this far past its
    /// best value, degrees (default 2).
    pub departure_deg: f64,
    /// Maximum bisection iterations for station refinement (default 50).
    pub max_iterations: u32,
    /// Station convergence threshold in days (default 1e-6, ~0.09 s).
    pub convergence_days: f64,
}

impl Default for EventSearchConfig {
    fn default() -> Self {
        Self {
            step_days: 1.0,
            span_factor: 1.5,
            departure_deg: 2.0,
            max_iterations: 50,
            convergence_days: 1e-6,
        }
    }
}

/// Smallest accepted scan step, days (~1.4 min).
pub const MIN_STEP_DAYS: f64 = 1e-3;

/// Upper bound on scan steps for any configuration.
pub const MAX_SCAN_STEPS: usize = 1_000_000;

impl EventSearchConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days < MIN_STEP_DAYS {
            return Err("step_days must be at least MIN_STEP_DAYS");
        }
        if !self.span_factor.is_finite() || self.span_factor <= 0.0 {
            return Err("span_factor must be positive");
        }
        if !self.departure_deg.is_finite() || self.departure_deg <= 0.0 {
            return Err("departure_deg must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }

    /// Number of scan steps covering `span_factor` synodic periods, at
    /// most [`MAX_SCAN_STEPS`].
    pub fn max_steps(&self, synodic_days: f64) -> usize {
        let steps = (self.span_factor * synodic_days / self.step_days).ceil();
        if steps >= MAX_SCAN_STEPS as f64 {
            MAX_SCAN_STEPS
        } else {
            steps as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = EventSearchConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.max_steps(115.88), 174);
    }

    #[test]
    fn rejects_bad_step() {
        let mut c = EventSearchConfig::default();
        c.step_days = 0.0;
        assert!(c.validate().is_err());
        c.step_days = f64::NAN;
        assert!(c.validate().is_err());
        c.step_days = 1e-12;
        assert!(c.validate().is_err());
        c.step_days = MIN_STEP_DAYS;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn scan_steps_are_bounded() {
        let c = EventSearchConfig::default();
        assert_eq!(c.max_steps(779.94), 1170);

        let wide = EventSearchConfig {
            span_factor: 1e9,
            ..EventSearchConfig::default()
        };
        assert!(wide.validate().is_ok());
        assert_eq!(wide.max_steps(779.94), MAX_SCAN_STEPS);
    }

    #[test]
    fn rejects_bad_span_and_departure() {
        let mut c = EventSearchConfig::default();
        c.span_factor = -1.0;
        assert!(c.validate().is_err());
        let mut c = EventSearchConfig::default();
        c.departure_deg = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_iterations() {
        let mut c = EventSearchConfig::default();
        c.max_iterations = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(PlanetaryEventKind::InferiorConjunction.to_string(), "inferior conjunction");
        assert_eq!(StationType::StationDirect.to_string(), "stationary direct");
        assert_eq!(ElongationSide::West.to_string(), "west");
    }

    #[test]
    fn side_from_sign() {
        assert_eq!(ElongationSide::from_relative_longitude(12.0), ElongationSide::East);
        assert_eq!(ElongationSide::from_relative_longitude(-0.5), ElongationSide::West);
    }
}
