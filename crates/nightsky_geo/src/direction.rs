//! Eight-point compass sectors.
//!
//! Each sector is 90° wide and centered on its direction, so neighbouring
//! sectors overlap by 45°. North spans −45°..45°.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nightsky_time::normalize_angle;
use serde::{Deserialize, Serialize};

use crate::error::LocationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardinalDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CardinalDirection {
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Center azimuth, degrees.
    pub fn center_deg(self) -> f64 {
        self as u8 as f64 * 45.0
    }

    /// Azimuth range `(min, max)` of the sector. North is `(-45, 45)`.
    pub fn azimuth_range(self) -> (f64, f64) {
        let c = self.center_deg();
        (c - 45.0, c + 45.0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::N => "North",
            Self::NE => "Northeast",
            Self::E => "East",
            Self::SE => "Southeast",
            Self::S => "South",
            Self::SW => "Southwest",
            Self::W => "West",
            Self::NW => "Northwest",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Nearest compass point to an azimuth.
    pub fn from_azimuth(azimuth_deg: f64) -> Self {
        let index = (normalize_angle(azimuth_deg) / 45.0).round() as usize % 8;
        Self::ALL[index]
    }

    /// Whether `azimuth_deg` falls inside this sector.
    pub fn contains(self, azimuth_deg: f64) -> bool {
        let offset = normalize_angle(azimuth_deg - self.center_deg());
        offset <= 45.0 || offset >= 315.0
    }
}

impl Display for CardinalDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.abbreviation())
    }
}

impl FromStr for CardinalDirection {
    type Err = LocationError;

    /// Accepts abbreviations and full labels, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.abbreviation().eq_ignore_ascii_case(t) || d.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| LocationError::UnknownDirection(s.to_string()))
    }
}
