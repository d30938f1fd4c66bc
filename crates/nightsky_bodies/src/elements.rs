//! Keplerian elements of the major planets.
//!
//! Source: E. M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL), table 1, valid 1800–2050 AD. Angles in
//! degrees, `a` in AU, rates per Julian century from J2000.0. The Earth row
//! is the Earth–Moon barycentre.

use std::fmt::{Display, Formatter};

use nightsky_time::{julian_centuries, normalize_angle};
use serde::{Deserialize, Serialize};

/// Major planets with tabulated elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    /// Every tabulated planet, innermost first.
    pub const ALL: [Self; 8] = [
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    /// The seven planets observable from Earth.
    pub const OBSERVABLE: [Self; 7] = [
        Self::Mercury,
        Self::Venus,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Mean radius in km.
    pub const fn mean_radius_km(self) -> f64 {
        match self {
            Self::Mercury => 2439.7,
            Self::Venus => 6051.8,
            Self::Earth => 6371.0,
            Self::Mars => 3389.5,
            Self::Jupiter => 69_911.0,
            Self::Saturn => 58_232.0,
            Self::Uranus => 25_362.0,
            Self::Neptune => 24_622.0,
        }
    }

    /// Mean synodic period in days; `None` for Earth.
    pub const fn synodic_period_days(self) -> Option<f64> {
        match self {
            Self::Mercury => Some(115.88),
            Self::Venus => Some(583.92),
            Self::Earth => None,
            Self::Mars => Some(779.94),
            Self::Jupiter => Some(398.88),
            Self::Saturn => Some(378.09),
            Self::Uranus => Some(369.66),
            Self::Neptune => Some(367.49),
        }
    }

    /// Orbits inside Earth's orbit (`a < 1 AU`).
    pub fn is_inferior(self) -> bool {
        element_rows(self).0.a < 1.0
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Six Keplerian elements (or their per-century rates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis, AU.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination to the J2000 ecliptic, degrees.
    pub i: f64,
    /// Mean longitude, degrees.
    pub l: f64,
    /// Longitude of perihelion ϖ, degrees.
    pub long_peri: f64,
    /// Longitude of the ascending node Ω, degrees.
    pub long_node: f64,
}

impl OrbitalElements {
    const fn new(a: f64, e: f64, i: f64, l: f64, long_peri: f64, long_node: f64) -> Self {
        Self {
            a,
            e,
            i,
            l,
            long_peri,
            long_node,
        }
    }

    /// Argument of perihelion ω = ϖ − Ω.
    pub fn arg_perihelion(&self) -> f64 {
        self.long_peri - self.long_node
    }
}

const MERCURY: [OrbitalElements; 2] = [
    OrbitalElements::new(0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93),
    OrbitalElements::new(0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81),
];
const VENUS: [OrbitalElements; 2] = [
    OrbitalElements::new(0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55),
    OrbitalElements::new(0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18),
];
const EARTH: [OrbitalElements; 2] = [
    OrbitalElements::new(1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0),
    OrbitalElements::new(0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0),
];
const MARS: [OrbitalElements; 2] = [
    OrbitalElements::new(1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91),
    OrbitalElements::new(0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43),
];
const JUPITER: [OrbitalElements; 2] = [
    OrbitalElements::new(5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09),
    OrbitalElements::new(-0.000_116_07, -0.000_132_53, -0.001_837_14, 3034.746_127_75, 0.212_526_68, 0.204_691_06),
];
const SATURN: [OrbitalElements; 2] = [
    OrbitalElements::new(9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48),
    OrbitalElements::new(-0.001_250_60, -0.000_509_91, 0.001_936_09, 1222.493_622_01, -0.418_972_16, -0.288_677_94),
];
const URANUS: [OrbitalElements; 2] = [
    OrbitalElements::new(19.189_164_64, 0.047_257_44, 0.772_637_83, 313.238_104_51, 170.954_276_30, 74.016_925_03),
    OrbitalElements::new(-0.001_961_76, -0.000_043_97, -0.002_429_39, 428.482_027_85, 0.408_052_81, 0.042_405_89),
];
const NEPTUNE: [OrbitalElements; 2] = [
    OrbitalElements::new(30.069_922_76, 0.008_590_48, 1.770_043_47, -55.120_029_69, 44.964_762_27, 131.784_225_74),
    OrbitalElements::new(0.000_262_91, 0.000_051_05, 0.000_353_72, 218.459_453_25, -0.322_414_64, -0.005_086_64),
];

/// `(elements at J2000.0, rates per century)`.
fn element_rows(planet: Planet) -> (&'static OrbitalElements, &'static OrbitalElements) {
    let rows = match planet {
        Planet::Mercury => &MERCURY,
        Planet::Venus => &VENUS,
        Planet::Earth => &EARTH,
        Planet::Mars => &MARS,
        Planet::Jupiter => &JUPITER,
        Planet::Saturn => &SATURN,
        Planet::Uranus => &URANUS,
        Planet::Neptune => &NEPTUNE,
    };
    (&rows[0], &rows[1])
}

/// Osculating-style elements at `jd`: base + rate × centuries, L wrapped.
pub fn get_planet_elements(planet: Planet, jd: f64) -> OrbitalElements {
    let (base, rate) = element_rows(planet);
    let t = julian_centuries(jd);
    OrbitalElements {
        a: base.a + rate.a * t,
        e: base.e + rate.e * t,
        i: base.i + rate.i * t,
        l: normalize_angle(base.l + rate.l * t),
        long_peri: base.long_peri + rate.long_peri * t,
        long_node: base.long_node + rate.long_node * t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nightsky_time::J2000_JD;

    #[test]
    fn j2000_returns_base_row() {
        let e = get_planet_elements(Planet::Mars, J2000_JD);
        assert!((e.a - 1.523_710_34).abs() < 1e-12);
        // −4.55° wraps into [0, 360).
        assert!((e.l - 355.446_567_95).abs() < 1e-9, "L = {}", e.l);
    }

    #[test]
    fn rates_apply_per_century() {
        let e = get_planet_elements(Planet::Jupiter, J2000_JD + 36_525.0);
        assert!((e.a - (5.202_887 - 0.000_116_07)).abs() < 1e-12);
        assert!((e.i - (1.304_396_95 - 0.001_837_14)).abs() < 1e-12);
    }

    #[test]
    fn inferior_planets() {
        let inferior: Vec<_> = Planet::ALL.into_iter().filter(|p| p.is_inferior()).collect();
        assert_eq!(inferior, [Planet::Mercury, Planet::Venus]);
    }

    #[test]
    fn names_round_trip() {
        for p in Planet::ALL {
            assert_eq!(Planet::from_name(p.name()), Some(p));
        }
        assert_eq!(Planet::from_name("  JUPITER "), Some(Planet::Jupiter));
        assert_eq!(Planet::from_name("pluto"), None);
    }

    #[test]
    fn earth_has_no_synodic_period() {
        assert!(Planet::Earth.synodic_period_days().is_none());
        assert!(Planet::OBSERVABLE.iter().all(|p| p.synodic_period_days().is_some()));
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Planet::Saturn).unwrap(), r#""saturn""#);
    }
}
