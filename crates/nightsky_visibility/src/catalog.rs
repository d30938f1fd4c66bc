//! Catalog records and coordinate decoding.
//!
//! Catalog files mix coordinate encodings: RA as hours (`5.588`), as
//! degrees (`83.82`) or as text (`"05h 35m 17.3s"`), Dec as degrees or
//! text. A numeric RA below 24 is taken to be hours.

use nightsky_frames::{
    CoordinateKind, EquatorialPosition, ParseCoordinateError, try_parse_coordinate,
};
use nightsky_time::normalize_angle;
use serde::{Deserialize, Serialize};

/// A coordinate as it appears in a catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl From<f64> for CoordinateValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for CoordinateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A deep-sky catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogObject {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    pub ra: CoordinateValue,
    pub dec: CoordinateValue,
    /// Visual magnitude.
    pub magnitude: f64,
    /// Major-axis apparent size, arcminutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_arcmin: Option<f64>,
}

impl CatalogObject {
    pub fn new(
        id: impl Into<String>,
        ra: impl Into<CoordinateValue>,
        dec: impl Into<CoordinateValue>,
        magnitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            object_type: None,
            ra: ra.into(),
            dec: dec.into(),
            magnitude,
            size_arcmin: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size_arcmin: f64) -> Self {
        self.size_arcmin = Some(size_arcmin);
        self
    }

    /// Decode RA/Dec to degrees.
    pub fn equatorial(&self) -> Result<EquatorialPosition, ParseCoordinateError> {
        Ok(EquatorialPosition {
            ra: decode_ra(&self.ra)?,
            dec: decode_dec(&self.dec)?,
        })
    }
}

/// RA in degrees: numbers below 24 are hours, larger numbers degrees.
pub fn decode_ra(value: &CoordinateValue) -> Result<f64, ParseCoordinateError> {
    match value {
        CoordinateValue::Number(v) if !v.is_finite() || *v < 0.0 => {
            Err(ParseCoordinateError::OutOfRange {
                kind: CoordinateKind::Ra,
                input: v.to_string(),
            })
        }
        CoordinateValue::Number(hours) if *hours < 24.0 => Ok(hours * 15.0),
        CoordinateValue::Number(deg) => Ok(normalize_angle(*deg)),
        CoordinateValue::Text(s) => try_parse_coordinate(s, CoordinateKind::Ra),
    }
}

/// Dec in degrees.
pub fn decode_dec(value: &CoordinateValue) -> Result<f64, ParseCoordinateError> {
    match value {
        CoordinateValue::Number(v) if v.is_finite() && (-90.0..=90.0).contains(v) => Ok(*v),
        CoordinateValue::Number(v) => Err(ParseCoordinateError::OutOfRange {
            kind: CoordinateKind::Dec,
            input: v.to_string(),
        }),
        CoordinateValue::Text(s) => try_parse_coordinate(s, CoordinateKind::Dec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ra_below_24_is_hours() {
        assert_eq!(decode_ra(&CoordinateValue::Number(5.5)), Ok(82.5));
        assert_eq!(decode_ra(&CoordinateValue::Number(83.0)), Ok(83.0));
        assert!(decode_ra(&CoordinateValue::Number(-1.0)).is_err());
    }

    #[test]
    fn text_coordinates_are_parsed() {
        let o = CatalogObject::new("M42", "05h 35m 17.3s", "-05° 23' 28\"", 4.0);
        let eq = o.equatorial().unwrap();
        assert!((eq.ra - 83.822_083).abs() < 1e-5);
        assert!((eq.dec + 5.391_111).abs() < 1e-5);
    }

    #[test]
    fn bad_text_is_an_error() {
        let o = CatalogObject::new("X", "nowhere", 10.0, 9.0);
        assert!(o.equatorial().is_err());
        assert!(decode_dec(&CoordinateValue::Number(91.0)).is_err());
    }

    #[test]
    fn deserializes_mixed_records() {
        let json = r#"[
            {"id": "M31", "name": "Andromeda Galaxy", "type": "galaxy",
             "ra": 0.7123, "dec": 41.269, "magnitude": 3.4, "size_arcmin": 178.0},
            {"id": "M45", "ra": "03h 47m 24s", "dec": "+24° 07' 00\"", "magnitude": 1.6}
        ]"#;
        let objs: Vec<CatalogObject> = serde_json::from_str(json).unwrap();
        assert_eq!(objs.len(), 2);
        assert_eq!(objs[0].object_type.as_deref(), Some("galaxy"));
        assert_eq!(objs[0].ra, CoordinateValue::Number(0.7123));
        assert_eq!(objs[1].ra, CoordinateValue::Text("03h 47m 24s".into()));
        assert!(objs[1].size_arcmin.is_none());
        assert!((objs[1].equatorial().unwrap().ra - 56.85).abs() < 1e-9);
    }
}
