//! Error type for location inputs.

use thiserror::Error;

/// Why a location or direction string was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LocationError {
    #[error("empty location string")]
    Empty,
    /// Fewer than two fields, or a field that is not a number.
    #[error("unrecognized location: {0:?}")]
    Unrecognized(String),
    #[error("latitude {lat} or longitude {lon} out of range")]
    OutOfRange { lat: f64, lon: f64 },
    #[error("unknown compass direction: {0:?}")]
    UnknownDirection(String),
}
