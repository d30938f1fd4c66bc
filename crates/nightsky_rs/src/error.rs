use nightsky_frames::ParseCoordinateError;
use nightsky_geo::LocationError;
use nightsky_search::SearchError;
use thiserror::Error;

/// Errors surfaced by the convenience layer.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NightskyError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Coordinate(#[from] ParseCoordinateError),
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Not RFC 3339, `YYYY-MM-DDThh:mm:ss` or `YYYY-MM-DD`.
    #[error("invalid date {0:?}: expected RFC 3339, YYYY-MM-DDThh:mm:ss or YYYY-MM-DD")]
    InvalidDate(String),
    #[error("unknown planet: {0:?}")]
    UnknownPlanet(String),
    #[error("Bortle class {0} out of range 1-9")]
    InvalidBortleClass(u8),
}
