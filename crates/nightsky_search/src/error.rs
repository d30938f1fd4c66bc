//! Error type for planetary event searches.

use thiserror::Error;

/// Errors from event search.
///
/// "No event in the search window" and "event has no meaning for this
/// planet" are not errors; those return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A search parameter is out of range.
    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
}
