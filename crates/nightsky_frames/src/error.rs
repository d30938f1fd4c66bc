//! Error types for coordinate parsing.

use thiserror::Error;

use crate::sexagesimal::CoordinateKind;

/// Why a coordinate string could not be turned into degrees.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseCoordinateError {
    /// Input was empty or whitespace only.
    #[error("empty coordinate string")]
    Empty,
    /// No accepted decimal or sexagesimal pattern matched.
    #[error("unrecognized {kind} coordinate: {input:?}")]
    Unrecognized { kind: CoordinateKind, input: String },
    /// A pattern matched but a field is outside its valid range.
    #[error("{kind} coordinate out of range: {input:?}")]
    OutOfRange { kind: CoordinateKind, input: String },
}
