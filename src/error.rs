//! Error type shared by the interpolation routines.

use thiserror::Error;

/// Reasons an interpolation call produces no result.
///
/// When any of these is returned, the output buffer must not be read;
/// it may be untouched or partially written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source grid or the query set is empty.
    #[error("source grid and query set must both be non-empty")]
    InvalidInputSize,

    /// Paired inputs (grid and samples, or queries and output) differ in length.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// The bracket located for a query has zero width,
    /// so the interpolation weight is undefined.
    #[error("zero-width bracket at sorted grid index {index}")]
    DegenerateInterval { index: usize },

    /// A source grid coordinate is NaN.
    #[error("NaN grid coordinate at index {index}")]
    NanCoordinate { index: usize },

    /// A query coordinate is NaN and cannot be ranked against the grid.
    #[error("NaN query coordinate at index {index}")]
    NanQuery { index: usize },

    /// A sample value cannot be represented in the output float type.
    #[error("unrepresentable number")]
    Unrepresentable,
}
