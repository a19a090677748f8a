//! Error types for contourmatch.

use thiserror::Error;

/// Result alias for contourmatch operations.
pub type ContourMatchResult<T> = std::result::Result<T, ContourMatchError>;

/// Errors that can occur when building contours, templates, or matchers.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ContourMatchError {
    /// A polygon has too few points to form a closed contour.
    #[error("too few points: got {got}, need at least {min}")]
    TooFewPoints { got: usize, min: usize },
    /// A requested contour length is not usable.
    #[error("invalid {context} length: {len}")]
    InvalidLength { len: usize, context: &'static str },
    /// The contour carries no energy and cannot be normalized.
    #[error("degenerate contour: {reason}")]
    DegenerateContour { reason: &'static str },
    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: &'static str },
    /// Index is outside the valid range.
    #[error("index out of bounds: {context} {index} (len {len})")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        context: &'static str,
    },
}
