//! Errors raised while building or querying tables.

use thiserror::Error;

use crate::two_dim::Interpolant2D;

/// Error type shared by every table in the crate.
#[derive(Debug, Error)]
pub enum TableError {
    /// An interpolation rule name that is not recognized for this table kind
    #[error("invalid interpolation method: {0:?}")]
    UnknownInterpolant(String),

    /// Not enough samples for the chosen rule
    #[error("need at least {need} samples, got {got}")]
    TooFewPoints { need: usize, got: usize },

    /// Paired arrays do not have matching lengths
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Arguments must be non-decreasing
    #[error("arguments must be ascending, but entry {index} is smaller than its predecessor")]
    NotAscending { index: usize },

    /// Arguments must not contain NaN or infinities
    #[error("argument {index} is not finite")]
    NotFinite { index: usize },

    /// First and last argument coincide, so the axis has zero width
    #[error("axis has zero width")]
    DegenerateAxis,

    /// Zero pivot while solving the spline system
    #[error("spline system is singular at row {row}")]
    SingularSystem { row: usize },

    /// Gradient requested from a piecewise-constant 2D table
    #[error("gradient not implemented for {0} interp")]
    GradientUnsupported(Interpolant2D),

    /// Entry added to, or finalize called on, an already-finalized builder
    #[error("table builder is already finalized")]
    AlreadyFinalized,

    /// Builder queried before finalize
    #[error("table builder is not finalized")]
    NotFinalized,

    /// A number could not be converted between the float and index types
    #[error("unrepresentable number")]
    Unrepresentable,

    /// Textual form could not be written or parsed
    #[error("serialization failed: {0}")]
    Serialization(String),
}
