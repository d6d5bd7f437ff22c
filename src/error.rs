//! Error types for matforge

use crate::matrix::Repr;
use thiserror::Error;

/// Result type alias using matforge's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing a matrix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested entry position falls outside the matrix shape
    #[error("Position of the element out of bounds: {position:?} in {shape:?}")]
    OutOfBounds {
        /// Matrix shape [nrows, ncols]
        shape: [usize; 2],
        /// Requested position [row, col]
        position: [usize; 2],
    },

    /// No constructor registered for the requested representation
    #[error("No '{op}' constructor registered for representation {repr}")]
    UnsupportedRepresentation {
        /// The dispatched operation name
        op: &'static str,
        /// The requested representation
        repr: Repr,
    },

    /// Registration attempted after the registry was sealed by a dispatch
    #[error("Registry for '{op}' is sealed; cannot register {repr}")]
    LateRegistration {
        /// The dispatched operation name
        op: &'static str,
        /// The representation being registered
        repr: Repr,
    },

    /// Diagonal offset outside the valid band range for the shape
    #[error("Diagonal offset {offset} out of range for shape {shape:?}")]
    OffsetOutOfRange {
        /// The invalid offset
        offset: isize,
        /// Matrix shape [nrows, ncols]
        shape: [usize; 2],
    },

    /// Diagonal does not fit its band exactly
    #[error("Diagonal at offset {offset} has {got} elements, expected {expected}")]
    DiagonalLength {
        /// Offset of the misfitting diagonal
        offset: isize,
        /// Exact number of elements the band holds
        expected: usize,
        /// Number of elements supplied
        got: usize,
    },

    /// Buffer length mismatch in a from-parts constructor
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected lengths
        expected: Vec<usize>,
        /// Actual lengths
        got: Vec<usize>,
    },

    /// Stored index out of bounds in a from-parts constructor
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to a constructor
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an out-of-bounds error
    pub fn out_of_bounds(shape: [usize; 2], position: [usize; 2]) -> Self {
        Self::OutOfBounds { shape, position }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
