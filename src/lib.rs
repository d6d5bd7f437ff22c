//! # matforge
//!
//! **Construct complex matrices in interchangeable storage representations.**
//!
//! matforge builds an R×C matrix of complex scalars from a sparse description
//! — a set of diagonals with offsets, or a single nonzero entry at a position
//! — in whichever storage layout the downstream algorithm wants. Every
//! representation encodes the identical entrywise value set.
//!
//! ## Representations
//!
//! - **Dense**: contiguous row-major buffer, every cell materialized
//! - **COO** (Coordinate): unordered (row, col, value) triplets
//! - **CSR** (Compressed Sparse Row): row pointers + column indices + values
//! - **DIA** (Diagonal-offset): per-diagonal value rows + offsets array
//!
//! ## Quick Start
//!
//! ```
//! use matforge::prelude::*;
//!
//! // Directly in a chosen representation...
//! let m = CsrMatrix::one_element([4, 4], [2, 3], Complex64::new(1.0, 0.0))?;
//! assert_eq!(m.row_ptrs(), &[0, 0, 0, 1, 1]);
//!
//! // ...or through dispatch, defaulting to dense.
//! let m = matforge::one_element([3, 3], [1, 1], Complex64::new(2.0, 0.0), None)?;
//! assert_eq!(m.get(1, 1), Complex64::new(2.0, 0.0));
//!
//! // Diagonal sets infer the smallest square shape that fits exactly.
//! let main = vec![Complex64::new(1.0, 0.0); 3];
//! let eye = matforge::diag(&[&main], &[0], None, Repr::Dia)?;
//! assert_eq!(eye.shape(), [3, 3]);
//! # Ok::<(), matforge::error::Error>(())
//! ```
//!
//! All constructors are pure and allocate fresh, exclusively-owned buffers;
//! failed validation leaves no partial output. The dispatch registries are
//! built once at first use and read-only afterwards, so every entry point is
//! safe to call from any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bounds;
pub mod coo;
pub mod csr;
pub mod dense;
pub mod dia;
pub mod diag;
pub mod dispatch;
pub mod error;
pub mod matrix;

pub use dispatch::{diag, one_element};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coo::CooMatrix;
    pub use crate::csr::CsrMatrix;
    pub use crate::dense::DenseMatrix;
    pub use crate::dia::DiaMatrix;
    pub use crate::dispatch::{diag, one_element, Dispatcher};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{Matrix, MatrixStorage, Repr};
    pub use num_complex::Complex64;
}
