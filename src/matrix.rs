//! Representation tags and the uniform matrix value returned by dispatch

use num_complex::Complex64;

use crate::coo::CooMatrix;
use crate::csr::CsrMatrix;
use crate::dense::DenseMatrix;
use crate::dia::DiaMatrix;

/// Matrix storage representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    /// Dense row-major
    ///
    /// Contiguous nrows * ncols buffer, every cell materialized.
    /// Best for: dense linear algebra, direct indexing
    Dense,

    /// Coordinate format (COO)
    ///
    /// Stores explicit (row, col, value) triplets in no particular order.
    /// Best for: construction, format conversion
    Coo,

    /// Compressed Sparse Row (CSR)
    ///
    /// Row pointers + column indices + values.
    /// Best for: row slicing, SpMV, sparse iterative methods
    Csr,

    /// Diagonal-offset (DIA)
    ///
    /// Per-diagonal value rows + offsets array.
    /// Best for: banded matrices and banded solvers
    Dia,
}

impl Repr {
    /// Returns the representation name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Repr::Dense => "Dense",
            Repr::Coo => "COO",
            Repr::Csr => "CSR",
            Repr::Dia => "DIA",
        }
    }
}

impl std::fmt::Display for Repr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for matrix storage backends
///
/// Every representation stores the same abstract nrows x ncols matrix of
/// complex scalars; `get` reads the entrywise value regardless of layout.
pub trait MatrixStorage {
    /// Returns the representation tag
    fn repr(&self) -> Repr;

    /// Returns the shape as [nrows, ncols]
    fn shape(&self) -> [usize; 2];

    /// Returns the number of rows
    #[inline]
    fn nrows(&self) -> usize {
        self.shape()[0]
    }

    /// Returns the number of columns
    #[inline]
    fn ncols(&self) -> usize {
        self.shape()[1]
    }

    /// Returns the matrix value at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds (only in debug mode).
    fn get(&self, row: usize, col: usize) -> Complex64;
}

/// A constructed matrix in whichever representation the caller requested
///
/// This is the uniform return type of the dispatch entry points; callers that
/// asked for a specific representation can destructure or use the `into_*`
/// accessors.
#[derive(Debug, Clone)]
pub enum Matrix {
    /// Dense row-major storage
    Dense(DenseMatrix),
    /// Coordinate triplet storage
    Coo(CooMatrix),
    /// Compressed-row storage
    Csr(CsrMatrix),
    /// Diagonal-offset storage
    Dia(DiaMatrix),
}

impl Matrix {
    /// Returns the dense storage, if this matrix holds one
    pub fn into_dense(self) -> Option<DenseMatrix> {
        match self {
            Matrix::Dense(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the COO storage, if this matrix holds one
    pub fn into_coo(self) -> Option<CooMatrix> {
        match self {
            Matrix::Coo(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the CSR storage, if this matrix holds one
    pub fn into_csr(self) -> Option<CsrMatrix> {
        match self {
            Matrix::Csr(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the DIA storage, if this matrix holds one
    pub fn into_dia(self) -> Option<DiaMatrix> {
        match self {
            Matrix::Dia(m) => Some(m),
            _ => None,
        }
    }
}

impl MatrixStorage for Matrix {
    fn repr(&self) -> Repr {
        match self {
            Matrix::Dense(m) => m.repr(),
            Matrix::Coo(m) => m.repr(),
            Matrix::Csr(m) => m.repr(),
            Matrix::Dia(m) => m.repr(),
        }
    }

    fn shape(&self) -> [usize; 2] {
        match self {
            Matrix::Dense(m) => m.shape(),
            Matrix::Coo(m) => m.shape(),
            Matrix::Csr(m) => m.shape(),
            Matrix::Dia(m) => m.shape(),
        }
    }

    fn get(&self, row: usize, col: usize) -> Complex64 {
        match self {
            Matrix::Dense(m) => m.get(row, col),
            Matrix::Coo(m) => m.get(row, col),
            Matrix::Csr(m) => m.get(row, col),
            Matrix::Dia(m) => m.get(row, col),
        }
    }
}
