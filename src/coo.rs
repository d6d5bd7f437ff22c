//! Coordinate (COO) sparse matrix storage

use num_complex::Complex64;
use num_traits::Zero;

use crate::bounds::check_position;
use crate::error::{Error, Result};
use crate::matrix::{MatrixStorage, Repr};

/// COO matrix: parallel (value, row, col) triplets in no particular order
///
/// Duplicate (row, col) pairs are allowed and are summed when the matrix
/// value is read back.
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix {
    pub(crate) values: Vec<Complex64>,
    pub(crate) row_indices: Vec<usize>,
    pub(crate) col_indices: Vec<usize>,
    pub(crate) shape: [usize; 2],
}

impl CooMatrix {
    /// Create a COO matrix from triplet buffers
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the three buffers have different lengths
    /// - any stored index is out of bounds for `shape`
    pub fn new(
        values: Vec<Complex64>,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let nnz = values.len();
        if row_indices.len() != nnz || col_indices.len() != nnz {
            return Err(Error::shape_mismatch(
                &[nnz, nnz],
                &[row_indices.len(), col_indices.len()],
            ));
        }
        for (&r, &c) in row_indices.iter().zip(&col_indices) {
            if r >= shape[0] {
                return Err(Error::IndexOutOfBounds {
                    index: r,
                    size: shape[0],
                });
            }
            if c >= shape[1] {
                return Err(Error::IndexOutOfBounds {
                    index: c,
                    size: shape[1],
                });
            }
        }
        Ok(Self {
            values,
            row_indices,
            col_indices,
            shape,
        })
    }

    /// Create a matrix with a single nonzero entry
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `position` falls outside `shape`.
    pub fn one_element(
        shape: [usize; 2],
        position: [usize; 2],
        value: Complex64,
    ) -> Result<Self> {
        check_position(shape, position)?;
        Ok(Self {
            values: vec![value],
            row_indices: vec![position[0]],
            col_indices: vec![position[1]],
            shape,
        })
    }

    /// Returns the number of stored triplets
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the stored values
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Returns the stored row indices
    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    /// Returns the stored column indices
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }
}

impl MatrixStorage for CooMatrix {
    fn repr(&self) -> Repr {
        Repr::Coo
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Complex64 {
        debug_assert!(row < self.nrows() && col < self.ncols());
        // Triplets are unordered and may repeat; duplicates sum.
        self.values
            .iter()
            .zip(self.row_indices.iter().zip(&self.col_indices))
            .filter(|(_, (&r, &c))| r == row && c == col)
            .fold(Complex64::zero(), |acc, (&v, _)| acc + v)
    }
}
