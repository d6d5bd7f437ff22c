//! Compressed Sparse Row (CSR) matrix storage

use num_complex::Complex64;
use num_traits::Zero;

use crate::bounds::check_position;
use crate::diag::DiagSpec;
use crate::error::{Error, Result};
use crate::matrix::{MatrixStorage, Repr};

/// CSR matrix: row pointers + column indices + values
///
/// Row `i`'s stored entries are `values[row_ptrs[i]..row_ptrs[i + 1]]` with
/// matching `col_indices`. The constructors here always produce canonical
/// CSR: pointers non-decreasing from 0 to nnz, columns sorted within each
/// row.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    pub(crate) row_ptrs: Vec<usize>,
    pub(crate) col_indices: Vec<usize>,
    pub(crate) values: Vec<Complex64>,
    pub(crate) shape: [usize; 2],
}

impl CsrMatrix {
    /// Create a CSR matrix from structural buffers
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `row_ptrs.len() != nrows + 1`
    /// - `row_ptrs` does not run non-decreasing from 0 to `values.len()`
    /// - `col_indices` and `values` have different lengths
    /// - any stored column index is out of bounds
    pub fn new(
        row_ptrs: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<Complex64>,
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        let nnz = values.len();

        if row_ptrs.len() != nrows + 1 {
            return Err(Error::shape_mismatch(&[nrows + 1], &[row_ptrs.len()]));
        }
        if col_indices.len() != nnz {
            return Err(Error::shape_mismatch(&[nnz], &[col_indices.len()]));
        }
        if row_ptrs[0] != 0 || row_ptrs[nrows] != nnz {
            return Err(Error::invalid_argument(
                "row_ptrs",
                format!(
                    "must run from 0 to nnz ({}), got {} to {}",
                    nnz, row_ptrs[0], row_ptrs[nrows]
                ),
            ));
        }
        if row_ptrs.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::invalid_argument(
                "row_ptrs",
                "must be non-decreasing",
            ));
        }
        for &c in &col_indices {
            if c >= ncols {
                return Err(Error::IndexOutOfBounds {
                    index: c,
                    size: ncols,
                });
            }
        }

        Ok(Self {
            row_ptrs,
            col_indices,
            values,
            shape,
        })
    }

    /// Create an empty CSR matrix (no stored entries)
    pub fn empty(shape: [usize; 2]) -> Self {
        Self {
            row_ptrs: vec![0; shape[0] + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
            shape,
        }
    }

    /// Create a matrix with a single nonzero entry
    ///
    /// The row-pointer array is filled uniformly: 0 for every row up to and
    /// including the entry's row, 1 afterwards. First and last rows need no
    /// special casing.
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
        let [row, col] = position;
        let row_ptrs = (0..=shape[0]).map(|i| usize::from(i > row)).collect();
        Ok(Self {
            row_ptrs,
            col_indices: vec![col],
            values: vec![value],
            shape,
        })
    }

    /// Create a matrix from diagonals and their offsets
    ///
    /// With `shape` omitted the output is the smallest square matrix the
    /// diagonals fit exactly; with an explicit shape each diagonal must fill
    /// its band exactly. Diagonals sharing an offset are summed.
    pub fn diags(
        diagonals: &[&[Complex64]],
        offsets: &[isize],
        shape: Option<[usize; 2]>,
    ) -> Result<Self> {
        let spec = DiagSpec::new(diagonals, offsets, shape)?;
        Ok(Self::from_spec(&spec))
    }

    pub(crate) fn from_spec(spec: &DiagSpec) -> Self {
        let [nrows, _] = spec.shape();
        let nnz_upper: usize = spec.diagonals().iter().map(Vec::len).sum();

        let mut row_ptrs = Vec::with_capacity(nrows + 1);
        let mut col_indices = Vec::with_capacity(nnz_upper);
        let mut values = Vec::with_capacity(nnz_upper);

        // Bands are sorted by ascending offset, so walking them in order
        // yields ascending columns within each row.
        row_ptrs.push(0);
        for row in 0..nrows {
            for (off, first_row, band) in spec.bands() {
                if row >= first_row && row - first_row < band.len() {
                    col_indices.push((row as isize + off) as usize);
                    values.push(band[row - first_row]);
                }
            }
            row_ptrs.push(values.len());
        }

        Self {
            row_ptrs,
            col_indices,
            values,
            shape: spec.shape(),
        }
    }

    /// Returns the number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the row pointers (length nrows + 1)
    pub fn row_ptrs(&self) -> &[usize] {
        &self.row_ptrs
    }

    /// Returns the stored column indices
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Returns the stored values
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    /// Returns the number of stored entries in `row`
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows` (only in debug mode).
    pub fn row_nnz(&self, row: usize) -> usize {
        debug_assert!(row < self.nrows());
        self.row_ptrs[row + 1] - self.row_ptrs[row]
    }
}

impl MatrixStorage for CsrMatrix {
    fn repr(&self) -> Repr {
        Repr::Csr
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Complex64 {
        debug_assert!(row < self.nrows() && col < self.ncols());
        let start = self.row_ptrs[row];
        let end = self.row_ptrs[row + 1];
        for pos in start..end {
            if self.col_indices[pos] == col {
                return self.values[pos];
            }
        }
        Complex64::zero()
    }
}
