//! Dense row-major matrix storage

use num_complex::Complex64;
use num_traits::Zero;

use crate::bounds::check_position;
use crate::diag::DiagSpec;
use crate::error::{Error, Result};
use crate::matrix::{MatrixStorage, Repr};

/// Dense matrix: every cell materialized in one row-major buffer
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    pub(crate) data: Vec<Complex64>,
    pub(crate) shape: [usize; 2],
}

impl DenseMatrix {
    /// Create an all-zero matrix
    pub fn zeros(shape: [usize; 2]) -> Self {
        Self {
            data: vec![Complex64::zero(); shape[0] * shape[1]],
            shape,
        }
    }

    /// Create a dense matrix from a row-major buffer
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `data.len() != nrows * ncols`.
    pub fn from_vec(data: Vec<Complex64>, shape: [usize; 2]) -> Result<Self> {
        if data.len() != shape[0] * shape[1] {
            return Err(Error::shape_mismatch(&[shape[0] * shape[1]], &[data.len()]));
        }
        Ok(Self { data, shape })
    }

    /// Create a matrix with a single nonzero entry
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if `position` falls outside `shape`; nothing is
    /// allocated in that case.
    pub fn one_element(
        shape: [usize; 2],
        position: [usize; 2],
        value: Complex64,
    ) -> Result<Self> {
        check_position(shape, position)?;
        let mut out = Self::zeros(shape);
        out.data[position[0] * shape[1] + position[1]] = value;
        Ok(out)
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
        let [_, ncols] = spec.shape();
        let mut out = Self::zeros(spec.shape());
        for (off, first_row, values) in spec.bands() {
            for (j, &v) in values.iter().enumerate() {
                let row = first_row + j;
                let col = (row as isize + off) as usize;
                out.data[row * ncols + col] = v;
            }
        }
        out
    }

    /// Returns the row-major value buffer
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Returns the row-major value buffer mutably
    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }
}

impl MatrixStorage for DenseMatrix {
    fn repr(&self) -> Repr {
        Repr::Dense
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Complex64 {
        debug_assert!(row < self.nrows() && col < self.ncols());
        self.data[row * self.shape[1] + col]
    }
}
