//! Diagonal-offset (DIA) matrix storage

use num_complex::Complex64;
use num_traits::Zero;

use crate::bounds::check_position;
use crate::diag::{band_len, DiagSpec};
use crate::error::{Error, Result};
use crate::matrix::{MatrixStorage, Repr};

/// DIA matrix: one value row per stored diagonal, plus an offsets array
///
/// The value buffer has shape (num_diags, ncols), row-major. The diagonal
/// with offset `o` occupies matrix cells `(i, i + o)`; its value for matrix
/// column `c` is stored at buffer column `c` directly, so buffer cells
/// outside the diagonal's valid column range are padding and never read as
/// matrix values. Offsets are unique: 0 is the main diagonal, positive above,
/// negative below.
#[derive(Debug, Clone, PartialEq)]
pub struct DiaMatrix {
    pub(crate) data: Vec<Complex64>,
    pub(crate) offsets: Vec<isize>,
    pub(crate) shape: [usize; 2],
}

impl DiaMatrix {
    /// Create a DIA matrix from a (num_diags, ncols) buffer and offsets
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `data.len() != offsets.len() * ncols`
    /// - any offset lies outside the open interval (-nrows, ncols)
    /// - offsets repeat
    pub fn new(data: Vec<Complex64>, offsets: Vec<isize>, shape: [usize; 2]) -> Result<Self> {
        if data.len() != offsets.len() * shape[1] {
            return Err(Error::shape_mismatch(
                &[offsets.len() * shape[1]],
                &[data.len()],
            ));
        }
        for (k, &off) in offsets.iter().enumerate() {
            if band_len(shape, off).is_none() {
                return Err(Error::OffsetOutOfRange { offset: off, shape });
            }
            if offsets[..k].contains(&off) {
                return Err(Error::invalid_argument(
                    "offsets",
                    format!("offset {} stored more than once", off),
                ));
            }
        }
        Ok(Self {
            data,
            offsets,
            shape,
        })
    }

    /// Create a matrix with a single nonzero entry
    ///
    /// The entry becomes a one-element diagonal with offset `col - row`,
    /// stored at absolute buffer column `col`.
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
        let mut data = vec![Complex64::zero(); shape[1]];
        data[col] = value;
        Ok(Self {
            data,
            offsets: vec![col as isize - row as isize],
            shape,
        })
    }

    /// Create a matrix from diagonals and their offsets
    ///
    /// With `shape` omitted the output is the smallest square matrix the
    /// diagonals fit exactly; with an explicit shape each diagonal must fill
    /// its band exactly. Diagonals sharing an offset are summed into one
    /// stored diagonal.
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
        let num_diags = spec.offsets().len();
        let mut data = vec![Complex64::zero(); num_diags * ncols];
        for (k, (off, _, band)) in spec.bands().enumerate() {
            let first_col = off.max(0) as usize;
            for (j, &v) in band.iter().enumerate() {
                data[k * ncols + first_col + j] = v;
            }
        }
        Self {
            data,
            offsets: spec.offsets().to_vec(),
            shape: spec.shape(),
        }
    }

    /// Returns the number of stored diagonals
    pub fn num_diags(&self) -> usize {
        self.offsets.len()
    }

    /// Returns the stored offsets
    pub fn offsets(&self) -> &[isize] {
        &self.offsets
    }

    /// Returns the (num_diags, ncols) value buffer, row-major
    pub fn data(&self) -> &[Complex64] {
        &self.data
    }

    /// Returns the value row for stored diagonal `k`
    ///
    /// # Panics
    ///
    /// Panics if `k >= num_diags` (only in debug mode).
    pub fn diagonal(&self, k: usize) -> &[Complex64] {
        debug_assert!(k < self.num_diags());
        &self.data[k * self.shape[1]..(k + 1) * self.shape[1]]
    }
}

impl MatrixStorage for DiaMatrix {
    fn repr(&self) -> Repr {
        Repr::Dia
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> Complex64 {
        debug_assert!(row < self.nrows() && col < self.ncols());
        let off = col as isize - row as isize;
        match self.offsets.iter().position(|&o| o == off) {
            // In-bounds cells on a stored diagonal are never padding.
            Some(k) => self.data[k * self.shape[1] + col],
            None => Complex64::zero(),
        }
    }
}
