//! Shared normalization of diagonal-set input
//!
//! Every `diags` backend accepts the same description: a list of diagonals,
//! their offsets, and an optional explicit shape. This module turns that
//! description into one canonical band set so the backends only differ in how
//! they lay the bands out:
//!
//! - offsets and diagonals must pair up one-to-one;
//! - with no shape, the output is the smallest square matrix every diagonal
//!   fits exactly (length + |offset| must agree across diagonals);
//! - with an explicit shape, every diagonal must fill its band exactly, no
//!   extra or missing elements;
//! - diagonals sharing an offset are summed elementwise;
//! - bands come out sorted by ascending offset, which gives CSR backends
//!   sorted columns within each row for free.

use num_complex::Complex64;

use crate::error::{Error, Result};

/// A validated, canonical set of diagonal bands
///
/// Offsets are unique and ascending; `diagonals[k]` holds exactly the band
/// length for `offsets[k]` in `shape`.
#[derive(Debug, Clone)]
pub struct DiagSpec {
    pub(crate) offsets: Vec<isize>,
    pub(crate) diagonals: Vec<Vec<Complex64>>,
    pub(crate) shape: [usize; 2],
}

impl DiagSpec {
    /// Validate and canonicalize a diagonal-set description
    pub fn new(
        diagonals: &[&[Complex64]],
        offsets: &[isize],
        shape: Option<[usize; 2]>,
    ) -> Result<Self> {
        if diagonals.is_empty() {
            return Err(Error::invalid_argument(
                "diagonals",
                "at least one diagonal is required",
            ));
        }
        if offsets.len() != diagonals.len() {
            return Err(Error::shape_mismatch(&[diagonals.len()], &[offsets.len()]));
        }

        let shape = match shape {
            Some(shape) => {
                if shape[0] == 0 || shape[1] == 0 {
                    return Err(Error::invalid_argument(
                        "shape",
                        format!("dimensions must be positive, got {:?}", shape),
                    ));
                }
                shape
            }
            None => {
                // Smallest square that fits every diagonal exactly: each
                // diagonal of offset o needs n = len + |o| rows, and the fit
                // is exact only when all diagonals agree on n.
                let n = diagonals
                    .iter()
                    .zip(offsets)
                    .map(|(diag, &off)| diag.len() + off.unsigned_abs())
                    .max()
                    .unwrap_or(0);
                [n, n]
            }
        };

        for (diag, &off) in diagonals.iter().zip(offsets) {
            let expected = band_len(shape, off)
                .ok_or(Error::OffsetOutOfRange { offset: off, shape })?;
            if diag.len() != expected {
                return Err(Error::DiagonalLength {
                    offset: off,
                    expected,
                    got: diag.len(),
                });
            }
        }

        // Sum duplicate offsets, then order bands by ascending offset.
        let mut bands: Vec<(isize, Vec<Complex64>)> = Vec::with_capacity(diagonals.len());
        for (diag, &off) in diagonals.iter().zip(offsets) {
            match bands.iter_mut().find(|(o, _)| *o == off) {
                Some((_, acc)) => {
                    for (a, &v) in acc.iter_mut().zip(diag.iter()) {
                        *a += v;
                    }
                }
                None => bands.push((off, diag.to_vec())),
            }
        }
        bands.sort_by_key(|(o, _)| *o);

        let (offsets, diagonals) = bands.into_iter().unzip();
        Ok(Self {
            offsets,
            diagonals,
            shape,
        })
    }

    /// Returns the output shape as [nrows, ncols]
    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    /// Returns the unique offsets, ascending
    pub fn offsets(&self) -> &[isize] {
        &self.offsets
    }

    /// Returns the canonical bands, matching `offsets` order
    pub fn diagonals(&self) -> &[Vec<Complex64>] {
        &self.diagonals
    }

    /// Iterate bands as (offset, first row, values)
    ///
    /// A band with offset `o` covers cells `(row, row + o)`; the first covered
    /// row is `max(-o, 0)` and `values[j]` sits at row `first_row + j`.
    pub(crate) fn bands(&self) -> impl Iterator<Item = (isize, usize, &[Complex64])> {
        self.offsets
            .iter()
            .zip(&self.diagonals)
            .map(|(&off, diag)| (off, (-off).max(0) as usize, diag.as_slice()))
    }
}

/// Number of matrix cells on the diagonal with `offset` in `shape`
///
/// Returns `None` when the offset lies entirely outside the matrix, i.e.
/// outside the open interval (-nrows, ncols).
pub(crate) fn band_len(shape: [usize; 2], offset: isize) -> Option<usize> {
    let [nrows, ncols] = shape;
    if offset >= 0 {
        let off = offset as usize;
        if off >= ncols {
            return None;
        }
        Some(nrows.min(ncols - off))
    } else {
        let off = offset.unsigned_abs();
        if off >= nrows {
            return None;
        }
        Some(ncols.min(nrows - off))
    }
}
