//! Integration tests for diagonal construction
//!
//! The `diag` backends share one contract: an exact fit of every diagonal in
//! the output shape, duplicate offsets summed, and the smallest square shape
//! inferred when none is given.

use matforge::prelude::*;

fn band(values: &[f64]) -> Vec<Complex64> {
    values.iter().map(|&re| Complex64::new(re, 0.0)).collect()
}

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

// ============================================================================
// Shape inference
// ============================================================================

#[test]
fn test_identity_like_from_main_diagonal() {
    let main = band(&[1.0, 1.0, 1.0]);
    for repr in [Repr::Dense, Repr::Csr, Repr::Dia] {
        let m = matforge::diag(&[&main], &[0], None, repr).unwrap();
        assert_eq!(m.shape(), [3, 3], "{} inferred wrong shape", repr);
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { c(1.0) } else { c(0.0) };
                assert_eq!(m.get(row, col), expected);
            }
        }
    }
}

#[test]
fn test_offset_diagonal_grows_inferred_shape() {
    // Two elements at offset 2 need a 4x4 square to fit exactly.
    let upper = band(&[1.0, 2.0]);
    let m = matforge::diag(&[&upper], &[2], None, Repr::Dense).unwrap();
    assert_eq!(m.shape(), [4, 4]);
    assert_eq!(m.get(0, 2), c(1.0));
    assert_eq!(m.get(1, 3), c(2.0));
}

#[test]
fn test_inconsistent_fit_rejected() {
    let main = band(&[1.0, 1.0, 1.0]);
    let upper = band(&[2.0]);
    for repr in [Repr::Dense, Repr::Csr, Repr::Dia] {
        let err = matforge::diag(&[&main, &upper], &[0, 1], None, repr).unwrap_err();
        assert_eq!(
            err,
            Error::DiagonalLength {
                offset: 1,
                expected: 2,
                got: 1,
            }
        );
    }
}

// ============================================================================
// Explicit shapes
// ============================================================================

#[test]
fn test_rectangular_explicit_shape() {
    let upper = band(&[7.0, 8.0]);
    for repr in [Repr::Dense, Repr::Csr, Repr::Dia] {
        let m = matforge::diag(&[&upper], &[2], Some([2, 4]), repr).unwrap();
        assert_eq!(m.shape(), [2, 4]);
        assert_eq!(m.get(0, 2), c(7.0));
        assert_eq!(m.get(1, 3), c(8.0));
        assert_eq!(m.get(0, 0), c(0.0));
        assert_eq!(m.get(1, 0), c(0.0));
    }
}

#[test]
fn test_explicit_shape_misfit_rejected() {
    let main = band(&[1.0, 1.0]);
    let err = matforge::diag(&[&main], &[0], Some([3, 3]), Repr::Csr).unwrap_err();
    assert_eq!(
        err,
        Error::DiagonalLength {
            offset: 0,
            expected: 3,
            got: 2,
        }
    );
}

#[test]
fn test_offset_out_of_range_rejected() {
    let one = band(&[1.0]);
    let err = matforge::diag(&[&one], &[4], Some([3, 3]), Repr::Dia).unwrap_err();
    assert_eq!(
        err,
        Error::OffsetOutOfRange {
            offset: 4,
            shape: [3, 3],
        }
    );
}

// ============================================================================
// Band combinations
// ============================================================================

#[test]
fn test_tridiagonal_equivalence() {
    let main = band(&[2.0, 2.0, 2.0, 2.0]);
    let off = band(&[-1.0, -1.0, -1.0]);
    let diagonals: [&[Complex64]; 3] = [&off, &main, &off];
    let offsets = [-1, 0, 1];

    let dense = matforge::diag(&diagonals, &offsets, None, Repr::Dense).unwrap();
    let csr = matforge::diag(&diagonals, &offsets, None, Repr::Csr).unwrap();
    let dia = matforge::diag(&diagonals, &offsets, None, Repr::Dia).unwrap();

    assert_eq!(dense.shape(), [4, 4]);
    for row in 0..4 {
        for col in 0..4 {
            let expected = dense.get(row, col);
            assert_eq!(csr.get(row, col), expected, "CSR at ({}, {})", row, col);
            assert_eq!(dia.get(row, col), expected, "DIA at ({}, {})", row, col);
        }
    }
}

#[test]
fn test_duplicate_offsets_summed() {
    let a = band(&[1.0, 2.0]);
    let b = band(&[10.0, 20.0]);
    for repr in [Repr::Dense, Repr::Csr, Repr::Dia] {
        let m = matforge::diag(&[&a, &b], &[0, 0], None, repr).unwrap();
        assert_eq!(m.shape(), [2, 2]);
        assert_eq!(m.get(0, 0), c(11.0));
        assert_eq!(m.get(1, 1), c(22.0));
    }
}

#[test]
fn test_dia_stores_one_row_per_unique_offset() {
    let a = band(&[1.0, 2.0]);
    let b = band(&[10.0, 20.0]);
    let m = matforge::diag(&[&a, &b], &[0, 0], None, Repr::Dia)
        .unwrap()
        .into_dia()
        .unwrap();
    assert_eq!(m.num_diags(), 1);
    assert_eq!(m.offsets(), &[0]);
}

#[test]
fn test_csr_output_is_canonical() {
    let main = band(&[1.0, 1.0, 1.0]);
    let upper = band(&[5.0, 5.0]);
    let lower = band(&[3.0, 3.0]);
    let m = matforge::diag(&[&upper, &lower, &main], &[1, -1, 0], None, Repr::Csr)
        .unwrap()
        .into_csr()
        .unwrap();

    let p = m.row_ptrs();
    assert_eq!(p[0], 0);
    assert_eq!(p[3], m.nnz());
    assert!(p.windows(2).all(|w| w[0] <= w[1]));
    for row in 0..3 {
        let cols = &m.col_indices()[p[row]..p[row + 1]];
        assert!(cols.windows(2).all(|w| w[0] < w[1]), "row {} unsorted", row);
    }
}

#[test]
fn test_no_diagonals_rejected() {
    let err = matforge::diag(&[], &[], None, Repr::Dense).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_offsets_length_mismatch_rejected() {
    let main = band(&[1.0]);
    let err = matforge::diag(&[&main], &[0, 1], None, Repr::Dense).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}
