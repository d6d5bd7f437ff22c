//! Integration tests for representation dispatch

use matforge::dispatch::{Dispatcher, OneElementFn};
use matforge::prelude::*;

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

// ============================================================================
// Crate-level entry points
// ============================================================================

#[test]
fn test_default_representation_is_dense() {
    let dispatched = matforge::one_element([3, 3], [1, 2], c(4.0), None).unwrap();
    let direct = DenseMatrix::one_element([3, 3], [1, 2], c(4.0)).unwrap();

    let dispatched = dispatched.into_dense().expect("default should be dense");
    assert_eq!(dispatched, direct);
}

#[test]
fn test_requested_representation_is_honored() {
    let m = matforge::one_element([2, 2], [1, 0], c(1.0), Some(Repr::Coo)).unwrap();
    assert_eq!(m.repr(), Repr::Coo);

    let m = matforge::one_element([2, 2], [1, 0], c(1.0), Some(Repr::Dia)).unwrap();
    assert_eq!(m.repr(), Repr::Dia);
}

#[test]
fn test_diag_has_no_coo_backend() {
    let main = vec![c(1.0), c(1.0)];
    let err = matforge::diag(&[&main], &[0], None, Repr::Coo).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedRepresentation {
            op: "diag",
            repr: Repr::Coo,
        }
    );
}

#[test]
fn test_dispatch_surfaces_backend_errors_unchanged() {
    for repr in [Repr::Dense, Repr::Coo, Repr::Csr, Repr::Dia] {
        let err = matforge::one_element([2, 3], [5, 0], c(1.0), Some(repr)).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                shape: [2, 3],
                position: [5, 0],
            }
        );
    }
}

// ============================================================================
// Registry lifecycle
// ============================================================================

#[test]
fn test_deferred_registration_completes_before_first_use() {
    let mut registry: Dispatcher<OneElementFn> = Dispatcher::with_default("build", Repr::Csr);

    // Backends plug in one at a time, e.g. from separate modules.
    registry
        .register(Repr::Csr, |shape, position, value| {
            CsrMatrix::one_element(shape, position, value).map(Matrix::Csr)
        })
        .unwrap();
    registry
        .register(Repr::Dense, |shape, position, value| {
            DenseMatrix::one_element(shape, position, value).map(Matrix::Dense)
        })
        .unwrap();

    let build = registry.resolve(None).unwrap();
    let m = build([2, 2], [0, 0], c(1.0)).unwrap();
    assert_eq!(m.repr(), Repr::Csr);
}

#[test]
fn test_first_dispatch_seals_registry() {
    let mut registry: Dispatcher<OneElementFn> = Dispatcher::new("build");
    registry
        .register(Repr::Dense, |shape, position, value| {
            DenseMatrix::one_element(shape, position, value).map(Matrix::Dense)
        })
        .unwrap();

    assert!(!registry.is_sealed());
    registry.resolve(Some(Repr::Dense)).unwrap();
    assert!(registry.is_sealed());

    let err = registry
        .register(Repr::Coo, |shape, position, value| {
            CooMatrix::one_element(shape, position, value).map(Matrix::Coo)
        })
        .unwrap_err();
    assert_eq!(
        err,
        Error::LateRegistration {
            op: "build",
            repr: Repr::Coo,
        }
    );
}
