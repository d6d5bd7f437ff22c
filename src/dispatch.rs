//! Representation dispatch: route a construction request to one backend
//!
//! A [`Dispatcher`] maps a requested output representation to the registered
//! constructor for one named operation. It performs no validation and no
//! computation beyond the lookup; bounds checks and layout work all live in
//! the selected backend.
//!
//! The registry has two states. While *open* it accepts registrations, so
//! backends defined elsewhere can plug in before first use. The first
//! successful `resolve` *seals* it; sealing is one-way, and registering
//! afterwards fails with `LateRegistration`. A sealed dispatcher is safe for
//! unsynchronized concurrent reads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use num_complex::Complex64;

use crate::coo::CooMatrix;
use crate::csr::CsrMatrix;
use crate::dense::DenseMatrix;
use crate::dia::DiaMatrix;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, Repr};

/// Constructor signature for the `one_element` operation
pub type OneElementFn = fn([usize; 2], [usize; 2], Complex64) -> Result<Matrix>;

/// Constructor signature for the `diag` operation
pub type DiagFn = fn(&[&[Complex64]], &[isize], Option<[usize; 2]>) -> Result<Matrix>;

/// Registry mapping a representation to a constructor for one operation
#[derive(Debug)]
pub struct Dispatcher<F> {
    op: &'static str,
    default: Option<Repr>,
    table: HashMap<Repr, F>,
    sealed: AtomicBool,
}

impl<F: Copy> Dispatcher<F> {
    /// Create an open dispatcher with no default representation
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            default: None,
            table: HashMap::new(),
            sealed: AtomicBool::new(false),
        }
    }

    /// Create an open dispatcher that falls back to `default` when the
    /// caller does not name a representation
    pub fn with_default(op: &'static str, default: Repr) -> Self {
        Self {
            default: Some(default),
            ..Self::new(op)
        }
    }

    /// Returns the operation name this dispatcher routes
    pub fn op(&self) -> &'static str {
        self.op
    }

    /// Returns true once a dispatch has sealed the registry
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Register the constructor for `repr`
    ///
    /// Re-registering a representation replaces the previous constructor.
    ///
    /// # Errors
    ///
    /// Returns `LateRegistration` if a dispatch has already sealed the
    /// registry.
    pub fn register(&mut self, repr: Repr, constructor: F) -> Result<()> {
        if self.is_sealed() {
            return Err(Error::LateRegistration { op: self.op, repr });
        }
        self.table.insert(repr, constructor);
        Ok(())
    }

    /// Chainable registration for building a registry in one expression
    ///
    /// Only usable while the builder owns the dispatcher, which guarantees no
    /// dispatch has happened yet.
    pub fn with(mut self, repr: Repr, constructor: F) -> Self {
        debug_assert!(!self.is_sealed());
        self.table.insert(repr, constructor);
        self
    }

    /// Look up the constructor for `repr`, sealing the registry
    ///
    /// With `repr` omitted the configured default representation is used.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedRepresentation` if nothing is registered for the
    /// resolved representation, or `InvalidArgument` if no representation was
    /// given and the dispatcher has no default.
    pub fn resolve(&self, repr: Option<Repr>) -> Result<F> {
        self.sealed.store(true, Ordering::Release);
        let repr = match repr.or(self.default) {
            Some(repr) => repr,
            None => {
                return Err(Error::invalid_argument(
                    "representation",
                    format!("operation '{}' has no default representation", self.op),
                ))
            }
        };
        self.table
            .get(&repr)
            .copied()
            .ok_or(Error::UnsupportedRepresentation { op: self.op, repr })
    }
}

fn one_element_registry() -> &'static Dispatcher<OneElementFn> {
    static REGISTRY: OnceLock<Dispatcher<OneElementFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        Dispatcher::<OneElementFn>::with_default("one_element", Repr::Dense)
            .with(Repr::Dense, |shape, position, value| {
                DenseMatrix::one_element(shape, position, value).map(Matrix::Dense)
            })
            .with(Repr::Coo, |shape, position, value| {
                CooMatrix::one_element(shape, position, value).map(Matrix::Coo)
            })
            .with(Repr::Csr, |shape, position, value| {
                CsrMatrix::one_element(shape, position, value).map(Matrix::Csr)
            })
            .with(Repr::Dia, |shape, position, value| {
                DiaMatrix::one_element(shape, position, value).map(Matrix::Dia)
            })
    })
}

fn diag_registry() -> &'static Dispatcher<DiagFn> {
    static REGISTRY: OnceLock<Dispatcher<DiagFn>> = OnceLock::new();
    // COO has no diagonal backend.
    REGISTRY.get_or_init(|| {
        Dispatcher::<DiagFn>::new("diag")
            .with(Repr::Dense, |diagonals, offsets, shape| {
                DenseMatrix::diags(diagonals, offsets, shape).map(Matrix::Dense)
            })
            .with(Repr::Csr, |diagonals, offsets, shape| {
                CsrMatrix::diags(diagonals, offsets, shape).map(Matrix::Csr)
            })
            .with(Repr::Dia, |diagonals, offsets, shape| {
                DiaMatrix::diags(diagonals, offsets, shape).map(Matrix::Dia)
            })
    })
}

/// Construct a matrix with a single nonzero entry in the requested
/// representation
///
/// With `repr` omitted the result is dense, identical to calling
/// [`DenseMatrix::one_element`] directly.
///
/// # Errors
///
/// Returns `OutOfBounds` if `position` falls outside `shape`, or
/// `UnsupportedRepresentation` if no constructor is registered for `repr`.
pub fn one_element(
    shape: [usize; 2],
    position: [usize; 2],
    value: Complex64,
    repr: Option<Repr>,
) -> Result<Matrix> {
    one_element_registry().resolve(repr)?(shape, position, value)
}

/// Construct a matrix from diagonals and offsets in the requested
/// representation
///
/// `diagonals[i]` holds the entries (including zeros) for the diagonal at
/// `offsets[i]`; offset 0 is the main diagonal, positive above, negative
/// below. With `shape` omitted the output is the smallest square matrix the
/// diagonals fit exactly, and in all cases each diagonal must fill its band
/// with no extra or missing elements. Diagonals sharing an offset are summed.
///
/// # Errors
///
/// Returns `UnsupportedRepresentation` if no diagonal constructor is
/// registered for `repr` (COO has none), or the selected backend's
/// validation error.
pub fn diag(
    diagonals: &[&[Complex64]],
    offsets: &[isize],
    shape: Option<[usize; 2]>,
    repr: Repr,
) -> Result<Matrix> {
    diag_registry().resolve(Some(repr))?(diagonals, offsets, shape)
}
