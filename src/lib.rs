//! # ketspace
//!
//! Finite-dimensional real and complex vector spaces: row and column vectors,
//! square matrices, bra/ket notation for quantum states, and an addition
//! backend that can be swapped for an accelerated device behind one global lock.
//!
//! ## Quick start
//!
//! ```
//! use ketspace::{Complex, ColumnVector, RowVector, SquareMatrix};
//!
//! // Row vector times column vector is a scalar; no conjugation.
//! let r = RowVector::<f64>::from_entries([1, 2, 3]);
//! let c = ColumnVector::<f64>::from_entries([4, 5, 6]);
//! assert_eq!(&r * &c, 32.0);
//!
//! // Pauli Y is Hermitian and unitary.
//! let y = SquareMatrix::<Complex<f64>>::new([[(0, 0), (0, -1)], [(0, 1), (0, 0)]]);
//! assert!(y.is_hermitian() && y.is_unitary());
//!
//! // Shape mismatches surface as errors from the named methods...
//! let short = ColumnVector::<f64>::from_entries([1, 2]);
//! assert!(c.try_add(&short).is_err());
//! // ...and as panics from the operators.
//! ```
//!
//! ## Modules
//!
//! - [`scalar`]: [`Complex`] and [`Polar`] numbers over any [`RealScalar`],
//!   plus the shared rounding helpers in [`scalar::real`]. Values round to
//!   [`ROUNDING_DIGITS`] decimal places, half away from zero, before any
//!   rounded comparison.
//!
//! - [`vector`]: [`Vector<S, O>`](Vector) over a scalar `S` with a
//!   [`Row`] or [`Column`] orientation marker. [`RowVector`] and
//!   [`ColumnVector`] are the two aliases. Transposing flips the marker, so
//!   a row never gets added to a column.
//!
//! - [`matrix`]: [`SquareMatrix<S>`](SquareMatrix) with `Vec<S>` row-major
//!   storage. Multiplication, action on vectors, adjoints, Kronecker products
//!   and the rounded `is_identity` / `is_hermitian` / `is_unitary` checks.
//!
//! - [`algebra`]: capability traits (`Addable`, `InnerProductSpace`,
//!   `TensorProductable`, ...) implemented by vectors and matrices, and
//!   generic functions written against them.
//!
//! - [`quantum`]: [`Ket`](quantum::Ket), [`Bra`](quantum::Bra) and
//!   [`Operator`](quantum::Operator) newtypes over complex vectors and matrices.
//!
//! - [`accel`]: [`AcceleratedBackend`] and the [`Accelerator`] trait. Every
//!   device call holds one process-wide mutex.
//!
//! - [`traits`]: the element hierarchy, [`Scalar`] for every entry type and
//!   [`RealScalar`] for `f32` / `f64`.
//!
//! ## Errors
//!
//! Operations that combine two operands check their shapes. The `try_*` and
//! named methods return [`Result`] with a [`LinalgError`]; the operator
//! impls (`+`, `-`, `*`) panic with the same message. Scalar arithmetic
//! never errors: `sqrt(-1.0)` and division by zero follow IEEE-754.
//!
//! ## Logging
//!
//! Accelerator sessions emit [`tracing`](https://docs.rs/tracing) events:
//! `trace` on lock acquire and release, `debug` per device call, `warn` when
//! the device reports a failure. Install any subscriber to see them.
//!
//! ## Cargo features
//!
//! | Feature        | Default | Description |
//! |----------------|---------|-------------|
//! | `native-accel` | no      | `accel::NativeAccelerator` linked against the `cuda_computation` native library |
//!
//! [`Complex`] converts to and from `num_complex::Complex`, which also backs
//! the polar conversions of [`Polar`].

pub mod accel;
pub mod algebra;
pub mod error;
pub mod matrix;
pub mod quantum;
pub mod scalar;
pub mod traits;
pub mod vector;

pub use accel::{
    AcceleratedBackend, AcceleratedElement, Accelerator, AcceleratorSession, AcceleratorStatus,
    DeviceToken, ManagedAccelerator,
};
pub use error::{LinalgError, Result};
pub use matrix::SquareMatrix;
pub use scalar::{Complex, Polar, ROUNDING_DIGITS};
pub use traits::{IntoScalar, RealScalar, Scalar};
pub use vector::{Column, ColumnVector, Orientation, Row, RowVector, Vector};
