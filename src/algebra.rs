//! Capability traits shared by [`Vector`] and [`SquareMatrix`], plus free
//! functions written once against those traits.
//!
//! Each trait names one algebraic capability. A generic algorithm asks for
//! exactly the capabilities it uses:
//!
//! ```
//! use core::num::NonZeroU32;
//! use ketspace::algebra;
//! use ketspace::{RowVector, SquareMatrix};
//!
//! let v = RowVector::<f64>::from_entries([1, 2]);
//! assert_eq!(algebra::tensor_power(&v, NonZeroU32::new(3).unwrap()).len(), 8);
//!
//! let m = SquareMatrix::<f64>::identity(2);
//! assert_eq!(algebra::tensor_power(&m, NonZeroU32::new(2).unwrap()).dimension(), 4);
//! ```

use core::num::NonZeroU32;

use num_traits::One;

use crate::error::Result;
use crate::matrix::SquareMatrix;
use crate::scalar::real;
use crate::traits::{RealScalar, Scalar};
use crate::vector::{Orientation, Vector};

/// Size of a vector (its length) or of a square matrix (its dimension).
pub trait Dimensioned {
    fn dimension(&self) -> usize;
}

/// Shape-checked addition and subtraction, negation and a zero of matching shape.
pub trait Addable: Sized {
    fn try_add(&self, rhs: &Self) -> Result<Self>;
    fn try_sub(&self, rhs: &Self) -> Result<Self>;
    fn additive_inverse(&self) -> Self;
    /// The additive identity with the same shape as `self`.
    fn zero_like(&self) -> Self;
}

/// Multiplication by an element scalar and by a real factor.
pub trait ScalarMultipliable<S: Scalar> {
    fn scale(&self, factor: S) -> Self;
    fn scale_real(&self, factor: S::Real) -> Self;
}

/// Tensor (Kronecker) product with another value of the same kind.
pub trait TensorProductable {
    fn tensor_product(&self, rhs: &Self) -> Self;
}

/// Euclidean norm (Frobenius for matrices).
pub trait HasNorm {
    type Real: RealScalar;
    fn norm(&self) -> Self::Real;
}

/// Inner product `⟨a, b⟩`, conjugate-linear in the right argument.
pub trait InnerProductSpace<S: Scalar>: Addable + HasNorm<Real = S::Real> {
    fn inner_product(&self, rhs: &Self) -> Result<S>;
}

/// Exact equality of entries, no rounding.
pub trait Equivalence {
    fn is_equivalent_to(&self, other: &Self) -> bool;
}

/// Round every entry to [`ROUNDING_DIGITS`](crate::ROUNDING_DIGITS) decimal places.
pub trait Roundable {
    fn round(&self) -> Self;
}

/// Conjugate and conjugate transpose.
pub trait Adjointable {
    type Adjoint;
    fn conjugate(&self) -> Self;
    fn adjoint(&self) -> Self::Adjoint;
}

// ── Vector ──────────────────────────────────────────────────────────

impl<S: Scalar, O: Orientation> Dimensioned for Vector<S, O> {
    fn dimension(&self) -> usize {
        self.len()
    }
}

impl<S: Scalar, O: Orientation> Addable for Vector<S, O> {
    fn try_add(&self, rhs: &Self) -> Result<Self> {
        Vector::try_add(self, rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        Vector::try_sub(self, rhs)
    }

    fn additive_inverse(&self) -> Self {
        Vector::additive_inverse(self)
    }

    fn zero_like(&self) -> Self {
        Vector::zeros(self.len())
    }
}

impl<S: Scalar, O: Orientation> ScalarMultipliable<S> for Vector<S, O> {
    fn scale(&self, factor: S) -> Self {
        Vector::scale(self, factor)
    }

    fn scale_real(&self, factor: S::Real) -> Self {
        Vector::scale_real(self, factor)
    }
}

impl<S: Scalar, O: Orientation> TensorProductable for Vector<S, O> {
    fn tensor_product(&self, rhs: &Self) -> Self {
        Vector::tensor_product(self, rhs)
    }
}

impl<S: Scalar, O: Orientation> HasNorm for Vector<S, O> {
    type Real = S::Real;

    fn norm(&self) -> S::Real {
        Vector::norm(self)
    }
}

impl<S: Scalar, O: Orientation> InnerProductSpace<S> for Vector<S, O> {
    fn inner_product(&self, rhs: &Self) -> Result<S> {
        Vector::inner_product(self, rhs)
    }
}

impl<S: Scalar, O: Orientation> Equivalence for Vector<S, O> {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        Vector::is_equivalent_to(self, other)
    }
}

impl<S: Scalar, O: Orientation> Roundable for Vector<S, O> {
    fn round(&self) -> Self {
        Vector::round(self)
    }
}

impl<S: Scalar, O: Orientation> Adjointable for Vector<S, O> {
    type Adjoint = Vector<S, O::Transposed>;

    fn conjugate(&self) -> Self {
        Vector::conjugate(self)
    }

    fn adjoint(&self) -> Self::Adjoint {
        Vector::adjoint(self)
    }
}

// ── SquareMatrix ────────────────────────────────────────────────────

impl<S: Scalar> Dimensioned for SquareMatrix<S> {
    fn dimension(&self) -> usize {
        SquareMatrix::dimension(self)
    }
}

impl<S: Scalar> Addable for SquareMatrix<S> {
    fn try_add(&self, rhs: &Self) -> Result<Self> {
        SquareMatrix::try_add(self, rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self> {
        SquareMatrix::try_sub(self, rhs)
    }

    fn additive_inverse(&self) -> Self {
        SquareMatrix::additive_inverse(self)
    }

    fn zero_like(&self) -> Self {
        SquareMatrix::zeros(self.dimension())
    }
}

impl<S: Scalar> ScalarMultipliable<S> for SquareMatrix<S> {
    fn scale(&self, factor: S) -> Self {
        SquareMatrix::scale(self, factor)
    }

    fn scale_real(&self, factor: S::Real) -> Self {
        SquareMatrix::scale_real(self, factor)
    }
}

impl<S: Scalar> TensorProductable for SquareMatrix<S> {
    fn tensor_product(&self, rhs: &Self) -> Self {
        SquareMatrix::tensor_product(self, rhs)
    }
}

impl<S: Scalar> HasNorm for SquareMatrix<S> {
    type Real = S::Real;

    fn norm(&self) -> S::Real {
        self.frobenius_norm()
    }
}

impl<S: Scalar> Equivalence for SquareMatrix<S> {
    fn is_equivalent_to(&self, other: &Self) -> bool {
        SquareMatrix::is_equivalent_to(self, other)
    }
}

impl<S: Scalar> Roundable for SquareMatrix<S> {
    fn round(&self) -> Self {
        SquareMatrix::round(self)
    }
}

impl<S: Scalar> Adjointable for SquareMatrix<S> {
    type Adjoint = Self;

    fn conjugate(&self) -> Self {
        SquareMatrix::conjugate(self)
    }

    fn adjoint(&self) -> Self {
        SquareMatrix::adjoint(self)
    }
}

// ── Generic algorithms ──────────────────────────────────────────────

/// `‖a − b‖` for any inner-product space.
pub fn distance<S, V>(a: &V, b: &V) -> Result<S::Real>
where
    S: Scalar,
    V: InnerProductSpace<S>,
{
    Ok(a.try_sub(b)?.norm())
}

/// `x ⊗ x ⊗ … ⊗ x` with `n` factors.
pub fn tensor_power<T: TensorProductable + Clone>(x: &T, n: NonZeroU32) -> T {
    let mut result = x.clone();
    for _ in 1..n.get() {
        result = result.tensor_product(x);
    }
    result
}

/// Exact equivalence, as a free function.
pub fn are_equivalent<T: Equivalence>(a: &T, b: &T) -> bool {
    a.is_equivalent_to(b)
}

/// Equivalence after rounding both sides to six decimal places.
pub fn are_equivalent_rounded<T: Equivalence + Roundable>(a: &T, b: &T) -> bool {
    a.round().is_equivalent_to(&b.round())
}

/// Sum of a non-empty sequence of same-shaped values.
///
/// Returns `Ok(None)` for an empty sequence and fails on the first shape
/// mismatch.
pub fn sum_of<'a, T>(items: impl IntoIterator<Item = &'a T>) -> Result<Option<T>>
where
    T: Addable + Clone + 'a,
{
    let mut iter = items.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    let mut total = first.clone();
    for item in iter {
        total = total.try_add(item)?;
    }
    Ok(Some(total))
}

/// Whether the norm rounds to exactly one.
pub fn is_normalized<T: HasNorm>(x: &T) -> bool {
    real::round(x.norm()) == T::Real::one()
}

/// Whether `⟨a, b⟩ == conj⟨b, a⟩` after rounding.
pub fn is_conjugate_symmetric<S, V>(a: &V, b: &V) -> Result<bool>
where
    S: Scalar,
    V: InnerProductSpace<S>,
{
    let ab = a.inner_product(b)?;
    let ba = b.inner_product(a)?;
    Ok(ab.rounded() == ba.conj().rounded())
}
