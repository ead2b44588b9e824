mod norm;
mod ops;
mod product;

use core::fmt;
use core::marker::PhantomData;
use core::ops::Index;

use crate::error::{LinalgError, Result};
use crate::traits::{IntoScalar, Scalar};

/// Marker for the orientation of a [`Vector`]: [`Row`] or [`Column`].
///
/// Transposition swaps the marker, so a row vector and a column vector
/// are distinct types that cannot be mixed up in addition or inner products.
pub trait Orientation:
    Copy + Default + fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// The orientation after transposition.
    type Transposed: Orientation<Transposed = Self>;

    /// Separator used by `Display` between entries.
    const SEPARATOR: &'static str;
}

/// Row orientation (1×n).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Row;

/// Column orientation (n×1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Column;

impl Orientation for Row {
    type Transposed = Column;
    const SEPARATOR: &'static str = ", ";
}

impl Orientation for Column {
    type Transposed = Row;
    const SEPARATOR: &'static str = "; ";
}

/// Fixed-length vector of real or complex scalars.
///
/// The length is set at construction and never changes; every operation
/// returns a new vector. Binary operations check lengths before computing:
/// the `try_*` methods return [`LinalgError::LengthMismatch`], the operator
/// impls (`+`, `-`) panic with the same message.
///
/// Use the aliases [`RowVector`] and [`ColumnVector`].
///
/// # Examples
///
/// ```
/// use ketspace::RowVector;
///
/// let a = RowVector::<f64>::from_entries([1, 3]);
/// let b = RowVector::<f64>::from_entries([7, 13]);
/// assert_eq!(&a + &b, RowVector::from_entries([8, 16]));
/// assert_eq!(a.tensor_product(&b), RowVector::from_entries([7, 13, 21, 39]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<S, O> {
    entries: Vec<S>,
    orientation: PhantomData<O>,
}

/// A row vector (1×n).
pub type RowVector<S> = Vector<S, Row>;

/// A column vector (n×1).
pub type ColumnVector<S> = Vector<S, Column>;

// ── Constructors ────────────────────────────────────────────────────

impl<S: Scalar, O: Orientation> Vector<S, O> {
    /// Create a vector that takes ownership of `entries`.
    #[inline]
    pub fn from_vec(entries: Vec<S>) -> Self {
        Self {
            entries,
            orientation: PhantomData,
        }
    }

    /// Create a vector by copying a slice.
    #[inline]
    pub fn from_slice(entries: &[S]) -> Self {
        Self::from_vec(entries.to_vec())
    }

    /// Create a vector from anything convertible into the scalar type:
    /// integer or float literals at either precision, `(re, im)` tuples for
    /// complex vectors.
    ///
    /// ```
    /// use ketspace::{Complex, ColumnVector};
    ///
    /// let v = ColumnVector::<Complex<f64>>::from_entries([(1, 2), (3, -4)]);
    /// assert_eq!(v[1], Complex::new(3.0, -4.0));
    /// ```
    pub fn from_entries<E: IntoScalar<S>>(entries: impl IntoIterator<Item = E>) -> Self {
        Self::from_vec(entries.into_iter().map(IntoScalar::into_scalar).collect())
    }

    /// Create a vector of length `len` by calling `f(i)` for each index.
    ///
    /// ```
    /// use ketspace::RowVector;
    /// let v = RowVector::from_fn(3, |i| (i * i) as f64);
    /// assert_eq!(v.entries(), &[0.0, 1.0, 4.0]);
    /// ```
    pub fn from_fn(len: usize, f: impl Fn(usize) -> S) -> Self {
        Self::from_vec((0..len).map(f).collect())
    }

    /// The zero vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![S::zero(); len])
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<S, O> Vector<S, O> {
    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vector has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the entries as a slice.
    #[inline]
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    /// Entry at `i`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&S> {
        self.entries.get(i)
    }

    /// Iterate over the entries in order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, S> {
        self.entries.iter()
    }

    /// Consume the vector, returning its entries.
    #[inline]
    pub fn into_vec(self) -> Vec<S> {
        self.entries
    }
}

impl<S, O> Index<usize> for Vector<S, O> {
    type Output = S;

    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.entries[i]
    }
}

impl<'a, S, O> IntoIterator for &'a Vector<S, O> {
    type Item = &'a S;
    type IntoIter = core::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── Element-wise transforms ─────────────────────────────────────────

impl<S: Scalar, O: Orientation> Vector<S, O> {
    /// Apply `f` to every entry, producing a vector of the same orientation.
    pub fn map<U: Scalar>(&self, f: impl Fn(S) -> U) -> Vector<U, O> {
        Vector::from_vec(self.entries.iter().map(|&e| f(e)).collect())
    }

    /// Combine two equal-length vectors entry by entry.
    ///
    /// Fails with [`LinalgError::LengthMismatch`] before calling `f` when the
    /// lengths differ.
    pub fn zip<T: Scalar, U: Scalar>(
        &self,
        rhs: &Vector<T, O>,
        f: impl Fn(S, T) -> U,
    ) -> Result<Vector<U, O>> {
        self.zip_checked("zip", rhs, f)
    }

    pub(crate) fn zip_checked<T: Scalar, U: Scalar>(
        &self,
        operation: &'static str,
        rhs: &Vector<T, O>,
        f: impl Fn(S, T) -> U,
    ) -> Result<Vector<U, O>> {
        check_lengths(operation, self.len(), rhs.len())?;
        Ok(Vector::from_vec(
            self.entries
                .iter()
                .zip(rhs.entries.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    /// Sum of all entries, starting from zero.
    pub fn sum(&self) -> S {
        self.entries.iter().fold(S::zero(), |acc, &e| acc + e)
    }

    /// Negate every entry.
    pub fn additive_inverse(&self) -> Self {
        self.map(|e| -e)
    }

    /// Round every entry to six decimal places.
    pub fn round(&self) -> Self {
        self.map(Scalar::rounded)
    }

    /// Conjugate every entry (identity for real vectors).
    pub fn conjugate(&self) -> Self {
        self.map(Scalar::conj)
    }

    /// Reinterpret as the other orientation, entries unchanged.
    ///
    /// ```
    /// use ketspace::{ColumnVector, RowVector};
    /// let row = RowVector::<f64>::from_entries([1, 2, 3]);
    /// let col: ColumnVector<f64> = row.transpose();
    /// assert_eq!(col.transpose(), row);
    /// ```
    pub fn transpose(&self) -> Vector<S, O::Transposed> {
        Vector::from_vec(self.entries.clone())
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Vector<S, O::Transposed> {
        self.conjugate().transpose()
    }

    /// Exact entry-by-entry equality, no rounding.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[inline]
pub(crate) fn check_lengths(operation: &'static str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(LinalgError::length_mismatch(operation, left, right))
    }
}

impl<S: fmt::Display, O: Orientation> fmt::Display for Vector<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(O::SEPARATOR)?;
            }
            write!(f, "{e}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex;

    #[test]
    fn constructors() {
        let a = RowVector::from_vec(vec![1.0, 2.0]);
        let b = RowVector::from_slice(&[1.0, 2.0]);
        let c = RowVector::<f64>::from_entries([1, 2]);
        let d = RowVector::from_fn(2, |i| (i + 1) as f64);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(a.len(), 2);
        assert!(!a.is_empty());
    }

    #[test]
    fn single_precision_literals() {
        let v = RowVector::<f32>::from_entries([1, 2, 3]);
        assert_eq!(v.entries(), &[1.0_f32, 2.0, 3.0]);
        assert_eq!(RowVector::<f32>::from_entries([0.5, 1.5])[1], 1.5_f32);

        let z = ColumnVector::<Complex<f32>>::from_entries([(1, -1), (0, 2)]);
        assert_eq!(z[1], Complex::new(0.0_f32, 2.0));
        let mixed = ColumnVector::<Complex<f64>>::from_entries([(1, 0.5), (2, 0.0)]);
        assert_eq!(mixed[0], Complex::new(1.0, 0.5));
    }

    #[test]
    fn zeros() {
        let z = ColumnVector::<Complex<f32>>::zeros(3);
        assert_eq!(z.len(), 3);
        assert!(z.iter().all(|e| *e == Complex::new(0.0, 0.0)));
        assert!(RowVector::<f64>::zeros(0).is_empty());
    }

    #[test]
    fn index_and_get() {
        let v = RowVector::<f64>::from_entries([4, 5, 6]);
        assert_eq!(v[0], 4.0);
        assert_eq!(v.get(2), Some(&6.0));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn map_and_zip() {
        let v = RowVector::<f64>::from_entries([1, 2, 3]);
        assert_eq!(v.map(|x| x * 10.0), RowVector::from_entries([10, 20, 30]));

        let w = RowVector::<f64>::from_entries([4, 5, 6]);
        let prod = v.zip(&w, |a, b| a * b).unwrap();
        assert_eq!(prod, RowVector::from_entries([4, 10, 18]));
    }

    #[test]
    fn zip_rejects_length_mismatch() {
        let v = RowVector::<f64>::from_entries([1, 2, 3]);
        let w = RowVector::<f64>::from_entries([1, 2]);
        let err = v.zip(&w, |a, b| a + b).unwrap_err();
        assert_eq!(err, LinalgError::length_mismatch("zip", 3, 2));
    }

    #[test]
    fn sum() {
        let v = ColumnVector::<Complex<f64>>::from_entries([(1, 2), (3, 4)]);
        assert_eq!(v.sum(), Complex::new(4.0, 6.0));
        assert_eq!(RowVector::<f64>::zeros(0).sum(), 0.0);
    }

    #[test]
    fn round_conjugate_inverse() {
        let v = RowVector::<Complex<f64>>::from_entries([(0.9999999, 0.0000001), (1.0, -2.0)]);
        assert_eq!(
            v.round(),
            RowVector::from_entries([(1.0, 0.0), (1.0, -2.0)])
        );
        assert_eq!(
            v.conjugate()[1],
            Complex::new(1.0, 2.0)
        );
        assert_eq!(v.additive_inverse()[1], Complex::new(-1.0, 2.0));
    }

    #[test]
    fn transpose_and_adjoint_round_trip() {
        let row = RowVector::<Complex<f64>>::from_entries([(1, 2), (3, -4)]);
        let col = row.adjoint();
        assert_eq!(col[0], Complex::new(1.0, -2.0));
        assert_eq!(col.adjoint(), row);
        assert_eq!(row.transpose().transpose(), row);
    }

    #[test]
    fn equivalence_is_exact() {
        let a = RowVector::<f64>::from_entries([1.0, 2.0]);
        let b = RowVector::<f64>::from_entries([1.0, 2.0000001]);
        assert!(a.is_equivalent_to(&a.clone()));
        assert!(!a.is_equivalent_to(&b));
        assert!(a.round().is_equivalent_to(&b.round()));
    }

    #[test]
    fn display() {
        let row = RowVector::<f64>::from_entries([1, 2]);
        assert_eq!(row.to_string(), "[1, 2]");
        assert_eq!(row.transpose().to_string(), "[1; 2]");
    }
}
