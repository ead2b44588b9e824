use core::ops::Mul;

use crate::error::{or_panic, Result};
use crate::traits::Scalar;

use super::{check_lengths, ColumnVector, Orientation, RowVector, Vector};

impl<S: Scalar, O: Orientation> Vector<S, O> {
    /// Tensor (Kronecker) product.
    ///
    /// The result has `self.len() * rhs.len()` entries with the right operand
    /// varying fastest: entry `i * rhs.len() + j` is `self[i] * rhs[j]`.
    ///
    /// ```
    /// use ketspace::RowVector;
    ///
    /// let a = RowVector::<f64>::from_entries([1, 3]);
    /// let b = RowVector::<f64>::from_entries([7, 13]);
    /// assert_eq!(a.tensor_product(&b).entries(), &[7.0, 13.0, 21.0, 39.0]);
    /// ```
    pub fn tensor_product(&self, rhs: &Self) -> Self {
        let mut entries = Vec::with_capacity(self.len() * rhs.len());
        for &l in self.iter() {
            for &r in rhs.iter() {
                entries.push(l * r);
            }
        }
        Vector::from_vec(entries)
    }
}

// ── Row · Column → scalar ───────────────────────────────────────────

impl<S: Scalar> RowVector<S> {
    /// Matrix-style product of a 1×n row with an n×1 column: `Σ self[i]·rhs[i]`.
    ///
    /// Unlike [`inner_product`](Vector::inner_product) nothing is conjugated.
    pub fn try_mul(&self, rhs: &ColumnVector<S>) -> Result<S> {
        check_lengths("row-column product", self.len(), rhs.len())?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(S::zero(), |acc, (&l, &r)| acc + l * r))
    }
}

impl<S: Scalar> Mul<&ColumnVector<S>> for &RowVector<S> {
    type Output = S;

    #[track_caller]
    fn mul(self, rhs: &ColumnVector<S>) -> S {
        or_panic(self.try_mul(rhs))
    }
}

impl<S: Scalar> Mul<ColumnVector<S>> for RowVector<S> {
    type Output = S;

    #[track_caller]
    fn mul(self, rhs: ColumnVector<S>) -> S {
        or_panic(self.try_mul(&rhs))
    }
}
