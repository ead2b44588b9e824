use num_traits::{Float, One};

use crate::error::Result;
use crate::traits::Scalar;

use super::{check_lengths, Orientation, Vector};

// ── Inner product and norms ─────────────────────────────────────────

impl<S: Scalar, O: Orientation> Vector<S, O> {
    /// Inner product `Σ self[i] · conj(rhs[i])`.
    ///
    /// Linear in the left argument. For complex vectors it is not symmetric:
    /// `a.inner_product(&b) == conj(b.inner_product(&a))`.
    ///
    /// ```
    /// use ketspace::{Complex, RowVector};
    ///
    /// let a = RowVector::<Complex<f64>>::from_entries([(1, 1), (0, 2)]);
    /// let b = RowVector::<Complex<f64>>::from_entries([(0, 1), (1, 0)]);
    /// assert_eq!(a.inner_product(&b).unwrap(), Complex::new(1.0, 1.0));
    /// ```
    pub fn inner_product(&self, rhs: &Self) -> Result<S> {
        check_lengths("inner product", self.len(), rhs.len())?;
        Ok(self
            .iter()
            .zip(rhs.iter())
            .fold(S::zero(), |acc, (&l, &r)| acc + l * r.conj()))
    }

    /// Squared Euclidean norm, the real part of `⟨v, v⟩`.
    pub fn norm_squared(&self) -> S::Real {
        self.iter()
            .fold(S::zero(), |acc, &e| acc + e * e.conj())
            .re()
    }

    /// Euclidean norm `sqrt(re ⟨v, v⟩)`.
    ///
    /// ```
    /// use ketspace::RowVector;
    /// assert_eq!(RowVector::<f64>::from_entries([3, 4]).norm(), 5.0);
    /// ```
    pub fn norm(&self) -> S::Real {
        self.norm_squared().sqrt()
    }

    /// `‖self − rhs‖`. Fails when the lengths differ.
    pub fn distance(&self, rhs: &Self) -> Result<S::Real> {
        Ok(self.zip_checked("distance", rhs, |a, b| a - b)?.norm())
    }

    /// Scale by `1 / ‖v‖`.
    ///
    /// The zero vector has no direction; its entries come back NaN.
    pub fn normalized(&self) -> Self {
        let inv = S::Real::one() / self.norm();
        self.scale_real(inv)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LinalgError;
    use crate::scalar::{real, Complex};
    use crate::traits::Scalar;
    use crate::vector::{ColumnVector, RowVector};

    type C = Complex<f64>;

    #[test]
    fn real_inner_product() {
        let a = RowVector::<f64>::from_entries([1, 2, 3]);
        let b = RowVector::<f64>::from_entries([4, -5, 6]);
        assert_eq!(a.inner_product(&b).unwrap(), 12.0);
        assert_eq!(b.inner_product(&a).unwrap(), 12.0);
    }

    #[test]
    fn complex_inner_product_is_conjugate_symmetric() {
        let a = ColumnVector::<C>::from_entries([(1, 2), (3, -1)]);
        let b = ColumnVector::<C>::from_entries([(0, 1), (2, 2)]);
        let ab = a.inner_product(&b).unwrap();
        let ba = b.inner_product(&a).unwrap();
        assert_eq!(ab, ba.conj());
        assert_ne!(ab, ba);

        let aa = a.inner_product(&a).unwrap();
        assert_eq!(aa.im(), 0.0);
        assert_eq!(aa.re(), 15.0);
    }

    #[test]
    fn inner_product_rejects_mismatch() {
        let a = RowVector::<f64>::from_entries([1, 2, 3]);
        let b = RowVector::<f64>::from_entries([1, 2]);
        assert_eq!(
            a.inner_product(&b),
            Err(LinalgError::length_mismatch("inner product", 3, 2))
        );
        assert!(a.distance(&b).is_err());
    }

    #[test]
    fn norm_and_distance() {
        let v = ColumnVector::<C>::from_entries([(3, 0), (0, 4)]);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.norm_squared(), 25.0);

        let a = RowVector::<f64>::from_entries([1, 1]);
        let b = RowVector::<f64>::from_entries([4, 5]);
        assert_eq!(a.distance(&b).unwrap(), 5.0);
        assert_eq!(a.distance(&a).unwrap(), 0.0);
    }

    #[test]
    fn normalized_has_unit_norm() {
        let v = RowVector::<C>::from_entries([(1, 1), (2, -3), (0, 5)]);
        let u = v.normalized();
        assert_eq!(real::round(u.norm()), 1.0);
        // positive real multiple of v
        let ratio = u[1] * v[1].conj();
        assert_eq!(real::round(ratio.im()), 0.0);
        assert!(ratio.re() > 0.0);
    }

    #[test]
    fn normalized_zero_vector_is_nan() {
        let z = RowVector::<f64>::zeros(2).normalized();
        assert!(z.iter().all(|e| e.is_nan()));
    }
}
