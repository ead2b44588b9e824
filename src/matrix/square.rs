use crate::traits::Scalar;

use super::SquareMatrix;

// ── Transpose / conjugate / Kronecker ───────────────────────────────

impl<S: Scalar> SquareMatrix<S> {
    /// `result[i,j] = self[j,i]`.
    pub fn transpose(&self) -> Self {
        let d = self.dimension;
        Self::from_fn(d, |i, j| self.entries[j * d + i])
    }

    /// Conjugate every entry (identity for real matrices).
    pub fn conjugate(&self) -> Self {
        self.map(Scalar::conj)
    }

    /// Conjugate transpose.
    ///
    /// ```
    /// use ketspace::{Complex, SquareMatrix};
    ///
    /// let m = SquareMatrix::<Complex<f64>>::new([[(1, 1), (2, 0)], [(0, 3), (4, -1)]]);
    /// let adj = m.adjoint();
    /// assert_eq!(adj[(0, 1)], Complex::new(0.0, -3.0));
    /// assert_eq!(adj.adjoint(), m);
    /// ```
    pub fn adjoint(&self) -> Self {
        let d = self.dimension;
        Self::from_fn(d, |i, j| self.entries[j * d + i].conj())
    }

    /// Kronecker product.
    ///
    /// The result has dimension `dim(A)·dim(B)` with
    /// `result[j,k] = A[j / dim(B), k / dim(B)] · B[j % dim(B), k % dim(B)]`.
    ///
    /// ```
    /// use ketspace::SquareMatrix;
    ///
    /// let a = SquareMatrix::<f64>::new([[1, 2], [3, 4]]);
    /// let id = SquareMatrix::<f64>::identity(2);
    /// let k = a.tensor_product(&id);
    /// assert_eq!(k.dimension(), 4);
    /// assert_eq!(k[(0, 2)], 2.0);
    /// assert_eq!(k[(1, 3)], 2.0);
    /// assert_eq!(k[(0, 3)], 0.0);
    /// ```
    pub fn tensor_product(&self, rhs: &Self) -> Self {
        let (da, db) = (self.dimension, rhs.dimension);
        Self::from_fn(da * db, |j, k| {
            self.entries[(j / db) * da + k / db] * rhs.entries[(j % db) * db + k % db]
        })
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> S {
        let d = self.dimension;
        (0..d).fold(S::zero(), |acc, i| acc + self.entries[i * d + i])
    }
}

// ── Structural predicates ───────────────────────────────────────────

impl<S: Scalar> SquareMatrix<S> {
    /// Exact check that `A == Aᵀ`.
    pub fn is_symmetric(&self) -> bool {
        let d = self.dimension;
        for i in 0..d {
            for j in (i + 1)..d {
                if self.entries[i * d + j] != self.entries[j * d + i] {
                    return false;
                }
            }
        }
        true
    }

    /// Whether the rounded matrix has ones on the diagonal and zeros elsewhere.
    pub fn is_identity(&self) -> bool {
        let d = self.dimension;
        self.entries.iter().enumerate().all(|(k, &e)| {
            let expected = if k / d == k % d { S::one() } else { S::zero() };
            e.rounded() == expected
        })
    }

    /// Whether the rounded matrix equals its own adjoint.
    ///
    /// ```
    /// use ketspace::{Complex, SquareMatrix};
    ///
    /// let y = SquareMatrix::<Complex<f64>>::new([[(0, 0), (0, -1)], [(0, 1), (0, 0)]]);
    /// assert!(y.is_hermitian());
    /// assert!(!y.scale(Complex::i()).is_hermitian());
    /// ```
    pub fn is_hermitian(&self) -> bool {
        let rounded = self.round();
        rounded == rounded.adjoint()
    }

    /// Whether `M·M†` and `M†·M` both round to the identity.
    pub fn is_unitary(&self) -> bool {
        let adjoint = self.adjoint();
        self.product(&adjoint).is_identity() && adjoint.product(self).is_identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{real, Complex};

    type C = Complex<f64>;
    type CM = SquareMatrix<C>;

    fn hadamard() -> CM {
        let h = real::sqrt(0.5_f64);
        SquareMatrix::new([[(h, 0.0), (h, 0.0)], [(h, 0.0), (-h, 0.0)]])
    }

    #[test]
    fn transpose_round_trip() {
        let m = SquareMatrix::<f64>::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let t = m.transpose();
        assert_eq!(t[(0, 2)], 7.0);
        assert_eq!(t[(2, 0)], 3.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn conjugate_and_adjoint() {
        let m = CM::new([[(1, 2), (3, 4)], [(5, 6), (7, 8)]]);
        assert_eq!(m.conjugate()[(1, 0)], Complex::new(5.0, -6.0));
        assert_eq!(m.adjoint(), m.conjugate().transpose());
        assert_eq!(m.adjoint().adjoint(), m);

        let r = SquareMatrix::<f64>::new([[1, 2], [3, 4]]);
        assert_eq!(r.conjugate(), r);
        assert_eq!(r.adjoint(), r.transpose());
    }

    #[test]
    fn kronecker_index_formula() {
        let a = SquareMatrix::<f64>::new([[1, 2], [3, 4]]);
        let b = SquareMatrix::<f64>::new([[0, 5, 1], [6, 7, 2], [3, 8, 9]]);
        let k = a.tensor_product(&b);
        assert_eq!(k.dimension(), 6);
        for j in 0..6 {
            for kk in 0..6 {
                assert_eq!(k[(j, kk)], a[(j / 3, kk / 3)] * b[(j % 3, kk % 3)]);
            }
        }
    }

    #[test]
    fn kronecker_is_associative() {
        let a = SquareMatrix::<f64>::new([[1, 2], [3, 4]]);
        let b = SquareMatrix::<f64>::new([[0, 1], [1, 0]]);
        let c = SquareMatrix::<f64>::new([[2, -1], [5, 3]]);
        assert_eq!(
            a.tensor_product(&b.tensor_product(&c)),
            a.tensor_product(&b).tensor_product(&c)
        );
    }

    #[test]
    fn kronecker_with_empty() {
        let a = SquareMatrix::<f64>::identity(2);
        assert_eq!(a.tensor_product(&SquareMatrix::zeros(0)).dimension(), 0);
    }

    #[test]
    fn trace_and_symmetry() {
        let m = SquareMatrix::<f64>::new([[1, 2], [2, 5]]);
        assert_eq!(m.trace(), 6.0);
        assert!(m.is_symmetric());
        assert!(!SquareMatrix::<f64>::new([[1, 2], [3, 5]]).is_symmetric());
    }

    #[test]
    fn identity_check_uses_rounding() {
        let almost = SquareMatrix::<f64>::new([[1.0000001, 0.0000001], [0.0, 0.9999999]]);
        assert!(almost.is_identity());
        let off = SquareMatrix::<f64>::new([[1.00001, 0.0], [0.0, 1.0]]);
        assert!(!off.is_identity());
        assert!(SquareMatrix::<C>::identity(3).is_identity());
        assert!(!SquareMatrix::<C>::zeros(2).is_identity());
    }

    #[test]
    fn hermitian() {
        let h = CM::new([[(2, 0), (1, -1)], [(1, 1), (3, 0)]]);
        assert!(h.is_hermitian());
        let not_h = CM::new([[(2, 0), (1, 1)], [(1, 1), (3, 0)]]);
        assert!(!not_h.is_hermitian());
        let real_symmetric = SquareMatrix::<f64>::new([[1, 7], [7, 2]]);
        assert!(real_symmetric.is_hermitian());
    }

    #[test]
    fn unitary() {
        assert!(hadamard().is_unitary());
        let pauli_y = CM::new([[(0, 0), (0, -1)], [(0, 1), (0, 0)]]);
        assert!(pauli_y.is_unitary());
        assert!(hadamard().tensor_product(&pauli_y).is_unitary());
        assert!(!CM::new([[(1, 0), (1, 0)], [(0, 0), (1, 0)]]).is_unitary());
    }

    #[test]
    fn perturbed_unitary_is_rejected() {
        let h = hadamard();
        let mut entries = h.entries().to_vec();
        entries[0] = entries[0] + Complex::new(1e-4, 0.0);
        let perturbed = SquareMatrix::from_row_major(2, entries).unwrap();
        assert!(!perturbed.is_unitary());
    }

    #[test]
    fn single_precision_predicates() {
        let almost = SquareMatrix::<f32>::new([[1.0000001, 0.0], [0.0, 0.9999999]]);
        assert!(almost.is_identity());
        let off = SquareMatrix::<f32>::new([[1.00001, 0.0], [0.0, 1.0]]);
        assert!(!off.is_identity());

        let h = 0.5_f32.sqrt();
        let hadamard = SquareMatrix::<f32>::new([[h, h], [h, -h]]);
        assert!(hadamard.is_unitary());
        assert!(hadamard.is_hermitian());
        let skewed = SquareMatrix::<f32>::new([[h + 1e-3, h], [h, -h]]);
        assert!(!skewed.is_unitary());

        let pauli_y = SquareMatrix::<Complex<f32>>::new([[(0, 0), (0, -1)], [(0, 1), (0, 0)]]);
        assert!(pauli_y.is_unitary());
        assert!(pauli_y.is_hermitian());
    }
}
