use core::ops::{Index, Mul, Neg};

use crate::error::{or_panic, Result};
use crate::matrix::SquareMatrix;
use crate::scalar::Complex;
use crate::traits::{IntoScalar, RealScalar};

use super::{Bra, Ket};

/// A linear operator on kets: a complex square matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator<R> {
    matrix: SquareMatrix<Complex<R>>,
}

impl<R: RealScalar> Operator<R> {
    /// Wrap an existing complex matrix.
    pub fn from_matrix(matrix: SquareMatrix<Complex<R>>) -> Self {
        Self { matrix }
    }

    /// Build from nested rows, each entry anything convertible into
    /// `Complex<R>`.
    ///
    /// ```
    /// use ketspace::quantum::Operator;
    ///
    /// let z = Operator::<f64>::new([[(1, 0), (0, 0)], [(0, 0), (-1, 0)]]);
    /// assert_eq!(z.dimension(), 2);
    /// assert!(z.is_hermitian());
    /// ```
    pub fn new<E: IntoScalar<Complex<R>>, const N: usize>(rows: [[E; N]; N]) -> Self {
        Self::from_matrix(SquareMatrix::new(rows))
    }

    /// The `dimension × dimension` zero operator.
    pub fn zero(dimension: usize) -> Self {
        Self::from_matrix(SquareMatrix::zeros(dimension))
    }

    /// The identity operator on a `dimension`-dimensional space.
    pub fn identity(dimension: usize) -> Self {
        Self::from_matrix(SquareMatrix::identity(dimension))
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &SquareMatrix<Complex<R>> {
        &self.matrix
    }

    /// Unwrap into the underlying matrix.
    pub fn into_matrix(self) -> SquareMatrix<Complex<R>> {
        self.matrix
    }

    /// Dimension of the space the operator acts on.
    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    /// Entry-wise sum. Fails when the dimensions differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.matrix.try_add(&rhs.matrix).map(Self::from_matrix)
    }

    /// Entry-wise difference. Fails when the dimensions differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.matrix.try_sub(&rhs.matrix).map(Self::from_matrix)
    }

    /// `-A`.
    pub fn additive_inverse(&self) -> Self {
        Self::from_matrix(self.matrix.additive_inverse())
    }

    /// Multiply every entry by a complex factor.
    pub fn scale(&self, factor: Complex<R>) -> Self {
        Self::from_matrix(self.matrix.scale(factor))
    }

    /// Multiply every entry by a real factor.
    pub fn scale_real(&self, factor: R) -> Self {
        Self::from_matrix(self.matrix.scale_real(factor))
    }

    /// Composition `self · rhs`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        self.matrix.try_mul(&rhs.matrix).map(Self::from_matrix)
    }

    /// `A|ψ⟩`.
    pub fn act(&self, ket: &Ket<R>) -> Result<Ket<R>> {
        self.matrix.act(ket.components()).map(Ket::new)
    }

    /// `⟨φ|A|ψ⟩`, computed as `⟨φ| (A|ψ⟩)`.
    pub fn expectation(&self, bra: &Bra<R>, ket: &Ket<R>) -> Result<Complex<R>> {
        bra.amplitude(&self.act(ket)?)
    }

    /// Conjugate transpose `A†`.
    pub fn adjoint(&self) -> Self {
        Self::from_matrix(self.matrix.adjoint())
    }

    /// Entry-wise complex conjugate.
    pub fn conjugate(&self) -> Self {
        Self::from_matrix(self.matrix.conjugate())
    }

    /// Plain transpose, no conjugation.
    pub fn transpose(&self) -> Self {
        Self::from_matrix(self.matrix.transpose())
    }

    /// `[A, B] = AB - BA`.
    pub fn commutator(&self, rhs: &Self) -> Result<Self> {
        self.matrix.commutator(&rhs.matrix).map(Self::from_matrix)
    }

    /// Kronecker product `A ⊗ B`, acting on `|a⟩ ⊗ |b⟩`.
    pub fn tensor_product(&self, rhs: &Self) -> Self {
        Self::from_matrix(self.matrix.tensor_product(&rhs.matrix))
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> Complex<R> {
        self.matrix.trace()
    }

    /// Round every entry to six decimal places.
    pub fn round(&self) -> Self {
        Self::from_matrix(self.matrix.round())
    }

    /// Whether `A = A†` after rounding.
    pub fn is_hermitian(&self) -> bool {
        self.matrix.is_hermitian()
    }

    /// Whether the rounded matrix is the identity.
    pub fn is_identity(&self) -> bool {
        self.matrix.is_identity()
    }

    /// Whether `A·A†` and `A†·A` both round to the identity.
    pub fn is_unitary(&self) -> bool {
        self.matrix.is_unitary()
    }
}

impl<R> Index<(usize, usize)> for Operator<R> {
    type Output = Complex<R>;

    fn index(&self, index: (usize, usize)) -> &Complex<R> {
        &self.matrix[index]
    }
}

impl_newtype_binops!(Operator);

impl<R: RealScalar> Neg for Operator<R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.additive_inverse()
    }
}

impl<R: RealScalar> Neg for &Operator<R> {
    type Output = Operator<R>;

    fn neg(self) -> Operator<R> {
        self.additive_inverse()
    }
}

impl<R: RealScalar> Mul for Operator<R> {
    type Output = Self;

    #[track_caller]
    fn mul(self, rhs: Self) -> Self {
        or_panic(self.try_mul(&rhs))
    }
}

impl<R: RealScalar> Mul<&Operator<R>> for &Operator<R> {
    type Output = Operator<R>;

    #[track_caller]
    fn mul(self, rhs: &Operator<R>) -> Operator<R> {
        or_panic(self.try_mul(rhs))
    }
}

impl<R: RealScalar> Mul<&Ket<R>> for &Operator<R> {
    type Output = Ket<R>;

    #[track_caller]
    fn mul(self, rhs: &Ket<R>) -> Ket<R> {
        or_panic(self.act(rhs))
    }
}

impl<R: RealScalar> Mul<Ket<R>> for Operator<R> {
    type Output = Ket<R>;

    #[track_caller]
    fn mul(self, rhs: Ket<R>) -> Ket<R> {
        or_panic(self.act(&rhs))
    }
}

impl<R: RealScalar> Mul<Operator<R>> for Complex<R> {
    type Output = Operator<R>;

    fn mul(self, rhs: Operator<R>) -> Operator<R> {
        rhs.scale(self)
    }
}

impl<R: RealScalar> Mul<&Operator<R>> for Complex<R> {
    type Output = Operator<R>;

    fn mul(self, rhs: &Operator<R>) -> Operator<R> {
        rhs.scale(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::real;

    type Op = Operator<f64>;

    fn pauli_x() -> Op {
        Op::new([[(0, 0), (1, 0)], [(1, 0), (0, 0)]])
    }

    fn pauli_y() -> Op {
        Op::new([[(0, 0), (0, -1)], [(0, 1), (0, 0)]])
    }

    fn pauli_z() -> Op {
        Op::new([[(1, 0), (0, 0)], [(0, 0), (-1, 0)]])
    }

    fn hadamard() -> Op {
        let h = real::sqrt(0.5_f64);
        Op::new([[(h, 0.0), (h, 0.0)], [(h, 0.0), (-h, 0.0)]])
    }

    #[test]
    fn paulis_are_hermitian_and_unitary() {
        for p in [pauli_x(), pauli_y(), pauli_z(), hadamard()] {
            assert!(p.is_hermitian());
            assert!(p.is_unitary());
            assert!((&p * &p).is_identity());
        }
    }

    #[test]
    fn pauli_commutator() {
        let two_i = Complex::new(0.0, 2.0);
        assert_eq!(pauli_x().commutator(&pauli_y()).unwrap(), two_i * pauli_z());
        assert_eq!(pauli_z().commutator(&pauli_z()).unwrap(), Op::zero(2));
    }

    #[test]
    fn hadamard_maps_basis_to_superposition() {
        let up = Ket::<f64>::from_entries([(1, 0), (0, 0)]);
        let plus = &hadamard() * &up;
        let h = real::sqrt(0.5_f64);
        assert_eq!(plus, Ket::from_entries([(h, 0.0), (h, 0.0)]));
        assert_eq!(real::round(plus.norm()), 1.0);
    }

    #[test]
    fn expectation_value() {
        let up = Ket::<f64>::from_entries([(1, 0), (0, 0)]);
        let down = Ket::<f64>::from_entries([(0, 0), (1, 0)]);
        let z = pauli_z();
        assert_eq!(z.expectation(&up.bra(), &up).unwrap(), Complex::new(1.0, 0.0));
        assert_eq!(z.expectation(&down.bra(), &down).unwrap(), Complex::new(-1.0, 0.0));
        assert!(z.expectation(&Bra::zero(3), &up).is_err());
    }

    #[test]
    fn tensor_product_acts_factorwise() {
        let up = Ket::<f64>::from_entries([(1, 0), (0, 0)]);
        let down = Ket::<f64>::from_entries([(0, 0), (1, 0)]);
        let xz = pauli_x().tensor_product(&pauli_z());
        assert_eq!(xz.dimension(), 4);
        // (X ⊗ Z)|0⟩|1⟩ = X|0⟩ ⊗ Z|1⟩ = -|1⟩|1⟩
        let lhs = &xz * &up.tensor_product(&down);
        let rhs = (&pauli_x() * &up).tensor_product(&(&pauli_z() * &down));
        assert_eq!(lhs, rhs);
        assert!(xz.is_unitary());
    }

    #[test]
    fn arithmetic_and_shape_errors() {
        let x = pauli_x();
        assert_eq!(&x - &x, Op::zero(2));
        assert_eq!(-&x + x.clone(), Op::zero(2));
        assert_eq!(x[(0, 1)], Complex::new(1.0, 0.0));
        assert_eq!(x.trace(), Complex::new(0.0, 0.0));
        assert!(x.try_mul(&Op::identity(3)).is_err());
        assert!(x.act(&Ket::zero(3)).is_err());
        assert!(!x.scale_real(2.0).is_unitary());
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in multiply: 2x2 vs 3")]
    fn composing_mismatched_operators_panics() {
        let _ = &pauli_x() * &Op::identity(3);
    }
}
