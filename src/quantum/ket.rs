use core::ops::{Index, Mul, Neg};

use crate::error::{or_panic, Result};
use crate::scalar::Complex;
use crate::traits::{IntoScalar, RealScalar};
use crate::vector::ColumnVector;

use super::{Bra, Operator};

/// A state vector `|ψ⟩`: a complex column vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Ket<R> {
    components: ColumnVector<Complex<R>>,
}

impl<R: RealScalar> Ket<R> {
    /// Wrap an existing complex column vector.
    pub fn new(components: ColumnVector<Complex<R>>) -> Self {
        Self { components }
    }

    /// Build a ket from `(re, im)` pairs or anything else convertible into
    /// `Complex<R>`.
    pub fn from_entries<E: IntoScalar<Complex<R>>>(entries: impl IntoIterator<Item = E>) -> Self {
        Self::new(ColumnVector::from_entries(entries))
    }

    /// The zero ket of the given dimension.
    pub fn zero(dimension: usize) -> Self {
        Self::new(ColumnVector::zeros(dimension))
    }

    /// The amplitudes as a column vector.
    pub fn components(&self) -> &ColumnVector<Complex<R>> {
        &self.components
    }

    /// Unwrap into the underlying column vector.
    pub fn into_components(self) -> ColumnVector<Complex<R>> {
        self.components
    }

    /// Number of amplitudes.
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Component-wise sum. Fails when the dimensions differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.components.try_add(&rhs.components).map(Self::new)
    }

    /// Component-wise difference. Fails when the dimensions differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.components.try_sub(&rhs.components).map(Self::new)
    }

    /// `-|ψ⟩`.
    pub fn additive_inverse(&self) -> Self {
        Self::new(self.components.additive_inverse())
    }

    /// Multiply every amplitude by a complex factor.
    pub fn scale(&self, factor: Complex<R>) -> Self {
        Self::new(self.components.scale(factor))
    }

    /// Multiply every amplitude by a real factor.
    pub fn scale_real(&self, factor: R) -> Self {
        Self::new(self.components.scale_real(factor))
    }

    /// The dual bra `⟨ψ|`, the adjoint of this ket.
    pub fn bra(&self) -> Bra<R> {
        Bra::new(self.components.adjoint())
    }

    /// Component-wise complex conjugate, still a ket.
    pub fn conjugate(&self) -> Self {
        Self::new(self.components.conjugate())
    }

    /// `Σ self[i] · conj(rhs[i])`.
    pub fn inner_product(&self, rhs: &Self) -> Result<Complex<R>> {
        self.components.inner_product(&rhs.components)
    }

    /// `√⟨ψ|ψ⟩`.
    pub fn norm(&self) -> R {
        self.components.norm()
    }

    /// Norm of `self - rhs`. Fails when the dimensions differ.
    pub fn distance(&self, rhs: &Self) -> Result<R> {
        self.components.distance(&rhs.components)
    }

    /// Divide by the norm. The zero ket comes back as NaN amplitudes.
    pub fn normalized(&self) -> Self {
        Self::new(self.components.normalized())
    }

    /// `|self⟩ ⊗ |rhs⟩`.
    pub fn tensor_product(&self, rhs: &Self) -> Self {
        Self::new(self.components.tensor_product(&rhs.components))
    }

    /// Outer product `|self⟩⟨bra|`.
    pub fn outer_product(&self, bra: &Bra<R>) -> Result<Operator<R>> {
        self.components
            .outer_product(bra.components())
            .map(Operator::from_matrix)
    }

    /// Round every amplitude to six decimal places.
    pub fn round(&self) -> Self {
        Self::new(self.components.round())
    }
}

impl<R> Index<usize> for Ket<R> {
    type Output = Complex<R>;

    fn index(&self, i: usize) -> &Complex<R> {
        &self.components[i]
    }
}

impl_newtype_binops!(Ket);

impl<R: RealScalar> Neg for Ket<R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.additive_inverse()
    }
}

impl<R: RealScalar> Neg for &Ket<R> {
    type Output = Ket<R>;

    fn neg(self) -> Ket<R> {
        self.additive_inverse()
    }
}

impl<R: RealScalar> Mul<Ket<R>> for Complex<R> {
    type Output = Ket<R>;

    fn mul(self, rhs: Ket<R>) -> Ket<R> {
        rhs.scale(self)
    }
}

impl<R: RealScalar> Mul<&Ket<R>> for Complex<R> {
    type Output = Ket<R>;

    fn mul(self, rhs: &Ket<R>) -> Ket<R> {
        rhs.scale(self)
    }
}

impl<R: RealScalar> Mul<&Bra<R>> for &Ket<R> {
    type Output = Operator<R>;

    #[track_caller]
    fn mul(self, rhs: &Bra<R>) -> Operator<R> {
        or_panic(self.outer_product(rhs))
    }
}
