use core::ops::{Index, Mul, Neg};

use crate::error::{or_panic, Result};
use crate::scalar::Complex;
use crate::traits::{IntoScalar, RealScalar};
use crate::vector::RowVector;

use super::{Ket, Operator};

/// A dual vector `⟨φ|`: a complex row vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Bra<R> {
    components: RowVector<Complex<R>>,
}

impl<R: RealScalar> Bra<R> {
    /// Wrap an existing complex row vector.
    pub fn new(components: RowVector<Complex<R>>) -> Self {
        Self { components }
    }

    /// Build a bra from `(re, im)` pairs or other values convertible into
    /// `Complex<R>`.
    pub fn from_entries<E: IntoScalar<Complex<R>>>(entries: impl IntoIterator<Item = E>) -> Self {
        Self::new(RowVector::from_entries(entries))
    }

    /// The zero bra of the given dimension.
    pub fn zero(dimension: usize) -> Self {
        Self::new(RowVector::zeros(dimension))
    }

    /// The amplitudes as a row vector.
    pub fn components(&self) -> &RowVector<Complex<R>> {
        &self.components
    }

    /// Unwrap into the underlying row vector.
    pub fn into_components(self) -> RowVector<Complex<R>> {
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

    /// `-⟨φ|`.
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

    /// The ket `|φ⟩` whose adjoint this bra is.
    pub fn ket(&self) -> Ket<R> {
        Ket::new(self.components.adjoint())
    }

    /// Component-wise complex conjugate, still a bra.
    pub fn conjugate(&self) -> Self {
        Self::new(self.components.conjugate())
    }

    /// `Σ self[i] · conj(rhs[i])`.
    pub fn inner_product(&self, rhs: &Self) -> Result<Complex<R>> {
        self.components.inner_product(&rhs.components)
    }

    /// The amplitude `⟨self|ket⟩`.
    pub fn amplitude(&self, ket: &Ket<R>) -> Result<Complex<R>> {
        self.components.try_mul(ket.components())
    }

    /// `⟨self| A`, the operator acting to the left.
    pub fn act(&self, operator: &Operator<R>) -> Result<Self> {
        self.components.act(operator.matrix()).map(Self::new)
    }

    /// `√⟨φ|φ⟩`.
    pub fn norm(&self) -> R {
        self.components.norm()
    }

    /// Norm of `self - rhs`. Fails when the dimensions differ.
    pub fn distance(&self, rhs: &Self) -> Result<R> {
        self.components.distance(&rhs.components)
    }

    /// Divide by the norm. The zero bra comes back as NaN amplitudes.
    pub fn normalized(&self) -> Self {
        Self::new(self.components.normalized())
    }

    /// `⟨self| ⊗ ⟨rhs|`.
    pub fn tensor_product(&self, rhs: &Self) -> Self {
        Self::new(self.components.tensor_product(&rhs.components))
    }

    /// Round every amplitude to six decimal places.
    pub fn round(&self) -> Self {
        Self::new(self.components.round())
    }
}

impl<R> Index<usize> for Bra<R> {
    type Output = Complex<R>;

    fn index(&self, i: usize) -> &Complex<R> {
        &self.components[i]
    }
}

impl_newtype_binops!(Bra);

impl<R: RealScalar> Neg for Bra<R> {
    type Output = Self;

    fn neg(self) -> Self {
        self.additive_inverse()
    }
}

impl<R: RealScalar> Neg for &Bra<R> {
    type Output = Bra<R>;

    fn neg(self) -> Bra<R> {
        self.additive_inverse()
    }
}

impl<R: RealScalar> Mul<Bra<R>> for Complex<R> {
    type Output = Bra<R>;

    fn mul(self, rhs: Bra<R>) -> Bra<R> {
        rhs.scale(self)
    }
}

impl<R: RealScalar> Mul<&Bra<R>> for Complex<R> {
    type Output = Bra<R>;

    fn mul(self, rhs: &Bra<R>) -> Bra<R> {
        rhs.scale(self)
    }
}

// ⟨φ|ψ⟩
impl<R: RealScalar> Mul<&Ket<R>> for &Bra<R> {
    type Output = Complex<R>;

    #[track_caller]
    fn mul(self, rhs: &Ket<R>) -> Complex<R> {
        or_panic(self.amplitude(rhs))
    }
}

impl<R: RealScalar> Mul<Ket<R>> for Bra<R> {
    type Output = Complex<R>;

    #[track_caller]
    fn mul(self, rhs: Ket<R>) -> Complex<R> {
        or_panic(self.amplitude(&rhs))
    }
}

// ⟨φ| A
impl<R: RealScalar> Mul<&Operator<R>> for &Bra<R> {
    type Output = Bra<R>;

    #[track_caller]
    fn mul(self, rhs: &Operator<R>) -> Bra<R> {
        or_panic(self.act(rhs))
    }
}
