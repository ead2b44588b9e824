use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{or_panic, Result};
use crate::scalar::Complex;
use crate::traits::Scalar;

use super::{Orientation, Vector};

impl<S: Scalar, O: Orientation> Vector<S, O> {
    /// Entry-wise sum. Fails when the lengths differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_checked("add", rhs, |a, b| a + b)
    }

    /// Entry-wise difference. Fails when the lengths differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_checked("subtract", rhs, |a, b| a - b)
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&self, factor: S) -> Self {
        self.map(|e| e * factor)
    }

    /// Multiply every entry by a real factor. For complex vectors this
    /// scales both components.
    pub fn scale_real(&self, factor: S::Real) -> Self {
        self.map(|e| e.scale(factor))
    }
}

// ── Addition / subtraction ──────────────────────────────────────────

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<S: Scalar, O: Orientation> $trait for Vector<S, O> {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<S: Scalar, O: Orientation> $trait<&Vector<S, O>> for Vector<S, O> {
            type Output = Vector<S, O>;

            #[track_caller]
            fn $method(self, rhs: &Vector<S, O>) -> Vector<S, O> {
                or_panic(self.$checked(rhs))
            }
        }

        impl<S: Scalar, O: Orientation> $trait<Vector<S, O>> for &Vector<S, O> {
            type Output = Vector<S, O>;

            #[track_caller]
            fn $method(self, rhs: Vector<S, O>) -> Vector<S, O> {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<S: Scalar, O: Orientation> $trait<&Vector<S, O>> for &Vector<S, O> {
            type Output = Vector<S, O>;

            #[track_caller]
            fn $method(self, rhs: &Vector<S, O>) -> Vector<S, O> {
                or_panic(self.$checked(rhs))
            }
        }
    };
}

impl_vector_binop!(Add, add, try_add);
impl_vector_binop!(Sub, sub, try_sub);

// ── Negation ────────────────────────────────────────────────────────

impl<S: Scalar, O: Orientation> Neg for Vector<S, O> {
    type Output = Self;

    fn neg(self) -> Self {
        self.additive_inverse()
    }
}

impl<S: Scalar, O: Orientation> Neg for &Vector<S, O> {
    type Output = Vector<S, O>;

    fn neg(self) -> Vector<S, O> {
        self.additive_inverse()
    }
}

// ── Scalar multiplication: vector * scalar ──────────────────────────

impl<S: Scalar, O: Orientation> Mul<S> for Vector<S, O> {
    type Output = Self;

    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl<S: Scalar, O: Orientation> Mul<S> for &Vector<S, O> {
    type Output = Vector<S, O>;

    fn mul(self, rhs: S) -> Vector<S, O> {
        self.scale(rhs)
    }
}

// ── Scalar multiplication: scalar * vector (concrete impls to avoid orphan rules) ──

macro_rules! impl_scalar_mul_vector {
    ($($t:ty),*) => {
        $(
            impl<O: Orientation> Mul<Vector<$t, O>> for $t {
                type Output = Vector<$t, O>;

                fn mul(self, rhs: Vector<$t, O>) -> Vector<$t, O> {
                    rhs.scale(self)
                }
            }

            impl<O: Orientation> Mul<&Vector<$t, O>> for $t {
                type Output = Vector<$t, O>;

                fn mul(self, rhs: &Vector<$t, O>) -> Vector<$t, O> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul_vector!(f32, f64, Complex<f32>, Complex<f64>);

// real * complex vector
macro_rules! impl_real_mul_complex_vector {
    ($($t:ty),*) => {
        $(
            impl<O: Orientation> Mul<Vector<Complex<$t>, O>> for $t {
                type Output = Vector<Complex<$t>, O>;

                fn mul(self, rhs: Vector<Complex<$t>, O>) -> Vector<Complex<$t>, O> {
                    rhs.scale_real(self)
                }
            }

            impl<O: Orientation> Mul<&Vector<Complex<$t>, O>> for $t {
                type Output = Vector<Complex<$t>, O>;

                fn mul(self, rhs: &Vector<Complex<$t>, O>) -> Vector<Complex<$t>, O> {
                    rhs.scale_real(self)
                }
            }
        )*
    };
}

impl_real_mul_complex_vector!(f32, f64);
