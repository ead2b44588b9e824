use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{or_panic, LinalgError, Result};
use crate::scalar::Complex;
use crate::traits::Scalar;
use crate::vector::{ColumnVector, RowVector};

use super::SquareMatrix;

#[inline]
fn check_dimensions(operation: &'static str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(LinalgError::dimension_mismatch(operation, left, right))
    }
}

impl<S: Scalar> SquareMatrix<S> {
    /// Combine two matrices of equal dimension entry by entry.
    pub fn zip<T: Scalar, U: Scalar>(
        &self,
        rhs: &SquareMatrix<T>,
        f: impl Fn(S, T) -> U,
    ) -> Result<SquareMatrix<U>> {
        self.zip_checked("zip", rhs, f)
    }

    fn zip_checked<T: Scalar, U: Scalar>(
        &self,
        operation: &'static str,
        rhs: &SquareMatrix<T>,
        f: impl Fn(S, T) -> U,
    ) -> Result<SquareMatrix<U>> {
        check_dimensions(operation, self.dimension, rhs.dimension)?;
        Ok(SquareMatrix {
            entries: self
                .entries
                .iter()
                .zip(rhs.entries.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            dimension: self.dimension,
        })
    }

    /// Entry-wise sum. Fails when the dimensions differ.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_checked("add", rhs, |a, b| a + b)
    }

    /// Entry-wise difference. Fails when the dimensions differ.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_checked("subtract", rhs, |a, b| a - b)
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&self, factor: S) -> Self {
        self.map(|e| e * factor)
    }

    /// Multiply every entry by a real factor.
    pub fn scale_real(&self, factor: S::Real) -> Self {
        self.map(|e| e.scale(factor))
    }

    /// Matrix product `C[i,j] = Σ_k A[i,k]·B[k,j]`.
    ///
    /// ```
    /// use ketspace::SquareMatrix;
    ///
    /// let a = SquareMatrix::<f64>::new([[1, 3], [7, 13]]);
    /// let b = SquareMatrix::<f64>::new([[23, 31], [41, 47]]);
    /// assert_eq!(a.try_mul(&b).unwrap(), SquareMatrix::new([[146, 172], [694, 828]]));
    /// assert!(a.try_mul(&SquareMatrix::identity(3)).is_err());
    /// ```
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        check_dimensions("multiply", self.dimension, rhs.dimension)?;
        Ok(self.product(rhs))
    }

    // Callers guarantee equal dimensions.
    pub(crate) fn product(&self, rhs: &Self) -> Self {
        let d = self.dimension;
        let mut entries = Vec::with_capacity(d * d);
        for i in 0..d {
            for j in 0..d {
                let mut sum = S::zero();
                for k in 0..d {
                    sum = sum + self.entries[i * d + k] * rhs.entries[k * d + j];
                }
                entries.push(sum);
            }
        }
        SquareMatrix {
            entries,
            dimension: d,
        }
    }

    /// Apply the matrix to a column vector: `result[i] = Σ_j M[i,j]·v[j]`.
    pub fn act(&self, v: &ColumnVector<S>) -> Result<ColumnVector<S>> {
        check_dimensions("act", self.dimension, v.len())?;
        let d = self.dimension;
        Ok(ColumnVector::from_fn(d, |i| {
            self.row(i)
                .zip(v.iter())
                .fold(S::zero(), |acc, (m, &x)| acc + m * x)
        }))
    }

    /// `A·B − B·A`.
    ///
    /// ```
    /// use ketspace::SquareMatrix;
    ///
    /// let x = SquareMatrix::<f64>::new([[0, 1], [1, 0]]);
    /// let z = SquareMatrix::<f64>::new([[1, 0], [0, -1]]);
    /// assert_eq!(x.commutator(&z).unwrap(), SquareMatrix::new([[0, -2], [2, 0]]));
    /// assert_eq!(x.commutator(&x).unwrap(), SquareMatrix::zeros(2));
    /// ```
    pub fn commutator(&self, rhs: &Self) -> Result<Self> {
        check_dimensions("commutator", self.dimension, rhs.dimension)?;
        let ab = self.product(rhs);
        let ba = rhs.product(self);
        ab.try_sub(&ba)
    }
}

impl<S: Scalar> RowVector<S> {
    /// Apply a matrix from the left of a row vector:
    /// `result[j] = Σ_i v[i]·M[i,j]`.
    pub fn act(&self, m: &SquareMatrix<S>) -> Result<RowVector<S>> {
        check_dimensions("act", m.dimension, self.len())?;
        Ok(RowVector::from_fn(m.dimension, |j| {
            m.column(j)
                .zip(self.iter())
                .fold(S::zero(), |acc, (e, &x)| acc + x * e)
        }))
    }
}

impl<S: Scalar> ColumnVector<S> {
    /// Outer product `|self⟩⟨rhs|`: `result[i,j] = self[i]·rhs[j]`.
    ///
    /// Both vectors must have the same length for the result to be square.
    pub fn outer_product(&self, rhs: &RowVector<S>) -> Result<SquareMatrix<S>> {
        check_dimensions("outer product", self.len(), rhs.len())?;
        Ok(SquareMatrix::from_fn(self.len(), |i, j| self[i] * rhs[j]))
    }
}

// ── Addition / subtraction ──────────────────────────────────────────

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<S: Scalar> $trait for SquareMatrix<S> {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<S: Scalar> $trait<&SquareMatrix<S>> for SquareMatrix<S> {
            type Output = SquareMatrix<S>;

            #[track_caller]
            fn $method(self, rhs: &SquareMatrix<S>) -> SquareMatrix<S> {
                or_panic(self.$checked(rhs))
            }
        }

        impl<S: Scalar> $trait<SquareMatrix<S>> for &SquareMatrix<S> {
            type Output = SquareMatrix<S>;

            #[track_caller]
            fn $method(self, rhs: SquareMatrix<S>) -> SquareMatrix<S> {
                or_panic(self.$checked(&rhs))
            }
        }

        impl<S: Scalar> $trait<&SquareMatrix<S>> for &SquareMatrix<S> {
            type Output = SquareMatrix<S>;

            #[track_caller]
            fn $method(self, rhs: &SquareMatrix<S>) -> SquareMatrix<S> {
                or_panic(self.$checked(rhs))
            }
        }
    };
}

impl_matrix_binop!(Add, add, try_add);
impl_matrix_binop!(Sub, sub, try_sub);
// ── Matrix multiplication: (n×n) * (n×n) → (n×n) ────────────────────
impl_matrix_binop!(Mul, mul, try_mul);

// ── Negation ────────────────────────────────────────────────────────

impl<S: Scalar> Neg for SquareMatrix<S> {
    type Output = Self;

    fn neg(self) -> Self {
        self.additive_inverse()
    }
}

impl<S: Scalar> Neg for &SquareMatrix<S> {
    type Output = SquareMatrix<S>;

    fn neg(self) -> SquareMatrix<S> {
        self.additive_inverse()
    }
}

// ── Matrix-vector multiplication ────────────────────────────────────

impl<S: Scalar> Mul<&ColumnVector<S>> for &SquareMatrix<S> {
    type Output = ColumnVector<S>;

    #[track_caller]
    fn mul(self, rhs: &ColumnVector<S>) -> ColumnVector<S> {
        or_panic(self.act(rhs))
    }
}

impl<S: Scalar> Mul<ColumnVector<S>> for SquareMatrix<S> {
    type Output = ColumnVector<S>;

    #[track_caller]
    fn mul(self, rhs: ColumnVector<S>) -> ColumnVector<S> {
        or_panic(self.act(&rhs))
    }
}

impl<S: Scalar> Mul<&SquareMatrix<S>> for &RowVector<S> {
    type Output = RowVector<S>;

    #[track_caller]
    fn mul(self, rhs: &SquareMatrix<S>) -> RowVector<S> {
        or_panic(self.act(rhs))
    }
}

impl<S: Scalar> Mul<SquareMatrix<S>> for RowVector<S> {
    type Output = RowVector<S>;

    #[track_caller]
    fn mul(self, rhs: SquareMatrix<S>) -> RowVector<S> {
        or_panic(self.act(&rhs))
    }
}

impl<S: Scalar> Mul<&RowVector<S>> for &ColumnVector<S> {
    type Output = SquareMatrix<S>;

    #[track_caller]
    fn mul(self, rhs: &RowVector<S>) -> SquareMatrix<S> {
        or_panic(self.outer_product(rhs))
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<S: Scalar> Mul<S> for SquareMatrix<S> {
    type Output = Self;

    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl<S: Scalar> Mul<S> for &SquareMatrix<S> {
    type Output = SquareMatrix<S>;

    fn mul(self, rhs: S) -> SquareMatrix<S> {
        self.scale(rhs)
    }
}

// scalar * matrix (concrete impls to avoid orphan rules)
macro_rules! impl_scalar_mul_matrix {
    ($($t:ty),*) => {
        $(
            impl Mul<SquareMatrix<$t>> for $t {
                type Output = SquareMatrix<$t>;

                fn mul(self, rhs: SquareMatrix<$t>) -> SquareMatrix<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&SquareMatrix<$t>> for $t {
                type Output = SquareMatrix<$t>;

                fn mul(self, rhs: &SquareMatrix<$t>) -> SquareMatrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul_matrix!(f32, f64, Complex<f32>, Complex<f64>);

macro_rules! impl_real_mul_complex_matrix {
    ($($t:ty),*) => {
        $(
            impl Mul<SquareMatrix<Complex<$t>>> for $t {
                type Output = SquareMatrix<Complex<$t>>;

                fn mul(self, rhs: SquareMatrix<Complex<$t>>) -> SquareMatrix<Complex<$t>> {
                    rhs.scale_real(self)
                }
            }

            impl Mul<&SquareMatrix<Complex<$t>>> for $t {
                type Output = SquareMatrix<Complex<$t>>;

                fn mul(self, rhs: &SquareMatrix<Complex<$t>>) -> SquareMatrix<Complex<$t>> {
                    rhs.scale_real(self)
                }
            }
        )*
    };
}

impl_real_mul_complex_matrix!(f32, f64);
