use core::fmt::{Debug, Display};
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::{Float, FloatConst, NumCast, One, Zero};

use crate::scalar::complex::Complex;
use crate::scalar::real;

/// Trait for the IEEE-754 real types a vector space can be built over.
///
/// Implemented for `f32` and `f64`. Everything generic over precision in this
/// crate is parameterized by a `RealScalar`.
pub trait RealScalar:
    Float + FloatConst + NumCast + Default + Debug + Display + Send + Sync + 'static
{
}

impl RealScalar for f32 {}
impl RealScalar for f64 {}

/// Trait for vector and matrix entries: a ring with conjugation.
///
/// Covers real floats (`f32`, `f64`), where conjugation is the identity, and
/// [`Complex<f32>`] / [`Complex<f64>`]. One generic `Vector` and
/// `SquareMatrix` implementation serves both.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Display
    + Default
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The real component type (`Self` for reals, `R` for `Complex<R>`).
    type Real: RealScalar;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for reals).
    fn im(self) -> Self::Real;

    /// Absolute value / modulus.
    fn modulus(self) -> Self::Real;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;

    /// Multiply by a real factor.
    fn scale(self, factor: Self::Real) -> Self;

    /// Round every component to [`ROUNDING_DIGITS`](crate::ROUNDING_DIGITS) decimal places.
    fn rounded(self) -> Self;
}

/// Conversion of a constructor argument into the scalar type `S`.
///
/// `f32` has no `From<i32>`, so constructors take `IntoScalar` instead of
/// `Into`: integer and float literals convert at any precision, `(re, im)`
/// pairs and real literals convert to complex scalars.
///
/// ```
/// use ketspace::{Complex, RowVector, SquareMatrix};
///
/// let v = RowVector::<f32>::from_entries([1, 2, 3]);
/// assert_eq!(v[2], 3.0_f32);
///
/// let m = SquareMatrix::<Complex<f32>>::new([[(1.0, 0.0), (0.0, 1.5)], [(2.0, 0.0), (0.0, -1.0)]]);
/// assert_eq!(m[(0, 1)], Complex::new(0.0, 1.5));
/// ```
pub trait IntoScalar<S> {
    fn into_scalar(self) -> S;
}

macro_rules! impl_into_real {
    ($($t:ty),*) => {
        $(
            impl<R: RealScalar> IntoScalar<R> for $t {
                #[inline]
                fn into_scalar(self) -> R {
                    real::r(self)
                }
            }
        )*
    };
}

impl_into_real!(i32, f32, f64);

macro_rules! impl_scalar_real {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                type Real = $t;

                #[inline] fn conj(self) -> $t { self }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn im(self) -> $t { 0.0 }
                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn from_real(r: $t) -> $t { r }
                #[inline] fn scale(self, factor: $t) -> $t { self * factor }
                #[inline] fn rounded(self) -> $t { real::round(self) }
            }
        )*
    };
}

impl_scalar_real!(f32, f64);

impl<R: RealScalar> Scalar for Complex<R> {
    type Real = R;

    #[inline]
    fn conj(self) -> Self {
        self.conjugate()
    }

    #[inline]
    fn re(self) -> R {
        self.real
    }

    #[inline]
    fn im(self) -> R {
        self.imaginary
    }

    #[inline]
    fn modulus(self) -> R {
        Complex::modulus(self)
    }

    #[inline]
    fn from_real(r: R) -> Self {
        Complex::new(r, R::zero())
    }

    #[inline]
    fn scale(self, factor: R) -> Self {
        self * factor
    }

    #[inline]
    fn rounded(self) -> Self {
        Complex::round(self)
    }
}
