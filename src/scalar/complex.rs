use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::scalar::real;
use crate::traits::{IntoScalar, RealScalar};

/// Complex number in Cartesian form, `real + imaginary·i`.
///
/// Immutable value type; every operation returns a new number.
///
/// # Examples
///
/// ```
/// use ketspace::Complex;
///
/// let a = Complex::new(5.0_f64, 7.0);
/// let b: Complex<f64> = (11.0, 13.0).into();
/// assert_eq!(a * b, Complex::new(-36.0, 142.0));
/// assert_eq!(a.conjugate(), Complex::new(5.0, -7.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<R> {
    pub real: R,
    pub imaginary: R,
}

impl<R: RealScalar> Complex<R> {
    #[inline]
    pub fn new(real: R, imaginary: R) -> Self {
        Self { real, imaginary }
    }

    /// `-1 + 0i`.
    #[inline]
    pub fn negative_one() -> Self {
        Self::new(-R::one(), R::zero())
    }

    /// `2 + 0i`.
    #[inline]
    pub fn two() -> Self {
        Self::new(R::one() + R::one(), R::zero())
    }

    /// The imaginary unit `0 + 1i`.
    #[inline]
    pub fn i() -> Self {
        Self::new(R::zero(), R::one())
    }

    /// Negate the imaginary part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.real, -self.imaginary)
    }

    /// `sqrt(re² + im²)`.
    #[inline]
    pub fn modulus(self) -> R {
        (self.real * self.real + self.imaginary * self.imaginary).sqrt()
    }

    /// `self * self`.
    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    /// Negate both components.
    #[inline]
    pub fn additive_inverse(self) -> Self {
        -self
    }

    /// Round both components independently to six decimal places.
    ///
    /// ```
    /// use ketspace::Complex;
    /// use num_traits::One;
    ///
    /// assert_eq!(Complex::new(0.9999999_f64, 0.0000001).round(), Complex::one());
    /// assert_ne!(Complex::new(0.999999_f64, 0.000001).round(), Complex::one());
    /// ```
    #[inline]
    pub fn round(self) -> Self {
        Self::new(real::round(self.real), real::round(self.imaginary))
    }

    /// Component-wise square root of the absolute values: `sqrt|re| + sqrt|im|·i`.
    ///
    /// This is not the principal complex square root.
    #[inline]
    pub fn sqrt_parts(self) -> Self {
        Self::new(self.real.abs().sqrt(), self.imaginary.abs().sqrt())
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl<R: RealScalar> Add for Complex<R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }
}

impl<R: RealScalar> Sub for Complex<R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }
}

impl<R: RealScalar> Mul for Complex<R> {
    type Output = Self;

    /// `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.real * rhs.real - self.imaginary * rhs.imaginary,
            self.real * rhs.imaginary + rhs.real * self.imaginary,
        )
    }
}

impl<R: RealScalar> Mul<R> for Complex<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::new(self.real * rhs, self.imaginary * rhs)
    }
}

impl<R: RealScalar> Div for Complex<R> {
    type Output = Self;

    /// Multiply numerator and denominator by the conjugate of the
    /// denominator, then divide both parts by the real part of
    /// `denominator * conj(denominator)`.
    fn div(self, rhs: Self) -> Self {
        let conjugate = rhs.conjugate();
        let numerator = self * conjugate;
        let divisor = rhs * conjugate;
        // Imaginary part is a·(-b) + a·b, which cancels exactly for finite inputs.
        debug_assert!(
            divisor.imaginary == R::zero() || !divisor.imaginary.is_finite(),
            "z * conj(z) has nonzero imaginary part {:?}",
            divisor.imaginary
        );
        Self::new(numerator.real / divisor.real, numerator.imaginary / divisor.real)
    }
}

impl<R: RealScalar> Neg for Complex<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.real, -self.imaginary)
    }
}

// real * complex (concrete impls to avoid orphan rules)
macro_rules! impl_real_times_complex {
    ($($t:ty),*) => {
        $(
            impl Mul<Complex<$t>> for $t {
                type Output = Complex<$t>;

                #[inline]
                fn mul(self, rhs: Complex<$t>) -> Complex<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_real_times_complex!(f32, f64);

impl<R: RealScalar> Zero for Complex<R> {
    #[inline]
    fn zero() -> Self {
        Self::new(R::zero(), R::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }
}

impl<R: RealScalar> One for Complex<R> {
    #[inline]
    fn one() -> Self {
        Self::new(R::one(), R::zero())
    }
}

impl<R: RealScalar> core::iter::Sum for Complex<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, z| acc + z)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<R: RealScalar> From<R> for Complex<R> {
    #[inline]
    fn from(real: R) -> Self {
        Self::new(real, R::zero())
    }
}

impl<R: RealScalar> From<(R, R)> for Complex<R> {
    #[inline]
    fn from((real, imaginary): (R, R)) -> Self {
        Self::new(real, imaginary)
    }
}

impl<R: RealScalar> From<i32> for Complex<R> {
    #[inline]
    fn from(value: i32) -> Self {
        Self::new(real::r(value), R::zero())
    }
}

impl<R: RealScalar> From<(i32, i32)> for Complex<R> {
    #[inline]
    fn from((re, im): (i32, i32)) -> Self {
        Self::new(real::r(re), real::r(im))
    }
}

impl<R: RealScalar> From<num_complex::Complex<R>> for Complex<R> {
    #[inline]
    fn from(z: num_complex::Complex<R>) -> Self {
        Self::new(z.re, z.im)
    }
}

impl<R: RealScalar> From<Complex<R>> for num_complex::Complex<R> {
    #[inline]
    fn from(z: Complex<R>) -> Self {
        num_complex::Complex::new(z.real, z.imaginary)
    }
}

// Constructor arguments: real literals, `(re, im)` pairs, and complex values.
macro_rules! impl_into_complex {
    ($($t:ty),*) => {
        $(
            impl<R: RealScalar> IntoScalar<Complex<R>> for $t {
                #[inline]
                fn into_scalar(self) -> Complex<R> {
                    Complex::new(real::r(self), R::zero())
                }
            }
        )*
    };
}

impl_into_complex!(i32, f32, f64);

impl<R, A, B> IntoScalar<Complex<R>> for (A, B)
where
    R: RealScalar,
    A: IntoScalar<R>,
    B: IntoScalar<R>,
{
    #[inline]
    fn into_scalar(self) -> Complex<R> {
        Complex::new(self.0.into_scalar(), self.1.into_scalar())
    }
}

impl<R: RealScalar> IntoScalar<Complex<R>> for Complex<R> {
    #[inline]
    fn into_scalar(self) -> Complex<R> {
        self
    }
}

impl<R: RealScalar> IntoScalar<Complex<R>> for num_complex::Complex<R> {
    #[inline]
    fn into_scalar(self) -> Complex<R> {
        self.into()
    }
}

impl<R: RealScalar> fmt::Display for Complex<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary.is_sign_negative() {
            write!(f, "{} - {}i", self.real, -self.imaginary)
        } else {
            write!(f, "{} + {}i", self.real, self.imaginary)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type C = Complex<f64>;

    fn c(re: f64, im: f64) -> C {
        Complex::new(re, im)
    }

    #[test]
    fn add_sub() {
        assert_eq!(c(1.0, 2.0) + c(3.0, -5.0), c(4.0, -3.0));
        assert_eq!(c(1.0, 2.0) - c(3.0, -5.0), c(-2.0, 7.0));
    }

    #[test]
    fn multiply() {
        assert_eq!(c(5.0, 7.0) * c(11.0, 13.0), c(-36.0, 142.0));
        assert_eq!(c(0.0, 1.0) * c(0.0, 1.0), c(-1.0, 0.0));
        assert_eq!(c(2.0, -3.0) * 2.0, c(4.0, -6.0));
        assert_eq!(2.0 * c(2.0, -3.0), c(4.0, -6.0));
    }

    #[test]
    fn divide() {
        // (-36 + 142i) / (11 + 13i) = 5 + 7i
        assert_eq!((c(-36.0, 142.0) / c(11.0, 13.0)).round(), c(5.0, 7.0));
        assert_eq!(c(1.0, 0.0) / c(0.0, 1.0), c(0.0, -1.0));
    }

    #[test]
    fn divide_by_zero_follows_ieee() {
        let q = c(1.0, 1.0) / C::zero();
        assert!(q.real.is_nan() || q.real.is_infinite());
        let q = C::zero() / C::zero();
        assert!(q.real.is_nan());
    }

    #[test]
    fn conjugate_modulus_square() {
        assert_eq!(c(3.0, 4.0).conjugate(), c(3.0, -4.0));
        assert_eq!(c(3.0, 4.0).modulus(), 5.0);
        assert_eq!(c(1.0, 1.0).square(), c(0.0, 2.0));
        assert_eq!(c(1.0, -2.0).additive_inverse(), c(-1.0, 2.0));
        assert_eq!(-c(1.0, -2.0), c(-1.0, 2.0));
    }

    #[test]
    fn sqrt_parts() {
        assert_eq!(c(-4.0, 9.0).sqrt_parts(), c(2.0, 3.0));
    }

    #[test]
    fn constants() {
        assert_eq!(C::zero(), c(0.0, 0.0));
        assert_eq!(C::one(), c(1.0, 0.0));
        assert_eq!(C::negative_one(), c(-1.0, 0.0));
        assert_eq!(C::two(), c(2.0, 0.0));
        assert_eq!(C::i() * C::i(), C::negative_one());
    }

    #[test]
    fn rounding_boundary() {
        assert_eq!(c(0.9999999, 0.0000001).round(), C::one());
        assert_ne!(c(0.999999, 0.000001).round(), C::one());
    }

    #[test]
    fn conversions() {
        let from_real: C = 2.5_f64.into();
        assert_eq!(from_real, c(2.5, 0.0));
        let from_pair: C = (1.0_f64, -1.0_f64).into();
        assert_eq!(from_pair, c(1.0, -1.0));
        let from_ints: Complex<f32> = (3_i32, 4_i32).into();
        assert_eq!(from_ints, Complex::new(3.0, 4.0));
        let from_int = Complex::<f32>::from(7_i32);
        assert_eq!(from_int, Complex::new(7.0, 0.0));
    }

    #[test]
    fn sum_iterator() {
        let total: C = [c(1.0, 1.0), c(2.0, -3.0), c(0.5, 0.0)].into_iter().sum();
        assert_eq!(total, c(3.5, -2.0));
    }

    #[test]
    fn display() {
        assert_eq!(c(1.0, 2.0).to_string(), "1 + 2i");
        assert_eq!(c(1.5, -2.0).to_string(), "1.5 - 2i");
    }

    #[test]
    fn num_complex_interop() {
        let z: num_complex::Complex<f64> = c(1.0, 2.0).into();
        assert_eq!(z, num_complex::Complex::new(1.0, 2.0));
        let back: C = z.into();
        assert_eq!(back, c(1.0, 2.0));

        let v = crate::vector::RowVector::<C>::from_entries([z, num_complex::Complex::new(0.0, -1.0)]);
        assert_eq!(v[1], c(0.0, -1.0));
    }
}
