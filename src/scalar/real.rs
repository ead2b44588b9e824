//! Helpers over [`RealScalar`]: rounding, literal conversion and the
//! transcendental functions used by the rest of the crate.
//!
//! All functions are plain IEEE-754 arithmetic. NaN and infinity propagate;
//! nothing here returns an error.

use num_traits::{NumCast, ToPrimitive};

use crate::traits::RealScalar;

/// Number of decimal places used by every rounding comparison in the crate.
pub const ROUNDING_DIGITS: i32 = 6;

/// Convert a numeric literal (`i32`, `f32`, `f64`, ...) to `R`.
///
/// Values that cannot be represented become NaN.
///
/// ```
/// use ketspace::scalar::real::r;
/// let x: f32 = r(3);
/// assert_eq!(x, 3.0);
/// ```
#[inline]
pub fn r<R: RealScalar, N: ToPrimitive>(n: N) -> R {
    <R as NumCast>::from(n).unwrap_or_else(R::nan)
}

/// π in precision `R`.
#[inline]
pub fn pi<R: RealScalar>() -> R {
    R::PI()
}

/// Round to [`ROUNDING_DIGITS`] decimal places.
///
/// ```
/// use ketspace::scalar::real::round;
/// assert_eq!(round(0.9999999_f64), 1.0);
/// assert_eq!(round(0.1234564_f64), 0.123456);
/// ```
#[inline]
pub fn round<R: RealScalar>(x: R) -> R {
    round_to(x, ROUNDING_DIGITS)
}

/// Round to `digits` decimal places (half away from zero).
///
/// Values too large to scale without overflowing are already integral at
/// that precision and are returned unchanged.
pub fn round_to<R: RealScalar>(x: R, digits: i32) -> R {
    let scale = r::<R, _>(10).powi(digits);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / scale
}

/// `x * x`.
#[inline]
pub fn square<R: RealScalar>(x: R) -> R {
    x * x
}

#[inline]
pub fn abs<R: RealScalar>(x: R) -> R {
    x.abs()
}

#[inline]
pub fn sqrt<R: RealScalar>(x: R) -> R {
    x.sqrt()
}

#[inline]
pub fn sin<R: RealScalar>(x: R) -> R {
    x.sin()
}

#[inline]
pub fn cos<R: RealScalar>(x: R) -> R {
    x.cos()
}

#[inline]
pub fn tan<R: RealScalar>(x: R) -> R {
    x.tan()
}

#[inline]
pub fn atan<R: RealScalar>(x: R) -> R {
    x.atan()
}
