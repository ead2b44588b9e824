use core::ops::{Add, Div, Mul, Sub};

use crate::scalar::complex::Complex;
use crate::scalar::real;
use crate::traits::RealScalar;

/// Complex number in polar form: `magnitude · e^(i·phase)`.
///
/// Every arithmetic result has its phase normalized into `[0, 2π)`.
/// Addition and subtraction have no closed form here and go through
/// [`Complex`]; multiplication and division act on magnitude and phase
/// directly.
///
/// # Examples
///
/// ```
/// use ketspace::{Complex, Polar};
/// use core::f64::consts::PI;
///
/// let a = Polar::new(2.0_f64, PI / 4.0);
/// let b = Polar::new(3.0_f64, PI / 2.0);
/// let p = a * b;
/// assert_eq!(p.magnitude, 6.0);
/// assert!((p.phase - 3.0 * PI / 4.0).abs() < 1e-12);
///
/// let z = Polar::from_cartesian(Complex::new(0.0_f64, 1.0));
/// assert_eq!(z.round(), Polar::new(1.0, 1.570796));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar<R> {
    pub magnitude: R,
    pub phase: R,
}

impl<R: RealScalar> Polar<R> {
    /// Construct without normalizing the phase.
    #[inline]
    pub fn new(magnitude: R, phase: R) -> Self {
        Self { magnitude, phase }
    }

    /// Map any angle into `[0, 2π)`.
    pub fn normalize_phase(phase: R) -> R {
        let full_turn = R::TAU();
        let wrapped = (phase % full_turn + full_turn) % full_turn;
        // (-ε % 2π) + 2π rounds up to exactly 2π for tiny negative angles
        if wrapped >= full_turn {
            R::zero()
        } else {
            wrapped
        }
    }

    /// `|z|` and `atan2(im, re)`, phase normalized.
    pub fn from_cartesian(z: Complex<R>) -> Self {
        let (magnitude, phase) = num_complex::Complex::from(z).to_polar();
        Self::new(magnitude, Self::normalize_phase(phase))
    }

    /// `magnitude·cos(phase) + magnitude·sin(phase)·i`.
    pub fn to_cartesian(self) -> Complex<R> {
        num_complex::Complex::from_polar(self.magnitude, self.phase).into()
    }

    /// Round magnitude and phase to six decimal places.
    pub fn round(self) -> Self {
        Self::new(real::round(self.magnitude), real::round(self.phase))
    }
}

impl<R: RealScalar> Add for Polar<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_cartesian(self.to_cartesian() + rhs.to_cartesian())
    }
}

impl<R: RealScalar> Sub for Polar<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_cartesian(self.to_cartesian() - rhs.to_cartesian())
    }
}

impl<R: RealScalar> Mul for Polar<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.magnitude * rhs.magnitude,
            Self::normalize_phase(self.phase + rhs.phase),
        )
    }
}

impl<R: RealScalar> Div for Polar<R> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(
            self.magnitude / rhs.magnitude,
            Self::normalize_phase(self.phase - rhs.phase),
        )
    }
}

impl<R: RealScalar> From<Complex<R>> for Polar<R> {
    #[inline]
    fn from(z: Complex<R>) -> Self {
        Self::from_cartesian(z)
    }
}

impl<R: RealScalar> From<Polar<R>> for Complex<R> {
    #[inline]
    fn from(p: Polar<R>) -> Self {
        p.to_cartesian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    type P = Polar<f64>;

    fn p(magnitude: f64, phase: f64) -> P {
        Polar::new(magnitude, phase)
    }

    #[test]
    fn sum_goes_through_cartesian() {
        let sum = p(1.0, 0.0) + p(1.0, PI / 2.0);
        assert_eq!(sum.round(), p(2.0_f64.sqrt(), PI / 4.0).round());
    }

    #[test]
    fn difference_phase_is_normalized() {
        let difference = p(1.0, 0.0) - p(1.0, PI / 2.0);
        assert_eq!(difference.round(), p(2.0_f64.sqrt(), 7.0 * PI / 4.0).round());
    }

    #[test]
    fn product_multiplies_magnitudes_and_adds_phases() {
        let a = p(2.0_f64.sqrt(), PI / 4.0);
        let b = p(2.0_f64.sqrt(), 3.0 * PI / 4.0);
        let product = a * b;
        assert_eq!(product.round(), p(2.0, PI).round());
    }

    #[test]
    fn quotient_divides_magnitudes_and_subtracts_phases() {
        let a = p(2.0_f64.sqrt(), PI / 4.0);
        let b = p(2.0_f64.sqrt(), 3.0 * PI / 4.0);
        let quotient = a / b;
        assert_eq!(quotient.magnitude, 1.0);
        assert_eq!(real::round(quotient.phase), real::round(1.5 * PI));
    }

    #[test]
    fn another_quotient() {
        let a = p(10.0_f64.sqrt(), (-3.0_f64).atan());
        let b = p(17.0_f64.sqrt(), 4.0_f64.atan());
        let quotient = a / b;
        assert!((quotient.magnitude - 0.766_964_99).abs() < 1e-5);
        assert!((quotient.phase - 3.708_321_9).abs() < 1e-5);
    }

    #[test]
    fn normalize_phase_range() {
        let tau = 2.0 * core::f64::consts::PI;
        for phase in [-10.0, -tau, -1e-18, 0.0, 1.0, tau, 3.0 * tau + 0.5] {
            let n = Polar::<f64>::normalize_phase(phase);
            assert!((0.0..tau).contains(&n), "{phase} -> {n}");
        }
    }

    #[test]
    fn cartesian_round_trip() {
        let z = Complex::new(-3.0_f64, 4.0);
        let back = Polar::from_cartesian(z).to_cartesian();
        assert_eq!(back.round(), z);
        let back: Complex<f64> = Polar::from(z).into();
        assert_eq!(back.round(), z);
    }
}
