//! Real and complex scalars.
//!
//! [`real`] holds the rounding and literal-conversion helpers shared by every
//! precision, [`complex::Complex`] is the Cartesian complex number and
//! [`polar::Polar`] its magnitude/phase form.

pub mod complex;
pub mod polar;
pub mod real;

pub use complex::Complex;
pub use polar::Polar;
pub use real::ROUNDING_DIGITS;
