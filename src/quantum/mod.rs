//! Dirac notation over the complex vector and matrix types.
//!
//! [`Ket`] wraps a complex column vector, [`Bra`] a complex row vector and
//! [`Operator`] a complex square matrix. They add no arithmetic of their
//! own; they only keep kets, bras and operators from being mixed up.
//!
//! ```
//! use ketspace::quantum::{Bra, Ket, Operator};
//! use ketspace::Complex;
//!
//! let up = Ket::<f64>::from_entries([(1, 0), (0, 0)]);
//! let down = Ket::<f64>::from_entries([(0, 0), (1, 0)]);
//! let x = Operator::<f64>::new([[(0, 0), (1, 0)], [(1, 0), (0, 0)]]);
//!
//! assert_eq!(&x * &up, down);
//! assert_eq!(&down.bra() * &(&x * &up), Complex::new(1.0, 0.0));
//! assert!(x.is_unitary() && x.is_hermitian());
//! ```

// Add and Sub for a newtype, in all four owned/borrowed combinations,
// through its shape-checked `try_add` / `try_sub`.
macro_rules! impl_newtype_binops {
    ($name:ident) => {
        impl_newtype_binops!(@op $name, Add, add, try_add);
        impl_newtype_binops!(@op $name, Sub, sub, try_sub);
    };
    (@op $name:ident, $trait:ident, $method:ident, $checked:ident) => {
        impl<R: $crate::traits::RealScalar> core::ops::$trait for $name<R> {
            type Output = Self;

            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                $crate::error::or_panic(self.$checked(&rhs))
            }
        }

        impl<R: $crate::traits::RealScalar> core::ops::$trait<&$name<R>> for $name<R> {
            type Output = $name<R>;

            #[track_caller]
            fn $method(self, rhs: &$name<R>) -> $name<R> {
                $crate::error::or_panic(self.$checked(rhs))
            }
        }

        impl<R: $crate::traits::RealScalar> core::ops::$trait<$name<R>> for &$name<R> {
            type Output = $name<R>;

            #[track_caller]
            fn $method(self, rhs: $name<R>) -> $name<R> {
                $crate::error::or_panic(self.$checked(&rhs))
            }
        }

        impl<R: $crate::traits::RealScalar> core::ops::$trait<&$name<R>> for &$name<R> {
            type Output = $name<R>;

            #[track_caller]
            fn $method(self, rhs: &$name<R>) -> $name<R> {
                $crate::error::or_panic(self.$checked(rhs))
            }
        }
    };
}

mod bra;
mod ket;
mod operator;

pub use bra::Bra;
pub use ket::Ket;
pub use operator::Operator;
