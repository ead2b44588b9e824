use core::fmt;

use num_traits::Float;

use crate::traits::Scalar;

use super::SquareMatrix;

// ── Map / aggregation ───────────────────────────────────────────────

impl<S: Scalar> SquareMatrix<S> {
    /// Apply a function to every entry, producing a new matrix.
    ///
    /// ```
    /// use ketspace::SquareMatrix;
    /// let m = SquareMatrix::<f64>::new([[1, 4], [9, 16]]);
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U: Scalar>(&self, f: impl Fn(S) -> U) -> SquareMatrix<U> {
        SquareMatrix {
            entries: self.entries.iter().map(|&e| f(e)).collect(),
            dimension: self.dimension,
        }
    }

    /// Sum of all entries.
    pub fn sum(&self) -> S {
        self.entries.iter().fold(S::zero(), |acc, &e| acc + e)
    }

    /// Negate every entry.
    pub fn additive_inverse(&self) -> Self {
        self.map(|e| -e)
    }

    /// Round every entry to six decimal places.
    pub fn round(&self) -> Self {
        self.map(Scalar::rounded)
    }

    /// Exact entry-by-entry equality in row-major order, no rounding.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.entries == other.entries
    }

    /// Frobenius norm `sqrt(Σ |a_ij|²)`.
    pub fn frobenius_norm(&self) -> S::Real {
        self.entries
            .iter()
            .fold(S::zero(), |acc, &e| acc + e * e.conj())
            .re()
            .sqrt()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<S: fmt::Display> fmt::Display for SquareMatrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dimension;

        let mut widths: Vec<usize> = vec![0; d];
        for (k, e) in self.entries.iter().enumerate() {
            let j = k % d;
            widths[j] = widths[j].max(e.to_string().chars().count());
        }

        for i in 0..d {
            write!(f, "│")?;
            for j in 0..d {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self.entries[i * d + j], width = widths[j])?;
            }
            write!(f, "│")?;
            if i + 1 < d {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
