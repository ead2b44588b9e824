mod ops;
mod square;
mod util;

use core::ops::Index;

use crate::error::{LinalgError, Result};
use crate::traits::{IntoScalar, Scalar};
use crate::vector::{ColumnVector, RowVector};

/// Square `n×n` matrix of real or complex scalars.
///
/// Row-major `Vec<S>` storage; the dimension is fixed at construction and
/// every operation returns a new matrix. Binary operations require equal
/// dimensions: the `try_*` methods return
/// [`LinalgError::DimensionMismatch`], the operator impls panic with the same
/// message.
///
/// # Examples
///
/// ```
/// use ketspace::SquareMatrix;
///
/// let a = SquareMatrix::<f64>::new([[1, 3], [7, 13]]);
/// let b = SquareMatrix::<f64>::new([[23, 31], [41, 47]]);
/// assert_eq!(&a * &b, SquareMatrix::new([[146, 172], [694, 828]]));
///
/// let id = SquareMatrix::<f64>::identity(2);
/// assert_eq!(&id * &a, a);
/// assert_eq!(a[(1, 0)], 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<S> {
    entries: Vec<S>,
    dimension: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<S: Scalar> SquareMatrix<S> {
    /// Create a matrix from a fixed-size grid of rows.
    ///
    /// Entries may be anything convertible into `S`: integer literals for
    /// real matrices, `(re, im)` tuples for complex ones.
    ///
    /// ```
    /// use ketspace::{Complex, SquareMatrix};
    ///
    /// let y = SquareMatrix::<Complex<f64>>::new([[(0, 0), (0, -1)], [(0, 1), (0, 0)]]);
    /// assert_eq!(y[(1, 0)], Complex::i());
    /// ```
    pub fn new<E: IntoScalar<S>, const N: usize>(rows: [[E; N]; N]) -> Self {
        let entries = rows
            .into_iter()
            .flat_map(|row| row.into_iter().map(IntoScalar::into_scalar))
            .collect();
        Self {
            entries,
            dimension: N,
        }
    }

    /// Create a matrix from a runtime grid of rows.
    ///
    /// Fails with [`LinalgError::NotSquare`] naming the first row whose
    /// length differs from the number of rows.
    ///
    /// ```
    /// use ketspace::{LinalgError, SquareMatrix};
    ///
    /// let m = SquareMatrix::<f64>::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    /// assert_eq!(m.dimension(), 2);
    ///
    /// let ragged = SquareMatrix::<f64>::from_rows(vec![vec![1, 2], vec![3]]);
    /// assert_eq!(
    ///     ragged,
    ///     Err(LinalgError::NotSquare { row: 1, columns: 1, expected: 2 })
    /// );
    /// ```
    pub fn from_rows<E, R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        E: IntoScalar<S>,
        R: IntoIterator<Item = E>,
    {
        let rows: Vec<Vec<S>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(IntoScalar::into_scalar).collect())
            .collect();
        let dimension = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != dimension) {
            return Err(LinalgError::NotSquare {
                row,
                columns: r.len(),
                expected: dimension,
            });
        }
        Ok(Self {
            entries: rows.into_iter().flatten().collect(),
            dimension,
        })
    }

    /// Create a `dimension×dimension` matrix from a flat row-major buffer.
    ///
    /// Fails with [`LinalgError::LengthMismatch`] when
    /// `entries.len() != dimension²`.
    pub fn from_row_major(dimension: usize, entries: Vec<S>) -> Result<Self> {
        if entries.len() != dimension * dimension {
            return Err(LinalgError::length_mismatch(
                "from_row_major",
                entries.len(),
                dimension * dimension,
            ));
        }
        Ok(Self { entries, dimension })
    }

    /// Create a matrix by calling `f(i, j)` for every row `i` and column `j`.
    ///
    /// ```
    /// use ketspace::SquareMatrix;
    /// let m = SquareMatrix::from_fn(3, |i, j| (i * 3 + j) as f64);
    /// assert_eq!(m[(2, 1)], 7.0);
    /// ```
    pub fn from_fn(dimension: usize, f: impl Fn(usize, usize) -> S) -> Self {
        let mut entries = Vec::with_capacity(dimension * dimension);
        for i in 0..dimension {
            for j in 0..dimension {
                entries.push(f(i, j));
            }
        }
        Self { entries, dimension }
    }

    /// The zero matrix.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            entries: vec![S::zero(); dimension * dimension],
            dimension,
        }
    }

    /// Ones on the diagonal, zeros elsewhere.
    ///
    /// ```
    /// use ketspace::SquareMatrix;
    /// let id = SquareMatrix::<f64>::identity(3);
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(1, 2)], 0.0);
    /// ```
    pub fn identity(dimension: usize) -> Self {
        Self::from_fn(dimension, |i, j| if i == j { S::one() } else { S::zero() })
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<S> SquareMatrix<S> {
    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of rows.
    #[inline]
    pub fn m(&self) -> usize {
        self.dimension
    }

    /// Number of columns.
    #[inline]
    pub fn n(&self) -> usize {
        self.dimension
    }

    /// All entries in row-major order.
    #[inline]
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    /// Entry at row `i`, column `j`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<&S> {
        if i < self.dimension && j < self.dimension {
            self.entries.get(i * self.dimension + j)
        } else {
            None
        }
    }
}

impl<S: Copy> SquareMatrix<S> {
    /// Lazily iterate over row `i`.
    ///
    /// Panics if `i >= dimension`.
    pub fn row(&self, i: usize) -> impl Iterator<Item = S> + '_ {
        let d = self.dimension;
        self.entries[i * d..(i + 1) * d].iter().copied()
    }

    /// Lazily iterate over column `j`.
    ///
    /// Panics if `j >= dimension`.
    pub fn column(&self, j: usize) -> impl Iterator<Item = S> + '_ {
        let d = self.dimension;
        assert!(j < d, "column {j} out of range for {d}x{d} matrix");
        (0..d).map(move |i| self.entries[i * d + j])
    }

    /// Iterate over rows, each a lazy sequence.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = S> + '_> + '_ {
        (0..self.dimension).map(move |i| self.row(i))
    }

    /// Iterate over columns, each a lazy sequence.
    pub fn columns(&self) -> impl Iterator<Item = impl Iterator<Item = S> + '_> + '_ {
        (0..self.dimension).map(move |j| self.column(j))
    }
}

impl<S: Scalar> SquareMatrix<S> {
    /// Row `i` collected into a [`RowVector`].
    pub fn row_vector(&self, i: usize) -> RowVector<S> {
        RowVector::from_vec(self.row(i).collect())
    }

    /// Column `j` collected into a [`ColumnVector`].
    pub fn column_vector(&self, j: usize) -> ColumnVector<S> {
        ColumnVector::from_vec(self.column(j).collect())
    }
}

impl<S> Index<(usize, usize)> for SquareMatrix<S> {
    type Output = S;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &S {
        assert!(
            i < self.dimension && j < self.dimension,
            "index ({i}, {j}) out of range for {d}x{d} matrix",
            d = self.dimension
        );
        &self.entries[i * self.dimension + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Complex;

    #[test]
    fn new_and_from_rows_agree() {
        let a = SquareMatrix::<f64>::new([[1, 2], [3, 4]]);
        let b = SquareMatrix::<f64>::from_rows([[1, 2], [3, 4]]).unwrap();
        let c = SquareMatrix::from_fn(2, |i, j| (i * 2 + j + 1) as f64);
        let d = SquareMatrix::from_row_major(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
        assert_eq!(a.dimension(), 2);
        assert_eq!((a.m(), a.n()), (2, 2));
    }

    #[test]
    fn single_precision_literals() {
        let a = SquareMatrix::<f32>::new([[1, 2], [3, 4]]);
        assert_eq!(a[(1, 0)], 3.0_f32);
        let b = SquareMatrix::<f32>::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(a, b);
        let c = SquareMatrix::<Complex<f32>>::new([[(0, 1), (1, 0)], [(1, 0), (0, -1)]]);
        assert_eq!(c[(0, 0)], Complex::new(0.0_f32, 1.0));
    }

    #[test]
    fn from_rows_rejects_ragged_grid() {
        let err = SquareMatrix::<f64>::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap_err();
        assert_eq!(
            err,
            LinalgError::NotSquare {
                row: 0,
                columns: 3,
                expected: 2
            }
        );
    }

    #[test]
    fn from_row_major_rejects_wrong_length() {
        let err = SquareMatrix::from_row_major(2, vec![1.0_f64; 3]).unwrap_err();
        assert_eq!(err, LinalgError::length_mismatch("from_row_major", 3, 4));
    }

    #[test]
    fn empty_matrix() {
        let m = SquareMatrix::<f64>::from_rows(Vec::<Vec<f64>>::new()).unwrap();
        assert_eq!(m.dimension(), 0);
        assert_eq!(m, SquareMatrix::zeros(0));
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn identity_and_zeros() {
        let id = SquareMatrix::<Complex<f64>>::identity(2);
        assert_eq!(id[(0, 0)], Complex::new(1.0, 0.0));
        assert_eq!(id[(0, 1)], Complex::new(0.0, 0.0));
        let z = SquareMatrix::<f64>::zeros(3);
        assert!(z.entries().iter().all(|&e| e == 0.0));
        assert_eq!(z.entries().len(), 9);
    }

    #[test]
    fn rows_and_columns() {
        let m = SquareMatrix::<f64>::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.row(1).collect::<Vec<_>>(), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.column(2).collect::<Vec<_>>(), vec![3.0, 6.0, 9.0]);

        let rows: Vec<Vec<f64>> = m.rows().map(Iterator::collect).collect();
        assert_eq!(rows[2], vec![7.0, 8.0, 9.0]);
        let cols: Vec<Vec<f64>> = m.columns().map(Iterator::collect).collect();
        assert_eq!(cols[0], vec![1.0, 4.0, 7.0]);

        assert_eq!(m.row_vector(0), RowVector::from_entries([1, 2, 3]));
        assert_eq!(m.column_vector(1), ColumnVector::from_entries([2, 5, 8]));
    }

    #[test]
    fn get_out_of_range() {
        let m = SquareMatrix::<f64>::identity(2);
        assert_eq!(m.get(1, 1), Some(&1.0));
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_out_of_range_panics() {
        let m = SquareMatrix::<f64>::identity(2);
        let _ = m[(0, 2)];
    }
}
