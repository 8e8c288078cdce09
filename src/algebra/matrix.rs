use crate::algebra::{FloatT, IndexError, MatrixShapeError, Vector, VectorMath};
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size queries shared by dense matrix types.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
    fn is_empty(&self) -> bool {
        self.nrows() == 0 || self.ncols() == 0
    }
}

/// Dense matrix of fixed size, stored in row major format.
///
/// Row major storage means that `data()` is laid out exactly like the
/// flattened allocation vectors produced by the solver, i.e. entry
/// `(row, col)` lives at `row * ncols + col`.
///
/// Rows and columns are extracted as fresh [`Vector`]s.  They are copies,
/// so modifying them never touches the matrix.
///
/// __Example usage__ :
/// ```
/// use transport_bfs::algebra::*;
/// let costs = Matrix::from(&[
///     [4., 2., 7.],
///     [1., 9., 1.],
/// ]);
/// assert_eq!(costs.size(), (2, 3));
/// assert_eq!(costs[(1, 2)], 1.);
/// assert_eq!(costs.col(1).unwrap().as_slice(), &[2., 9.]);
/// assert_eq!(costs.argmin(), Some((1, 0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<T = f64> {
    /// number of rows
    m: usize,
    /// number of columns
    n: usize,
    /// vector of data in row major format
    data: Vec<T>,
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    /// Matrix from row major data
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Result<Self, MatrixShapeError> {
        let (m, n) = size;
        if m * n != src.len() {
            return Err(MatrixShapeError::IncompatibleDimension);
        }
        Ok(Self {
            m,
            n,
            data: src.to_vec(),
        })
    }

    /// Matrix from a collection of equal length rows
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixShapeError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.as_ref().len());

        let mut data = Vec::with_capacity(m * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MatrixShapeError::IncompatibleDimension);
            }
            data.extend_from_slice(row);
        }
        Ok(Self { m, n, data })
    }

    #[inline]
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.n + idx.1
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    fn check_bounds(&self, idx: (usize, usize)) -> Result<usize, IndexError> {
        let (row, col) = idx;
        if row < self.m && col < self.n {
            Ok(self.index_linear(idx))
        } else {
            Err(IndexError::Matrix {
                row,
                col,
                nrows: self.m,
                ncols: self.n,
            })
        }
    }

    /// Checked element read
    pub fn get(&self, idx: (usize, usize)) -> Result<T, IndexError> {
        let lidx = self.check_bounds(idx)?;
        Ok(self.data[lidx])
    }

    /// Checked element write
    pub fn set(&mut self, idx: (usize, usize), value: T) -> Result<(), IndexError> {
        let lidx = self.check_bounds(idx)?;
        self.data[lidx] = value;
        Ok(())
    }

    /// Borrowed view of a single row
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.m);
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Copy of row `row`
    pub fn row(&self, row: usize) -> Result<Vector<T>, IndexError> {
        if row >= self.m {
            return Err(IndexError::Matrix {
                row,
                col: 0,
                nrows: self.m,
                ncols: self.n,
            });
        }
        Ok(Vector::from(self.row_slice(row)))
    }

    /// Copy of column `col`
    pub fn col(&self, col: usize) -> Result<Vector<T>, IndexError> {
        if col >= self.n {
            return Err(IndexError::Matrix {
                row: 0,
                col,
                nrows: self.m,
                ncols: self.n,
            });
        }
        Ok(self.col_iter(col).collect())
    }

    /// Iterator over the entries of column `col`, top to bottom
    pub fn col_iter(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        assert!(col < self.n);
        self.data.iter().skip(col).step_by(self.n).copied()
    }

    /// Coordinates of the smallest (most negative) entry.
    ///
    /// The scan is row major, so on ties the first entry in row
    /// major order wins.  Returns `None` for an empty matrix.
    pub fn argmin(&self) -> Option<(usize, usize)> {
        self.data
            .argmin()
            .map(|lidx| (lidx / self.n, lidx % self.n))
    }
}

impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Self { m: M, n: N, data }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: FloatT,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.m {
            write!(f, "[ ")?;
            for j in 0..self.n {
                write!(f, " {}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
