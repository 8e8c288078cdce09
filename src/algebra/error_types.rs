use thiserror::Error;

/// Error type returned by checked element access on vectors and matrices.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// Vector index outside of `[0, len)`
    #[error("index {index} out of range for vector of length {len}")]
    Vector { index: usize, len: usize },
    /// Matrix coordinates outside of the matrix dimensions
    #[error("index ({row}, {col}) out of range for {nrows}x{ncols} matrix")]
    Matrix {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
}

/// Error type returned by matrix construction from user data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixShapeError {
    /// Row lengths disagree, or the data length is not rows x cols
    #[error("Incompatible dimensions")]
    IncompatibleDimension,
}
