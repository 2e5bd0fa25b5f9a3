/*
MIT License
Copyright (c) 2026
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use thiserror::Error;

/// Everything that can go wrong when building or operating on a
/// [`Matrix`](crate::Matrix).
///
/// Each error is local to the failing call; the operands are never modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// An operation that requires a square matrix (trace, determinant,
    /// inverse) was invoked on a non-square one.
    #[error("cannot calculate the {op} of a non-square matrix ({nrows}x{ncols})")]
    InvalidShape {
        /// The operation that needed a square matrix.
        op: &'static str,
        /// Number of rows of the offending matrix.
        nrows: usize,
        /// Number of columns of the offending matrix.
        ncols: usize,
    },

    /// Determinant or inverse was requested for a square matrix larger than
    /// 2x2. This is a deliberate capability boundary, not a missing feature.
    #[error("calculating the {op} is not implemented for matrices larger than 2x2 (got {n}x{n})")]
    Unsupported {
        /// The operation that hit the size boundary.
        op: &'static str,
        /// Side length of the offending matrix.
        n: usize,
    },

    /// The inverse of a matrix with zero determinant was requested.
    #[error("this matrix does not have an inverse")]
    Singular,

    /// Matrices being added or subtracted are of different sizes.
    #[error("matrices of different sizes ({lhs_rows}x{lhs_cols} and {rhs_rows}x{rhs_cols}) cannot be added or subtracted")]
    ShapeMismatch {
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_cols: usize,
    },

    /// Matrix multiplication where the left operand's column count does not
    /// match the right operand's row count.
    #[error("size mismatch for matrix multiplication ({lhs_rows}x{lhs_cols} times {rhs_rows}x{rhs_cols})")]
    DimensionMismatch {
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_cols: usize,
    },

    /// A matrix was built from an empty or ragged grid.
    #[error("malformed grid: {0}")]
    MalformedInput(String),

    /// Element access past the matrix bounds.
    #[error("position ({row}, {col}) is out of bounds for a {nrows}x{ncols} matrix")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows of the matrix.
        nrows: usize,
        /// Number of columns of the matrix.
        ncols: usize,
    },
}
