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

//! The [`Matrix`] type and its operations.

use serde::{Deserialize, Serialize};

use crate::{Float, MatrixError};

/// A small dense matrix with [`Float`] entries.
///
/// The shape is fixed at construction and the matrix is immutable afterwards;
/// all arithmetic returns a new `Matrix` (or a scalar) and leaves the
/// operands unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,

    // Contains the data ordered by row,
    // going left to right, and up and down.
    data: Vec<Float>,
}

impl Matrix {
    /// Creates a `Matrix` from a grid of rows (rows outer, columns inner).
    ///
    /// The grid must have at least one row, and every row must have the
    /// same, nonzero, number of columns; otherwise this fails with
    /// [`MatrixError::MalformedInput`]. Validating once here lets every
    /// later operation rely on rectangularity unconditionally.
    pub fn from_grid(grid: Vec<Vec<Float>>) -> Result<Self, MatrixError> {
        let nrows = grid.len();
        if nrows == 0 {
            return Err(MatrixError::MalformedInput("the grid has no rows".to_string()));
        }
        let ncols = grid[0].len();
        if ncols == 0 {
            return Err(MatrixError::MalformedInput(
                "the first row has no columns".to_string(),
            ));
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in grid.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::MalformedInput(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Creates a `Matrix` from a vector containing the elements of the
    /// matrix, ordered by row.
    ///
    /// # Panics
    /// Panics if `nrows * ncols` does not match the length of `data`.
    #[must_use]
    pub fn from_data(nrows: usize, ncols: usize, data: Vec<Float>) -> Self {
        if nrows * ncols != data.len() {
            panic!("When creating Matrix: number of rows (nrows = {}) and cols (ncols = {}) does not match length of data (data.len() = {})", nrows, ncols, data.len())
        }
        // return
        Self { nrows, ncols, data }
    }

    /// Returns a tuple with number of rows and columns
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Checks whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Gets the index of an element within the `data` array of the Matrix
    fn index(&self, nrow: usize, ncol: usize) -> usize {
        self.ncols * nrow + ncol
    }

    /// Gets an element from the matrix
    pub fn get(&self, nrow: usize, ncol: usize) -> Result<Float, MatrixError> {
        if nrow < self.nrows && ncol < self.ncols {
            let i = self.index(nrow, ncol);
            Ok(self.data[i])
        } else {
            Err(MatrixError::OutOfBounds {
                row: nrow,
                col: ncol,
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }

    /// Returns row `nrow` as a slice.
    ///
    /// # Panics
    /// Panics if `nrow` is past the last row.
    pub fn row(&self, nrow: usize) -> &[Float] {
        assert!(
            nrow < self.nrows,
            "row {} is out of bounds for a {}x{} matrix",
            nrow,
            self.nrows,
            self.ncols
        );
        let start = self.index(nrow, 0);
        &self.data[start..start + self.ncols]
    }

    /// Copies the matrix out as a grid of rows (rows outer, columns inner).
    pub fn to_grid(&self) -> Vec<Vec<Float>> {
        self.data
            .chunks_exact(self.ncols)
            .map(|row| row.to_vec())
            .collect()
    }

    /* LINEAR ALGEBRA */

    /// Calculates the trace of the matrix (sum of diagonal entries).
    ///
    /// Works for a square matrix of any size; a non-square matrix fails
    /// with [`MatrixError::InvalidShape`].
    pub fn trace(&self) -> Result<Float, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::InvalidShape {
                op: "trace",
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        let mut sum = 0.0;
        for i in 0..self.nrows {
            sum += self.data[self.index(i, i)];
        }
        Ok(sum)
    }

    /// Calculates the determinant of a 1x1 or 2x2 matrix.
    ///
    /// A non-square matrix fails with [`MatrixError::InvalidShape`]; a
    /// square matrix larger than 2x2 fails with
    /// [`MatrixError::Unsupported`].
    pub fn determinant(&self) -> Result<Float, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::InvalidShape {
                op: "determinant",
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        if self.nrows > 2 {
            return Err(MatrixError::Unsupported {
                op: "determinant",
                n: self.nrows,
            });
        }

        if self.nrows == 1 {
            Ok(self.data[0])
        } else {
            let g = |r, c| self.data[self.index(r, c)];
            Ok(g(0, 0) * g(1, 1) - g(0, 1) * g(1, 0))
        }
    }

    /// Calculates the inverse of a 1x1 or 2x2 matrix.
    ///
    /// Same shape preconditions as [`determinant`](Self::determinant). A
    /// matrix whose determinant is zero fails with
    /// [`MatrixError::Singular`]. The determinant is computed once and the
    /// singularity branch taken on exact zero; no tolerance is applied.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::InvalidShape {
                op: "inverse",
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        if self.nrows > 2 {
            return Err(MatrixError::Unsupported {
                op: "inverse",
                n: self.nrows,
            });
        }

        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::Singular);
        }
        let inv_det = 1.0 / det;

        let data = if self.nrows == 1 {
            // For a 1x1 matrix the determinant is the single entry.
            vec![inv_det]
        } else {
            let g = |r, c| self.data[self.index(r, c)];
            vec![
                inv_det * g(1, 1),
                -inv_det * g(0, 1),
                -inv_det * g(1, 0),
                inv_det * g(0, 0),
            ]
        };

        Ok(Matrix::from_data(self.nrows, self.ncols, data))
    }

    /// Returns a transposed copy of the matrix.
    ///
    /// Works for any rectangular shape; the result is `ncols x nrows`.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.nrows * self.ncols);
        for c in 0..self.ncols {
            for r in 0..self.nrows {
                data.push(self.data[self.index(r, c)]);
            }
        }
        Matrix::from_data(self.ncols, self.nrows, data)
    }

    /* ARITHMETIC OPERATIONS */

    /// Adds `self` and `other` element-wise.
    ///
    /// Matrices can only be added if their dimensions are the same;
    /// otherwise this fails with [`MatrixError::ShapeMismatch`].
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            return Err(MatrixError::ShapeMismatch {
                lhs_rows: self.nrows,
                lhs_cols: self.ncols,
                rhs_rows: other.nrows,
                rhs_cols: other.ncols,
            });
        }

        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x + *y)
            .collect();

        // return
        Ok(Matrix::from_data(self.nrows, self.ncols, data))
    }

    /// Returns the matrix with every entry sign-flipped.
    #[must_use]
    pub fn negate(&self) -> Matrix {
        let data = self.data.iter().map(|x| -*x).collect();
        Matrix::from_data(self.nrows, self.ncols, data)
    }

    /// Subtracts `other` from `self` element-wise; equivalent to
    /// `self + (-other)`.
    ///
    /// Same shape precondition as [`add`](Self::add), failing with
    /// [`MatrixError::ShapeMismatch`] on mismatch.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != other.ncols || self.nrows != other.nrows {
            return Err(MatrixError::ShapeMismatch {
                lhs_rows: self.nrows,
                lhs_cols: self.ncols,
                rhs_rows: other.nrows,
                rhs_cols: other.ncols,
            });
        }

        let data = std::iter::zip(self.data.iter(), other.data.iter())
            .map(|(x, y)| *x - *y)
            .collect();

        // return
        Ok(Matrix::from_data(self.nrows, self.ncols, data))
    }

    /// Multiplies `self` by `other` (standard matrix product).
    ///
    /// Requires `self.ncols() == other.nrows()`, failing with
    /// [`MatrixError::DimensionMismatch`] otherwise. The result is
    /// `self.nrows() x other.ncols()`.
    pub fn prod(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != other.nrows {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.nrows,
                lhs_cols: self.ncols,
                rhs_rows: other.nrows,
                rhs_cols: other.ncols,
            });
        }

        let mut data = vec![0.0; self.nrows * other.ncols];
        for r in 0..self.nrows {
            for c in 0..other.ncols {
                // (r,c) is the position in the resulting matrix.
                let mut v = 0.0;
                for i in 0..self.ncols {
                    let a = self.data[self.index(r, i)];
                    let b = other.data[other.index(i, c)];
                    v += a * b;
                }
                data[r * other.ncols + c] = v;
            }
        }

        // return
        Ok(Matrix::from_data(self.nrows, other.ncols, data))
    }

    /// Scales the matrix by `s`, element-wise.
    #[must_use]
    pub fn scale(&self, s: Float) -> Matrix {
        let data = self.data.iter().map(|x| *x * s).collect();
        Matrix::from_data(self.nrows, self.ncols, data)
    }
}

impl std::fmt::Display for Matrix {
    /// Renders each row as its entries each followed by a single space,
    /// rows terminated by a newline, without enclosing brackets.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.nrows {
            for c in 0..self.ncols {
                write!(f, "{} ", self.data[self.index(r, c)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::ops::Index<usize> for Matrix {
    type Output = [Float];

    /// Returns row `nrow` as a slice, so `m[r][c]` addresses an element.
    ///
    /// Panics past the last row.
    fn index(&self, nrow: usize) -> &[Float] {
        self.row(nrow)
    }
}

/* OPERATOR LAYER
 *
 * Thin wrappers over the named methods above. The named methods report
 * precondition violations as `MatrixError`; the operators panic with the
 * same message.
 */

impl std::ops::Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, other: &Matrix) -> Self::Output {
        match Matrix::add(self, other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, other: &Matrix) -> Self::Output {
        match Matrix::sub(self, other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, other: &Matrix) -> Self::Output {
        match self.prod(other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl std::ops::Mul<Float> for &Matrix {
    type Output = Matrix;

    fn mul(self, s: Float) -> Self::Output {
        self.scale(s)
    }
}

impl std::ops::Mul<&Matrix> for Float {
    type Output = Matrix;

    /// Scalar-on-the-left multiplication; `2.0 * &m` and `&m * 2.0` agree.
    fn mul(self, m: &Matrix) -> Self::Output {
        m.scale(self)
    }
}
