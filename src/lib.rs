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

#![deny(missing_docs)]

//! A small dense-matrix arithmetic library.
//!
//! It supports the handful of operations needed for Kalman-filter style
//! computations over very small matrices: addition, negation, subtraction,
//! scalar and matrix multiplication, transpose, trace, determinant and
//! inverse. Determinant and inverse are deliberately restricted to 1x1 and
//! 2x2 matrices; everything else works for any rectangular shape.
//!
//! Matrices are immutable after construction. Every operation either returns
//! a new [`Matrix`], a scalar, or a [`MatrixError`], and leaves its operands
//! untouched.

mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;

/// The kind of floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// Creates a matrix of zeroes.
///
/// # Panics
/// Panics if `height` or `width` is zero; a matrix needs at least
/// one row and one column.
#[must_use]
pub fn zeroes(height: usize, width: usize) -> Matrix {
    assert!(
        height > 0 && width > 0,
        "a matrix needs at least one row and one column (got {}x{})",
        height,
        width
    );
    Matrix::from_data(height, width, vec![0.0; height * width])
}

/// Creates an `n` x `n` identity matrix.
///
/// # Panics
/// Panics if `n` is zero.
#[must_use]
pub fn identity(n: usize) -> Matrix {
    assert!(n > 0, "a matrix needs at least one row and one column");
    let mut data = vec![0.0; n * n];
    for i in 0..n {
        data[i * (n + 1)] = 1.0;
    }
    Matrix::from_data(n, n, data)
}
