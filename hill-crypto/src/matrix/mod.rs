//! # Matrix Module
//!
//! Provides the immutable [`Matrix`] of real-valued cells used for keys, plaintext and
//! ciphertext. Construction validates the grid; every operation in [`matrix_ops`] returns a
//! new matrix and leaves its inputs untouched.

pub mod matrix_ops;

use crate::errors::HillCipherError;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A fixed-size R×C grid of real numbers, stored row-major.
///
/// Equality is exact elementwise equality; use [`Matrix::approx_eq`] for a tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::EmptyMatrix` if there are no rows or the first row is empty,
    /// and `HillCipherError::RaggedInput` if any row differs in length from the first one.
    pub fn try_from_rows(data: Vec<Vec<f64>>) -> Result<Self, HillCipherError> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(HillCipherError::EmptyMatrix(format!(
                "matrix needs at least one row and one column, got {}x{}",
                rows, cols
            )));
        }

        if let Some((row, found)) = data
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(HillCipherError::RaggedInput {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            rows,
            cols,
            cells: data.into_iter().flatten().collect(),
        })
    }

    /// Same as [`Matrix::try_from_rows`] for integer literal data.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::matrix::Matrix;
    /// let key = Matrix::from_i64_rows(vec![vec![3, 3], vec![2, 5]]).unwrap();
    /// assert_eq!(key.determinant().unwrap(), 9.0);
    /// ```
    pub fn from_i64_rows(data: Vec<Vec<i64>>) -> Result<Self, HillCipherError> {
        Self::try_from_rows(
            data.into_iter()
                .map(|row| row.into_iter().map(|v| v as f64).collect())
                .collect(),
        )
    }

    /// Builds an R×C matrix from cells listed row by row.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::EmptyMatrix` for a zero dimension and
    /// `HillCipherError::DimensionMismatch` if `cells.len() != rows * cols`.
    pub fn try_from_row_major(
        rows: usize,
        cols: usize,
        cells: Vec<f64>,
    ) -> Result<Self, HillCipherError> {
        if rows == 0 || cols == 0 {
            return Err(HillCipherError::EmptyMatrix(format!(
                "matrix needs at least one row and one column, got {}x{}",
                rows, cols
            )));
        }
        if cells.len() != rows * cols {
            return Err(HillCipherError::DimensionMismatch(format!(
                "{} cells cannot fill a {}x{} matrix",
                cells.len(),
                rows,
                cols
            )));
        }

        Ok(Self { rows, cols, cells })
    }

    /// Creates an identity matrix of size `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        assert!(n > 0, "identity matrix needs a positive size");
        let mut cells = vec![0.0; n * n];
        for i in 0..n {
            cells[i * n + i] = 1.0;
        }
        Self {
            rows: n,
            cols: n,
            cells,
        }
    }

    /// Reads a matrix from a JSON array of rows, e.g. `[[3, 3], [2, 5]]`.
    ///
    /// # Errors
    ///
    /// Malformed JSON fails with `HillCipherError::SerializationError`; well-formed rows that
    /// do not make a matrix fail as in [`Matrix::try_from_rows`].
    pub fn from_json(json: &str) -> Result<Self, HillCipherError> {
        let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
        Self::try_from_rows(rows)
    }

    /// Writes the matrix as a JSON array of rows.
    pub fn to_json(&self) -> Result<String, HillCipherError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) is outside a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Returns a view of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not a row of the matrix.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(
            row < self.rows,
            "row {} is outside a {}x{} matrix",
            row,
            self.rows,
            self.cols
        );
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = HillCipherError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::try_from_rows(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix
            .cells
            .chunks(matrix.cols)
            .map(<[f64]>::to_vec)
            .collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() -> Result<(), HillCipherError> {
        let m = Matrix::try_from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(!m.is_square());
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.cells(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        Ok(())
    }

    #[test]
    fn test_ragged_input_rejected() {
        let result = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]]);
        assert!(matches!(
            result,
            Err(HillCipherError::RaggedInput {
                row: 1,
                expected: 2,
                found: 1
            })
        ));

        let result = Matrix::from_i64_rows(vec![vec![1, 2], vec![3, 4, 5]]);
        assert!(matches!(result, Err(HillCipherError::RaggedInput { .. })));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            Matrix::try_from_rows(Vec::new()),
            Err(HillCipherError::EmptyMatrix(_))
        ));
        assert!(matches!(
            Matrix::try_from_rows(vec![Vec::new(), Vec::new()]),
            Err(HillCipherError::EmptyMatrix(_))
        ));
        assert!(Matrix::try_from_row_major(0, 3, Vec::new()).is_err());
    }

    #[test]
    fn test_row_major_construction() -> Result<(), HillCipherError> {
        let m = Matrix::try_from_row_major(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
        assert_eq!(m, Matrix::from_i64_rows(vec![vec![1, 2], vec![3, 4]])?);

        assert!(matches!(
            Matrix::try_from_row_major(2, 2, vec![1.0, 2.0, 3.0]),
            Err(HillCipherError::DimensionMismatch(_))
        ));
        Ok(())
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let m = Matrix::identity(2);
        let _ = m.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "row 2 is outside a 2x3 matrix")]
    fn test_row_out_of_range_panics() {
        let m = Matrix::from_i64_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let _ = m.row(2);
    }

    #[test]
    fn test_identity() {
        let expected3 = Matrix::try_from_rows(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert_eq!(Matrix::identity(3), expected3);
        assert_eq!(Matrix::identity(1).cells(), &[1.0]);
    }

    #[test]
    fn test_exact_equality() -> Result<(), HillCipherError> {
        let a = Matrix::from_i64_rows(vec![vec![1, 2], vec![3, 4]])?;
        let b = Matrix::try_from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0 + 1e-12]])?;
        let row = Matrix::from_i64_rows(vec![vec![1, 2, 3, 4]])?;
        assert_ne!(a, b);
        assert_ne!(a, row);
        assert_eq!(a, a.clone());
        Ok(())
    }

    #[test]
    fn test_json_round_trip() -> Result<(), HillCipherError> {
        let key = Matrix::from_json("[[3, 3], [2, 5]]")?;
        assert_eq!(key, Matrix::from_i64_rows(vec![vec![3, 3], vec![2, 5]])?);
        assert_eq!(key.to_json()?, "[[3.0,3.0],[2.0,5.0]]");

        assert!(matches!(
            Matrix::from_json("[[1, 2], [3]]"),
            Err(HillCipherError::RaggedInput {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
        assert!(matches!(
            Matrix::from_json("[]"),
            Err(HillCipherError::EmptyMatrix(_))
        ));
        assert!(matches!(
            Matrix::from_json("[[1, 2], [3, \"x\"]]"),
            Err(HillCipherError::SerializationError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), HillCipherError> {
        let m = Matrix::try_from_rows(vec![vec![1.0, -2.5], vec![0.0, 4.0]])?;
        assert_eq!(m.to_string(), "1 -2.5\n0 4\n");
        Ok(())
    }
}
