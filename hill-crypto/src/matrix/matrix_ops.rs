use crate::errors::HillCipherError;
use crate::matrix::Matrix;

use itertools::iproduct;

/// `(-1)^n` as a cell value.
fn sign(n: usize) -> f64 {
    if n % 2 == 0 { 1.0 } else { -1.0 }
}

impl Matrix {
    /// Applies `f` to every cell. Dimensions are preserved.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Multiplies every cell by `factor`.
    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|v| v * factor)
    }

    /// Computes the elementwise sum `self + other`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::DimensionMismatch` if the matrices have different shapes.
    pub fn plus(&self, other: &Matrix) -> Result<Matrix, HillCipherError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Computes the elementwise difference `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::DimensionMismatch` if the matrices have different shapes.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix, HillCipherError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    fn zip_with(
        &self,
        other: &Matrix,
        op: &str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, HillCipherError> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Dimensions must match for {} ({}x{} vs {}x{})",
                op, self.rows, self.cols, other.rows, other.cols
            )));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    /// Computes the matrix product `C = AB`, an R₁×C₂ matrix.
    ///
    /// Plain triple loop; block sizes here are small.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::DimensionMismatch` if the inner dimensions do not match.
    pub fn times(&self, other: &Matrix) -> Result<Matrix, HillCipherError> {
        if self.cols != other.rows {
            return Err(HillCipherError::DimensionMismatch(format!(
                "Inner dimensions must match for matrix multiplication ({}x{} times {}x{})",
                self.rows, self.cols, other.rows, other.cols
            )));
        }

        let cells = iproduct!(0..self.rows, 0..other.cols)
            .map(|(i, j)| {
                (0..self.cols)
                    .map(|k| self.get(i, k) * other.get(k, j))
                    .sum::<f64>()
            })
            .collect();

        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            cells,
        })
    }

    /// Swaps rows and columns: R×C becomes C×R.
    pub fn transpose(&self) -> Matrix {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: iproduct!(0..self.cols, 0..self.rows)
                .map(|(i, j)| self.get(j, i))
                .collect(),
        }
    }

    /// Returns the (R-1)×(C-1) matrix left after deleting `row` and `col`.
    ///
    /// Works on rectangular matrices too.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::DimensionMismatch` when the matrix has a single row or column,
    /// since nothing would be left.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` lies outside the matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix, HillCipherError> {
        assert!(
            row < self.rows && col < self.cols,
            "cannot delete row {} and column {} of a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        if self.rows < 2 || self.cols < 2 {
            return Err(HillCipherError::DimensionMismatch(format!(
                "A {}x{} matrix has no minors",
                self.rows, self.cols
            )));
        }

        let cells = iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(i, j)| i != row && j != col)
            .map(|(i, j)| self.get(i, j))
            .collect();

        Ok(Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells,
        })
    }

    fn ensure_square(&self) -> Result<(), HillCipherError> {
        if !self.is_square() {
            return Err(HillCipherError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Computes the determinant by Laplace expansion along the first row:
    /// `det = Σ (-1)^i · a(0,i) · det(minor(0,i))`.
    ///
    /// The recursion visits `n!` terms, so this is meant for cipher-sized blocks
    /// (a 7×7 key takes a few thousand multiplications; 12×12 already takes hundreds of millions).
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotSquare` for a non-square matrix.
    pub fn determinant(&self) -> Result<f64, HillCipherError> {
        self.ensure_square()?;

        match self.rows {
            1 => Ok(self.cells[0]),
            // ad - bc
            2 => Ok(self.cells[0] * self.cells[3] - self.cells[1] * self.cells[2]),
            n => {
                let mut det = 0.0;
                for i in 0..n {
                    det += sign(i) * self.get(0, i) * self.minor(0, i)?.determinant()?;
                }
                Ok(det)
            }
        }
    }

    /// Returns the transposed cofactor matrix, `cof(i,j) = (-1)^(i+j) · det(minor(i,j))`.
    ///
    /// Satisfies `A · adj(A) = det(A) · I`. The adjugate of a 1×1 matrix is `[[1]]`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotSquare` for a non-square matrix.
    pub fn adjugate(&self) -> Result<Matrix, HillCipherError> {
        self.ensure_square()?;
        if self.rows == 1 {
            return Ok(Matrix::identity(1));
        }

        let cofactors = iproduct!(0..self.rows, 0..self.cols)
            .map(|(i, j)| -> Result<f64, HillCipherError> {
                Ok(sign(i + j) * self.minor(i, j)?.determinant()?)
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let cofactor_matrix = Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: cofactors,
        };
        Ok(cofactor_matrix.transpose())
    }

    /// Real-valued inverse, `adj(A) / det(A)`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NotSquare` for a non-square matrix and
    /// `HillCipherError::Singular` when the determinant is exactly zero.
    pub fn invert(&self) -> Result<Matrix, HillCipherError> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(HillCipherError::Singular);
        }

        Ok(self.adjugate()?.map(|v| v / det))
    }

    /// Elementwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}
