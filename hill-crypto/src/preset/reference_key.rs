use crate::errors::HillCipherError;
use crate::matrix::Matrix;

/// The 7×7 demo key. Its determinant, 1 097 248 621, is a unit modulo 29.
pub const REFERENCE_KEY: [[i64; 7]; 7] = [
    [7, 13, 23, 6, 15, 11, 12],
    [8, 29, 17, 1, 8, 18, 15],
    [19, 26, 6, 15, 24, 25, 18],
    [12, 16, 12, 21, 25, 28, 3],
    [14, 18, 19, 22, 20, 3, 24],
    [26, 22, 13, 14, 21, 6, 14],
    [27, 11, 14, 12, 4, 4, 20],
];

pub fn reference_key() -> Result<Matrix, HillCipherError> {
    Matrix::from_i64_rows(REFERENCE_KEY.iter().map(|row| row.to_vec()).collect())
}
