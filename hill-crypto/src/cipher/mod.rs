//! # Hill Cipher
//!
//! Encryption multiplies the plaintext by a square key and reduces every cell modulo the
//! alphabet size. Decryption rebuilds the modular inverse of the key as
//! `det(K)^-1 · adj(K) (mod m)` without any real-valued division.
//!
//! Plaintext and ciphertext blocks are the columns of a matrix whose row count equals the
//! key size; shape mismatches surface as `DimensionMismatch` from [`Matrix::times`].

use crate::errors::HillCipherError;
use crate::matrix::Matrix;
use crate::ring::{Ring, to_integer};

/// Determinant of the key as an integer, after checking the key is square and integral.
fn key_determinant(key: &Matrix) -> Result<i64, HillCipherError> {
    to_integer(key.determinant()?)
}

/// Encrypts `plaintext` with `key`: `(K · P) mod m`.
///
/// # Errors
///
/// Returns `HillCipherError::NonInvertibleKey` if `gcd(det(K), m) != 1`, since such a
/// ciphertext could never be decrypted. Also propagates `InvalidModulus`, `NotSquare`,
/// `FractionalInput` and `DimensionMismatch`.
pub fn encrypt(plaintext: &Matrix, key: &Matrix, modulus: u64) -> Result<Matrix, HillCipherError> {
    let ring = Ring::try_with(modulus)?;
    ring.inv(key_determinant(key)?)?;

    Ok(key.times(plaintext)?.map(|v| ring.normalize(v)))
}

/// Builds `K^-1 mod m` from the encryption key.
///
/// # Errors
///
/// Same as [`encrypt`], minus the shape check against a message.
pub fn decryption_key(encryption_key: &Matrix, modulus: u64) -> Result<Matrix, HillCipherError> {
    let ring = Ring::try_with(modulus)?;
    let det_inv = ring.inv(key_determinant(encryption_key)?)? as f64;

    Ok(encryption_key.adjugate()?.map(|v| ring.mul(v, det_inv)))
}

/// Decrypts `ciphertext` produced by [`encrypt`] with the same `encryption_key` and `modulus`.
///
/// # Errors
///
/// See [`decryption_key`]; a ciphertext whose row count differs from the key size fails with
/// `HillCipherError::DimensionMismatch`.
pub fn decrypt(
    ciphertext: &Matrix,
    encryption_key: &Matrix,
    modulus: u64,
) -> Result<Matrix, HillCipherError> {
    let ring = Ring::try_with(modulus)?;
    let key_inverse = decryption_key(encryption_key, modulus)?;

    Ok(key_inverse.times(ciphertext)?.map(|v| ring.normalize(v)))
}
