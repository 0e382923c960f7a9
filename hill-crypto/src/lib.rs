//! # Hill Crypto
//!
//! The Hill cipher over a real-valued [`Matrix`] engine: recursive determinant and adjugate,
//! exact modular inversion through the extended Euclidean algorithm, and the text alphabet
//! that feeds messages in and out of the cipher.

pub mod alphabet;
pub mod cipher;
pub mod errors;
pub mod matrix;
pub mod preset;
pub mod ring;

pub use alphabet::Alphabet;
pub use cipher::{decrypt, decryption_key, encrypt};
pub use errors::HillCipherError;
pub use matrix::Matrix;
pub use ring::Ring;
