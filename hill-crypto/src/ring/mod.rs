//! # Ring Module
//!
//! Integer arithmetic modulo the alphabet size: the extended Euclidean algorithm,
//! the positive modulo used to reduce cipher cells, and the validated [`Ring`] Z_m.

pub mod helper;
pub mod math;

pub use helper::{
    MAX_EXACT_MODULUS, checked_extended_gcd, extended_gcd, gcd, positive_modulo, to_integer,
};
pub use math::Ring;
