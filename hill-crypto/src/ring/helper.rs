use crate::errors::HillCipherError;

use num_integer::Integer;

/// Largest modulus for which cell arithmetic on `f64` stays exact (2^53).
pub const MAX_EXACT_MODULUS: u64 = 1 << 53;

/// Greatest common divisor, never negative.
///
/// # Panics
///
/// Panics if the gcd is 2^63, which only happens when both operands are `0` or `i64::MIN`.
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::gcd;
/// assert_eq!(gcd(1_097_248_621, 28), 7);
/// assert_eq!(gcd(-4, 26), 2);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
///
/// Recurses on `gcd(a, b) = gcd(b, a mod b)` with a floored remainder, so the
/// quotient used during back-substitution is `floor(a / b)`. The returned `g`
/// is never negative; the coefficients are flipped together with it.
///
/// # Errors
///
/// Returns `HillCipherError::CalculationOverflow` when `g` or a coefficient does not fit
/// in `i64`, which only happens next to `i64::MIN` (e.g. `gcd(i64::MIN, 0) = 2^63`).
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::extended_gcd;
/// let (g, x, y) = extended_gcd(240, 46).unwrap();
/// assert_eq!(g, 2);
/// assert_eq!(240 * x + 46 * y, 2);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> Result<(i64, i64, i64), HillCipherError> {
    let (g, x, y) = euclid(i128::from(a), i128::from(b));
    let (g, x, y) = if g < 0 { (-g, -x, -y) } else { (g, x, y) };

    let narrow = |v: i128| {
        i64::try_from(v).map_err(|_| {
            HillCipherError::CalculationOverflow(format!(
                "extended_gcd({}, {}) does not fit in i64",
                a, b
            ))
        })
    };
    Ok((narrow(g)?, narrow(x)?, narrow(y)?))
}

fn euclid(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        // gcd(a, 0) = a*1 + 0*0
        return (a, 1, 0);
    }

    let (g, x1, y1) = euclid(b, a.mod_floor(&b));
    let x = y1;
    let y = x1 - y1 * a.div_floor(&b);
    (g, x, y)
}

/// Same as [`extended_gcd`] for real-valued operands, such as a determinant.
///
/// # Errors
///
/// Returns `HillCipherError::FractionalInput` if either operand is not an integer.
pub fn checked_extended_gcd(a: f64, b: f64) -> Result<(i64, i64, i64), HillCipherError> {
    extended_gcd(to_integer(a)?, to_integer(b)?)
}

/// Converts a real value holding an integer into `i64`.
///
/// # Errors
///
/// Returns `HillCipherError::FractionalInput` for fractional, non-finite or out-of-range values.
pub fn to_integer(value: f64) -> Result<i64, HillCipherError> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= i64::MAX as f64 {
        return Err(HillCipherError::FractionalInput(value));
    }

    Ok(value as i64)
}

/// Reduces `x` into `[0, modulus)`, whatever the sign of `x`.
///
/// Exact for integer cells and moduli up to [`MAX_EXACT_MODULUS`]; `-0.0` comes out as `0`.
///
/// # Example
///
/// ```
/// # use hill_crypto::ring::positive_modulo;
/// assert_eq!(positive_modulo(96.0, 26), 18.0);
/// assert_eq!(positive_modulo(-3.0, 26), 23.0);
/// assert_eq!(positive_modulo(26.0, 26), 0.0);
/// ```
pub fn positive_modulo(x: f64, modulus: u64) -> f64 {
    let m = modulus as f64;
    let r = x % m;
    if r < 0.0 {
        r + m
    } else if r == 0.0 {
        0.0
    } else {
        r
    }
}
