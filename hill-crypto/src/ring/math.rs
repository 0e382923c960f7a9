//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCipherError;

use super::{MAX_EXACT_MODULUS, extended_gcd, positive_modulo};

use num_integer::Integer;

/// Represents a finite ring Z_m, where `m` is the size of the alphabet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and at most [`MAX_EXACT_MODULUS`], so every
    /// residue is exact as a cell value.
    pub fn try_with(modulus: u64) -> Result<Self, HillCipherError> {
        if modulus <= 1 {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > MAX_EXACT_MODULUS {
            return Err(HillCipherError::InvalidModulus(format!(
                "Modulus must be at most {}, got {}",
                MAX_EXACT_MODULUS, modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(29).unwrap();
    /// assert_eq!(ring.modulus(), 29);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a cell value to be within the range `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15.0), 5.0);
    /// assert_eq!(ring.normalize(-3.0), 7.0);
    /// assert_eq!(ring.normalize(10.0), 0.0);
    /// ```
    pub fn normalize(&self, value: f64) -> f64 {
        positive_modulo(value, self.modulus)
    }

    /// Computes `(a * b) mod modulus`, reducing both operands first so the
    /// product stays small.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.mul(-3.0, 3.0), 17.0); // -9 mod 26
    /// assert_eq!(ring.mul(24.0, 3.0), 20.0); // 72 mod 26
    /// ```
    pub fn mul(&self, a: f64, b: f64) -> f64 {
        self.normalize(self.normalize(a) * self.normalize(b))
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::NonInvertibleKey` if the inverse does not exist,
    /// which includes every multiple of the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(-17).unwrap(), 3);
    /// assert!(ring.inv(2).is_err());
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCipherError> {
        let m = self.modulus as i64;

        let (g, x, _) = extended_gcd(a, m)?;
        if g != 1 {
            return Err(HillCipherError::NonInvertibleKey {
                determinant: a,
                modulus: self.modulus,
                gcd: g,
            });
        }

        Ok(x.mod_floor(&m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_creation() {
        assert!(Ring::try_with(29).is_ok());
        assert!(Ring::try_with(2).is_ok());
        assert!(matches!(
            Ring::try_with(1),
            Err(HillCipherError::InvalidModulus(_))
        ));
        assert!(Ring::try_with(0).is_err());
    }

    #[test]
    fn test_ring_rejects_inexact_modulus() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(MAX_EXACT_MODULUS)?;
        assert_eq!(ring.normalize(-3.0), (MAX_EXACT_MODULUS - 3) as f64);
        assert_eq!(ring.inv(3)? as u64 * 3 % MAX_EXACT_MODULUS, 1);

        for modulus in [MAX_EXACT_MODULUS + 1, i64::MAX as u64 + 1, u64::MAX] {
            assert!(matches!(
                Ring::try_with(modulus),
                Err(HillCipherError::InvalidModulus(_))
            ));
        }
        Ok(())
    }

    #[test]
    fn test_element_normalization() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.normalize(5.0), 5.0);
        assert_eq!(ring.normalize(16.0), 5.0);
        assert_eq!(ring.normalize(-6.0), 5.0);
        Ok(())
    }

    #[test]
    fn test_multiplication() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.mul(5.0, 8.0), 7.0);
        assert_eq!(ring.mul(-2.0, 8.0), 6.0);
        Ok(())
    }

    #[test]
    fn test_inversion() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(11)?;
        assert_eq!(ring.inv(5)?, 9);

        let ring = Ring::try_with(29)?;
        let inv = ring.inv(1_097_248_621)?;
        assert_eq!(inv, 3);
        assert_eq!((1_097_248_621i64 % 29) * inv % 29, 1);

        // -2^63 mod 29 = 17
        assert_eq!(ring.inv(i64::MIN)?, ring.inv(17)?);
        Ok(())
    }

    #[test]
    fn test_inversion_shared_factor() -> Result<(), HillCipherError> {
        let ring = Ring::try_with(28)?;
        match ring.inv(1_097_248_621) {
            Err(HillCipherError::NonInvertibleKey { gcd, modulus, .. }) => {
                assert_eq!(gcd, 7);
                assert_eq!(modulus, 28);
            }
            other => panic!("expected NonInvertibleKey, got {:?}", other),
        }
        Ok(())
    }
}
