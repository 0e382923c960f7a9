use crate::alphabet::Alphabet;
use crate::errors::HillCipherError;

/// Upper-case letters plus space, `.` and `!`, 29 symbols in all (a prime modulus).
///
/// Codes cover exactly `0..29`, so every reduced cipher cell has a symbol.
pub const LETTER_TABLE: [(u32, char); 29] = [
    (0, 'J'),
    (1, 'M'),
    (2, 'A'),
    (3, 'Q'),
    (4, '.'),
    (5, 'K'),
    (6, 'L'),
    (7, 'X'),
    (8, 'C'),
    (9, 'V'),
    (10, ' '),
    (11, 'N'),
    (12, 'S'),
    (13, 'D'),
    (14, 'F'),
    (15, 'G'),
    (16, 'H'),
    (17, 'U'),
    (18, 'I'),
    (19, 'O'),
    (20, 'P'),
    (21, 'Y'),
    (22, 'T'),
    (23, 'R'),
    (24, 'E'),
    (25, 'W'),
    (26, 'B'),
    (27, 'Z'),
    (28, '!'),
];

/// Builds the [`Alphabet`] for [`LETTER_TABLE`].
pub fn letter_alphabet() -> Result<Alphabet, HillCipherError> {
    Alphabet::try_from_pairs(LETTER_TABLE)
}
