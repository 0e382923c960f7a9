//! Bidirectional mapping between small integer codes and text symbols, used to turn a
//! message into a plaintext matrix and a cipher matrix back into text.

use crate::errors::HillCipherError;
use crate::matrix::Matrix;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    code_to_symbol: HashMap<u32, char>,
    symbol_to_code: HashMap<char, u32>,
}

impl Alphabet {
    /// Builds both lookup tables from `(code, symbol)` pairs.
    ///
    /// # Errors
    ///
    /// The mapping must be a bijection: a repeated code fails with
    /// `HillCipherError::DuplicateCode`, a repeated symbol with `HillCipherError::DuplicateSymbol`.
    pub fn try_from_pairs(
        pairs: impl IntoIterator<Item = (u32, char)>,
    ) -> Result<Self, HillCipherError> {
        let mut code_to_symbol = HashMap::new();
        let mut symbol_to_code = HashMap::new();

        for (code, symbol) in pairs {
            if code_to_symbol.insert(code, symbol).is_some() {
                return Err(HillCipherError::DuplicateCode(code));
            }
            if let Some(first) = symbol_to_code.insert(symbol, code) {
                return Err(HillCipherError::DuplicateSymbol {
                    symbol,
                    first,
                    second: code,
                });
            }
        }

        Ok(Self {
            code_to_symbol,
            symbol_to_code,
        })
    }

    /// Number of symbols, which is the modulus the cipher works in.
    pub fn modulus(&self) -> u64 {
        self.code_to_symbol.len() as u64
    }

    pub fn code_of(&self, symbol: char) -> Option<u32> {
        self.symbol_to_code.get(&symbol).copied()
    }

    pub fn symbol_of(&self, code: u32) -> Option<char> {
        self.code_to_symbol.get(&code).copied()
    }

    /// Lays `text` out row by row in a matrix with `rows` rows and `ceil(len / rows)` columns,
    /// padding the tail with `fill`. Empty text gives a single column of `fill`.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::EmptyMatrix` if `rows` is zero,
    /// `HillCipherError::UnmappedCode` if `fill` is not part of the alphabet, and
    /// `HillCipherError::UnknownSymbol` for the first character without a code.
    pub fn to_matrix(&self, text: &str, rows: usize, fill: u32) -> Result<Matrix, HillCipherError> {
        if rows == 0 {
            return Err(HillCipherError::EmptyMatrix(
                "text needs at least one row".to_string(),
            ));
        }
        if self.symbol_of(fill).is_none() {
            return Err(HillCipherError::UnmappedCode(fill as f64));
        }

        let mut cells = text
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.code_of(symbol)
                    .map(|code| code as f64)
                    .ok_or(HillCipherError::UnknownSymbol { symbol, position })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let cols = cells.len().div_ceil(rows).max(1);
        cells.resize(rows * cols, fill as f64);

        Matrix::try_from_row_major(rows, cols, cells)
    }

    /// Reads the cells of `matrix` row by row and maps each back to its symbol.
    ///
    /// # Errors
    ///
    /// Returns `HillCipherError::UnmappedCode` for the first cell that is not a code of
    /// this alphabet (negative, fractional or simply unknown).
    pub fn to_text(&self, matrix: &Matrix) -> Result<String, HillCipherError> {
        matrix
            .cells()
            .iter()
            .map(|&cell| {
                let code = (cell >= 0.0 && cell.fract() == 0.0 && cell <= u32::MAX as f64)
                    .then_some(cell as u32);
                code.and_then(|code| self.symbol_of(code))
                    .ok_or(HillCipherError::UnmappedCode(cell))
            })
            .collect()
    }
}
