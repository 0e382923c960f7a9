#[derive(thiserror::Error, Debug)]
pub enum HillCipherError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// Determinant, adjugate or inversion requested on a non-square matrix.
    #[error("NotSquare: matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    /// Real-valued inversion of a matrix whose determinant is exactly zero.
    #[error("Singular: matrix has determinant 0 and cannot be inverted")]
    Singular,
    /// Error when the key determinant has no inverse modulo the alphabet size (gcd(det, m) != 1).
    #[error("NonInvertibleKey: determinant {determinant} shares factor {gcd} with modulus {modulus}")]
    NonInvertibleKey {
        determinant: i64,
        modulus: u64,
        gcd: i64,
    },
    #[error("FractionalInput: {0} is not an integer")]
    FractionalInput(f64),
    #[error("RaggedInput: row {row} has length {found} but expected {expected}")]
    RaggedInput {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("EmptyMatrix: {0}")]
    EmptyMatrix(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("Internal error: Overflow during calculation: {0}")]
    CalculationOverflow(String),

    #[error("Symbol {symbol:?} is mapped by both code {first} and code {second}")]
    DuplicateSymbol { symbol: char, first: u32, second: u32 },
    #[error("Code {0} is mapped more than once")]
    DuplicateCode(u32),
    #[error("Symbol {symbol:?} at position {position} is not part of the alphabet")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("Cell value {0} has no symbol in the alphabet")]
    UnmappedCode(f64),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
