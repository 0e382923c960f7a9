//! Literal reference data: the 29-symbol alphabet and the 7×7 key used by the demo.

pub mod letter_table;
pub mod reference_key;

pub use letter_table::{LETTER_TABLE, letter_alphabet};
pub use reference_key::{REFERENCE_KEY, reference_key};
