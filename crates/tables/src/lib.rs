//! Braille language tables.
//!
//! A [`LanguageDefinition`] bundles everything one braille variant needs:
//! the [`DotMap`] from cell-local grid coordinates to dot indices, the
//! digit-escape prefix, and the literal character→dot-indices mapping.
//! Tables are immutable once built and are replaced wholesale when the
//! active variant changes.

use thiserror::Error;

mod builtin;
mod definition;
mod dot_map;

pub use builtin::{builtin, eight_dot, six_dot};
pub use definition::LanguageDefinition;
pub use dot_map::DotMap;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("table parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dot map must be 2 columns of {expected} rows each")]
    BadDotMapShape { expected: usize },
    #[error("dot map is not a bijection onto 1..={0}")]
    BadDotMap(u8),
    #[error("dot index {index} out of range 1..={max} for '{ch}'")]
    IndexOutOfRange { ch: char, index: u8, max: u8 },
    #[error("number prefix carries dot index {index} out of range 1..={max}")]
    BadNumberPrefix { index: u8, max: u8 },
}
