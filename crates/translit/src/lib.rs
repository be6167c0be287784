//! Character-to-cell transliteration.
//!
//! [`Transliterator`] walks the input text once, left to right, and
//! yields one [`Token`] per braille cell or line break. Digit runs and
//! capitals are handled by inserting escape cells ahead of the real
//! cell; escapes are ordinary cells to the layout engine and consume a
//! full cell advance.

use thiserror::Error;

mod cell;
mod engine;

pub use cell::{Cell, Token};
pub use engine::Transliterator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslitError {
    /// The table has no entry for this character, even after case
    /// folding. Fatal for the whole pass.
    #[error("character '{0}' has no braille translation")]
    UnknownCharacter(char),
}
