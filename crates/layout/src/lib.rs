//! Sheet layout.
//!
//! The [`LayoutEngine`] places transliterated cells on the sheet,
//! wrapping lines and silently truncating once vertical space runs out.
//! Truncation is a defined stop condition, not an error; the dots placed
//! up to that point are a complete artifact.

use thiserror::Error;

mod engine;
mod output;

pub use engine::LayoutEngine;
pub use output::{PlacedCell, PlacedDot, SheetLayout};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("sheet dimensions must be finite and positive, got {0:.2}x{1:.2}")]
    InvalidSheet(f64, f64),
    #[error("geometry parameter {name} must be finite and non-negative, got {value:.2}")]
    InvalidParameter { name: &'static str, value: f64 },
}
