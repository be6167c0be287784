//! Unified error type for all high-level operations.

use dotpress_gcode::GcodeError;
use dotpress_layout::LayoutError;
use dotpress_tables::TableError;
use dotpress_translit::TranslitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("transliteration error: {0}")]
    Translit(#[from] TranslitError),
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("G-code error: {0}")]
    Gcode(#[from] GcodeError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
