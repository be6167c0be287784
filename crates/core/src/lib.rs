//! Integration layer: one pure entry point running the whole pass.
//!
//! A generation pass is Transliterator → Layout Engine → Coordinate
//! Mapper → Toolpath Emitter, invoked as one synchronous unit. There is
//! no cross-pass state: every invocation recomputes the full artifact
//! from its explicit inputs, so callers regenerate freely whenever text
//! or geometry changes.

mod error;
mod pipeline;

pub use error::PipelineError;
pub use pipeline::{GenerationResult, generate};
