//! Toolpath generation.
//!
//! Maps laid-out dots from page space into machine space and emits the
//! ordered [`Instruction`] stream that drives the embossing head. The
//! textual encoding is plain G-code with CRLF line endings, one
//! instruction per line.

use thiserror::Error;

mod emitter;
mod instruction;
pub mod transform;

pub use emitter::ToolpathEmitter;
pub use instruction::{Instruction, Program};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GcodeError {
    /// A move with no axes at all is a contract violation of the layout
    /// stage, never a user-input problem.
    #[error("move with no axes specified")]
    InvalidMove,
}
