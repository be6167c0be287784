//! Braille embossing engine.
//!
//! Text goes in, a tactile sheet layout and a G-code toolpath come out:
//!
//! ```text
//! text → cells → placed dots (page space) → placed dots (machine space) → instructions
//! ```
//!
//! The stages live in their own crates and are re-exported here;
//! [`generate`] runs the whole pass.
//!
//! ```
//! use dotpress::{DeviceGeometry, generate, six_dot};
//!
//! let table = six_dot();
//! let result = generate("Hello", &table, &DeviceGeometry::default())?;
//! assert!(result.gcode.starts_with("G90;\r\n"));
//! # Ok::<(), dotpress::PipelineError>(())
//! ```

pub use dotpress_core::{GenerationResult, PipelineError, generate};
pub use dotpress_gcode::{GcodeError, Instruction, Program, ToolpathEmitter, transform};
pub use dotpress_layout::{LayoutEngine, LayoutError, PlacedCell, PlacedDot, SheetLayout};
pub use dotpress_tables::{
    DotMap, LanguageDefinition, TableError, builtin, eight_dot, six_dot,
};
pub use dotpress_translit::{Cell, Token, TranslitError, Transliterator};
pub use dotpress_types::{BrailleVariant, DeviceGeometry};
