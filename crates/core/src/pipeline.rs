use crate::PipelineError;
use dotpress_gcode::{Program, ToolpathEmitter};
use dotpress_layout::{LayoutEngine, SheetLayout};
use dotpress_tables::LanguageDefinition;
use dotpress_translit::{Token, Transliterator};
use dotpress_types::DeviceGeometry;

/// Everything one generation pass produces.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Page-space dots for preview rendering, plus the truncation flag.
    pub sheet: SheetLayout,
    /// The ordered instruction stream.
    pub program: Program,
    /// The stream serialized to its textual G-code form.
    pub gcode: String,
}

/// Run one full generation pass.
///
/// Fails before producing anything consumable on an unmapped character
/// or invalid geometry; page overflow is not a failure and shows up only
/// as `sheet.truncated`.
pub fn generate(
    text: &str,
    table: &LanguageDefinition,
    geometry: &DeviceGeometry,
) -> Result<GenerationResult, PipelineError> {
    let tokens: Vec<Token> =
        Transliterator::new(text, table).collect::<Result<_, _>>()?;
    let sheet = LayoutEngine::new(table, geometry).lay_out(tokens)?;
    if sheet.truncated {
        log::warn!("text did not fully fit on the sheet, output truncated");
    }

    let program = ToolpathEmitter::new(geometry).emit(&sheet);
    let gcode = program.encode()?;
    log::debug!(
        "pass complete: {} cells, {} dots, {} instructions",
        sheet.cells.len(),
        sheet.dot_count(),
        program.len()
    );

    Ok(GenerationResult {
        sheet,
        program,
        gcode,
    })
}
