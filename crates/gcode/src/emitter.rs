use crate::transform::page_to_machine;
use crate::{Instruction, Program};
use dotpress_layout::SheetLayout;
use dotpress_types::DeviceGeometry;

/// Turns a laid-out sheet into the ordered instruction stream.
///
/// The head starts raised. Every cell gets exactly one travel move to
/// its anchor, whichever of its dots are active; dots away from the
/// anchor get their own travel move. Embossing is two Z feed moves
/// (down, up), not a separate instruction kind.
pub struct ToolpathEmitter<'a> {
    geometry: &'a DeviceGeometry,
}

impl<'a> ToolpathEmitter<'a> {
    pub fn new(geometry: &'a DeviceGeometry) -> Self {
        Self { geometry }
    }

    /// Total over any layout-stage output.
    pub fn emit(&self, sheet: &SheetLayout) -> Program {
        let g = self.geometry;
        let mut program = Program::default();

        program.push(Instruction::AbsolutePositioning);
        program.push(Instruction::SetSpeed(g.speed));
        program.push(Instruction::head_to(g.head_up_position));

        for cell in &sheet.cells {
            let (mx, my) = page_to_machine(cell.anchor_x, cell.anchor_y, g);
            program.push(Instruction::travel_to(mx, my));

            for dot in &cell.dots {
                if !dot.is_cell_origin {
                    let (dx, dy) = page_to_machine(dot.x, dot.y, g);
                    program.push(Instruction::travel_to(dx, dy));
                }
                program.push(Instruction::head_to(g.head_down_position));
                program.push(Instruction::head_to(g.head_up_position));
            }
        }

        log::debug!(
            "emitted {} instructions for {} cells",
            program.len(),
            sheet.cells.len()
        );
        program
    }
}
