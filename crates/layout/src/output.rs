//! Output types of the layout pass.

/// One embossed dot in page space (origin top-left, Y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedDot {
    pub x: f64,
    pub y: f64,
    /// True when this dot sits exactly on its cell's top-left anchor.
    /// The toolpath emitter skips the per-dot travel move for it, since
    /// the per-cell anchor travel already brought the head there.
    pub is_cell_origin: bool,
}

/// All dots of one placed cell plus its travel anchor.
///
/// The anchor is recorded even when no dot sits on it: the physical
/// device always travels to the cell origin before embossing the cell's
/// dots, whichever dots are active.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub anchor_x: f64,
    pub anchor_y: f64,
    /// Dots in row-major grid order (row outer, column inner).
    pub dots: Vec<PlacedDot>,
}

/// The result of laying out one sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetLayout {
    pub cells: Vec<PlacedCell>,
    /// True when input remained after vertical space ran out.
    pub truncated: bool,
}

impl SheetLayout {
    /// All dots in emission order, for preview rendering.
    pub fn dots(&self) -> impl Iterator<Item = &PlacedDot> {
        self.cells.iter().flat_map(|cell| cell.dots.iter())
    }

    pub fn dot_count(&self) -> usize {
        self.cells.iter().map(|cell| cell.dots.len()).sum()
    }
}
