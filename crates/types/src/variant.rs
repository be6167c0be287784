use serde::{Deserialize, Serialize};

/// The two supported cell grids: literary 6-dot (2×3) and computer 8-dot (2×4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrailleVariant {
    SixDot,
    EightDot,
}

impl BrailleVariant {
    /// Number of dot rows in one cell.
    pub fn cell_rows(self) -> usize {
        match self {
            BrailleVariant::SixDot => 3,
            BrailleVariant::EightDot => 4,
        }
    }

    /// Highest dot index a cell of this variant can carry.
    pub fn dot_count(self) -> u8 {
        match self {
            BrailleVariant::SixDot => 6,
            BrailleVariant::EightDot => 8,
        }
    }

    /// Row count used for vertical line pitch. The 8-dot pitch is
    /// deliberately compacted to 2 rows for the taller glyph.
    pub fn line_pitch_rows(self) -> usize {
        match self {
            BrailleVariant::SixDot => 3,
            BrailleVariant::EightDot => 2,
        }
    }

    /// Only the 6-dot family marks capitals with a dedicated escape cell.
    pub fn uses_capital_escape(self) -> bool {
        matches!(self, BrailleVariant::SixDot)
    }
}
