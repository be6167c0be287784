use crate::TableError;
use dotpress_types::BrailleVariant;
use serde::{Deserialize, Serialize};

/// Maps a cell-local grid coordinate (column 0..2, row 0..rows) to the
/// 1-based dot index sitting there.
///
/// The map is a bijection onto `1..=6` (6-dot) or `1..=8` (8-dot); this
/// is validated when a map is deserialized from a table file. In table
/// JSON the map is written column-major, e.g. `[[1,2,3],[4,5,6]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct DotMap {
    columns: [[u8; 4]; 2],
    rows: usize,
}

impl DotMap {
    /// Standard 2×3 layout: left column dots 1,2,3; right column 4,5,6.
    pub fn six_dot() -> Self {
        Self {
            columns: [[1, 2, 3, 0], [4, 5, 6, 0]],
            rows: 3,
        }
    }

    /// Standard 2×4 layout: left column dots 1,2,3,7; right column 4,5,6,8.
    pub fn eight_dot() -> Self {
        Self {
            columns: [[1, 2, 3, 7], [4, 5, 6, 8]],
            rows: 4,
        }
    }

    pub fn for_variant(variant: BrailleVariant) -> Self {
        match variant {
            BrailleVariant::SixDot => Self::six_dot(),
            BrailleVariant::EightDot => Self::eight_dot(),
        }
    }

    /// Number of dot rows (3 or 4).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Highest dot index in this map.
    pub fn dot_count(&self) -> u8 {
        (self.rows * 2) as u8
    }

    /// Dot index at a grid position. `col` must be 0 or 1 and `row`
    /// below [`DotMap::rows`].
    pub fn index_at(&self, col: usize, row: usize) -> u8 {
        self.columns[col][row]
    }

    fn validate(&self) -> Result<(), TableError> {
        let count = self.dot_count();
        let mut seen = [false; 9];
        for col in 0..2 {
            for row in 0..self.rows {
                let index = self.columns[col][row];
                if index == 0 || index > count || seen[index as usize] {
                    return Err(TableError::BadDotMap(count));
                }
                seen[index as usize] = true;
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<u8>>> for DotMap {
    type Error = TableError;

    fn try_from(value: Vec<Vec<u8>>) -> Result<Self, TableError> {
        let rows = value.first().map(Vec::len).unwrap_or(0);
        if value.len() != 2 || !(3..=4).contains(&rows) || value[1].len() != rows {
            return Err(TableError::BadDotMapShape { expected: rows.clamp(3, 4) });
        }
        let mut columns = [[0u8; 4]; 2];
        for (col, indices) in value.iter().enumerate() {
            columns[col][..rows].copy_from_slice(indices);
        }
        let map = Self { columns, rows };
        map.validate()?;
        Ok(map)
    }
}

impl From<DotMap> for Vec<Vec<u8>> {
    fn from(map: DotMap) -> Self {
        map.columns
            .iter()
            .map(|col| col[..map.rows].to_vec())
            .collect()
    }
}
