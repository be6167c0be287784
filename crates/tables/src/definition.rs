use crate::{DotMap, TableError};
use dotpress_types::BrailleVariant;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One fully loaded braille variant.
///
/// `char_to_indices` is keyed by case-folded literal characters; every
/// character that can appear in input text must be present or the
/// transliteration pass fails. The table is read-only for the lifetime
/// of a pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDefinition {
    pub variant: BrailleVariant,
    pub dot_map: DotMap,
    /// Dot indices of the digit-escape cell.
    pub number_prefix: Vec<u8>,
    pub char_to_indices: HashMap<char, Vec<u8>>,
}

impl LanguageDefinition {
    /// Load a table from its JSON file representation and validate it.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate()?;
        log::debug!(
            "loaded {:?} table with {} characters",
            definition.variant,
            definition.char_to_indices.len()
        );
        Ok(definition)
    }

    /// Dot indices for a case-folded character, if the table knows it.
    pub fn indices_of(&self, ch: char) -> Option<&[u8]> {
        self.char_to_indices.get(&ch).map(Vec::as_slice)
    }

    /// Check every dot index against the variant's range and the dot map
    /// shape against the variant's grid.
    pub fn validate(&self) -> Result<(), TableError> {
        let max = self.variant.dot_count();
        if self.dot_map.rows() != self.variant.cell_rows() {
            return Err(TableError::BadDotMapShape {
                expected: self.variant.cell_rows(),
            });
        }
        for &index in &self.number_prefix {
            if index == 0 || index > max {
                return Err(TableError::BadNumberPrefix { index, max });
            }
        }
        for (&ch, indices) in &self.char_to_indices {
            if let Some(&index) = indices.iter().find(|&&i| i == 0 || i > max) {
                return Err(TableError::IndexOutOfRange { ch, index, max });
            }
        }
        Ok(())
    }
}
