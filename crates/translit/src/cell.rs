/// One braille cell, tagged with the character it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Source character after case folding. Escape cells keep the
    /// character that triggered them.
    pub source: char,
    /// Active 1-based dot indices.
    pub indices: Vec<u8>,
    /// True for inserted digit/capital escape cells.
    pub is_escape: bool,
}

/// One unit of transliterator output, in input reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Cell(Cell),
    LineBreak,
}

impl Token {
    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            Token::Cell(cell) => Some(cell),
            Token::LineBreak => None,
        }
    }
}
