use crate::{Cell, Token, TranslitError};
use dotpress_tables::LanguageDefinition;
use std::str::Chars;

/// Dot indices of the capital-escape cell, fixed for the 6-dot family.
const CAPITAL_ESCAPE: [u8; 2] = [4, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    InNumberRun,
}

/// Lazy transliteration of one text into a token stream.
///
/// Escape insertion works by stashing the current character in a
/// one-slot reprocess queue while the escape cell is yielded, so the
/// source sequence is never rewound or mutated. A digit run ends only
/// on an explicit space; line breaks leave it open.
pub struct Transliterator<'a> {
    table: &'a LanguageDefinition,
    chars: Chars<'a>,
    mode: Mode,
    reprocess: Option<char>,
}

impl<'a> Transliterator<'a> {
    pub fn new(text: &'a str, table: &'a LanguageDefinition) -> Self {
        Self {
            table,
            chars: text.chars(),
            mode: Mode::Normal,
            reprocess: None,
        }
    }

    fn step(&mut self, ch: char) -> Result<Token, TranslitError> {
        // Each of '\r' and '\n' is one break; digit mode persists.
        if ch == '\n' || ch == '\r' {
            return Ok(Token::LineBreak);
        }

        let folded = fold(ch);
        let indices = self
            .table
            .indices_of(folded)
            .ok_or(TranslitError::UnknownCharacter(ch))?;

        if self.mode == Mode::Normal && ch.to_digit(10).is_some() {
            // Announce the digit run, then reprocess the digit itself.
            self.mode = Mode::InNumberRun;
            self.reprocess = Some(ch);
            return Ok(Token::Cell(Cell {
                source: ch,
                indices: self.table.number_prefix.clone(),
                is_escape: true,
            }));
        }
        if self.mode == Mode::InNumberRun && ch == ' ' {
            self.mode = Mode::Normal;
        } else if self.table.variant.uses_capital_escape() && ch.is_uppercase() {
            // The reprocessed form is lowercase, so the rule cannot
            // trigger twice for one character.
            self.reprocess = Some(folded);
            return Ok(Token::Cell(Cell {
                source: ch,
                indices: CAPITAL_ESCAPE.to_vec(),
                is_escape: true,
            }));
        }

        Ok(Token::Cell(Cell {
            source: folded,
            indices: indices.to_vec(),
            is_escape: false,
        }))
    }
}

impl Iterator for Transliterator<'_> {
    type Item = Result<Token, TranslitError>;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = match self.reprocess.take() {
            Some(ch) => ch,
            None => self.chars.next()?,
        };
        Some(self.step(ch))
    }
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
