//! Built-in tables: French literary 6-dot and computer 8-dot.

use crate::{DotMap, LanguageDefinition};
use dotpress_types::BrailleVariant;
use std::collections::HashMap;

const LETTERS: &[(char, &[u8])] = &[
    ('a', &[1]),
    ('b', &[1, 2]),
    ('c', &[1, 4]),
    ('d', &[1, 4, 5]),
    ('e', &[1, 5]),
    ('f', &[1, 2, 4]),
    ('g', &[1, 2, 4, 5]),
    ('h', &[1, 2, 5]),
    ('i', &[2, 4]),
    ('j', &[2, 4, 5]),
    ('k', &[1, 3]),
    ('l', &[1, 2, 3]),
    ('m', &[1, 3, 4]),
    ('n', &[1, 3, 4, 5]),
    ('o', &[1, 3, 5]),
    ('p', &[1, 2, 3, 4]),
    ('q', &[1, 2, 3, 4, 5]),
    ('r', &[1, 2, 3, 5]),
    ('s', &[2, 3, 4]),
    ('t', &[2, 3, 4, 5]),
    ('u', &[1, 3, 6]),
    ('v', &[1, 2, 3, 6]),
    ('w', &[2, 4, 5, 6]),
    ('x', &[1, 3, 4, 6]),
    ('y', &[1, 3, 4, 5, 6]),
    ('z', &[1, 3, 5, 6]),
];

const ACCENTED: &[(char, &[u8])] = &[
    ('à', &[1, 2, 3, 5, 6]),
    ('â', &[1, 6]),
    ('ç', &[1, 2, 3, 4, 6]),
    ('è', &[2, 3, 4, 6]),
    ('é', &[1, 2, 3, 4, 5, 6]),
    ('ê', &[1, 2, 6]),
    ('ë', &[1, 2, 4, 6]),
    ('î', &[1, 4, 6]),
    ('ï', &[1, 2, 4, 5, 6]),
    ('ô', &[1, 4, 5, 6]),
    ('œ', &[2, 4, 6]),
    ('ù', &[2, 3, 4, 5, 6]),
    ('û', &[1, 5, 6]),
    ('ü', &[1, 2, 5, 6]),
];

const PUNCTUATION: &[(char, &[u8])] = &[
    (' ', &[]),
    (',', &[2]),
    (';', &[2, 3]),
    (':', &[2, 5]),
    ('.', &[2, 5, 6]),
    ('?', &[2, 6]),
    ('!', &[2, 3, 5]),
    ('"', &[2, 3, 5, 6]),
    ('\'', &[3]),
    ('-', &[3, 6]),
    ('(', &[2, 3, 6]),
    (')', &[3, 5, 6]),
    ('/', &[3, 4]),
];

// Digits reuse the a..j patterns; the digit-escape prefix disambiguates.
const DIGITS: &[char] = &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

fn char_map() -> HashMap<char, Vec<u8>> {
    let mut map: HashMap<char, Vec<u8>> = HashMap::new();
    for &(ch, indices) in LETTERS.iter().chain(ACCENTED).chain(PUNCTUATION) {
        map.insert(ch, indices.to_vec());
    }
    for (digit, &(_, indices)) in DIGITS.iter().zip(LETTERS) {
        map.insert(*digit, indices.to_vec());
    }
    map
}

/// French literary braille on the 2×3 grid.
pub fn six_dot() -> LanguageDefinition {
    LanguageDefinition {
        variant: BrailleVariant::SixDot,
        dot_map: DotMap::six_dot(),
        number_prefix: vec![3, 4, 5, 6],
        char_to_indices: char_map(),
    }
}

/// The same character set on the 2×4 grid. Capitals are never escaped
/// for this variant; input is case-folded before lookup.
pub fn eight_dot() -> LanguageDefinition {
    LanguageDefinition {
        variant: BrailleVariant::EightDot,
        dot_map: DotMap::eight_dot(),
        number_prefix: vec![3, 4, 5, 6],
        char_to_indices: char_map(),
    }
}

/// Look up a built-in table by name.
pub fn builtin(name: &str) -> Option<LanguageDefinition> {
    match name {
        "6-dot" | "6 dots" => Some(six_dot()),
        "8-dot" | "8 dots" => Some(eight_dot()),
        _ => None,
    }
}
