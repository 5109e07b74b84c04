//! Static braille code table: input symbols to six-dot cell patterns.
//!
//! Dots are numbered the standard way: 1-2-3 run down the left column,
//! 4-5-6 down the right. Bit `n - 1` of a [`DotPattern`] is dot `n`, which is
//! also the bit layout of the Unicode Braille Patterns block.
//!
//! Digits reuse the shapes of `a`..`j`. They are only unambiguous when a
//! number sign precedes the run, which the emitter always inserts.

use serde::{Deserialize, Serialize};

/// Number of dot slots in one cell.
pub const DOTS_PER_CELL: usize = 6;

/// First code point of the Unicode Braille Patterns block (blank cell).
const UNICODE_BRAILLE_BASE: u32 = 0x2800;

/// A six-dot braille cell. Immutable; construct through the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DotPattern(u8);

impl DotPattern {
    /// Cell with no raised dots (spaces and unmapped symbols).
    pub const EMPTY: Self = Self(0);

    /// Build a pattern from 1-based dot numbers. Numbers outside 1..=6 are ignored.
    #[must_use]
    pub const fn from_dots(dots: &[u8]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < dots.len() {
            let dot = dots[i];
            if dot >= 1 && dot <= 6 {
                bits |= 1 << (dot - 1);
            }
            i += 1;
        }
        Self(bits)
    }

    /// Raw bit mask, dot 1 in the least significant bit.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether 1-based dot `dot` is raised.
    #[must_use]
    pub const fn has_dot(self, dot: u8) -> bool {
        dot >= 1 && dot <= 6 && self.0 & (1 << (dot - 1)) != 0
    }

    /// Zero-based slot indices (dot number minus one) of the raised dots, in dot order.
    pub fn raised_slots(self) -> impl Iterator<Item = usize> {
        (0..DOTS_PER_CELL).filter(move |slot| self.0 & (1 << slot) != 0)
    }

    #[must_use]
    pub fn dot_count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// The matching character from the Unicode Braille Patterns block.
    #[must_use]
    pub fn to_unicode(self) -> char {
        char::from_u32(UNICODE_BRAILLE_BASE + u32::from(self.0)).unwrap_or(' ')
    }
}

/// Cells that change how the following cells are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Next letter is uppercase (dot 6).
    Capital,
    /// The whole word is uppercase (dot 6 twice).
    DoubleCapital,
    /// Following a–j shapes are digits (dots 3-4-5-6).
    Number,
}

const CAPITAL_SIGN: DotPattern = DotPattern::from_dots(&[6]);
const NUMBER_SIGN: DotPattern = DotPattern::from_dots(&[3, 4, 5, 6]);

impl Indicator {
    /// The cells this indicator occupies, left to right.
    #[must_use]
    pub fn cells(self) -> &'static [DotPattern] {
        match self {
            Self::Capital => &[CAPITAL_SIGN],
            Self::DoubleCapital => &[CAPITAL_SIGN, CAPITAL_SIGN],
            Self::Number => &[NUMBER_SIGN],
        }
    }

    #[must_use]
    pub fn width(self) -> usize {
        self.cells().len()
    }
}

/// Classification of one input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Latin letter, either case. Looked up case-insensitively.
    Letter(char),
    /// ASCII digit `0`..`9`.
    Digit(char),
    /// One of the mapped punctuation marks.
    Punctuation(char),
    /// A table-internal indicator cell.
    Indicator(Indicator),
    /// Anything the table has no cell for.
    Unsupported(char),
}

impl Symbol {
    #[must_use]
    pub fn classify(ch: char) -> Self {
        if ch.is_ascii_alphabetic() {
            Self::Letter(ch)
        } else if ch.is_ascii_digit() {
            Self::Digit(ch)
        } else if punctuation(ch).is_some() {
            Self::Punctuation(ch)
        } else {
            Self::Unsupported(ch)
        }
    }
}

/// Look up the cell for a symbol. Total: unmapped input yields [`DotPattern::EMPTY`].
///
/// Multi-cell indicators return their first cell here; use
/// [`Indicator::cells`] for the full sequence.
#[must_use]
pub fn lookup(symbol: Symbol) -> DotPattern {
    match symbol {
        Symbol::Letter(ch) => letter(ch.to_ascii_lowercase()).unwrap_or(DotPattern::EMPTY),
        Symbol::Digit(ch) => digit(ch).unwrap_or(DotPattern::EMPTY),
        Symbol::Punctuation(ch) => punctuation(ch).unwrap_or(DotPattern::EMPTY),
        Symbol::Indicator(indicator) => indicator.cells()[0],
        Symbol::Unsupported(_) => DotPattern::EMPTY,
    }
}

/// Classify and look up a character in one step.
#[must_use]
pub fn lookup_char(ch: char) -> DotPattern {
    lookup(Symbol::classify(ch))
}

fn letter(ch: char) -> Option<DotPattern> {
    let dots: &[u8] = match ch {
        'a' => &[1],
        'b' => &[1, 2],
        'c' => &[1, 4],
        'd' => &[1, 4, 5],
        'e' => &[1, 5],
        'f' => &[1, 2, 4],
        'g' => &[1, 2, 4, 5],
        'h' => &[1, 2, 5],
        'i' => &[2, 4],
        'j' => &[2, 4, 5],
        'k' => &[1, 3],
        'l' => &[1, 2, 3],
        'm' => &[1, 3, 4],
        'n' => &[1, 3, 4, 5],
        'o' => &[1, 3, 5],
        'p' => &[1, 2, 3, 4],
        'q' => &[1, 2, 3, 4, 5],
        'r' => &[1, 2, 3, 5],
        's' => &[2, 3, 4],
        't' => &[2, 3, 4, 5],
        'u' => &[1, 3, 6],
        'v' => &[1, 2, 3, 6],
        'w' => &[2, 4, 5, 6],
        'x' => &[1, 3, 4, 6],
        'y' => &[1, 3, 4, 5, 6],
        'z' => &[1, 3, 5, 6],
        _ => return None,
    };
    Some(DotPattern::from_dots(dots))
}

fn digit(ch: char) -> Option<DotPattern> {
    let shape = match ch {
        '1' => 'a',
        '2' => 'b',
        '3' => 'c',
        '4' => 'd',
        '5' => 'e',
        '6' => 'f',
        '7' => 'g',
        '8' => 'h',
        '9' => 'i',
        '0' => 'j',
        _ => return None,
    };
    letter(shape)
}

// Several marks share a cell: both quote glyphs, both parentheses, and `?`
// with the opening quote. Kept as-is; readers disambiguate from context.
fn punctuation(ch: char) -> Option<DotPattern> {
    let dots: &[u8] = match ch {
        ',' => &[2],
        ';' => &[2, 3],
        ':' => &[2, 5],
        '.' => &[2, 5, 6],
        '!' => &[2, 3, 5],
        '?' | '"' | '\u{201C}' | '\u{201D}' => &[2, 3, 6],
        '\'' | '\u{2019}' => &[3],
        '-' => &[3, 6],
        '(' | ')' => &[2, 3, 5, 6],
        '/' => &[3, 4],
        _ => return None,
    };
    Some(DotPattern::from_dots(dots))
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
