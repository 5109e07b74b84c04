//! Greedy line wrapper measured in braille cells.

use serde::Serialize;

use crate::cost::word_cost;
use crate::marker;

/// A whitespace-free run of characters with its precomputed cell cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: String,
    pub cost: usize,
}

impl Word {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { text: text.to_owned(), cost: word_cost(text) }
    }
}

/// One physical line after wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhysicalLine {
    pub words: Vec<Word>,
}

impl PhysicalLine {
    /// Cells the line occupies: word costs plus one space cell per gap.
    #[must_use]
    pub fn cells(&self) -> usize {
        let words: usize = self.words.iter().map(|w| w.cost).sum();
        words + self.words.len().saturating_sub(1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Wrap logical lines into physical lines of at most `max_cells_per_line` cells.
///
/// Words are never split. A word wider than the limit gets a line of its
/// own and overflows it. A logical line without words yields one empty
/// physical line.
#[must_use]
pub fn wrap<'a, I>(logical_lines: I, max_cells_per_line: usize) -> Vec<PhysicalLine>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Vec::new();
    for line in logical_lines {
        wrap_line(line, max_cells_per_line, &mut out);
    }
    out
}

/// Split marked text into logical lines and wrap them.
#[must_use]
pub fn wrap_text(text: &str, max_cells_per_line: usize) -> Vec<PhysicalLine> {
    wrap(marker::logical_lines(text), max_cells_per_line)
}

fn wrap_line(line: &str, max_cells: usize, out: &mut Vec<PhysicalLine>) {
    let mut current = PhysicalLine::default();
    let mut used = 0usize;

    for token in line.split_whitespace() {
        let word = Word::new(token);
        let gap = usize::from(!current.is_empty());
        let needed = word.cost + gap;

        if used + needed > max_cells && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            used = word.cost;
        } else {
            used += needed;
        }
        current.words.push(word);
    }

    // Pushed even when empty so blank logical lines keep their row.
    out.push(current);
}

#[cfg(test)]
#[path = "wrap_test.rs"]
mod tests;
