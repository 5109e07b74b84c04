//! Cell emitter: walks wrapped lines and places every cell on the grid.

use serde::Serialize;

use crate::cost::is_all_caps;
use crate::error::Diagnostic;
use crate::table::{DotPattern, Indicator, Symbol, lookup};
use crate::wrap::PhysicalLine;

/// What a placed cell stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellKind {
    /// A mapped character.
    Content(char),
    /// A character without a table entry, emitted blank.
    Unmapped(char),
    /// One cell of an indicator sequence.
    Indicator(Indicator),
    /// The blank cell between two words.
    Space,
}

/// A cell pattern at its grid coordinate. Both coordinates are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedCell {
    pub pattern: DotPattern,
    pub column: usize,
    pub line: usize,
    pub kind: CellKind,
}

/// Output of [`emit`], everything the geometry stage needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Emission {
    /// Cells in emission order: left to right, then top to bottom.
    pub cells: Vec<PlacedCell>,
    /// Widest physical line, in cells.
    pub max_cells_in_line: usize,
    /// Number of physical lines, blank ones included.
    pub line_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Emission {
    /// Cells on physical line `line`, in column order.
    #[must_use]
    pub fn line(&self, line: usize) -> &[PlacedCell] {
        // Cells are stored sorted by line.
        let start = self.cells.partition_point(|c| c.line < line);
        let end = self.cells.partition_point(|c| c.line <= line);
        self.cells.get(start..end).unwrap_or(&[])
    }
}

/// Place the cells of every physical line.
///
/// Unmapped characters become blank cells and are reported in
/// [`Emission::diagnostics`]; emission never fails.
#[must_use]
pub fn emit(lines: &[PhysicalLine]) -> Emission {
    let mut out = Emission { line_count: lines.len(), ..Emission::default() };

    for (line_idx, line) in lines.iter().enumerate() {
        let mut cursor = Cursor { line: line_idx, column: 0, out: &mut out };
        for (word_idx, word) in line.words.iter().enumerate() {
            if word_idx > 0 {
                cursor.push(DotPattern::EMPTY, CellKind::Space);
            }
            emit_word(&word.text, &mut cursor);
        }
        let width = cursor.column;
        out.max_cells_in_line = out.max_cells_in_line.max(width);
    }

    out
}

/// Cells for a single word, without grid placement.
///
/// Useful for checking a word against [`crate::cost::word_cost`].
#[must_use]
pub fn word_cells(word: &str) -> Vec<PlacedCell> {
    let mut out = Emission::default();
    let mut cursor = Cursor { line: 0, column: 0, out: &mut out };
    emit_word(word, &mut cursor);
    out.cells
}

struct Cursor<'a> {
    line: usize,
    column: usize,
    out: &'a mut Emission,
}

impl Cursor<'_> {
    fn push(&mut self, pattern: DotPattern, kind: CellKind) {
        self.out.cells.push(PlacedCell { pattern, column: self.column, line: self.line, kind });
        self.column += 1;
    }

    fn push_indicator(&mut self, indicator: Indicator) {
        for &pattern in indicator.cells() {
            self.push(pattern, CellKind::Indicator(indicator));
        }
    }
}

fn emit_word(word: &str, cursor: &mut Cursor<'_>) {
    let all_caps = is_all_caps(word);
    let mut caps_announced = false;
    let mut in_number = false;

    for ch in word.chars() {
        let symbol = Symbol::classify(ch);

        if let Symbol::Digit(_) = symbol {
            if !in_number {
                cursor.push_indicator(Indicator::Number);
                in_number = true;
            }
            cursor.push(lookup(symbol), CellKind::Content(ch));
            continue;
        }
        in_number = false;

        if ch.is_uppercase() {
            if !all_caps {
                cursor.push_indicator(Indicator::Capital);
            } else if !caps_announced {
                cursor.push_indicator(Indicator::DoubleCapital);
                caps_announced = true;
            }
        }

        if let Symbol::Unsupported(_) = symbol {
            tracing::warn!(
                symbol = %ch.escape_debug(),
                line = cursor.line,
                column = cursor.column,
                "unmapped braille symbol; emitting blank cell"
            );
            cursor.out.diagnostics.push(Diagnostic::UnmappedSymbol {
                symbol: ch,
                line: cursor.line,
                column: cursor.column,
            });
            cursor.push(DotPattern::EMPTY, CellKind::Unmapped(ch));
        } else {
            cursor.push(lookup(symbol), CellKind::Content(ch));
        }
    }
}

/// Render emitted cells as Unicode braille text, one row per physical line.
#[must_use]
pub fn preview(emission: &Emission) -> String {
    (0..emission.line_count)
        .map(|line| emission.line(line).iter().map(|c| c.pattern.to_unicode()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod tests;
