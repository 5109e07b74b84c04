use super::*;
use crate::cost::word_cost;
use crate::table::lookup_char;
use crate::wrap::wrap_text;

fn emit_text(text: &str, max_cells: usize) -> Emission {
    emit(&wrap_text(text, max_cells))
}

fn kinds(emission: &Emission) -> Vec<CellKind> {
    emission.cells.iter().map(|c| c.kind).collect()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn single_letter_places_one_cell() {
    let e = emit_text("a", 40);
    assert_eq!(e.line_count, 1);
    assert_eq!(e.cells.len(), 1);
    assert_eq!(e.cells[0].pattern, lookup_char('a'));
    assert_eq!((e.cells[0].column, e.cells[0].line), (0, 0));
    assert_eq!(e.max_cells_in_line, 1);
}

#[test]
fn all_caps_word_gets_double_indicator() {
    let e = emit_text("AB", 40);
    assert_eq!(
        kinds(&e),
        vec![
            CellKind::Indicator(Indicator::DoubleCapital),
            CellKind::Indicator(Indicator::DoubleCapital),
            CellKind::Content('A'),
            CellKind::Content('B'),
        ]
    );
    assert_eq!(e.cells[2].pattern, lookup_char('a'));
}

#[test]
fn capitalised_words_with_space_cell() {
    let e = emit_text("Hi there", 1000);
    assert_eq!(e.line_count, 1);
    assert_eq!(e.cells.len(), 9);
    assert_eq!(e.cells[0].kind, CellKind::Indicator(Indicator::Capital));
    assert_eq!(e.cells[1].pattern, lookup_char('h'));
    assert_eq!(e.cells[3].kind, CellKind::Space);
    assert!(e.cells[3].pattern.is_empty());
    assert_eq!(e.max_cells_in_line, 9);
}

#[test]
fn digit_run_gets_one_number_sign() {
    let e = emit_text("12", 40);
    assert_eq!(
        kinds(&e),
        vec![CellKind::Indicator(Indicator::Number), CellKind::Content('1'), CellKind::Content('2')]
    );
}

#[test]
fn break_marker_with_tiny_budget_gives_two_lines() {
    let e = emit_text("alpha\u{2028}beta", 1);
    assert_eq!(e.line_count, 2);
    assert_eq!(e.line(0).len(), 5);
    assert_eq!(e.line(1).len(), 4);
    assert_eq!(e.max_cells_in_line, 5);
}

#[test]
fn empty_text_emits_nothing() {
    let e = emit_text("", 40);
    assert!(e.cells.is_empty());
    assert_eq!(e.max_cells_in_line, 0);
    assert_eq!(e.line_count, 1);
}

// =============================================================================
// ORDERING AND COORDINATES
// =============================================================================

#[test]
fn columns_restart_on_each_line() {
    let e = emit_text("ab\u{2028}cde", 40);
    let coords: Vec<(usize, usize)> = e.cells.iter().map(|c| (c.column, c.line)).collect();
    assert_eq!(coords, vec![(0, 0), (1, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn blank_line_keeps_its_index() {
    let e = emit_text("a\u{2028}\u{2028}b", 40);
    assert_eq!(e.line_count, 3);
    assert_eq!(e.line(1).len(), 0);
    assert_eq!(e.line(2).first().map(|c| c.line), Some(2));
}

#[test]
fn interior_capital_gets_its_own_indicator() {
    let e = emit_text("McD", 40);
    assert_eq!(
        kinds(&e),
        vec![
            CellKind::Indicator(Indicator::Capital),
            CellKind::Content('M'),
            CellKind::Content('c'),
            CellKind::Indicator(Indicator::Capital),
            CellKind::Content('D'),
        ]
    );
}

#[test]
fn all_caps_with_trailing_punctuation() {
    let e = emit_text("OK!", 40);
    assert_eq!(e.cells.len(), 5);
    assert_eq!(e.cells[4].pattern, lookup_char('!'));
}

#[test]
fn letters_after_digits_end_the_number() {
    let e = emit_text("3rd", 40);
    assert_eq!(
        kinds(&e),
        vec![
            CellKind::Indicator(Indicator::Number),
            CellKind::Content('3'),
            CellKind::Content('r'),
            CellKind::Content('d'),
        ]
    );
}

// =============================================================================
// UNMAPPED SYMBOLS
// =============================================================================

#[test]
fn unmapped_symbol_becomes_blank_cell_with_diagnostic() {
    let e = emit_text("a~b", 40);
    assert_eq!(e.cells.len(), 3);
    assert_eq!(e.cells[1].kind, CellKind::Unmapped('~'));
    assert!(e.cells[1].pattern.is_empty());
    assert_eq!(e.diagnostics, vec![Diagnostic::UnmappedSymbol { symbol: '~', line: 0, column: 1 }]);
}

#[test]
fn uppercase_unmapped_letter_keeps_indicator() {
    let e = emit_text("É", 40);
    assert_eq!(kinds(&e), vec![CellKind::Indicator(Indicator::Capital), CellKind::Unmapped('É')]);
    assert_eq!(e.diagnostics.len(), 1);
}

// =============================================================================
// COST AGREEMENT
// =============================================================================

#[test]
fn word_cells_match_word_cost() {
    for word in ["a", "Hi", "AB", "NASA", "McDonald", "12", "1-2", "MP3S", "café", "É", "HELLO!", "x9Y", "(A)"] {
        assert_eq!(word_cells(word).len(), word_cost(word), "disagreement on {word:?}");
    }
}

// =============================================================================
// PREVIEW
// =============================================================================

#[test]
fn preview_renders_unicode_rows() {
    let e = emit_text("ab\u{2028}\u{2028}c", 40);
    assert_eq!(preview(&e), "\u{2801}\u{2803}\n\n\u{2809}");
}

#[test]
fn preview_shows_indicators_and_spaces() {
    let e = emit_text("A b", 40);
    assert_eq!(preview(&e), "\u{2820}\u{2801}\u{2800}\u{2803}");
}

#[test]
fn line_slices_match_cell_lines() {
    let e = emit_text("one two\u{2028}\u{2028}three\u{2028}four", 5);
    assert!(e.cells.windows(2).all(|w| w[0].line <= w[1].line));
    let total: usize = (0..e.line_count).map(|l| e.line(l).len()).sum();
    assert_eq!(total, e.cells.len());
    for l in 0..e.line_count {
        assert!(e.line(l).iter().all(|c| c.line == l));
    }
    assert!(e.line(e.line_count).is_empty());
}
