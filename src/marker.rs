//! Line-break markers at the input boundary.
//!
//! The compiler never splits on raw newlines. Callers mark line breaks with
//! [`LINE_BREAK`] (U+2028 LINE SEPARATOR), which a keyboard does not
//! produce, and convert to and from raw newlines only for display.

/// The explicit line-break marker understood by the compiler.
pub const LINE_BREAK: char = '\u{2028}';

const LINE_BREAK_STR: &str = "\u{2028}";

/// Replace raw newlines (`\n`, `\r\n`, lone `\r`) with [`LINE_BREAK`].
#[must_use]
pub fn newlines_to_markers(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', LINE_BREAK_STR)
}

/// Replace every [`LINE_BREAK`] with `\n`.
#[must_use]
pub fn markers_to_newlines(text: &str) -> String {
    text.replace(LINE_BREAK, "\n")
}

/// Split marked text into logical lines. Always yields at least one line.
pub fn logical_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(LINE_BREAK)
}

#[cfg(test)]
#[path = "marker_test.rs"]
mod tests;
