//! Word cost model: how many cells a word occupies once indicators are added.
//!
//! This is the counting half of the emitter in [`crate::emit`]; both must
//! produce the same number for every word.

use crate::table::Indicator;

/// Number of braille cells `word` will occupy, indicators included.
///
/// - an all-caps word (see [`is_all_caps`]) pays for one double capital sign;
/// - any other uppercase letter pays for its own capital sign;
/// - each run of ASCII digits pays for one number sign;
/// - every character pays for its own cell, mapped or not.
///
/// `word` must not contain whitespace; callers split on it first.
#[must_use]
pub fn word_cost(word: &str) -> usize {
    let all_caps = is_all_caps(word);
    let mut cells = if all_caps { Indicator::DoubleCapital.width() } else { 0 };
    let mut in_number = false;

    for ch in word.chars() {
        if ch.is_ascii_digit() {
            if !in_number {
                cells += Indicator::Number.width();
                in_number = true;
            }
            cells += 1;
            continue;
        }
        in_number = false;
        if ch.is_uppercase() && !all_caps {
            cells += Indicator::Capital.width();
        }
        cells += 1;
    }

    cells
}

/// A word is all-caps when it holds at least two uppercase letters and no
/// lowercase ones. Digits and punctuation do not break the run.
#[must_use]
pub fn is_all_caps(word: &str) -> bool {
    let mut upper = 0usize;
    for ch in word.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            upper += 1;
        }
    }
    upper >= 2
}

#[cfg(test)]
#[path = "cost_test.rs"]
mod tests;
