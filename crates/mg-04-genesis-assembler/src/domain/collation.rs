//! # Module Name Collation
//!
//! Approximates the root-locale collation used to order genesis modules:
//!
//! 1. Primary: characters compared by class (punctuation, digits, letters)
//!    and then case-insensitively.
//! 2. Tertiary: on a primary tie, lowercase sorts before uppercase.
//! 3. Finally raw code point order, so distinct strings never compare equal.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Punctuation,
    Digit,
    Letter,
    Other,
}

fn class(c: char) -> CharClass {
    if c.is_whitespace() || c.is_ascii_punctuation() {
        CharClass::Punctuation
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

fn primary_key(c: char) -> (CharClass, char) {
    let folded = c.to_lowercase().next().unwrap_or(c);
    (class(c), folded)
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Compare two module names.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}
