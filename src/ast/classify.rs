//! Character classification for the explain renderer
//!
//! Classification is a derived, read-only property of a leaf token. It has
//! no effect on rendering; only the explain renderer consults it to pick a
//! sentence for a character.

use serde::Serialize;

/// The class a single character falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    /// `0`-`9`
    Digit,
    /// A lowercase letter
    Lowercase,
    /// An uppercase letter
    Uppercase,
    /// A whitespace character
    Whitespace,
    /// ASCII punctuation other than the alternation bar
    Punctuation,
    /// The alternation bar `|`
    Alternation,
    /// Anything else
    Other,
}

/// Classify a single character
pub fn classify(ch: char) -> Classification {
    if ch == '|' {
        Classification::Alternation
    } else if ch.is_ascii_digit() {
        Classification::Digit
    } else if ch.is_lowercase() {
        Classification::Lowercase
    } else if ch.is_uppercase() {
        Classification::Uppercase
    } else if ch.is_whitespace() {
        Classification::Whitespace
    } else if ch.is_ascii_punctuation() {
        Classification::Punctuation
    } else {
        Classification::Other
    }
}
