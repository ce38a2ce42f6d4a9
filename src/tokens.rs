//! Predefined tokens
//!
//! Constructor functions for the atoms every pattern reaches for: the
//! escape classes, their negations, the any-character dot, and the
//! anchors. Each call returns a fresh leaf; nodes are plain values, so
//! there is nothing to share.

use crate::ast::elements::atom::Atom;

/// `\d` — any digit
pub fn digit() -> Atom {
    Atom::raw(r"\d")
}

/// `\s` — any whitespace character
pub fn whitespace() -> Atom {
    Atom::raw(r"\s")
}

/// `\w` — any word character
pub fn word() -> Atom {
    Atom::raw(r"\w")
}

/// `\D` — any character that is not a digit
pub fn non_digit() -> Atom {
    Atom::raw(r"\D")
}

/// `\S` — any character that is not whitespace
pub fn non_whitespace() -> Atom {
    Atom::raw(r"\S")
}

/// `\W` — any character that is not a word character
pub fn non_word() -> Atom {
    Atom::raw(r"\W")
}

/// `.` — any single character
pub fn any_char() -> Atom {
    Atom::raw(".")
}

/// `^` — the start of the string
pub fn start_of_string() -> Atom {
    Atom::raw("^")
}

/// `$` — the end of the string
pub fn end_of_string() -> Atom {
    Atom::raw("$")
}

/// `\b` — a word boundary
pub fn start_of_word() -> Atom {
    Atom::raw(r"\b")
}

/// `\B` — a non-word-boundary position
pub fn end_of_word() -> Atom {
    Atom::raw(r"\B")
}
