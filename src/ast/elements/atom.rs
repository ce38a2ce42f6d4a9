//! Atom element
//!
//! An `Atom` is the leaf of the expression tree: a single character, a
//! backslash-escaped letter (`\d`, `\b`, ...), or an ascending two-endpoint
//! character range (`a-z`), optionally carrying a quantifier.
//!
//! Atoms are value types. Quantifying operations consume the atom and
//! return a rebuilt one; two trees holding equal atoms share nothing.

use crate::ast::classify::{classify, Classification};
use crate::ast::explain;
use crate::ast::quantifier::Quantifier;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A leaf node: one character, escape, or character range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Atom {
    text: String,
    quantifier: Option<Quantifier>,
}

impl Atom {
    /// Create an atom, validating the token text
    ///
    /// Accepted forms: a single character; a backslash followed by an
    /// ASCII letter; a range `low-high` where both endpoints come from the
    /// same class (digits, lowercase, or uppercase) and are in ascending
    /// order.
    pub fn new(text: &str) -> Result<Self> {
        Self::validate(text)?;
        Ok(Self {
            text: text.to_string(),
            quantifier: None,
        })
    }

    /// Create an atom from a single character, which is always valid
    pub fn literal(ch: char) -> Self {
        Self {
            text: ch.to_string(),
            quantifier: None,
        }
    }

    /// Create an atom from text the caller guarantees is valid
    ///
    /// Used for the predefined tokens and for literals the algebra
    /// fabricates itself (`^`, `|`).
    pub(crate) fn raw(text: &str) -> Self {
        debug_assert!(Self::is_valid(text));
        Self {
            text: text.to_string(),
            quantifier: None,
        }
    }

    /// Whether `text` is a valid atom token
    pub fn is_valid(text: &str) -> bool {
        Self::validate(text).is_ok()
    }

    fn validate(text: &str) -> Result<()> {
        let chars: Vec<char> = text.chars().collect();
        match chars.as_slice() {
            [_] => Ok(()),
            ['\\', c] if c.is_ascii_alphabetic() => Ok(()),
            [low, '-', high] if same_range_class(*low, *high) => {
                if low == high {
                    Err(Error::RangeNotDistinct(text.to_string()))
                } else if low > high {
                    Err(Error::RangeNotAscending(text.to_string()))
                } else {
                    Ok(())
                }
            }
            _ => Err(Error::InvalidPattern(text.to_string())),
        }
    }

    /// The token text, without any quantifier
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The attached quantifier, if any
    pub fn quantifier(&self) -> Option<&Quantifier> {
        self.quantifier.as_ref()
    }

    /// Replace the quantifier, returning the rebuilt atom
    pub(crate) fn with_quantifier(self, quantifier: Quantifier) -> Self {
        Self {
            quantifier: Some(quantifier),
            ..self
        }
    }

    /// Return a copy whose quantifier matches lazily
    ///
    /// No-op when the atom is unquantified.
    pub fn lazy(self) -> Self {
        Self {
            quantifier: self.quantifier.map(Quantifier::lazy),
            ..self
        }
    }

    /// Whether the token is a two-endpoint character range
    pub fn is_range(&self) -> bool {
        let chars: Vec<char> = self.text.chars().collect();
        matches!(chars.as_slice(), [low, '-', high] if same_range_class(*low, *high))
    }

    /// Whether the token is a backslash escape
    pub fn is_escape(&self) -> bool {
        self.text.starts_with('\\')
    }

    /// The class of the token, as the explain renderer sees it
    ///
    /// Derived from the single-character form; ranges and escapes classify
    /// as [`Classification::Other`] (their explanations are dedicated
    /// sentences, not classification sentences).
    pub fn classification(&self) -> Classification {
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => classify(ch),
            _ => Classification::Other,
        }
    }

    /// The explanation sentence for this token
    pub fn explanation(&self) -> String {
        explain::token_sentence(self)
    }

    /// Render the human-readable explanation of this atom
    pub fn explain(&self) -> String {
        explain::explain_atom(self, 0)
    }

    /// Hand the rendered pattern to the host regex engine
    pub fn compile(&self) -> std::result::Result<regex::Regex, regex::Error> {
        regex::Regex::new(&self.to_string())
    }
}

/// Whether two range endpoints come from the same character class
fn same_range_class(low: char, high: char) -> bool {
    (low.is_ascii_digit() && high.is_ascii_digit())
        || (low.is_ascii_lowercase() && high.is_ascii_lowercase())
        || (low.is_ascii_uppercase() && high.is_ascii_uppercase())
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)?;
        if let Some(quantifier) = &self.quantifier {
            write!(f, "{}", quantifier)?;
        }
        Ok(())
    }
}
