//! Error types for pattern construction and composition
//!
//! Every failure in this crate is a synchronous validation error raised
//! while a node is being constructed or composed. There is no recovery or
//! retry concept: a failed constructor returns `Err` before anything is
//! built.

use std::fmt;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building an expression tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text is not a single character, a recognized escape, or a
    /// well-formed two-endpoint range from one character class
    InvalidPattern(String),
    /// Range endpoints are out of ascending order
    RangeNotAscending(String),
    /// Range endpoints are equal
    RangeNotDistinct(String),
    /// Quantifier bounds with `lower > upper`
    InvalidQuantifier { lower: u32, upper: u32 },
    /// Quantifier constructed with neither bound
    MissingBounds,
    /// Group name is empty or malformed
    InvalidGroupName(String),
    /// A named group cannot be non-capturing
    NamedNonCapturing,
    /// Repeat sugar called with an operand where positivity is required
    InvalidRepeat(String),
    /// `any_of` called with no fragments
    EmptyAlternation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPattern(text) => {
                write!(
                    f,
                    "Pattern must be a single character or a valid range: '{}'",
                    text
                )
            }
            Error::RangeNotAscending(text) => {
                write!(f, "Range must be in ascending order: '{}'", text)
            }
            Error::RangeNotDistinct(text) => {
                write!(f, "Range must specify distinct values: '{}'", text)
            }
            Error::InvalidQuantifier { lower, upper } => {
                write!(
                    f,
                    "Lower bound cannot be greater than upper bound: {} > {}",
                    lower, upper
                )
            }
            Error::MissingBounds => {
                write!(f, "A quantifier requires at least one bound")
            }
            Error::InvalidGroupName(name) => {
                write!(f, "Invalid group name: '{}'", name)
            }
            Error::NamedNonCapturing => {
                write!(f, "A named group cannot be non-capturing")
            }
            Error::InvalidRepeat(msg) => {
                write!(f, "Invalid repeat operand: {}", msg)
            }
            Error::EmptyAlternation => {
                write!(f, "Cannot build an alternation from no fragments")
            }
        }
    }
}

impl std::error::Error for Error {}
