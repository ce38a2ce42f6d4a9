//! # rex
//!
//! A composable builder for regular-expression syntax.
//!
//! Patterns are assembled bottom-up from small semantic fragments — single
//! characters, escapes, character ranges, quantifiers, character sets,
//! groups, alternations — and combined with `+`, `|`, `!` and the fluent
//! [`Quantify`] methods. The finished tree renders two ways: the canonical
//! regex string through `Display`, and an annotated, human-readable tree
//! through `explain()`.
//!
//! The crate builds syntax only. Matching is handed to the `regex` crate
//! through `compile()`; an existing regex string is never parsed back into
//! a tree.
//!
//! ```
//! use rex::{digit, Quantify};
//!
//! let phone = digit().exactly(3) + "-" + digit().exactly(4);
//! assert_eq!(phone.to_string(), r"\d{3}-\d{4}");
//!
//! let compiled = phone.compile().unwrap();
//! assert!(compiled.is_match("555-0199"));
//! ```
//!
//! Composites re-wrap themselves when a quantifier needs something to hold
//! on to: quantifying a two-atom run parenthesizes it first, while a
//! character set keeps its own brackets.
//!
//! ```
//! use rex::{any_of, Quantify, Sequence};
//!
//! assert_eq!(Sequence::new(["ab"]).one_or_more().to_string(), "(ab)+");
//! assert_eq!(any_of(["a", "b"]).unwrap().one_or_more().to_string(), "[ab]+");
//! ```

pub mod ast;
pub mod building;
pub mod error;
pub mod tokens;

pub use ast::classify::Classification;
pub use ast::elements::{Atom, CharSet, Expr, Group, Sequence};
pub use ast::quantifier::Quantifier;
pub use ast::traits::Quantify;
pub use building::fragment::Fragment;
pub use building::helpers::{any_of, optional};
pub use error::{Error, Result};
pub use tokens::{
    any_char, digit, end_of_string, end_of_word, non_digit, non_whitespace, non_word,
    start_of_string, start_of_word, whitespace, word,
};
