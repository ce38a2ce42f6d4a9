//! Sequence element
//!
//! A `Sequence` is the plain concatenation composite: its enclosing
//! brackets are empty strings, so it is invisible in the rendered output.
//! It exists to hold an ordered run of children and to carry a quantifier
//! once the wrapping rules have decided none is needed around it.

use crate::ast::elements::char_set::CharSet;
use crate::ast::elements::expr::Expr;
use crate::ast::explain;
use crate::ast::quantifier::Quantifier;
use crate::building::fragment::Fragment;
use serde::Serialize;
use std::fmt;

/// An ordered run of children, concatenated invisibly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sequence {
    children: Vec<Expr>,
    quantifier: Option<Quantifier>,
}

impl Sequence {
    /// Create a sequence from fragments
    ///
    /// Raw text fragments are exploded into one atom per character; node
    /// fragments are kept as-is. Composites stay nested here — only the
    /// concatenation algebra flattens.
    pub fn new<I>(fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        Self::from_children(
            fragments
                .into_iter()
                .flat_map(|fragment| fragment.into().into_nodes())
                .collect(),
        )
    }

    /// Create an empty sequence
    pub fn empty() -> Self {
        Self::from_children(Vec::new())
    }

    pub(crate) fn from_children(children: Vec<Expr>) -> Self {
        Self {
            children,
            quantifier: None,
        }
    }

    /// The child nodes, in order
    pub fn children(&self) -> &[Expr] {
        &self.children
    }

    pub(crate) fn into_children(self) -> Vec<Expr> {
        self.children
    }

    /// The attached quantifier, if any
    pub fn quantifier(&self) -> Option<&Quantifier> {
        self.quantifier.as_ref()
    }

    pub(crate) fn with_quantifier(self, quantifier: Quantifier) -> Self {
        Self {
            quantifier: Some(quantifier),
            ..self
        }
    }

    /// Get the number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the sequence has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get an iterator over the children
    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.children.iter()
    }

    /// Rebuild the same children as a bracketed character set
    pub fn into_char_set(self) -> CharSet {
        CharSet::from_children(self.children)
    }

    /// Render the human-readable explanation of this sequence
    pub fn explain(&self) -> String {
        explain::explain_expr(&Expr::Sequence(self.clone()), 0)
    }

    /// Hand the rendered pattern to the host regex engine
    pub fn compile(&self) -> Result<regex::Regex, regex::Error> {
        regex::Regex::new(&self.to_string())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        if let Some(quantifier) = &self.quantifier {
            write!(f, "{}", quantifier)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
