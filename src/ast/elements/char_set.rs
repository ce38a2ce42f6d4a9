//! Character set element
//!
//! A `CharSet` renders its children inside `[` `]`, matching any single one
//! of its members. The brackets always appear, even around one child, and a
//! quantifier attaches directly to the closing bracket (`[ab]+`) — a
//! character set is never re-wrapped into a group.

use crate::ast::elements::expr::Expr;
use crate::ast::explain;
use crate::ast::quantifier::Quantifier;
use crate::building::fragment::Fragment;
use serde::Serialize;
use std::fmt;

/// A bracket-enclosed union of atoms and ranges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharSet {
    children: Vec<Expr>,
    quantifier: Option<Quantifier>,
}

impl CharSet {
    /// Create a character set from fragments
    ///
    /// Raw text fragments are exploded into one atom per character; node
    /// fragments are kept as-is.
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

    /// Check if the set has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get an iterator over the children
    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.children.iter()
    }

    /// Render the human-readable explanation of this set
    pub fn explain(&self) -> String {
        explain::explain_expr(&Expr::CharSet(self.clone()), 0)
    }

    /// Hand the rendered pattern to the host regex engine
    pub fn compile(&self) -> Result<regex::Regex, regex::Error> {
        regex::Regex::new(&self.to_string())
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "]")?;
        if let Some(quantifier) = &self.quantifier {
            write!(f, "{}", quantifier)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CharSet {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
