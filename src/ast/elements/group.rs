//! Group element
//!
//! A `Group` renders its children inside parentheses. It captures by
//! default; it can be made non-capturing (`(?:...)`) or given a name
//! (`(?P<name>...)`). A named group is always capturing — the two settings
//! cannot be combined, and the name must be a valid identifier.

use crate::ast::elements::expr::Expr;
use crate::ast::explain;
use crate::ast::quantifier::Quantifier;
use crate::building::fragment::Fragment;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Group names follow the engine's identifier rule: a leading letter or
/// underscore, then word characters
static GROUP_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("static pattern"));

/// A parenthesized sub-expression, optionally capturing and named
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    children: Vec<Expr>,
    quantifier: Option<Quantifier>,
    capture: bool,
    name: Option<String>,
}

impl Group {
    /// Create a capturing, unnamed group from fragments
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

    /// Create a named capturing group
    pub fn named<I>(fragments: I, name: &str) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        Self::new(fragments).with_name(name)
    }

    /// Create a non-capturing group
    pub fn non_capturing<I>(fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let mut group = Self::new(fragments);
        group.capture = false;
        group
    }

    pub(crate) fn from_children(children: Vec<Expr>) -> Self {
        Self {
            children,
            quantifier: None,
            capture: true,
            name: None,
        }
    }

    /// Rebuild this group with a name, validating it
    ///
    /// Fails when the name is not a valid identifier or when the group is
    /// non-capturing.
    pub fn with_name(self, name: &str) -> Result<Self> {
        if !GROUP_NAME.is_match(name) {
            return Err(Error::InvalidGroupName(name.to_string()));
        }
        if !self.capture {
            return Err(Error::NamedNonCapturing);
        }
        Ok(Self {
            name: Some(name.to_string()),
            ..self
        })
    }

    /// Rebuild this group with the capture flag set
    ///
    /// Fails when turning capturing off on a named group.
    pub fn with_capture(self, capture: bool) -> Result<Self> {
        if !capture && self.name.is_some() {
            return Err(Error::NamedNonCapturing);
        }
        Ok(Self { capture, ..self })
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

    /// Whether this group captures
    pub fn captures(&self) -> bool {
        self.capture
    }

    /// The group name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the group has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get an iterator over the children
    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.children.iter()
    }

    /// Render the human-readable explanation of this group
    pub fn explain(&self) -> String {
        explain::explain_expr(&Expr::Group(self.clone()), 0)
    }

    /// Hand the rendered pattern to the host regex engine
    pub fn compile(&self) -> std::result::Result<regex::Regex, regex::Error> {
        regex::Regex::new(&self.to_string())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        match (&self.name, self.capture) {
            (Some(name), _) => write!(f, "?P<{}>", name)?,
            (None, false) => write!(f, "?:")?,
            (None, true) => {}
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, ")")?;
        if let Some(quantifier) = &self.quantifier {
            write!(f, "{}", quantifier)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
