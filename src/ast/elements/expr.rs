//! Expression node
//!
//! `Expr` is the common wrapper for every node shape that can appear in an
//! expression tree. It lets the algebra and the renderers operate uniformly
//! on mixed structures (atoms, sequences, character sets, groups).
//!
//! The shape set is closed: adding a shape means adding a variant here, and
//! the compiler points at every dispatch site that must handle it.

use crate::ast::elements::atom::Atom;
use crate::ast::elements::char_set::CharSet;
use crate::ast::elements::group::Group;
use crate::ast::elements::sequence::Sequence;
use crate::ast::explain;
use crate::ast::quantifier::Quantifier;
use serde::Serialize;
use std::fmt;

/// Any node of the expression tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Atom(Atom),
    Sequence(Sequence),
    CharSet(CharSet),
    Group(Group),
}

impl Expr {
    /// The annotation label used by the explain renderer
    pub fn annotation(&self) -> &'static str {
        match self {
            Expr::Atom(_) => "Atom",
            Expr::Sequence(_) => "Sequence",
            Expr::CharSet(_) => "CharacterSet",
            Expr::Group(_) => "Group",
        }
    }

    /// The attached quantifier, if any
    pub fn quantifier(&self) -> Option<&Quantifier> {
        match self {
            Expr::Atom(atom) => atom.quantifier(),
            Expr::Sequence(seq) => seq.quantifier(),
            Expr::CharSet(set) => set.quantifier(),
            Expr::Group(group) => group.quantifier(),
        }
    }

    /// The child nodes, in order; an atom has none
    pub fn children(&self) -> &[Expr] {
        match self {
            Expr::Atom(_) => &[],
            Expr::Sequence(seq) => seq.children(),
            Expr::CharSet(set) => set.children(),
            Expr::Group(group) => group.children(),
        }
    }

    /// Return a copy whose quantifier matches lazily
    ///
    /// No-op when the node is unquantified.
    pub fn lazy(self) -> Expr {
        match self {
            Expr::Atom(atom) => Expr::Atom(atom.lazy()),
            Expr::Sequence(seq) => match seq.quantifier().copied() {
                Some(q) => Expr::Sequence(seq.with_quantifier(q.lazy())),
                None => Expr::Sequence(seq),
            },
            Expr::CharSet(set) => match set.quantifier().copied() {
                Some(q) => Expr::CharSet(set.with_quantifier(q.lazy())),
                None => Expr::CharSet(set),
            },
            Expr::Group(group) => match group.quantifier().copied() {
                Some(q) => Expr::Group(group.with_quantifier(q.lazy())),
                None => Expr::Group(group),
            },
        }
    }

    /// Rebuild this node's children as a bracketed character set
    pub fn into_char_set(self) -> CharSet {
        match self {
            Expr::Atom(atom) => CharSet::from_children(vec![Expr::Atom(atom)]),
            Expr::Sequence(seq) => seq.into_char_set(),
            Expr::CharSet(set) => set,
            Expr::Group(group) => CharSet::from_children(group.into_children()),
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Atom(_))
    }
    pub fn is_sequence(&self) -> bool {
        matches!(self, Expr::Sequence(_))
    }
    pub fn is_char_set(&self) -> bool {
        matches!(self, Expr::CharSet(_))
    }
    pub fn is_group(&self) -> bool {
        matches!(self, Expr::Group(_))
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        if let Expr::Atom(atom) = self {
            Some(atom)
        } else {
            None
        }
    }
    pub fn as_sequence(&self) -> Option<&Sequence> {
        if let Expr::Sequence(seq) = self {
            Some(seq)
        } else {
            None
        }
    }
    pub fn as_char_set(&self) -> Option<&CharSet> {
        if let Expr::CharSet(set) = self {
            Some(set)
        } else {
            None
        }
    }
    pub fn as_group(&self) -> Option<&Group> {
        if let Expr::Group(group) = self {
            Some(group)
        } else {
            None
        }
    }

    /// Render the human-readable explanation of this node
    pub fn explain(&self) -> String {
        explain::explain_expr(self, 0)
    }

    /// Hand the rendered pattern to the host regex engine
    pub fn compile(&self) -> Result<regex::Regex, regex::Error> {
        regex::Regex::new(&self.to_string())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(atom) => write!(f, "{}", atom),
            Expr::Sequence(seq) => write!(f, "{}", seq),
            Expr::CharSet(set) => write!(f, "{}", set),
            Expr::Group(group) => write!(f, "{}", group),
        }
    }
}

impl From<Atom> for Expr {
    fn from(atom: Atom) -> Self {
        Expr::Atom(atom)
    }
}

impl From<Sequence> for Expr {
    fn from(seq: Sequence) -> Self {
        Expr::Sequence(seq)
    }
}

impl From<CharSet> for Expr {
    fn from(set: CharSet) -> Self {
        Expr::CharSet(set)
    }
}

impl From<Group> for Expr {
    fn from(group: Group) -> Self {
        Expr::Group(group)
    }
}
