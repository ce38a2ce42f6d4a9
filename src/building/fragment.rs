//! Fragment normalization
//!
//! Every composition entry point — constructors, the algebra functions,
//! the helpers, the operators — accepts heterogeneous inputs: raw text,
//! single characters, atoms, composites. `Fragment` is the one explicit
//! conversion point between those inputs and tree nodes, so the "explode a
//! raw string into one atom per character" rule lives in exactly one place.

use crate::ast::elements::atom::Atom;
use crate::ast::elements::char_set::CharSet;
use crate::ast::elements::expr::Expr;
use crate::ast::elements::group::Group;
use crate::ast::elements::sequence::Sequence;

/// A raw input to a composition entry point
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Raw text, exploded into one atom per character when normalized
    Text(String),
    /// An already-built node, kept as-is
    Node(Expr),
}

impl Fragment {
    /// Normalize this fragment into tree nodes
    ///
    /// Raw text becomes one single-character atom per character — never a
    /// multi-character leaf. A node fragment stays a single node.
    pub(crate) fn into_nodes(self) -> Vec<Expr> {
        match self {
            Fragment::Text(text) => text
                .chars()
                .map(|ch| Expr::Atom(Atom::literal(ch)))
                .collect(),
            Fragment::Node(node) => vec![node],
        }
    }

    /// The canonical rendering of this fragment
    ///
    /// For raw text that is the text itself; for a node, its render.
    pub(crate) fn rendered(&self) -> String {
        match self {
            Fragment::Text(text) => text.clone(),
            Fragment::Node(node) => node.to_string(),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Text(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Text(text)
    }
}

impl From<char> for Fragment {
    fn from(ch: char) -> Self {
        Fragment::Text(ch.to_string())
    }
}

impl From<Atom> for Fragment {
    fn from(atom: Atom) -> Self {
        Fragment::Node(Expr::Atom(atom))
    }
}

impl From<Sequence> for Fragment {
    fn from(seq: Sequence) -> Self {
        Fragment::Node(Expr::Sequence(seq))
    }
}

impl From<CharSet> for Fragment {
    fn from(set: CharSet) -> Self {
        Fragment::Node(Expr::CharSet(set))
    }
}

impl From<Group> for Fragment {
    fn from(group: Group) -> Self {
        Fragment::Node(Expr::Group(group))
    }
}

impl From<Expr> for Fragment {
    fn from(node: Expr) -> Self {
        Fragment::Node(node)
    }
}
