//! Composition algebra - concatenation, alternation, negation, quantifying
//!
//! These free functions carry the crate's real design tension: deciding how
//! operands expand when combined, and when a fragment must be re-wrapped
//! before a quantifier can attach. The `std::ops` operator impls in
//! [`crate::building::operators`] are thin forwards to these functions.
//!
//! Expansion is asymmetric on purpose: a quantifier-free `Sequence`
//! contributes its children (so `+` chains flatten), while a `Group` or
//! `CharSet` stays one opaque unit (so `"foo" + Group::new(["baz"])`
//! renders `foo(baz)` instead of losing the parentheses).

use crate::ast::elements::atom::Atom;
use crate::ast::elements::char_set::CharSet;
use crate::ast::elements::expr::Expr;
use crate::ast::elements::group::Group;
use crate::ast::elements::sequence::Sequence;
use crate::ast::quantifier::Quantifier;
use crate::building::fragment::Fragment;

/// Expand one operand of a binary composition into its run of nodes
///
/// Raw text explodes per character; a quantifier-free sequence is replaced
/// by its children; everything else (atoms, groups, character sets, and
/// any quantified composite) is a single opaque unit.
fn expand(fragment: Fragment) -> Vec<Expr> {
    match fragment {
        Fragment::Node(Expr::Sequence(seq)) if seq.quantifier().is_none() => seq.into_children(),
        other => other.into_nodes(),
    }
}

/// Concatenate two fragments into a new sequence
pub fn concat(a: impl Into<Fragment>, b: impl Into<Fragment>) -> Expr {
    let mut children = expand(a.into());
    children.extend(expand(b.into()));
    Expr::Sequence(Sequence::from_children(children))
}

/// Alternate two fragments: their runs interleaved with a literal `|`
///
/// The result is an unparenthesized sequence; callers needing grouped
/// alternation wrap it explicitly.
pub fn alternate(a: impl Into<Fragment>, b: impl Into<Fragment>) -> Expr {
    let mut children = expand(a.into());
    children.push(Expr::Atom(Atom::raw("|")));
    children.extend(expand(b.into()));
    Expr::Sequence(Sequence::from_children(children))
}

/// Negate a node
///
/// If the node's first child renders as the literal `^`, the marker is
/// stripped and the remaining children come back as a plain sequence —
/// exactly reversing a previous negation. Otherwise the node's children
/// are rebuilt as a character set led by `^`.
pub fn negate(node: impl Into<Expr>) -> Expr {
    let children = match node.into() {
        Expr::Atom(atom) => vec![Expr::Atom(atom)],
        Expr::Sequence(seq) => seq.into_children(),
        Expr::CharSet(set) => set.into_children(),
        Expr::Group(group) => group.into_children(),
    };
    match children.first() {
        Some(first) if first.to_string() == "^" => {
            Expr::Sequence(Sequence::from_children(children[1..].to_vec()))
        }
        _ => {
            let mut negated = vec![Expr::Atom(Atom::raw("^"))];
            negated.extend(children);
            Expr::CharSet(CharSet::from_children(negated))
        }
    }
}

/// Attach a quantifier to a node, applying the wrapping rules
///
/// A plain sequence with more than one child is re-wrapped into a
/// capturing group first (`ab` quantifies as `(ab)+`). A character set
/// keeps its own bracket form (`[ab]+`), a group keeps its parentheses
/// (`(abc)+`), and single-child shapes quantify in place. An existing
/// quantifier is replaced.
pub fn quantify(node: Expr, quantifier: Quantifier) -> Expr {
    match node {
        Expr::Atom(atom) => Expr::Atom(atom.with_quantifier(quantifier)),
        Expr::Sequence(seq) if seq.len() > 1 => {
            Expr::Group(Group::from_children(seq.into_children()).with_quantifier(quantifier))
        }
        Expr::Sequence(seq) => Expr::Sequence(seq.with_quantifier(quantifier)),
        Expr::CharSet(set) => Expr::CharSet(set.with_quantifier(quantifier)),
        Expr::Group(group) => Expr::Group(group.with_quantifier(quantifier)),
    }
}
