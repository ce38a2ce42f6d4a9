//! Builder helpers
//!
//! Free functions for the two composite idioms that deserve a shorthand:
//! matching any one of several alternatives, and making a run of fragments
//! optional.

use crate::ast::elements::atom::Atom;
use crate::ast::elements::char_set::CharSet;
use crate::ast::elements::expr::Expr;
use crate::ast::elements::group::Group;
use crate::ast::elements::sequence::Sequence;
use crate::ast::traits::Quantify;
use crate::building::fragment::Fragment;
use crate::error::{Error, Result};

/// Match any one of the given fragments
///
/// A single raw string becomes a character set of its characters
/// (`"abc"` → `[abc]`). Multiple fragments that each render as a valid
/// single atom or range also become a character set (`"a", "b"` → `[ab]`).
/// If any fragment is wider than one atom (`"foo"`), the result is a
/// capturing group of the alternatives (`"foo", "bar"` → `(foo|bar)`).
///
/// Fails when called with no fragments, or with a single fragment that is
/// not raw text.
///
/// # Example
///
/// ```
/// use rex::any_of;
///
/// assert_eq!(any_of(["a", "b", "c"]).unwrap().to_string(), "[abc]");
/// assert_eq!(
///     any_of(["foo", "bar", "baz"]).unwrap().to_string(),
///     "(foo|bar|baz)"
/// );
/// ```
pub fn any_of<I>(fragments: I) -> Result<Expr>
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    let mut fragments: Vec<Fragment> = fragments.into_iter().map(Into::into).collect();
    match fragments.len() {
        0 => Err(Error::EmptyAlternation),
        1 => match fragments.remove(0) {
            Fragment::Text(text) => Ok(Expr::CharSet(CharSet::new([text]))),
            other => Err(Error::InvalidPattern(other.rendered())),
        },
        _ => {
            if fragments
                .iter()
                .all(|fragment| Atom::is_valid(&fragment.rendered()))
            {
                Ok(Expr::CharSet(CharSet::new(fragments)))
            } else {
                let mut alternatives = Vec::with_capacity(fragments.len() * 2 - 1);
                for (i, fragment) in fragments.into_iter().enumerate() {
                    if i > 0 {
                        alternatives.push(Fragment::Node(Expr::Atom(Atom::raw("|"))));
                    }
                    alternatives.push(fragment);
                }
                Ok(Expr::Group(Group::new(alternatives)))
            }
        }
    }
}

/// Make the concatenation of the given fragments optional
///
/// All fragments are concatenated into one sequence, then quantified with
/// zero-or-one under the usual wrapping rule, so a multi-atom run is
/// parenthesized first (`"a", "b", "c"` → `(abc)?`).
pub fn optional<I>(fragments: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Fragment>,
{
    Sequence::new(fragments).zero_or_one()
}
