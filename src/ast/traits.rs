//! AST traits - the fluent quantification seam
//!
//! `Quantify` gives every node shape the same chainable quantifying surface
//! (`zero_or_more`, `exactly`, the comparison sugar, ...). Each method
//! consumes the receiver and returns a rebuilt [`Expr`]; the wrapping rules
//! in [`crate::building::compose`] decide whether the node needs a group
//! around it first.

use crate::ast::elements::expr::Expr;
use crate::ast::quantifier::Quantifier;
use crate::building::compose;
use crate::error::{Error, Result};

/// Fluent quantification for every node shape
///
/// Implemented by `Atom`, `Sequence`, `CharSet`, `Group` and `Expr`. The
/// default methods cover the whole quantifier vocabulary, so implementors
/// only supply `Into<Expr>`.
pub trait Quantify: Into<Expr> + Sized {
    /// Attach a quantifier, applying the wrapping rules
    fn quantified(self, quantifier: Quantifier) -> Expr {
        compose::quantify(self.into(), quantifier)
    }

    /// `x*` — zero or more
    fn zero_or_more(self) -> Expr {
        self.quantified(Quantifier::zero_or_more())
    }

    /// `x+` — one or more
    fn one_or_more(self) -> Expr {
        self.quantified(Quantifier::one_or_more())
    }

    /// `x?` — zero or one
    fn zero_or_one(self) -> Expr {
        self.quantified(Quantifier::zero_or_one())
    }

    /// Alias for [`Quantify::zero_or_one`]
    fn optional(self) -> Expr {
        self.zero_or_one()
    }

    /// `x{n}` — exactly `n`
    fn exactly(self, n: u32) -> Expr {
        self.quantified(Quantifier::exactly(n))
    }

    /// `x{n,m}` — between `n` and `m`; fails when `n > m`
    fn between(self, lower: u32, upper: u32) -> Result<Expr> {
        Ok(self.quantified(Quantifier::between(lower, upper)?))
    }

    /// `x{n,}` — at least `n`
    fn at_least(self, n: u32) -> Expr {
        self.quantified(Quantifier::at_least(n))
    }

    /// `x{,m}` — at most `m`
    fn at_most(self, m: u32) -> Expr {
        self.quantified(Quantifier::at_most(m))
    }

    /// Strictly more than `n` — `x{n+1,}`
    fn greater_than(self, n: u32) -> Expr {
        self.at_least(n + 1)
    }

    /// `n` or more — alias for [`Quantify::at_least`]
    fn greater_or_equal(self, n: u32) -> Expr {
        self.at_least(n)
    }

    /// Strictly fewer than `n` — `x{,n-1}`; fails when `n < 1`
    fn less_than(self, n: u32) -> Result<Expr> {
        if n < 1 {
            return Err(Error::InvalidRepeat(
                "less_than requires a positive count".to_string(),
            ));
        }
        Ok(self.at_most(n - 1))
    }

    /// `n` or fewer — alias for [`Quantify::at_most`]
    fn less_or_equal(self, n: u32) -> Expr {
        self.at_most(n)
    }
}

impl Quantify for crate::ast::elements::atom::Atom {}
impl Quantify for crate::ast::elements::sequence::Sequence {}
impl Quantify for crate::ast::elements::char_set::CharSet {}
impl Quantify for crate::ast::elements::group::Group {}
impl Quantify for Expr {}
