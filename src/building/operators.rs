//! Operator impls for the composition algebra
//!
//! `+` concatenates, `|` alternates, `!` negates, and `*` repeats. Each
//! impl forwards to [`crate::building::compose`]; the macro fans the same
//! four forwards out across every node shape, including `&str` on the left
//! so `"foo" + group` composes as naturally as `group + "foo"`.

use crate::ast::elements::atom::Atom;
use crate::ast::elements::char_set::CharSet;
use crate::ast::elements::expr::Expr;
use crate::ast::elements::group::Group;
use crate::ast::elements::sequence::Sequence;
use crate::ast::quantifier::Quantifier;
use crate::ast::traits::Quantify;
use crate::building::compose;
use crate::building::fragment::Fragment;
use std::ops::{Add, BitOr, Mul, Not};

macro_rules! impl_compose_ops {
    ($($ty:ty),+) => {
        $(
            impl<T: Into<Fragment>> Add<T> for $ty {
                type Output = Expr;

                fn add(self, rhs: T) -> Expr {
                    compose::concat(self, rhs)
                }
            }

            impl<T: Into<Fragment>> BitOr<T> for $ty {
                type Output = Expr;

                fn bitor(self, rhs: T) -> Expr {
                    compose::alternate(self, rhs)
                }
            }

            impl Add<$ty> for &str {
                type Output = Expr;

                fn add(self, rhs: $ty) -> Expr {
                    compose::concat(self, rhs)
                }
            }

            impl BitOr<$ty> for &str {
                type Output = Expr;

                fn bitor(self, rhs: $ty) -> Expr {
                    compose::alternate(self, rhs)
                }
            }
        )+
    };
}

impl_compose_ops!(Atom, Sequence, CharSet, Group, Expr);

macro_rules! impl_negate {
    ($($ty:ty),+) => {
        $(
            impl Not for $ty {
                type Output = Expr;

                fn not(self) -> Expr {
                    compose::negate(self)
                }
            }
        )+
    };
}

impl_negate!(Sequence, CharSet, Group, Expr);

macro_rules! impl_repeat {
    ($($ty:ty),+) => {
        $(
            impl Mul<u32> for $ty {
                type Output = Expr;

                fn mul(self, n: u32) -> Expr {
                    self.exactly(n)
                }
            }

            /// Repeat between `n` and `m` times
            ///
            /// Panics when `n > m`; the non-panicking path is
            /// [`Quantify::between`].
            impl Mul<(u32, u32)> for $ty {
                type Output = Expr;

                fn mul(self, (n, m): (u32, u32)) -> Expr {
                    match Quantifier::between(n, m) {
                        Ok(quantifier) => self.quantified(quantifier),
                        Err(err) => panic!("{}", err),
                    }
                }
            }
        )+
    };
}

impl_repeat!(Atom, Expr);
