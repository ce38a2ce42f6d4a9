//! Quantifier element
//!
//! A `Quantifier` is an immutable repetition descriptor: optional lower and
//! upper bounds plus a laziness flag. It renders to the canonical regex
//! repetition syntax (`*`, `+`, `?`, `{n}`, `{n,m}`, ...) through
//! `fmt::Display` and to a natural-language clause through
//! [`Quantifier::explanation`].
//!
//! Bounds are validated on the raw caller inputs, then normalized: an upper
//! bound of 1 always stores a lower bound of 0, so the value renders `?`.
//! "Exactly one" therefore degenerates to "zero or one"; this mirrors the
//! behavior of the system this crate renders for.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A repetition descriptor attachable to any node
///
/// Compared by `(lower, upper, lazy)`. Every operation that would change a
/// `Quantifier` returns a new value; nothing mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Quantifier {
    lower: Option<u32>,
    upper: Option<u32>,
    lazy: bool,
}

impl Quantifier {
    /// Create a quantifier from explicit bounds
    ///
    /// At least one bound must be given, and when both are given the lower
    /// bound must not exceed the upper bound. The check runs on the raw
    /// inputs: `bounded(Some(2), Some(1))` is an error even though the
    /// upper bound of 1 would normalize the lower bound away.
    pub fn bounded(lower: Option<u32>, upper: Option<u32>) -> Result<Self> {
        match (lower, upper) {
            (None, None) => Err(Error::MissingBounds),
            (Some(lo), Some(hi)) if lo > hi => {
                Err(Error::InvalidQuantifier { lower: lo, upper: hi })
            }
            _ => {
                // upper == 1 always collapses to the `?` form
                let lower = if upper == Some(1) { Some(0) } else { lower };
                Ok(Self {
                    lower,
                    upper,
                    lazy: false,
                })
            }
        }
    }

    /// `*` — zero or more of the preceding token
    pub fn zero_or_more() -> Self {
        Self {
            lower: Some(0),
            upper: None,
            lazy: false,
        }
    }

    /// `+` — one or more of the preceding token
    pub fn one_or_more() -> Self {
        Self {
            lower: Some(1),
            upper: None,
            lazy: false,
        }
    }

    /// `?` — zero or one of the preceding token
    pub fn zero_or_one() -> Self {
        Self {
            lower: Some(0),
            upper: Some(1),
            lazy: false,
        }
    }

    /// `{n}` — exactly `n` of the preceding token
    ///
    /// `exactly(1)` normalizes to the `?` form; see the module docs.
    pub fn exactly(n: u32) -> Self {
        let lower = if n == 1 { Some(0) } else { Some(n) };
        Self {
            lower,
            upper: Some(n),
            lazy: false,
        }
    }

    /// `{n,m}` — between `n` and `m` of the preceding token
    pub fn between(lower: u32, upper: u32) -> Result<Self> {
        Self::bounded(Some(lower), Some(upper))
    }

    /// `{n,}` — at least `n` of the preceding token
    pub fn at_least(n: u32) -> Self {
        Self {
            lower: Some(n),
            upper: None,
            lazy: false,
        }
    }

    /// `{,m}` — at most `m` of the preceding token
    ///
    /// `at_most(1)` normalizes to the `?` form; see the module docs.
    pub fn at_most(m: u32) -> Self {
        let lower = if m == 1 { Some(0) } else { None };
        Self {
            lower,
            upper: Some(m),
            lazy: false,
        }
    }

    /// Return a lazy copy of this quantifier (`a+` becomes `a+?`)
    pub fn lazy(self) -> Self {
        Self { lazy: true, ..self }
    }

    /// Whether this quantifier matches lazily
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// The effective lower bound, after normalization
    pub fn lower(&self) -> Option<u32> {
        self.lower
    }

    /// The effective upper bound
    pub fn upper(&self) -> Option<u32> {
        self.upper
    }

    /// The natural-language clause for this quantifier
    ///
    /// Used by the explain renderer, e.g. "Quantifier. Matches one or more
    /// of the preceding token".
    pub fn explanation(&self) -> String {
        let clause = match (self.lower, self.upper) {
            (Some(lo), Some(hi)) if lo == hi => format!("exactly {}", lo),
            (Some(0), None) => "zero or more".to_string(),
            (Some(1), None) => "one or more".to_string(),
            (Some(0), Some(1)) => "zero or one".to_string(),
            (None, Some(hi)) => format!("at most {}", hi),
            (Some(lo), None) => format!("at least {}", lo),
            (Some(lo), Some(hi)) => format!("between {} and {}", lo, hi),
            (None, None) => unreachable!("validated at construction"),
        };
        format!("Quantifier. Matches {} of the preceding token", clause)
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(lo), Some(hi)) if lo == hi => write!(f, "{{{}}}", lo)?,
            (Some(0), Some(1)) => write!(f, "?")?,
            (Some(0), None) => write!(f, "*")?,
            (Some(1), None) => write!(f, "+")?,
            (lo, hi) => {
                let lo = lo.map(|n| n.to_string()).unwrap_or_default();
                let hi = hi.map(|n| n.to_string()).unwrap_or_default();
                write!(f, "{{{},{}}}", lo, hi)?;
            }
        }
        if self.lazy {
            write!(f, "?")?;
        }
        Ok(())
    }
}
