//! Expression-tree data model
//!
//! The tree is built bottom-up from leaves ([`elements::Atom`]) and
//! composites ([`elements::Sequence`], [`elements::CharSet`],
//! [`elements::Group`]), dispatched uniformly through [`elements::Expr`].
//! Rendering is `fmt::Display`; the annotated explanation lives in
//! [`explain`].

pub mod classify;
pub mod elements;
pub mod explain;
pub mod quantifier;
pub mod traits;
