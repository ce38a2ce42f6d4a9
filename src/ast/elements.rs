//! Element definitions for the expression tree

pub mod atom;
pub mod char_set;
pub mod expr;
pub mod group;
pub mod sequence;

pub use atom::Atom;
pub use char_set::CharSet;
pub use expr::Expr;
pub use group::Group;
pub use sequence::Sequence;
