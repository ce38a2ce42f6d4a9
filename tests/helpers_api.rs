//! The any_of / optional helper surface

use rstest::rstest;
use rex::{any_of, optional, Atom, Error, Fragment, Group};

#[rstest]
#[case(vec!["a", "b", "c"], "[abc]")]
#[case(vec!["abc"], "[abc]")]
#[case(vec!["a", "foo", "b", "c"], "(a|foo|b|c)")]
#[case(vec!["foo", "bar", "baz"], "(foo|bar|baz)")]
fn any_of_picks_set_or_alternation(#[case] fragments: Vec<&str>, #[case] expected: &str) {
    assert_eq!(any_of(fragments).unwrap().to_string(), expected);
}

#[rstest]
#[case(vec!["a", "b", "c"], "(abc)?")]
#[case(vec!["abc"], "(abc)?")]
#[case(vec!["a", "foo", "b", "c"], "(afoobc)?")]
#[case(vec!["foo", "bar", "baz"], "(foobarbaz)?")]
fn optional_wraps_multi_atom_runs(#[case] fragments: Vec<&str>, #[case] expected: &str) {
    assert_eq!(optional(fragments).to_string(), expected);
}

#[test]
fn any_of_with_no_fragments_fails() {
    let empty: [&str; 0] = [];
    assert_eq!(any_of(empty), Err(Error::EmptyAlternation));
}

#[test]
fn any_of_with_a_single_node_fails() {
    let result = any_of([Fragment::from(Group::new(["ab"]))]);
    assert_eq!(result, Err(Error::InvalidPattern("(ab)".to_string())));
}

#[test]
fn any_of_accepts_ranges_as_set_members() {
    let expr = any_of([Atom::new("a-z").unwrap(), Atom::new("0-9").unwrap()]).unwrap();
    assert_eq!(expr.to_string(), "[a-z0-9]");
}

#[test]
fn any_of_alternation_through_engine() {
    let expr = any_of(["foo", "bar", "baz"]).unwrap();
    let compiled = expr.compile().unwrap();
    assert!(compiled.is_match("bar"));
    assert!(!compiled.is_match("qux"));
}

#[test]
fn optional_single_atom_skips_parens() {
    assert_eq!(optional(["a"]).to_string(), "a?");
}
