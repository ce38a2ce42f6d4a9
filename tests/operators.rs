//! Composition operator behavior across node shapes

use rex::{any_char, digit, Atom, CharSet, Expr, Fragment, Group, Quantify, Sequence};

#[test]
fn concatenation_flattens_sequences() {
    let cases: Vec<(Expr, &str)> = vec![
        ("foo" + Sequence::new(["bar"]), "foobar"),
        (Sequence::new(["foo"]) + "bar", "foobar"),
        (Sequence::new(["foo"]) + Sequence::new(["bar"]), "foobar"),
    ];
    for (expr, expected) in cases {
        assert_eq!(expr.to_string(), expected);
        // flattened to one atom per character, not nested composites
        assert_eq!(expr.children().len(), 6);
    }
}

#[test]
fn concatenation_keeps_groups_and_sets_opaque() {
    let expr = Sequence::new([Fragment::from("foo"), Group::new(["baz"]).into()]) + "bar";
    assert_eq!(expr.to_string(), "foo(baz)bar");

    let expr = "foo" + Sequence::new([Fragment::from("bar"), Group::new(["baz"]).into()]);
    assert_eq!(expr.to_string(), "foobar(baz)");

    let expr = Sequence::new([Fragment::from("foo"), CharSet::new(["baz"]).into()]) + "bar";
    assert_eq!(expr.to_string(), "foo[baz]bar");
}

#[test]
fn concatenation_is_associative_on_rendered_text() {
    let left = (Atom::new("a").unwrap() + "b") + Sequence::new(["cd"]);
    let right = Atom::new("a").unwrap() + ("b" + Sequence::new(["cd"]));
    assert_eq!(left.to_string(), right.to_string());
    assert_eq!(left, right);
}

#[test]
fn alternation_interleaves_a_bar() {
    let expr = Atom::new("f").unwrap() | Atom::new("b").unwrap();
    assert_eq!(expr.to_string(), "f|b");

    let expr = "f" | Sequence::new(["b"]);
    assert_eq!(expr.to_string(), "f|b");

    let expr = Sequence::new(["foo"]) | "bar";
    assert_eq!(expr.to_string(), "foo|bar");
}

#[test]
fn alternation_is_unparenthesized() {
    let expr = Sequence::new(["foo"]) | "bar";
    assert!(expr.is_sequence());
    // grouping is the caller's decision
    let grouped = Group::new([expr]);
    assert_eq!(grouped.to_string(), "(foo|bar)");
}

#[test]
fn alternation_through_engine() {
    let expr = Sequence::new(["foo"]) | "bar";
    let compiled = expr.compile().unwrap();
    assert!(compiled.is_match("foo"));
    assert!(compiled.is_match("bar"));
    assert!(!compiled.is_match("qux"));
}

#[test]
fn tokens_compose_with_operators() {
    let expr = digit() + any_char() + digit();
    assert_eq!(expr.to_string(), r"\d.\d");
}

#[test]
fn mixed_chain_keeps_shapes() {
    let expr = digit().one_or_more() + "-" + Group::new(["ab"]) + CharSet::new(["xy"]);
    assert_eq!(expr.to_string(), r"\d+-(ab)[xy]");
}

#[test]
fn repeat_operator_on_expr() {
    let expr = (digit() + "a") * 2;
    assert_eq!(expr.to_string(), r"(\da){2}");

    let expr = (digit() + "a") * (1, 3);
    assert_eq!(expr.to_string(), r"(\da){1,3}");
}
