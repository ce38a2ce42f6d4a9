//! Explain rendering - the annotated tree serialization

use rex::{digit, Atom, CharSet, Group, Quantify, Sequence};

fn plain() {
    colored::control::set_override(false);
}

#[test]
fn atom_explanation_block() {
    plain();
    insta::assert_snapshot!(Atom::new("a").unwrap().explain(), @"a  Lowercase letter. Matches 'a'");
}

#[test]
fn quantified_atom_explanation_block() {
    plain();
    insta::assert_snapshot!(Atom::new("a").unwrap().one_or_more().explain(), @r#"
    a+  Lowercase letter. Matches 'a'
      └─ Quantifier. Matches one or more of the preceding token
    "#);
}

#[test]
fn group_explanation_frame() {
    plain();
    insta::assert_snapshot!(Group::new(["ab"]).one_or_more().explain(), @r#"
    Group(
      a  Lowercase letter. Matches 'a'
      b  Lowercase letter. Matches 'b'
    )
    └─ Quantifier. Matches one or more of the preceding token
    "#);
}

#[test]
fn nested_composite_explanation() {
    plain();
    let expr = "x" + CharSet::new(["ab"]).one_or_more();
    insta::assert_snapshot!(expr.explain(), @r#"
    Sequence(
      x  Lowercase letter. Matches 'x'
      CharacterSet(
        a  Lowercase letter. Matches 'a'
        b  Lowercase letter. Matches 'b'
      )
      └─ Quantifier. Matches one or more of the preceding token
    )
    "#);
}

#[test]
fn named_group_explanation_shows_name() {
    plain();
    insta::assert_snapshot!(Group::named(["ab"], "pair").unwrap().explain(), @r#"
    Group 'pair'(
      a  Lowercase letter. Matches 'a'
      b  Lowercase letter. Matches 'b'
    )
    "#);
}

#[test]
fn escape_and_range_sentences() {
    plain();
    let expr = Sequence::new([digit(), Atom::new("a-z").unwrap()]);
    insta::assert_snapshot!(expr.explain(), @r#"
    Sequence(
      \d  Digit. Matches any single digit
      a-z  Character range. Matches any character from 'a' to 'z'
    )
    "#);
}

#[test]
fn alternation_bar_sentence() {
    plain();
    let expr = Atom::new("f").unwrap() | Atom::new("b").unwrap();
    let explained = expr.explain();
    assert!(explained
        .contains("|  Alternation (OR). Matches expression on either side of the '|'"));
}

#[test]
fn anchor_sentences() {
    plain();
    assert_eq!(
        rex::start_of_string().explanation(),
        "Start of string. Anchors the match at the start of the input"
    );
    assert_eq!(
        rex::end_of_string().explanation(),
        "End of string. Anchors the match at the end of the input"
    );
    assert_eq!(
        rex::start_of_word().explanation(),
        "Word boundary. Matches the empty string at the edge of a word"
    );
}
