//! Quantifier rendering and attachment behavior

use rstest::rstest;
use rex::{Atom, Error, Quantifier, Quantify, Sequence};

#[rstest]
#[case(Some(0), None, "*")]
#[case(Some(1), None, "+")]
#[case(Some(0), Some(1), "?")]
#[case(Some(3), Some(3), "{3}")]
#[case(Some(3), Some(5), "{3,5}")]
#[case(Some(3), None, "{3,}")]
#[case(None, Some(5), "{,5}")]
#[case(None, Some(0), "{,0}")]
fn renders_bounds(
    #[case] lower: Option<u32>,
    #[case] upper: Option<u32>,
    #[case] expected: &str,
) {
    let quantifier = Quantifier::bounded(lower, upper).unwrap();
    assert_eq!(quantifier.to_string(), expected);
}

#[rstest]
#[case(None, Some(1))]
#[case(Some(1), Some(1))]
#[case(Some(0), Some(1))]
fn upper_one_normalizes_to_question_mark(
    #[case] lower: Option<u32>,
    #[case] upper: Option<u32>,
) {
    let quantifier = Quantifier::bounded(lower, upper).unwrap();
    assert_eq!(quantifier.to_string(), "?");
    assert_eq!(quantifier.lower(), Some(0));
}

#[test]
fn invalid_bounds_are_rejected() {
    assert_eq!(
        Quantifier::bounded(Some(5), Some(3)),
        Err(Error::InvalidQuantifier { lower: 5, upper: 3 })
    );
    assert_eq!(Quantifier::bounded(None, None), Err(Error::MissingBounds));
    // raw bounds are validated before the upper==1 normalization
    assert!(Quantifier::bounded(Some(2), Some(1)).is_err());
}

#[test]
fn laziness_is_a_rebuild() {
    let eager = Quantifier::one_or_more();
    let lazy = eager.lazy();
    assert!(!eager.is_lazy());
    assert!(lazy.is_lazy());
    assert_eq!(lazy.to_string(), "+?");
}

#[rstest]
#[case(Atom::new("a").unwrap().zero_or_more(), "a*")]
#[case(Atom::new("a").unwrap().one_or_more(), "a+")]
#[case(Atom::new("a").unwrap().zero_or_one(), "a?")]
#[case(Atom::new("a").unwrap().exactly(3), "a{3}")]
#[case(Atom::new("a").unwrap().between(3, 5).unwrap(), "a{3,5}")]
#[case(Atom::new("a").unwrap().at_least(3), "a{3,}")]
#[case(Atom::new("a").unwrap().at_most(5), "a{,5}")]
fn atom_quantifying(#[case] expr: rex::Expr, #[case] expected: &str) {
    assert_eq!(expr.to_string(), expected);
}

#[rstest]
#[case(vec!["a"], "a")]
#[case(vec!["a", "b"], "(ab)")]
#[case(vec!["a", "b", "c"], "(abc)")]
fn sequence_quantifying_wraps_when_needed(#[case] fragments: Vec<&str>, #[case] body: &str) {
    let cases: Vec<(rex::Expr, String)> = vec![
        (
            Sequence::new(fragments.clone()).zero_or_more(),
            format!("{}*", body),
        ),
        (
            Sequence::new(fragments.clone()).one_or_more(),
            format!("{}+", body),
        ),
        (
            Sequence::new(fragments.clone()).zero_or_one(),
            format!("{}?", body),
        ),
        (
            Sequence::new(fragments.clone()).exactly(3),
            format!("{}{{3}}", body),
        ),
        (
            Sequence::new(fragments.clone()).between(3, 5).unwrap(),
            format!("{}{{3,5}}", body),
        ),
        (
            Sequence::new(fragments.clone()).at_least(3),
            format!("{}{{3,}}", body),
        ),
        (
            Sequence::new(fragments).at_most(5),
            format!("{}{{,5}}", body),
        ),
    ];
    for (expr, expected) in cases {
        assert_eq!(expr.to_string(), expected);
    }
}

#[test]
fn exactly_one_degenerates_to_zero_or_one() {
    // upper bound 1 always renders ?, even when the caller asked for
    // exactly one occurrence
    assert_eq!(Atom::new("a").unwrap().exactly(1).to_string(), "a?");
}

#[test]
fn lazy_quantified_expression() {
    let expr = Atom::new("a").unwrap().one_or_more().lazy();
    assert_eq!(expr.to_string(), "a+?");

    let expr = Sequence::new(["a", "b"]).one_or_more().lazy();
    assert_eq!(expr.to_string(), "(ab)+?");
}
