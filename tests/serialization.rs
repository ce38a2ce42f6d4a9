//! Serialized tree shape
//!
//! Trees serialize for inspection and tooling; deserialization is
//! deliberately not offered, since it would bypass construction-time
//! validation.

use rex::{digit, Group, Quantify};
use serde_json::json;

#[test]
fn quantified_atom_serializes() {
    let expr = digit().one_or_more();
    let value = serde_json::to_value(&expr).unwrap();
    assert_eq!(
        value,
        json!({
            "Atom": {
                "text": "\\d",
                "quantifier": { "lower": 1, "upper": null, "lazy": false }
            }
        })
    );
}

#[test]
fn group_serializes_with_flags() {
    let group = Group::named(["a"], "n").unwrap();
    let value = serde_json::to_value(&group).unwrap();
    assert_eq!(
        value,
        json!({
            "children": [
                { "Atom": { "text": "a", "quantifier": null } }
            ],
            "quantifier": null,
            "capture": true,
            "name": "n"
        })
    );
}
