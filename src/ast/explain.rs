//! Explain rendering - the annotated, human-readable tree serialization
//!
//! The explain renderer is a stateless recursive walk over a finished tree:
//! 1. Atoms become one line: the bolded token, then its sentence
//! 2. Composites become a frame: annotation + `(`, one indented entry per
//!    child, then `)`
//! 3. A quantified node gains a trailing `└─ Quantifier...` line
//!
//! Sentences for tokens with a fixed regex meaning (escapes, anchors, the
//! alternation bar) come from a static table; everything else falls back to
//! the character's classification.

use crate::ast::classify::Classification;
use crate::ast::elements::atom::Atom;
use crate::ast::elements::expr::Expr;
use colored::Colorize;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sentences for tokens whose meaning is fixed by the regex grammar
/// Checked before classification so `|` and the escapes never fall through
/// to a character sentence
const TOKEN_SENTENCES: &[(&str, &str)] = &[
    (r"\d", "Digit. Matches any single digit"),
    (r"\D", "Non-digit. Matches any character that is not a digit"),
    (r"\s", "Whitespace. Matches any whitespace character"),
    (r"\S", "Non-whitespace. Matches any character that is not whitespace"),
    (r"\w", "Word character. Matches letters, digits and underscores"),
    (
        r"\W",
        "Non-word character. Matches any character that is not a word character",
    ),
    (r"\b", "Word boundary. Matches the empty string at the edge of a word"),
    (
        r"\B",
        "Non-word boundary. Matches the empty string not at the edge of a word",
    ),
    (".", "Any character. Matches any single character"),
    ("^", "Start of string. Anchors the match at the start of the input"),
    ("$", "End of string. Anchors the match at the end of the input"),
    (
        "|",
        "Alternation (OR). Matches expression on either side of the '|'",
    ),
];

static SENTENCES: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TOKEN_SENTENCES.iter().copied().collect());

/// The explanation sentence for an atom's token
pub(crate) fn token_sentence(atom: &Atom) -> String {
    let text = atom.text();
    if let Some(sentence) = SENTENCES.get(text) {
        return (*sentence).to_string();
    }
    if atom.is_range() {
        let chars: Vec<char> = text.chars().collect();
        return format!(
            "Character range. Matches any character from '{}' to '{}'",
            chars[0], chars[2]
        );
    }
    if atom.is_escape() {
        let escaped: String = text.chars().skip(1).collect();
        return format!("Escaped character. Matches '{}'", escaped);
    }
    let label = match atom.classification() {
        Classification::Digit => "Digit",
        Classification::Lowercase => "Lowercase letter",
        Classification::Uppercase => "Uppercase letter",
        Classification::Whitespace => "Whitespace",
        Classification::Punctuation => "Punctuation",
        Classification::Alternation => {
            return SENTENCES["|"].to_string();
        }
        Classification::Other => "Character",
    };
    format!("{}. Matches '{}'", label, text)
}

/// Render the explanation block for one atom at the given depth
pub(crate) fn explain_atom(atom: &Atom, depth: usize) -> String {
    let pad = indent(depth);
    let mut out = format!("{}{}  {}", pad, atom.to_string().bold(), atom.explanation());
    if let Some(quantifier) = atom.quantifier() {
        out.push('\n');
        out.push_str(&indent(depth + 1));
        out.push_str("└─ ");
        out.push_str(&quantifier.explanation());
    }
    out
}

/// Render the explanation tree for any node at the given depth
pub(crate) fn explain_expr(expr: &Expr, depth: usize) -> String {
    let node = match expr {
        Expr::Atom(atom) => return explain_atom(atom, depth),
        _ => expr,
    };
    let pad = indent(depth);
    let mut out = String::new();
    match node {
        Expr::Group(group) if group.name().is_some() => {
            out.push_str(&format!(
                "{}{} '{}'(\n",
                pad,
                node.annotation(),
                group.name().unwrap_or_default()
            ));
        }
        _ => out.push_str(&format!("{}{}(\n", pad, node.annotation())),
    }
    for child in node.children() {
        out.push_str(&explain_expr(child, depth + 1));
        out.push('\n');
    }
    out.push_str(&pad);
    out.push(')');
    if let Some(quantifier) = node.quantifier() {
        out.push('\n');
        out.push_str(&pad);
        out.push_str("└─ ");
        out.push_str(&quantifier.explanation());
    }
    out
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
