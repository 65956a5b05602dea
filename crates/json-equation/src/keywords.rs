//! Textual operator-keyword pre-pass.
//!
//! Replaces `add`, `multiply`, `divide`, `subtract` and `equal` with their
//! operator symbols anywhere in the raw input, before JSON decoding. The
//! replacement is a blind substring match: it is not JSON-aware and also
//! rewrites keywords embedded in longer words (`"padded"` becomes
//! `"p+ed"`).

use crate::operator::Operator;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

fn keyword_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let alternation = Operator::ALL
            .iter()
            .map(|op| regex::escape(op.keyword()))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).expect("keyword alternation is a valid pattern")
    })
}

/// Substitutes every operator keyword in `input` with its symbol.
///
/// Returns the input unchanged (borrowed) when no keyword occurs.
pub fn substitute_keywords(input: &str) -> Cow<'_, str> {
    keyword_regex().replace_all(input, |caps: &Captures<'_>| {
        Operator::parse(&caps[0])
            .map(Operator::symbol)
            .unwrap_or_default()
    })
}
