//! Selector parsing.

use crate::Selector;

/// Parse a selector chain: whitespace-separated bases folded
/// left-associatively into nested [`Selector::Descendant`], so `a b c`
/// becomes `Descendant(Descendant(a, b), c)`.
///
/// Returns `None` for anything outside the subset grammar (empty input,
/// commas, combinator symbols, malformed identifiers); the caller drops the
/// owning rule.
pub fn parse_selector(input: &str) -> Option<Selector> {
    let mut selector: Option<Selector> = None;
    for word in input.split_ascii_whitespace() {
        let base = parse_base(word)?;
        selector = Some(match selector {
            Some(ancestor) => Selector::Descendant(Box::new(ancestor), Box::new(base)),
            None => base,
        });
    }
    selector
}

/// Parse one base: `tag`, `.class`, or `#id`.
fn parse_base(word: &str) -> Option<Selector> {
    if let Some(class) = word.strip_prefix('.') {
        return valid_identifier(class).then(|| Selector::Class(class.to_owned()));
    }
    if let Some(id) = word.strip_prefix('#') {
        return valid_identifier(id).then(|| Selector::Id(id.to_owned()));
    }
    // Tag names are case-insensitive; fold here so matching compares
    // lowercase against lowercase.
    valid_identifier(word).then(|| Selector::Tag(word.to_ascii_lowercase()))
}

/// Identifiers are nonempty runs of ASCII alphanumerics, `-` and `_`.
fn valid_identifier(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
}
