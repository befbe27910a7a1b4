//! Inline `style="…"` attribute processing.
//!
//! A style attribute is a bare declaration list: the stylesheet grammar
//! without selectors or braces, and with no trailing `;` requirement.
//! Tokenization is shared with the sheet parser in `css_syntax`, so the two
//! accept exactly the same declarations and drop malformed items the same
//! way. Inline declarations are applied after all stylesheet rules, so they
//! win regardless of any selector's specificity.

#![forbid(unsafe_code)]

use std::collections::HashMap;

pub use css_syntax::Declaration;

/// Parse a `style` attribute value into declarations, skipping malformed
/// items.
#[inline]
pub fn parse_style_attribute(input: &str) -> Vec<Declaration> {
    css_syntax::parse_declaration_list(input)
}

/// Parse a `style` attribute into a map keyed by property name. When a
/// property repeats, the last occurrence wins, matching source-order
/// behavior for duplicate declarations within one block.
pub fn parse_style_attribute_into_map(input: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for declaration in parse_style_attribute(input) {
        map.insert(declaration.name, declaration.value);
    }
    map
}

#[cfg(test)]
mod tests {
    #![allow(
        clippy::unwrap_used,
        reason = "Assertions in tests are expected to panic on failure"
    )]

    use super::{parse_style_attribute, parse_style_attribute_into_map};

    #[test]
    fn splits_declarations_and_lowercases_names() {
        let declarations = parse_style_attribute("Color: green; font-size: 200%");
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].name, "color");
        assert_eq!(declarations[0].value, "green");
        assert_eq!(declarations[1].name, "font-size");
    }

    #[test]
    fn single_declaration_without_semicolon() {
        let declarations = parse_style_attribute("color:green");
        assert_eq!(declarations.len(), 1);
    }

    #[test]
    fn malformed_items_are_skipped() {
        let declarations = parse_style_attribute("nonsense; color: red; : ;");
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].name, "color");
    }

    #[test]
    fn last_duplicate_wins_in_map_form() {
        let map = parse_style_attribute_into_map("color: red; color: blue");
        assert_eq!(map.get("color").map(String::as_str), Some("blue"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_style_attribute("").is_empty());
        assert!(parse_style_attribute_into_map("  ").is_empty());
    }
}
