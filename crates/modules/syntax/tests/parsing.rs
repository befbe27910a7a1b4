#![allow(
    clippy::unwrap_used,
    reason = "Assertions in tests are expected to panic on failure"
)]

use css_syntax::{Declaration, parse_declaration_list, parse_stylesheet};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn single_rule_parses() {
    init_logging();
    let sheet = parse_stylesheet("p { color: red; }");
    assert_eq!(sheet.rules.len(), 1);
    let rule = &sheet.rules[0];
    assert_eq!(rule.prelude, "p");
    assert_eq!(
        rule.declarations,
        vec![Declaration {
            name: "color".to_owned(),
            value: "red".to_owned(),
        }]
    );
}

#[test]
fn property_names_are_lowercased_values_preserved() {
    let sheet = parse_stylesheet("p { COLOR: Red; }");
    assert_eq!(sheet.rules[0].declarations[0].name, "color");
    assert_eq!(sheet.rules[0].declarations[0].value, "Red");
}

#[test]
fn trailing_semicolon_is_optional_before_closing_brace() {
    let sheet = parse_stylesheet("p { color: red; font-size: 10px }");
    assert_eq!(sheet.rules[0].declarations.len(), 2);
    assert_eq!(sheet.rules[0].declarations[1].value, "10px");
}

#[test]
fn descendant_prelude_is_kept_raw() {
    let sheet = parse_stylesheet("ul li .item { font-weight: bold; }");
    assert_eq!(sheet.rules[0].prelude, "ul li .item");
}

#[test]
fn malformed_declaration_resynchronizes_at_semicolon() {
    init_logging();
    let sheet = parse_stylesheet("p { colr 123; color: blue; }");
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(
        sheet.rules[0].declarations,
        vec![Declaration {
            name: "color".to_owned(),
            value: "blue".to_owned(),
        }]
    );
}

#[test]
fn declaration_failure_without_semicolon_drops_whole_rule() {
    init_logging();
    let sheet = parse_stylesheet("p { colr 123 } q { color: red; }");
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].prelude, "q");
    assert_eq!(sheet.rules[0].declarations[0].value, "red");
}

#[test]
fn top_level_garbage_resynchronizes_at_closing_brace() {
    let sheet = parse_stylesheet("@media screen } p { color: red; }");
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].prelude, "p");
}

#[test]
fn truncated_block_keeps_parsed_declarations() {
    let sheet = parse_stylesheet("p { color: red;");
    assert_eq!(sheet.rules.len(), 1);
    assert_eq!(sheet.rules[0].declarations.len(), 1);
}

#[test]
fn empty_value_is_dropped_but_following_declaration_survives() {
    let sheet = parse_stylesheet("p { color: ; font-style: italic; }");
    assert_eq!(
        sheet.rules[0].declarations,
        vec![Declaration {
            name: "font-style".to_owned(),
            value: "italic".to_owned(),
        }]
    );
}

#[test]
fn parsing_is_total_on_adversarial_inputs() {
    init_logging();
    let inputs = [
        "",
        " \t\n",
        "{",
        "}",
        "{}",
        "{}{}{}",
        "}}}}",
        "p",
        "p {",
        "p { color",
        "p { color: ",
        "p { color: red",
        "p p p",
        ";;;;",
        "####",
        "p { : red; }",
        "p {{{ color: red; }}}",
        "\u{1F980} { color: red; }",
    ];
    for input in inputs {
        // Must return without panicking or hanging; rule counts vary.
        let _sheet = parse_stylesheet(input);
    }
}

#[test]
fn empty_and_malformed_sheets_yield_empty_rule_lists() {
    assert!(parse_stylesheet("").rules.is_empty());
    assert!(parse_stylesheet("not a stylesheet at all").rules.is_empty());
}

#[test]
fn declaration_list_accepts_missing_trailing_semicolon() {
    let declarations = parse_declaration_list("color:green");
    assert_eq!(
        declarations,
        vec![Declaration {
            name: "color".to_owned(),
            value: "green".to_owned(),
        }]
    );
}

#[test]
fn declaration_list_skips_malformed_items() {
    let declarations = parse_declaration_list("colr 1; color: blue; ;; font-size: 200%");
    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].name, "color");
    assert_eq!(declarations[1].value, "200%");
}

#[test]
fn declaration_list_of_garbage_is_empty() {
    assert!(parse_declaration_list("color").is_empty());
    assert!(parse_declaration_list("::;;::").is_empty());
    assert!(parse_declaration_list("").is_empty());
}
