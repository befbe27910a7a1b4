#![allow(
    clippy::unwrap_used,
    reason = "Assertions in tests are expected to panic on failure"
)]

use dom::Document;
use styleworks::resolve_document;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn id_specificity_dominates_tag_regardless_of_file_order() {
    init_logging();
    let mut document = Document::new("html", &[]);
    let body = document.append_element(document.root(), "body", &[]);
    let anchor = document.append_element(body, "a", &[("id", "x")]);

    for sheet in [
        "a { color: red; } #x { color: blue; }",
        "#x { color: blue; } a { color: red; }",
    ] {
        let table = resolve_document(&document, document.root(), &[sheet]);
        let style = table.style(anchor).unwrap();
        assert_eq!(style.value("color"), Some("blue"));
    }
}

#[test]
fn later_source_position_wins_at_equal_specificity() {
    init_logging();
    let mut document = Document::new("html", &[]);
    let body = document.append_element(document.root(), "body", &[]);
    let paragraph = document.append_element(body, "p", &[]);

    // Within one sheet.
    let single_sheet = resolve_document(
        &document,
        document.root(),
        &["p { color: red; } p { color: blue; }"],
    );
    assert_eq!(
        single_sheet.style(paragraph).unwrap().value("color"),
        Some("blue")
    );

    // Across two sheets: the second-referenced sheet comes later in the
    // concatenated order.
    let split_sheets = resolve_document(
        &document,
        document.root(),
        &["p { color: red; }", "p { color: blue; }"],
    );
    assert_eq!(
        split_sheets.style(paragraph).unwrap().value("color"),
        Some("blue")
    );
}

#[test]
fn class_beats_tag_and_loses_to_id() {
    let mut document = Document::new("html", &[]);
    let body = document.append_element(document.root(), "body", &[]);
    let div = document.append_element(body, "div", &[("class", "big"), ("id", "main")]);

    let with_id = resolve_document(
        &document,
        document.root(),
        &["#main { color: green; } .big { color: blue; } div { color: red; }"],
    );
    assert_eq!(with_id.style(div).unwrap().value("color"), Some("green"));

    let without_id = resolve_document(
        &document,
        document.root(),
        &[".big { color: blue; } div { color: red; }"],
    );
    assert_eq!(without_id.style(div).unwrap().value("color"), Some("blue"));
}

#[test]
fn inline_style_wins_over_any_selector() {
    init_logging();
    let mut document = Document::new("html", &[]);
    let body = document.append_element(document.root(), "body", &[]);
    let div = document.append_element(
        body,
        "div",
        &[("id", "x"), ("style", "color:green")],
    );

    let table = resolve_document(
        &document,
        document.root(),
        &["#x { color: blue; } div { color: red; }"],
    );
    assert_eq!(table.style(div).unwrap().value("color"), Some("green"));
}

#[test]
fn descendant_chain_outweighs_single_tag() {
    let mut document = Document::new("html", &[]);
    let body = document.append_element(document.root(), "body", &[]);
    let list = document.append_element(body, "ul", &[]);
    let item = document.append_element(list, "li", &[]);

    let table = resolve_document(
        &document,
        document.root(),
        &["ul li { color: blue; } li { color: red; }"],
    );
    assert_eq!(table.style(item).unwrap().value("color"), Some("blue"));
}

#[test]
fn default_sheet_sets_display_and_authors_override_it() {
    init_logging();
    let mut document = Document::new("html", &[]);
    let body = document.append_element(document.root(), "body", &[]);
    let div = document.append_element(body, "div", &[]);
    let span = document.append_element(body, "span", &[]);

    let defaults_only = resolve_document(&document, document.root(), &[]);
    assert_eq!(
        defaults_only.style(div).unwrap().value("display"),
        Some("block")
    );
    assert_eq!(
        defaults_only.style(span).unwrap().value("display"),
        Some("inline")
    );

    // Author rules follow user-agent rules in the concatenated order, so an
    // equal-specificity author rule wins.
    let overridden =
        resolve_document(&document, document.root(), &["div { display: inline; }"]);
    assert_eq!(
        overridden.style(div).unwrap().value("display"),
        Some("inline")
    );
}

#[test]
fn rules_with_unrecognized_selectors_are_dropped() {
    init_logging();
    let mut document = Document::new("html", &[]);
    let body = document.append_element(document.root(), "body", &[]);
    let paragraph = document.append_element(body, "p", &[]);

    let table = resolve_document(
        &document,
        document.root(),
        &["p, q { color: red; } p { color: blue; }"],
    );
    assert_eq!(
        table.style(paragraph).unwrap().value("color"),
        Some("blue")
    );
}
