//! Top-down style resolution: cascade, inline declarations, inheritance.

use std::collections::HashMap;

use css_cascade::{DEFAULT_FONT_SIZE_PX, INHERITED_PROPERTIES, Rule, inherit_property};
use css_selectors::ElementAdapter;
use css_style_attr::parse_style_attribute;
use css_values_units::{Length, parse_length, parse_percentage};
use log::trace;

use crate::{Style, StyleTable};

/// Resolve `node` and then its subtree. The parent's style is fully
/// finalized before any child is visited; children read the parent's
/// resolved values, never its declared ones. This ordering is mandatory;
/// percentage font sizes resolve against the parent's absolute value.
pub fn resolve_node<D: ElementAdapter>(
    document: &D,
    node: D::Handle,
    parent_style: Option<&Style>,
    rules: &[Rule],
    table: &mut StyleTable<D::Handle>,
) {
    let style = if document.tag_name(node).is_some() {
        resolve_element(document, node, parent_style, rules)
    } else {
        // Text carries no selectors of its own; it inherits the parent's
        // resolved map wholesale.
        parent_style.map_or_else(|| inherit_into(HashMap::new(), None), Style::clone)
    };
    for child in document.children(node) {
        resolve_node(document, child, Some(&style), rules, table);
    }
    table.insert(node, style);
}

/// Cascade matching rules onto one element, apply its inline declarations
/// last, then fill inheritable gaps from the parent's resolved style.
fn resolve_element<D: ElementAdapter>(
    document: &D,
    node: D::Handle,
    parent_style: Option<&Style>,
    rules: &[Rule],
) -> Style {
    let mut properties = HashMap::new();
    css_cascade::apply_matching_rules(document, node, rules, &mut properties);
    if let Some(inline) = document.attr(node, "style") {
        for declaration in parse_style_attribute(inline) {
            properties.insert(declaration.name, declaration.value);
        }
    }
    trace!("cascaded {} properties", properties.len());
    inherit_into(properties, parent_style)
}

/// Ensure every inheritable property has a value (cascaded, inherited, or
/// default) and resolve `font-size` to an absolute length.
fn inherit_into(properties: HashMap<String, String>, parent_style: Option<&Style>) -> Style {
    let mut style = Style::from_map(properties);
    for name in INHERITED_PROPERTIES {
        if style.value(name).is_none() {
            let parent_value = parent_style
                .and_then(|parent| parent.value(name))
                .map(ToOwned::to_owned);
            if let Some(value) = inherit_property(name, None, parent_value) {
                style.set(name, value);
            }
        }
    }
    let resolved = resolve_font_size(style.value("font-size"), parent_style);
    style.set("font-size", resolved.to_string());
    style
}

/// Resolve `font-size` to an absolute `px` length.
///
/// The parent's resolved value is always absolute, so percentages never
/// compound through inheritance. Anything unrecognized falls back to the
/// parent's (or default) absolute value; this never fails.
fn resolve_font_size(declared: Option<&str>, parent_style: Option<&Style>) -> Length {
    let parent_px = parent_style
        .and_then(|parent| parent.value("font-size"))
        .and_then(|value| parse_length(value).ok())
        .map_or(DEFAULT_FONT_SIZE_PX, |length| length.value);
    declared
        .and_then(|text| {
            parse_percentage(text).map_or_else(
                |_| parse_length(text).ok(),
                |percentage| Some(percentage.resolve_against(parent_px)),
            )
        })
        .unwrap_or_else(|| Length::px(parent_px))
}
