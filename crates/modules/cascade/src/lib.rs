//! Cascade ordering and the inheritance property table.
//!
//! Conflict resolution is deterministic over two keys: selector specificity,
//! then position in the concatenated rule sequence. Rules are sorted
//! ascending by that pair and applied with unconditional overwrite, so the
//! last write (highest specificity, or latest source position among equals)
//! wins. Precedence between rule origins (user-agent defaults before
//! author sheets) is realized purely by concatenation order, never by a
//! separate sort key. Inline `style` declarations are applied after all
//! rules by the engine and therefore always win.
//!
//! The sort uses the source order as an explicit secondary comparison key
//! instead of relying on the stability of any particular sort routine.

#![forbid(unsafe_code)]

use core::cmp::Ordering;
use std::collections::HashMap;

use css_selectors::{ElementAdapter, Selector, Specificity, matches};
use css_syntax::Declaration;

/// Where a rule came from. User-agent rules are concatenated ahead of author
/// rules, which gives authors precedence at equal specificity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Origin {
    /// Built-in default rules.
    UserAgent,
    /// Rules from document-referenced stylesheets.
    Author,
}

/// A parsed rule ready for cascading.
#[derive(Clone, Debug)]
pub struct Rule {
    /// Rule provenance (UA defaults or author sheet).
    pub origin: Origin,
    /// Position in the concatenated rule sequence; the cascade tie-breaker.
    pub source_order: u32,
    /// The rule's selector.
    pub selector: Selector,
    /// Selector specificity, fixed at construction.
    pub specificity: Specificity,
    /// Declarations applied when the selector matches.
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Build a rule, computing the selector's specificity once.
    #[inline]
    pub fn new(
        origin: Origin,
        source_order: u32,
        selector: Selector,
        declarations: Vec<Declaration>,
    ) -> Self {
        let specificity = selector.specificity();
        Self {
            origin,
            source_order,
            selector,
            specificity,
            declarations,
        }
    }

    /// The rule's cascade sort key.
    #[inline]
    pub const fn priority(&self) -> CascadePriority {
        CascadePriority {
            specificity: self.specificity,
            source_order: self.source_order,
        }
    }
}

/// Sort key used to order rules in the cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadePriority {
    /// Selector specificity; the primary key.
    pub specificity: Specificity,
    /// Position in the concatenated sequence; breaks specificity ties in
    /// favor of later rules.
    pub source_order: u32,
}

/// Compare two priorities; the greater one wins when applied last.
pub fn compare_priority(left: &CascadePriority, right: &CascadePriority) -> Ordering {
    if left.specificity != right.specificity {
        return left.specificity.cmp(&right.specificity);
    }
    left.source_order.cmp(&right.source_order)
}

/// Sort rules ascending by `(specificity, source_order)` so that a plain
/// in-order walk with overwrite yields the cascade result.
pub fn sort_rules(rules: &mut [Rule]) {
    rules.sort_by(|left, right| compare_priority(&left.priority(), &right.priority()));
}

/// Apply every matching rule's declarations to `properties` in cascade
/// order. `rules` must already be sorted by [`sort_rules`]; each write
/// overwrites unconditionally.
pub fn apply_matching_rules<A: ElementAdapter>(
    adapter: &A,
    node: A::Handle,
    rules: &[Rule],
    properties: &mut HashMap<String, String>,
) {
    for rule in rules {
        if matches(adapter, node, &rule.selector) {
            for declaration in &rule.declarations {
                properties.insert(declaration.name.clone(), declaration.value.clone());
            }
        }
    }
}

/// Default font size in device-independent pixels, used at the tree root
/// and as the percentage-resolution fallback.
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// The fixed set of inheritable properties other than `font-size`, which is
/// inherited too but resolved to an absolute length by the engine.
pub const INHERITED_PROPERTIES: [&str; 3] = ["color", "font-weight", "font-style"];

/// Whether a property's value propagates from parent to child when unset.
pub fn is_inherited_property(property_name: &str) -> bool {
    matches!(
        property_name,
        "color" | "font-weight" | "font-style" | "font-size"
    )
}

/// Initial values, used at the root or when no parent value exists.
pub fn initial_value(property_name: &str) -> Option<&'static str> {
    match property_name {
        "color" => Some("black"),
        "font-weight" => Some("normal"),
        "font-style" => Some("normal"),
        "font-size" => Some("16px"),
        _ => None,
    }
}

/// Resolve a property through inheritance: the declared value if present,
/// else the parent's resolved value for inheritable properties, else the
/// initial value.
pub fn inherit_property(
    property_name: &str,
    declared_value: Option<String>,
    parent_resolved_value: Option<String>,
) -> Option<String> {
    if let Some(value) = declared_value {
        return Some(value);
    }
    if is_inherited_property(property_name) && parent_resolved_value.is_some() {
        return parent_resolved_value;
    }
    initial_value(property_name).map(ToOwned::to_owned)
}
