//! styleworks: a document style resolution engine.
//!
//! Given raw stylesheet text and a read-only document tree, the engine
//! computes a fully-resolved property map for every node: rules are parsed
//! fault-tolerantly, matched per element, cascaded by
//! `(specificity, source order)` with inline declarations last, and the
//! inheritable properties are filled in top-down so that no node is ever
//! missing one.
//!
//! The engine is synchronous and stateless: each [`resolve_document`] call
//! is independent, reads the tree only through [`ElementAdapter`], and
//! returns an engine-owned [`StyleTable`] for the caller (typically a
//! layout pass) to consume. It has no failure mode: malformed input
//! degrades to fewer rules, and an empty or hopeless sheet still yields
//! default values for every inheritable property.

#![forbid(unsafe_code)]

mod defaults;
mod resolve;
mod rules;

use std::collections::HashMap;
use std::collections::hash_map;

use core::hash::Hash;
use log::debug;

pub use css_cascade::{DEFAULT_FONT_SIZE_PX, Origin, Rule};
pub use css_selectors::ElementAdapter;

/// Resolved style for one node: property name to resolved value. Values are
/// opaque strings except `font-size`, which is always an absolute `px`
/// length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Resolved properties, keyed by lowercased name.
    properties: HashMap<String, String>,
}

impl Style {
    /// The resolved value for `name`, if any.
    #[inline]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Iterate over resolved `(name, value)` pairs in no particular order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of resolved properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no properties are resolved. Never true for engine output:
    /// inheritable properties always receive a value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) const fn from_map(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }

    pub(crate) fn set(&mut self, name: &str, value: String) {
        self.properties.insert(name.to_owned(), value);
    }
}

/// Engine-owned table of resolved styles, keyed by node handle. Produced
/// fresh by every engine run; the document tree itself is never mutated.
#[derive(Clone, Debug)]
pub struct StyleTable<Handle> {
    /// Resolved style per node.
    styles: HashMap<Handle, Style>,
}

impl<Handle: Copy + Eq + Hash> StyleTable<Handle> {
    /// The resolved style for `node`, if the node was part of the resolved
    /// tree.
    #[inline]
    pub fn style(&self, node: Handle) -> Option<&Style> {
        self.styles.get(&node)
    }

    /// Iterate over `(handle, style)` pairs in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, Handle, Style> {
        self.styles.iter()
    }

    /// Number of styled nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub(crate) fn insert(&mut self, node: Handle, style: Style) {
        self.styles.insert(node, style);
    }
}

impl<'table, Handle: Copy + Eq + Hash> IntoIterator for &'table StyleTable<Handle> {
    type Item = (&'table Handle, &'table Style);
    type IntoIter = hash_map::Iter<'table, Handle, Style>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<Handle> Default for StyleTable<Handle> {
    fn default() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }
}

/// Resolve styles for the whole tree under `root`.
///
/// `sheets` are raw author stylesheet texts in the order the document
/// referenced them; a sheet that could not be fetched is simply absent from
/// the slice. The built-in default rules are concatenated ahead of all
/// author rules, then the combined list is sorted ascending by
/// `(specificity, source order)` and applied per node with inline `style`
/// declarations last, interleaved with top-down inheritance resolution.
pub fn resolve_document<D: ElementAdapter>(
    document: &D,
    root: D::Handle,
    sheets: &[&str],
) -> StyleTable<D::Handle> {
    let mut rules = rules::collect_rules(sheets);
    css_cascade::sort_rules(&mut rules);
    debug!(
        "resolving document styles with {} rules from {} author sheets",
        rules.len(),
        sheets.len()
    );
    let mut table = StyleTable::default();
    resolve::resolve_node(document, root, None, &rules, &mut table);
    table
}
