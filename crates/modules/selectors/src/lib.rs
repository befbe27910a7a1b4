//! Selector model, parsing, matching, and specificity.
//!
//! The selector language is a closed set of four variants: tag, class, id,
//! and descendant chains of those. The set is deliberately closed; adding a
//! variant changes specificity and cascade behavior too, so `matches` and
//! `specificity_of` pattern-match exhaustively.
//!
//! Matching strategy: a `Descendant` selector is evaluated naively. The
//! descendant operand is tested against the node, then the ancestor operand
//! is retried against every ancestor in turn. A chain of `k` simple
//! selectors against a node at depth `d` therefore costs up to O(k·d).
//! Flattening a chain and walking the ancestors once would be O(d); the
//! naive form is kept because it falls directly out of the recursive
//! selector shape and this subset has no combinators where the distinction
//! affects correctness.

#![forbid(unsafe_code)]

mod matcher;
mod parser;

use core::hash::Hash;

pub use matcher::matches;
pub use parser::parse_selector;

/// An adapter that abstracts document-tree access for selector matching and
/// style resolution. Implement this for your DOM layer.
///
/// Handles identify nodes (elements and text alike); all attribute-derived
/// queries report "absent" for non-element nodes.
pub trait ElementAdapter {
    /// Cheap, copyable node identity, usable as a style-table key.
    type Handle: Copy + Eq + Hash;

    /// Parent node, if any.
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Child nodes in document order.
    fn children(&self, node: Self::Handle) -> Vec<Self::Handle>;

    /// Tag name for element nodes, `None` for anything else (tag names are
    /// matched case-insensitively).
    fn tag_name(&self, node: Self::Handle) -> Option<&str>;

    /// Attribute value, `None` when absent or not an element.
    fn attr(&self, node: Self::Handle, name: &str) -> Option<&str>;

    /// The `id` attribute (matched case-sensitively).
    #[inline]
    fn element_id(&self, node: Self::Handle) -> Option<&str> {
        self.attr(node, "id")
    }

    /// Whether `class` appears as a whitespace-separated token of the
    /// element's `class` attribute.
    #[inline]
    fn has_class(&self, node: Self::Handle, class: &str) -> bool {
        self.attr(node, "class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|token| token == class))
    }
}

/// A parsed selector. Immutable once constructed; shared read-only across
/// match calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Matches elements with the given (lowercased) tag name.
    Tag(String),
    /// Matches elements carrying the given class token.
    Class(String),
    /// Matches the element with the given id attribute.
    Id(String),
    /// Matches a node the second operand matches, provided some strict
    /// ancestor matches the first.
    Descendant(Box<Selector>, Box<Selector>),
}

impl Selector {
    /// The selector's specificity. Derived purely from the structure, so the
    /// value is fixed once the selector is constructed.
    #[inline]
    pub fn specificity(&self) -> Specificity {
        specificity_of(self)
    }
}

/// Specificity triple `(ids, classes, tags)`, compared lexicographically:
/// any id outweighs any number of classes, any class outweighs any number
/// of tags. Ties are broken elsewhere by source order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Specificity {
    /// Component-wise saturating sum, used for descendant chains.
    #[inline]
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }
}

/// Compute a selector's specificity: ids, classes, and tags counted over the
/// whole descendant chain.
pub fn specificity_of(selector: &Selector) -> Specificity {
    match selector {
        Selector::Tag(_) => Specificity(0, 0, 1),
        Selector::Class(_) => Specificity(0, 1, 0),
        Selector::Id(_) => Specificity(1, 0, 0),
        Selector::Descendant(ancestor, descendant) => {
            specificity_of(ancestor).add(specificity_of(descendant))
        }
    }
}
