//! Selector matching against an adapter-backed document tree.

use crate::{ElementAdapter, Selector};

/// Whether `selector` matches `node`.
///
/// All predicates are false for non-element nodes (`tag_name` is `None`).
/// The descendant walk tests strict ancestors only; a node never satisfies
/// the ancestor operand through itself.
pub fn matches<A: ElementAdapter>(adapter: &A, node: A::Handle, selector: &Selector) -> bool {
    match selector {
        Selector::Tag(name) => adapter
            .tag_name(node)
            .is_some_and(|tag| tag.eq_ignore_ascii_case(name)),
        Selector::Class(class) => adapter.has_class(node, class),
        Selector::Id(id) => adapter
            .element_id(node)
            .is_some_and(|value| value == id.as_str()),
        Selector::Descendant(ancestor, descendant) => {
            if !matches(adapter, node, descendant) {
                return false;
            }
            let mut current = adapter.parent(node);
            while let Some(candidate) = current {
                if matches(adapter, candidate, ancestor) {
                    return true;
                }
                current = adapter.parent(candidate);
            }
            false
        }
    }
}
