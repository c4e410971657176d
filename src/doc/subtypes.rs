//! Subtype index — which documented types extend which parent.

use indexmap::IndexMap;

use crate::base::SymbolId;
use crate::graph::{SymbolGraph, Type};

use super::walk::{SymbolFilter, walk_where};

/// Parent symbol → insertion-ordered list of (subtype, instantiated parent
/// type) pairs.
///
/// Both halves matter: the raw parent symbol keys the index, while the
/// instantiated type keeps the exact type arguments each subtype applied —
/// two subclasses of `Ordered` may extend `Ordered[Int]` and
/// `Ordered[String]` respectively.
pub type SubtypeIndex = IndexMap<SymbolId, Vec<(SymbolId, Type)>>;

/// Build the subtype index for every class-like symbol below `root`.
pub fn sub_templates(
    graph: &SymbolGraph,
    root: SymbolId,
    filter: Option<&dyn SymbolFilter>,
) -> SubtypeIndex {
    let mut subs = SubtypeIndex::new();
    for sym in walk_where(graph, root, filter) {
        if !graph.kind(sym).is_class_like() {
            continue;
        }
        for parent in graph.parents(sym) {
            if let Some(parent_sym) = parent.head_symbol() {
                subs.entry(parent_sym)
                    .or_default()
                    .push((sym, parent.clone()));
            }
        }
    }
    subs
}
