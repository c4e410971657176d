//! Filtered depth-first traversal of the owner tree.
//!
//! [`walk`] produces a lazy, restartable pre-order sequence of relevant
//! symbols; every index and classifier folds that sequence into its own
//! accumulator, keeping traversal policy and aggregation policy apart.

use crate::base::SymbolId;
use crate::graph::SymbolGraph;

use super::iter::OverloadExpandingIter;
use super::relevance::{is_lazy, is_relevant};

/// Caller-supplied restriction of the traversal to a visibility scope.
///
/// This is the seam through which the invoking pipeline narrows the
/// documented universe; [`super::DocSet`] implements it.
pub trait SymbolFilter {
    fn accept(&self, graph: &SymbolGraph, sym: SymbolId) -> bool;
}

/// Adapter turning a closure into a [`SymbolFilter`].
pub struct FilterFn<F>(pub F);

impl<F> SymbolFilter for FilterFn<F>
where
    F: Fn(&SymbolGraph, SymbolId) -> bool,
{
    fn accept(&self, graph: &SymbolGraph, sym: SymbolId) -> bool {
        (self.0)(graph, sym)
    }
}

/// Return all relevant members of a container symbol, with overloaded
/// bindings expanded into their alternatives.
///
/// Non-container and lazy symbols yield an empty list, never an error.
pub fn members(graph: &SymbolGraph, sym: SymbolId) -> Vec<SymbolId> {
    members_where(graph, sym, None)
}

/// Like [`members`], additionally keeping only entries the filter accepts.
pub fn members_where(
    graph: &SymbolGraph,
    sym: SymbolId,
    filter: Option<&dyn SymbolFilter>,
) -> Vec<SymbolId> {
    if !graph.kind(sym).is_container() || is_lazy(graph, sym) {
        return Vec::new();
    }
    OverloadExpandingIter::new(graph, graph.scope(sym).iter().copied())
        .filter(|&member| {
            is_relevant(graph, member) && filter.is_none_or(|f| f.accept(graph, member))
        })
        .collect()
}

/// Lazy pre-order walk over the owner tree below `root`.
///
/// Parents come out strictly before their children; within one scope the
/// emission order follows declaration order with overload alternatives
/// adjacent. It is NOT alphabetical — callers needing presentation order
/// sort explicitly via [`super::sort_by_name`] / [`super::sort_by_path`].
pub struct Walk<'a> {
    graph: &'a SymbolGraph,
    filter: Option<&'a dyn SymbolFilter>,
    stack: Vec<SymbolId>,
}

impl Iterator for Walk<'_> {
    type Item = SymbolId;

    fn next(&mut self) -> Option<SymbolId> {
        let sym = self.stack.pop()?;
        let children = members_where(self.graph, sym, self.filter);
        self.stack.extend(children.into_iter().rev());
        Some(sym)
    }
}

/// Walk every relevant symbol below (and including) `root`.
pub fn walk<'a>(graph: &'a SymbolGraph, root: SymbolId) -> Walk<'a> {
    walk_where(graph, root, None)
}

/// Walk every relevant symbol below (and including) `root` that the
/// filter accepts; a rejected symbol prunes its whole subtree.
pub fn walk_where<'a>(
    graph: &'a SymbolGraph,
    root: SymbolId,
    filter: Option<&'a dyn SymbolFilter>,
) -> Walk<'a> {
    let accepted =
        is_relevant(graph, root) && filter.is_none_or(|f| f.accept(graph, root));
    tracing::trace!(root = ?root, accepted, "starting owner-tree walk");
    Walk {
        graph,
        filter,
        stack: if accepted { vec![root] } else { Vec::new() },
    }
}

/// Apply a function to every relevant symbol below the given symbol.
pub fn for_each(
    graph: &SymbolGraph,
    root: SymbolId,
    filter: Option<&dyn SymbolFilter>,
    mut visit: impl FnMut(SymbolId),
) {
    for sym in walk_where(graph, root, filter) {
        visit(sym);
    }
}
