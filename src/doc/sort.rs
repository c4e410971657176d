//! Sort keys for presentation order.
//!
//! Two orders exist: simple display name (member lists, index buckets) and
//! fully qualified path (package lists, owner groups). Plain key comparison
//! only — no comparator objects with bespoke equality.

use std::cmp::Ordering;

use crate::base::SymbolId;
use crate::graph::SymbolGraph;

/// Order two symbols by their decoded simple name.
pub fn cmp_by_name(graph: &SymbolGraph, a: SymbolId, b: SymbolId) -> Ordering {
    graph.display_name(a).cmp(&graph.display_name(b))
}

/// Order two symbols by their fully qualified path.
pub fn cmp_by_path(graph: &SymbolGraph, a: SymbolId, b: SymbolId) -> Ordering {
    graph.qualified_name(a).cmp(&graph.qualified_name(b))
}

/// Sort in place by decoded simple name (stable).
pub fn sort_by_name(graph: &SymbolGraph, syms: &mut [SymbolId]) {
    syms.sort_by(|&a, &b| cmp_by_name(graph, a, b));
}

/// Sort in place by fully qualified path (stable).
pub fn sort_by_path(graph: &SymbolGraph, syms: &mut [SymbolId]) {
    syms.sort_by(|&a, &b| cmp_by_path(graph, a, b));
}
