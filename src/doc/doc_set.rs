//! The documented set — the transitive "is this symbol in scope" test.

use rustc_hash::FxHashSet;

use crate::base::SymbolId;
use crate::graph::{SymbolGraph, SymbolKind};

use super::walk::{SymbolFilter, walk};

/// The set of symbols covered by one documentation run, built from the
/// caller's root packages.
///
/// Ancestor packages of a root are recognized as in-scope even though they
/// are not walked themselves, so links to `a.b` resolve when only `a.b.c`
/// was requested. A class and its companion object count as one
/// documentation unit.
#[derive(Debug, Clone)]
pub struct DocSet {
    syms: FxHashSet<SymbolId>,
}

impl DocSet {
    pub fn new(graph: &SymbolGraph, root_packages: &[SymbolId]) -> Self {
        let mut syms = FxHashSet::default();
        for &pack in root_packages {
            // All relevant symbols below the package.
            for sym in walk(graph, pack) {
                syms.insert(sym);
            }
            // All ancestor packages, as their module side.
            let mut current = graph.owner(pack);
            while let Some(ancestor) = current {
                syms.insert(module_side(graph, ancestor));
                current = graph.owner(ancestor);
            }
        }
        Self { syms }
    }

    /// Test whether a symbol belongs to the documented universe.
    ///
    /// Method parameters delegate to their enclosing class; a symbol also
    /// counts as contained when its companion is.
    pub fn contains(&self, graph: &SymbolGraph, sym: SymbolId) -> bool {
        if graph.kind(sym) == SymbolKind::Parameter {
            return graph
                .class_owner(sym)
                .is_some_and(|class| self.contains(graph, class));
        }
        self.syms.contains(&sym)
            || graph
                .companion(sym)
                .is_some_and(|companion| self.syms.contains(&companion))
    }

    pub fn len(&self) -> usize {
        self.syms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syms.is_empty()
    }
}

impl SymbolFilter for DocSet {
    fn accept(&self, graph: &SymbolGraph, sym: SymbolId) -> bool {
        self.contains(graph, sym)
    }
}

/// The module-side symbol of an ancestor: modules and packages stand for
/// themselves, a class stands in through its companion object.
fn module_side(graph: &SymbolGraph, sym: SymbolId) -> SymbolId {
    match graph.kind(sym) {
        SymbolKind::Object | SymbolKind::Package | SymbolKind::Root => sym,
        _ => graph.companion(sym).unwrap_or(sym),
    }
}
