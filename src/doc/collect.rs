//! Sorted top-level collections for overview pages.

use crate::base::SymbolId;
use crate::graph::{SymbolGraph, SymbolKind};

use super::sort::{sort_by_name, sort_by_path};
use super::walk::{SymbolFilter, walk_where};

/// The sorted list of packages below `root`, ordered by qualified path.
pub fn sorted_packages(
    graph: &SymbolGraph,
    root: SymbolId,
    filter: Option<&dyn SymbolFilter>,
) -> Vec<SymbolId> {
    let mut packages: Vec<SymbolId> = walk_where(graph, root, filter)
        .filter(|&sym| graph.kind(sym) == SymbolKind::Package)
        .collect();
    sort_by_path(graph, &mut packages);
    packages
}

/// Name-sorted container lists for the overview page.
#[derive(Debug, Default, Clone)]
pub struct ContainerLists {
    pub objects: Vec<SymbolId>,
    pub traits: Vec<SymbolId>,
    pub classes: Vec<SymbolId>,
}

/// Collect the objects, traits and classes below `root`, each list
/// sorted by simple name.
pub fn sub_containers(
    graph: &SymbolGraph,
    root: SymbolId,
    filter: Option<&dyn SymbolFilter>,
) -> ContainerLists {
    let mut lists = ContainerLists::default();
    for sym in walk_where(graph, root, filter) {
        match graph.kind(sym) {
            SymbolKind::Trait => lists.traits.push(sym),
            SymbolKind::Class => lists.classes.push(sym),
            SymbolKind::Object => lists.objects.push(sym),
            _ => {}
        }
    }
    sort_by_name(graph, &mut lists.objects);
    sort_by_name(graph, &mut lists.traits);
    sort_by_name(graph, &mut lists.classes);
    lists
}
