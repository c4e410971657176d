//! Grouping a flat symbol list by declaring owner.

use indexmap::IndexMap;

use crate::base::SymbolId;
use crate::graph::SymbolGraph;

use super::sort::{sort_by_name, sort_by_path};

/// Symbols partitioned by declaring owner.
///
/// `owners` carries the presentation order (ascending qualified path);
/// each group's members are sorted by simple name.
#[derive(Debug, Default, Clone)]
pub struct OwnerGroups {
    pub owners: Vec<SymbolId>,
    pub groups: IndexMap<SymbolId, Vec<SymbolId>>,
}

impl OwnerGroups {
    /// The name-sorted members declared by one owner.
    pub fn members(&self, owner: SymbolId) -> &[SymbolId] {
        self.groups.get(&owner).map_or(&[], Vec::as_slice)
    }
}

/// Partition `syms` by declaring owner; owners come out sorted by
/// qualified path, members by simple name.
pub fn group_symbols(graph: &SymbolGraph, syms: &[SymbolId]) -> OwnerGroups {
    let mut groups: IndexMap<SymbolId, Vec<SymbolId>> = IndexMap::new();
    for &sym in syms {
        // The root is the only symbol without an owner and never appears
        // in member lists.
        let Some(owner) = graph.owner(sym) else {
            continue;
        };
        groups.entry(owner).or_default().push(sym);
    }
    let mut owners: Vec<SymbolId> = groups.keys().copied().collect();
    sort_by_path(graph, &mut owners);
    for group in groups.values_mut() {
        sort_by_name(graph, group);
    }
    OwnerGroups { owners, groups }
}
