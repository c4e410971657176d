//! Alphabetical index — the A–Z page of the documentation.

use rustc_hash::FxHashMap;

use crate::base::SymbolId;
use crate::graph::SymbolGraph;

use super::sort::sort_by_name;
use super::walk::{SymbolFilter, walk_where};

/// The alphabetical index: the sorted list of initial letters plus, per
/// letter, the name-sorted symbols starting with it.
#[derive(Debug, Default, Clone)]
pub struct AlphaIndex {
    /// Distinct initial characters, ascending.
    pub letters: Vec<char>,
    pub buckets: FxHashMap<char, Vec<SymbolId>>,
}

impl AlphaIndex {
    /// The name-sorted symbols under one initial letter.
    pub fn bucket(&self, letter: char) -> &[SymbolId] {
        self.buckets.get(&letter).map_or(&[], Vec::as_slice)
    }
}

/// Build the alphabetical index of every relevant symbol below `root`
/// with a non-empty display name, keyed by the upper-cased first character.
pub fn alpha_index(
    graph: &SymbolGraph,
    root: SymbolId,
    filter: Option<&dyn SymbolFilter>,
) -> AlphaIndex {
    let mut buckets: FxHashMap<char, Vec<SymbolId>> = FxHashMap::default();
    // collecting
    for sym in walk_where(graph, root, filter) {
        let name = graph.display_name(sym);
        let Some(first) = name.chars().next() else {
            continue;
        };
        let letter = first.to_uppercase().next().unwrap_or(first);
        buckets.entry(letter).or_default().push(sym);
    }
    // sorting
    let mut letters: Vec<char> = buckets.keys().copied().collect();
    letters.sort_unstable();
    for bucket in buckets.values_mut() {
        sort_by_name(graph, bucket);
    }
    AlphaIndex { letters, buckets }
}
