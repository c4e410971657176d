//! Inheritance flattening — the full own + inherited member list of a type.

use indexmap::IndexSet;
use std::sync::Arc;

use crate::base::SymbolId;
use crate::graph::{SymbolGraph, Type};

use super::iter::OverloadExpandingIter;
use super::relevance::is_relevant;

/// Find all local and inherited members of a class-like symbol.
///
/// Distinct names are the unit of deduplication: a name declared in a
/// subtype shadows every inherited declaration of the same name, and a
/// diamond lineage contributes each name once. Each collected name is then
/// resolved against the symbol's own type, overloaded bindings are expanded
/// into their alternatives, and only relevant alternatives are kept.
pub fn collect_members(graph: &SymbolGraph, sym: SymbolId) -> Vec<SymbolId> {
    let this_type = graph.this_type(sym);
    let mut names: IndexSet<Arc<str>> = IndexSet::new();
    collect_names(graph, &this_type, &mut names);

    let mut members = Vec::new();
    for name in &names {
        let Some(binding) = graph.lookup_member(&this_type, name) else {
            continue;
        };
        for alternative in OverloadExpandingIter::of(graph, binding) {
            if is_relevant(graph, alternative) {
                members.push(alternative);
            }
        }
    }
    members
}

/// Accumulate the distinct member names visible on a type: local names
/// first, then every parent type, depth-first.
///
/// A name already recorded is not re-added, so diamonds are safe; the work
/// is proportional to the edges walked, not to the distinct names.
fn collect_names(graph: &SymbolGraph, ty: &Type, names: &mut IndexSet<Arc<str>>) {
    for &member in graph.scope_of(ty) {
        names.insert(graph.name(member).clone());
    }
    for parent in graph.parents_of(ty) {
        collect_names(graph, parent, names);
    }
}
