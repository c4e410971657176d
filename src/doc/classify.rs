//! Kind classification of a flat member list.

use crate::base::SymbolId;
use crate::graph::{SymbolGraph, SymbolKind};

use super::relevance::is_val_method;

/// The six classification buckets of a member list, in presentation order.
///
/// Relative input order is preserved within each bucket; every input symbol
/// lands in exactly one bucket.
#[derive(Debug, Default, Clone)]
pub struct MemberBuckets {
    pub traits: Vec<SymbolId>,
    pub classes: Vec<SymbolId>,
    pub packages: Vec<SymbolId>,
    pub objects: Vec<SymbolId>,
    /// Methods, excluding immutable-field accessors.
    pub methods: Vec<SymbolId>,
    /// Fields — the catch-all bucket: stable accessors and anything that
    /// matched no earlier bucket end up here.
    pub fields: Vec<SymbolId>,
}

impl MemberBuckets {
    pub fn len(&self) -> usize {
        self.traits.len()
            + self.classes.len()
            + self.packages.len()
            + self.objects.len()
            + self.methods.len()
            + self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition a flat symbol list by kind, first-match priority:
/// trait, class, package, object, method, field.
pub fn split_members(graph: &SymbolGraph, syms: &[SymbolId]) -> MemberBuckets {
    let mut buckets = MemberBuckets::default();
    for &sym in syms {
        match graph.kind(sym) {
            SymbolKind::Trait => buckets.traits.push(sym),
            SymbolKind::Class => buckets.classes.push(sym),
            SymbolKind::Package => buckets.packages.push(sym),
            SymbolKind::Object => buckets.objects.push(sym),
            SymbolKind::Method if !is_val_method(graph, sym) => buckets.methods.push(sym),
            _ => buckets.fields.push(sym),
        }
    }
    buckets
}
