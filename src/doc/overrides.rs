//! Override resolution — which inherited symbol a member overrides.

use crate::base::SymbolId;
use crate::graph::{SymbolGraph, Type};

use super::iter::OverloadExpandingIter;

/// Find the symbol the given symbol overrides, if any.
///
/// Synthesizes a compound type over the owner's direct parents (with an
/// empty local scope, so the owner's own declaration cannot shadow the
/// search) and looks the member's name up against it. Pure query, no
/// caching.
pub fn overridden_by(graph: &SymbolGraph, sym: SymbolId) -> Option<SymbolId> {
    let owner = graph.owner(sym)?;
    let base = Type::Compound {
        parents: graph.parents(owner).to_vec(),
        scope: Vec::new(),
    };
    let name = graph.name(sym).clone();
    let binding = graph.lookup_member(&base, &name)?;
    OverloadExpandingIter::of(graph, binding)
        .find(|&alternative| alternative != sym && graph.kind(alternative) == graph.kind(sym))
}
