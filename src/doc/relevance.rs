//! Relevance filtering — the single gate deciding whether a symbol is
//! documentation-worthy. Applied everywhere symbols are surfaced.

use crate::base::{ASSIGN_SUFFIX, SymbolFlags, SymbolId, decode_name};
use crate::graph::{SymbolGraph, SymbolKind, Type};

use super::walk;

/// Test if the given symbol has a lazy (unresolved) type.
///
/// A reference whose target is itself unresolved counts too, but only one
/// indirection deep — this is a conservative check that never forces a type.
pub fn is_lazy(graph: &SymbolGraph, sym: SymbolId) -> bool {
    match graph.info(sym) {
        Type::Lazy => true,
        Type::Reference { symbol, .. } => graph.info(*symbol).is_lazy(),
        Type::Compound { .. } | Type::Overloaded(_) => false,
    }
}

/// Test if the given symbol is private (without evaluating its type).
pub fn is_private(graph: &SymbolGraph, sym: SymbolId) -> bool {
    graph.flags(sym).has(SymbolFlags::PRIVATE)
}

/// Test if the given symbol was produced by the compiler rather than
/// written in source.
pub fn is_generated(graph: &SymbolGraph, sym: SymbolId) -> bool {
    let flags = graph.flags(sym);
    if flags.has(SymbolFlags::SYNTHETIC) && !graph.is_root(sym) {
        return true;
    }
    let raw = graph.name(sym);
    let decoded = decode_name(raw);
    (flags.has(SymbolFlags::GENERATED) && decoded == raw.as_ref())
        || decoded.ends_with(ASSIGN_SUFFIX)
}

/// Test if the given symbol is an empty module generated at the interop
/// boundary to hold static members of a foreign class.
pub fn is_empty_foreign_module(graph: &SymbolGraph, sym: SymbolId) -> bool {
    graph.kind(sym) == SymbolKind::Object
        && graph.flags(sym).has(SymbolFlags::FOREIGN)
        && walk::members(graph, sym).is_empty()
}

/// Test if the given symbol is the accessor method of an immutable field.
pub fn is_val_method(graph: &SymbolGraph, sym: SymbolId) -> bool {
    graph.kind(sym) == SymbolKind::Method
        && graph.flags(sym).has(SymbolFlags::STABLE)
        && !is_lazy(graph, sym)
}

/// Test if the given symbol is relevant for the documentation.
pub fn is_relevant(graph: &SymbolGraph, sym: SymbolId) -> bool {
    let flags = graph.flags(sym);
    !is_generated(graph, sym)
        && !is_lazy(graph, sym)
        && !is_private(graph, sym)
        && !(graph.kind(sym) == SymbolKind::Class && flags.has(SymbolFlags::PACKAGE_CLASS))
        && !flags.has(SymbolFlags::CONSTRUCTOR)
        && !flags.has(SymbolFlags::CASE_FACTORY)
        && !is_empty_foreign_module(graph, sym)
}
