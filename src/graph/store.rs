use std::borrow::Cow;
use std::sync::Arc;

use crate::base::{SymbolFlags, SymbolId, decode_name};

use super::symbol::{SymbolData, SymbolKind};
use super::ty::Type;

/// The immutable symbol graph.
///
/// Built once by a front end through [`super::GraphBuilder`]; the
/// documentation layer only reads it. Arena storage keeps symbol handles
/// as plain `u32` ids (single source of truth, same layout as the
/// resolver-side symbol table).
#[derive(Debug, Clone)]
pub struct SymbolGraph {
    pub(super) arena: Vec<SymbolData>,
    pub(super) root: SymbolId,
}

impl SymbolGraph {
    /// The synthetic root symbol enclosing all top-level packages.
    pub fn root(&self) -> SymbolId {
        self.root
    }

    /// Get a symbol by id (O(1) arena lookup).
    pub fn get(&self, id: SymbolId) -> Option<&SymbolData> {
        self.arena.get(id.index())
    }

    /// Arena access for ids produced by this graph's builder.
    pub(crate) fn data(&self, id: SymbolId) -> &SymbolData {
        &self.arena[id.index()]
    }

    /// Number of symbols in the graph (including the root).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Iterate over every symbol id in arena order.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> + '_ {
        (0..self.arena.len()).map(SymbolId::new)
    }

    // ============================================================
    // Per-symbol accessors
    // ============================================================

    pub fn kind(&self, id: SymbolId) -> SymbolKind {
        self.data(id).kind
    }

    pub fn flags(&self, id: SymbolId) -> SymbolFlags {
        self.data(id).flags
    }

    /// Raw (encoded) name.
    pub fn name(&self, id: SymbolId) -> &Arc<str> {
        &self.data(id).name
    }

    /// Decoded name as shown in documentation output.
    pub fn display_name(&self, id: SymbolId) -> Cow<'_, str> {
        decode_name(&self.data(id).name)
    }

    /// Lexically enclosing declaration; `None` only for the root.
    pub fn owner(&self, id: SymbolId) -> Option<SymbolId> {
        self.data(id).owner
    }

    /// Raw type of the symbol.
    pub fn info(&self, id: SymbolId) -> &Type {
        &self.data(id).info
    }

    /// Declared parent types of a class-like symbol.
    pub fn parents(&self, id: SymbolId) -> &[Type] {
        &self.data(id).parents
    }

    /// Raw member scope in declaration order (no filtering, no
    /// overload expansion).
    pub fn scope(&self, id: SymbolId) -> &[SymbolId] {
        &self.data(id).members
    }

    /// Companion counterpart (class ↔ companion object).
    pub fn companion(&self, id: SymbolId) -> Option<SymbolId> {
        self.data(id).companion
    }

    pub fn is_root(&self, id: SymbolId) -> bool {
        id == self.root
    }

    /// Fully qualified display path, owner segments joined with `.`.
    /// The root contributes no segment.
    pub fn qualified_name(&self, id: SymbolId) -> String {
        let mut segments: Vec<Cow<'_, str>> = Vec::new();
        let mut current = Some(id);
        while let Some(sym) = current {
            if self.is_root(sym) {
                break;
            }
            segments.push(self.display_name(sym));
            current = self.owner(sym);
        }
        segments.reverse();
        segments.join(".")
    }

    /// Nearest enclosing class-like declaration, the symbol itself included.
    pub fn class_owner(&self, id: SymbolId) -> Option<SymbolId> {
        let mut current = Some(id);
        while let Some(sym) = current {
            if self.kind(sym).is_class_like() {
                return Some(sym);
            }
            current = self.owner(sym);
        }
        None
    }

    // ============================================================
    // Type-level queries
    // ============================================================

    /// The "this" type of a class-like symbol: a plain reference to it.
    pub fn this_type(&self, id: SymbolId) -> Type {
        Type::reference(id)
    }

    /// Local member scope of a type (no inherited members).
    pub fn scope_of<'a>(&'a self, ty: &'a Type) -> &'a [SymbolId] {
        match ty {
            Type::Reference { symbol, .. } => self.scope(*symbol),
            Type::Compound { scope, .. } => scope,
            Type::Overloaded(_) | Type::Lazy => &[],
        }
    }

    /// Declared parent types of a type.
    pub fn parents_of<'a>(&'a self, ty: &'a Type) -> &'a [Type] {
        match ty {
            Type::Reference { symbol, .. } => self.parents(*symbol),
            Type::Compound { parents, .. } => parents,
            Type::Overloaded(_) | Type::Lazy => &[],
        }
    }

    /// Resolve a member name against a type: local scope first, then the
    /// declared parents depth-first in declaration order. Returns the raw
    /// scope entry — possibly a symbol with an overloaded type.
    pub fn lookup_member(&self, ty: &Type, name: &str) -> Option<SymbolId> {
        for &member in self.scope_of(ty) {
            if self.name(member).as_ref() == name {
                tracing::trace!(name, member = ?member, "member found in local scope");
                return Some(member);
            }
        }
        for parent in self.parents_of(ty) {
            if let Some(found) = self.lookup_member(parent, name) {
                return Some(found);
            }
        }
        None
    }
}
