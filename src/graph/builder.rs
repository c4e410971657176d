use std::sync::Arc;

use thiserror::Error;

use crate::base::{SymbolFlags, SymbolId};

use super::store::SymbolGraph;
use super::symbol::{SymbolData, SymbolKind};
use super::ty::Type;

/// Errors a front end can hit while constructing the graph.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An overloaded binding must carry at least two alternatives.
    #[error("overloaded binding '{name}' needs at least two alternatives, got {count}")]
    OverloadArity { name: String, count: usize },
}

/// Mutation surface for building a [`SymbolGraph`].
///
/// A front end adds symbols under their owners, records parent types and
/// companions, then calls [`GraphBuilder::finish`]. After that the graph
/// is frozen; the documentation layer never mutates it.
pub struct GraphBuilder {
    arena: Vec<SymbolData>,
    root: SymbolId,
}

impl GraphBuilder {
    pub fn new() -> Self {
        let root = SymbolId::new(0);
        let root_data = SymbolData {
            name: Arc::from("<root>"),
            kind: SymbolKind::Root,
            flags: SymbolFlags::EMPTY,
            owner: None,
            info: Type::reference(root),
            parents: Vec::new(),
            members: Vec::new(),
            companion: None,
        };
        Self {
            arena: vec![root_data],
            root,
        }
    }

    /// The root symbol every top-level package hangs off.
    pub fn root(&self) -> SymbolId {
        self.root
    }

    /// Add a symbol to the owner's member scope.
    ///
    /// The new symbol starts with a resolved self-referential type; use
    /// [`GraphBuilder::set_info`] to record the real one (or `Type::Lazy`
    /// for symbols the front end has not forced).
    pub fn add(
        &mut self,
        owner: SymbolId,
        name: impl Into<Arc<str>>,
        kind: SymbolKind,
        flags: SymbolFlags,
    ) -> SymbolId {
        let id = self.add_detached(owner, name, kind, flags);
        self.arena[owner.index()].members.push(id);
        id
    }

    /// Add a symbol with an owner but without entering it in the owner's
    /// member scope. Overload alternatives live behind their group symbol
    /// and must not appear in the scope themselves.
    pub fn add_detached(
        &mut self,
        owner: SymbolId,
        name: impl Into<Arc<str>>,
        kind: SymbolKind,
        flags: SymbolFlags,
    ) -> SymbolId {
        let id = SymbolId::new(self.arena.len());
        self.arena.push(SymbolData {
            name: name.into(),
            kind,
            flags,
            owner: Some(owner),
            info: Type::reference(id),
            parents: Vec::new(),
            members: Vec::new(),
            companion: None,
        });
        id
    }

    /// Add an overloaded binding: a group symbol in the owner's scope whose
    /// type lists the alternatives. Enforces the two-alternative minimum.
    pub fn add_overload_group(
        &mut self,
        owner: SymbolId,
        name: impl Into<Arc<str>>,
        alternatives: Vec<SymbolId>,
    ) -> Result<SymbolId, GraphError> {
        let name = name.into();
        if alternatives.len() < 2 {
            return Err(GraphError::OverloadArity {
                name: name.to_string(),
                count: alternatives.len(),
            });
        }
        let group = self.add(owner, name, SymbolKind::Method, SymbolFlags::EMPTY);
        self.arena[group.index()].info = Type::Overloaded(alternatives);
        Ok(group)
    }

    /// Record the resolved (or lazy) type of a symbol.
    pub fn set_info(&mut self, sym: SymbolId, info: Type) {
        if let Some(data) = self.arena.get_mut(sym.index()) {
            data.info = info;
        }
    }

    /// Record the declared parent types of a class-like symbol.
    pub fn set_parents(&mut self, sym: SymbolId, parents: Vec<Type>) {
        if let Some(data) = self.arena.get_mut(sym.index()) {
            data.parents = parents;
        }
    }

    /// Link a class and its companion object (both directions).
    pub fn link_companions(&mut self, class: SymbolId, object: SymbolId) {
        if let Some(data) = self.arena.get_mut(class.index()) {
            data.companion = Some(object);
        }
        if let Some(data) = self.arena.get_mut(object.index()) {
            data.companion = Some(class);
        }
    }

    /// Freeze the graph.
    pub fn finish(self) -> SymbolGraph {
        SymbolGraph {
            arena: self.arena,
            root: self.root,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
