use std::sync::Arc;

use crate::base::{SymbolFlags, SymbolId};

use super::ty::Type;

/// What a declaration is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// The synthetic root enclosing all top-level packages.
    Root,
    Package,
    Class,
    Trait,
    /// A singleton object (module).
    Object,
    Method,
    Field,
    /// A method parameter.
    Parameter,
}

impl SymbolKind {
    /// Kinds whose member scope the documentation walker descends into.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            SymbolKind::Root
                | SymbolKind::Package
                | SymbolKind::Class
                | SymbolKind::Trait
                | SymbolKind::Object
        )
    }

    /// Kinds that declare parent types (class-like declarations).
    pub fn is_class_like(self) -> bool {
        matches!(
            self,
            SymbolKind::Class | SymbolKind::Trait | SymbolKind::Object
        )
    }
}

/// One declaration in the graph arena.
///
/// Everything here is written by the front end through the builder and
/// frozen before the documentation layer runs.
#[derive(Debug, Clone)]
pub struct SymbolData {
    /// Raw (encoded) name as the front end interned it.
    pub name: Arc<str>,
    pub kind: SymbolKind,
    pub flags: SymbolFlags,
    /// Lexically enclosing declaration; `None` only for the root.
    pub owner: Option<SymbolId>,
    /// Raw type. `Type::Lazy` until the front end forces it.
    pub info: Type,
    /// Declared parent types, in declaration order (class-likes only).
    pub parents: Vec<Type>,
    /// Member scope in declaration order (containers only).
    pub members: Vec<SymbolId>,
    /// Companion counterpart (class ↔ companion object).
    pub companion: Option<SymbolId>,
}
