use crate::base::SymbolId;

/// A type as the front end resolved it.
///
/// This is a closed set; every consumer matches exhaustively. "No type"
/// results are expressed as `Option<Type>` at the query surfaces rather
/// than as an extra variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Reference to a symbol, possibly applied to type arguments
    /// (`List[Int]` is a reference to `List` with one argument).
    Reference {
        symbol: SymbolId,
        args: Vec<Type>,
    },
    /// Intersection of parent types plus a local member scope
    /// (the shape of a template body or a refinement).
    Compound {
        parents: Vec<Type>,
        scope: Vec<SymbolId>,
    },
    /// Alternatives of an overloaded binding. Always holds at least two
    /// symbols; the builder enforces this.
    Overloaded(Vec<SymbolId>),
    /// Not yet resolved by the front end. Flags and kind of a lazy
    /// symbol must not be trusted before forcing.
    Lazy,
}

impl Type {
    /// Convenience constructor for a plain (unapplied) reference.
    pub fn reference(symbol: SymbolId) -> Type {
        Type::Reference {
            symbol,
            args: Vec::new(),
        }
    }

    /// The referenced symbol, for reference types.
    pub fn head_symbol(&self) -> Option<SymbolId> {
        match self {
            Type::Reference { symbol, .. } => Some(*symbol),
            Type::Compound { .. } | Type::Overloaded(_) | Type::Lazy => None,
        }
    }

    /// True for types that are still unresolved.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Type::Lazy)
    }
}
