//! Overload expansion during member iteration.

use crate::base::SymbolId;
use crate::graph::{SymbolGraph, Type};

use super::relevance::is_lazy;

/// A symbol iterator that yields all alternatives of an overloaded binding
/// instead of the group symbol itself (does not force lazy symbols).
///
/// Alternatives come out consecutively, so each one can be relevance-tested
/// on its own while overload groups stay adjacent in emission order.
pub struct OverloadExpandingIter<'g, I> {
    graph: &'g SymbolGraph,
    inner: I,
    buffer: Vec<SymbolId>,
    index: usize,
}

impl<'g, I> OverloadExpandingIter<'g, I>
where
    I: Iterator<Item = SymbolId>,
{
    pub fn new(graph: &'g SymbolGraph, inner: I) -> Self {
        Self {
            graph,
            inner,
            buffer: Vec::new(),
            index: 0,
        }
    }
}

impl<'g> OverloadExpandingIter<'g, std::iter::Once<SymbolId>> {
    /// Expand a single binding: the alternatives of an overloaded symbol,
    /// or the symbol itself.
    pub fn of(graph: &'g SymbolGraph, sym: SymbolId) -> Self {
        Self::new(graph, std::iter::once(sym))
    }
}

impl<I> Iterator for OverloadExpandingIter<'_, I>
where
    I: Iterator<Item = SymbolId>,
{
    type Item = SymbolId;

    fn next(&mut self) -> Option<SymbolId> {
        loop {
            if self.index < self.buffer.len() {
                let sym = self.buffer[self.index];
                self.index += 1;
                if self.index == self.buffer.len() {
                    self.buffer.clear();
                    self.index = 0;
                }
                return Some(sym);
            }
            let sym = self.inner.next()?;
            if is_lazy(self.graph, sym) {
                // Never force a lazy symbol just to inspect its type.
                return Some(sym);
            }
            match self.graph.info(sym) {
                Type::Overloaded(alternatives) => {
                    self.buffer = alternatives.clone();
                    self.index = 0;
                }
                Type::Reference { .. } | Type::Compound { .. } | Type::Lazy => return Some(sym),
            }
        }
    }
}
