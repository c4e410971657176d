//! Symbol graph — the immutable declaration model the front end hands over.
//!
//! A front end (parser + semantic analyzer) builds the graph once through
//! [`GraphBuilder`] and then passes the finished [`SymbolGraph`] to the
//! documentation layer, which only ever reads it.
//!
//! ## Key Types
//!
//! - [`SymbolGraph`] — arena of declarations with owner links, parent types
//!   and member scopes
//! - [`GraphBuilder`] — the only mutation surface, consumed by `finish()`
//! - [`SymbolKind`] — what a declaration is (package, class, method, ...)
//! - [`Type`] — closed type variant: reference, compound, overloaded, lazy
//!
//! Two relations coexist and must not be confused:
//!
//! ```text
//! owner links    — lexical nesting, a tree (every non-root has one owner)
//! parent types   — inheritance, a DAG (diamonds are possible)
//! ```

mod builder;
mod store;
mod symbol;
mod ty;

pub use builder::{GraphBuilder, GraphError};
pub use store::SymbolGraph;
pub use symbol::{SymbolData, SymbolKind};
pub use ty::Type;
