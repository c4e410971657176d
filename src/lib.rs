//! # docmodel
//!
//! Documentation model derivation from a resolved symbol graph.
//!
//! An external front end (parser + semantic analyzer) builds an immutable
//! graph of declarations; this crate decides which of those declarations are
//! documentation-worthy, classifies and sorts them, flattens inheritance into
//! per-type member lists, and builds the cross-reference indices a renderer
//! consumes. Rendering, option handling, and file I/O live elsewhere.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! doc       → relevance filter, walker, classifiers, indices, type queries
//!   ↓
//! graph     → immutable symbol graph, builder API for front ends
//!   ↓
//! base      → primitives (SymbolId, SymbolFlags, name decoding)
//! ```

// ============================================================================
// MODULES (dependency order: base → graph → doc)
// ============================================================================

/// Foundation types: SymbolId, SymbolFlags, name decoding
pub mod base;

/// Symbol graph: arena storage, owner tree, parent types, member scopes
pub mod graph;

/// Documentation model: relevance, traversal, classification, indices
pub mod doc;

// Re-export foundation types
pub use base::{SymbolFlags, SymbolId};
pub use graph::{GraphBuilder, GraphError, SymbolGraph, SymbolKind, Type};
