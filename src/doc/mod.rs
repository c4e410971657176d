//! Documentation model — deciding what gets documented and how it is indexed.
//!
//! All queries here are pure reads over a finished [`crate::graph::SymbolGraph`],
//! built on one traversal primitive:
//!
//! ```text
//! walk(root, filter)            ← lazy pre-order walk of the owner tree
//!     │
//!     ├─ split_members          ← six classification buckets
//!     ├─ sorted_packages        ← path-sorted package list
//!     ├─ sub_containers         ← name-sorted objects/traits/classes
//!     ├─ sub_templates          ← parent symbol → (subtype, instantiated type)
//!     ├─ alpha_index            ← letter → name-sorted members
//!     └─ DocSet                 ← transitive membership test
//!
//! collect_members(sym)          ← own + inherited member list for one type
//! overridden_by(sym)            ← the symbol a member overrides
//! TypeQuery::type_of_string     ← the one re-entry into the front end
//! ```
//!
//! Everything surfaced to a renderer passes the relevance filter
//! ([`is_relevant`]); an optional caller-supplied [`SymbolFilter`] further
//! restricts traversal to the documented universe.

mod classify;
mod collect;
mod doc_set;
mod group;
mod index;
mod inherit;
mod iter;
mod overrides;
mod relevance;
mod sort;
mod subtypes;
mod typequery;
mod walk;

pub use classify::{MemberBuckets, split_members};
pub use collect::{ContainerLists, sorted_packages, sub_containers};
pub use doc_set::DocSet;
pub use group::{OwnerGroups, group_symbols};
pub use index::{AlphaIndex, alpha_index};
pub use inherit::collect_members;
pub use iter::OverloadExpandingIter;
pub use overrides::overridden_by;
pub use relevance::{
    is_empty_foreign_module, is_generated, is_lazy, is_private, is_relevant, is_val_method,
};
pub use sort::{cmp_by_name, cmp_by_path, sort_by_name, sort_by_path};
pub use subtypes::{SubtypeIndex, sub_templates};
pub use typequery::{FrontEnd, FrontEndError, TypeQuery};
pub use walk::{FilterFn, SymbolFilter, Walk, for_each, members, members_where, walk, walk_where};
