//! Foundation types for the documentation model.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`SymbolId`] - Arena identifiers for symbols
//! - [`SymbolFlags`] - Declaration flag bits recorded by the front end
//! - [`decode_name`], [`ASSIGN_SUFFIX`] - Encoded-name handling
//!
//! This module has NO dependencies on other docmodel modules.

mod flags;
mod ids;
pub mod names;

pub use flags::SymbolFlags;
pub use ids::SymbolId;
pub use names::{ASSIGN_SUFFIX, decode_name};
