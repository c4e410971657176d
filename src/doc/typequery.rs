//! Ad-hoc type queries — resolving free-form type syntax after analysis.
//!
//! Documentation comments may reference types by surface syntax
//! (`List[Int]`). Instead of carrying a standalone type-expression parser,
//! the evaluator feeds a minimal synthetic unit through the same front-end
//! instance that produced the main graph, so every previously resolved
//! symbol is in scope, then reads the resolved type back out.

use std::io;

use thiserror::Error;

use crate::graph::Type;

/// Failures the front end can raise while the evaluator drives it.
///
/// These propagate to the caller; a failed *resolution* (the expression
/// simply does not name a type) is `Ok(None)`, not an error.
#[derive(Debug, Error)]
pub enum FrontEndError {
    #[error("parse failed: {0}")]
    Parse(String),
    #[error("semantic analysis failed: {0}")]
    Analysis(String),
}

/// The front-end capability the evaluator drives.
///
/// Implementations share the instance used for the main graph: the
/// synthetic unit must see all previously resolved symbols, and the error
/// count must cover both runs. Diagnostics raised by the synthetic unit
/// are expected to show up in `error_count`, not as `Err` returns — an
/// `Err` is reserved for genuine front-end failures.
pub trait FrontEnd {
    /// A compilation unit handle, exclusively owned by the evaluator and
    /// discarded when the query returns.
    type Unit;

    /// Construct a source handle for a synthetic unit. An `Err` here is
    /// treated as "no type", never surfaced.
    fn create_unit(&mut self, name: &str, text: &str) -> io::Result<Self::Unit>;

    /// Run the parse phase over the unit.
    fn parse(&mut self, unit: &mut Self::Unit) -> Result<(), FrontEndError>;

    /// Run semantic analysis over the parsed unit, extending the shared
    /// symbol graph.
    fn analyze(&mut self, unit: &mut Self::Unit) -> Result<(), FrontEndError>;

    /// Snapshot of the cumulative diagnostic error count.
    fn error_count(&self) -> usize;

    /// The resolved type of a member of the unit's top-level declaration,
    /// available after a clean analysis.
    fn member_type(&self, unit: &Self::Unit, name: &str) -> Option<Type>;
}

/// The member whose signature embeds the queried expression.
const QUERY_MEMBER: &str = "f";

/// Placeholder supertype for the synthetic trait. A dummy extends clause,
/// otherwise the front end complains about the empty parent list.
const PLACEHOLDER_PARENT: &str = "Option[unit]";

/// Evaluator for free-form type-expression strings.
///
/// Carries its own monotonic counter so synthetic unit names stay unique
/// across repeated queries within a run. Must not run concurrently with
/// any other use of the same front-end instance (single-writer discipline
/// over the shared diagnostic state).
#[derive(Debug, Default)]
pub struct TypeQuery {
    counter: u32,
}

impl TypeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a string holding a type expression and resolve its symbols
    /// against the shared front end. Must be called after the main
    /// typechecking run.
    ///
    /// Returns `Ok(None)` when the expression does not parse or does not
    /// typecheck; front-end failures beyond that propagate.
    pub fn type_of_string<F: FrontEnd>(
        &mut self,
        type_string: &str,
        front_end: &mut F,
    ) -> Result<Option<Type>, FrontEndError> {
        let errors_before = front_end.error_count();
        let unit_name = format!("tmp${}", self.counter);
        self.counter += 1;

        let text = format!(
            "trait {unit_name} extends {PLACEHOLDER_PARENT} {{ def {QUERY_MEMBER}{type_string}; }}"
        );
        tracing::debug!(unit = %unit_name, expr = type_string, "type query sub-compile");

        let mut unit = match front_end.create_unit(&unit_name, &text) {
            Ok(unit) => unit,
            // A source handle we cannot even construct degrades to "no
            // type"; only parse/typecheck outcomes decide resolution.
            Err(error) => {
                tracing::debug!(unit = %unit_name, %error, "synthetic unit construction failed");
                return Ok(None);
            }
        };
        front_end.parse(&mut unit)?;
        front_end.analyze(&mut unit)?;

        if front_end.error_count() == errors_before {
            Ok(front_end.member_type(&unit, QUERY_MEMBER))
        } else {
            Ok(None)
        }
    }
}
