//! Abstract boundary to the compiled-symbol-graph supplier.

use crate::symbol::TypeSymbol;
use crate::variant::BuildVariant;

/// Error produced when a variant's symbols cannot be supplied.
///
/// Never fatal to a run: the pipeline treats an erroring variant as having
/// contributed zero types and surfaces the failure as a warning.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("variant {variant} did not resolve: {reason}")]
    Unresolved { variant: String, reason: String },
}

/// Supplies, per build variant, the fully resolved set of declared types.
///
/// Implementations sit outside the core: they own workspace loading and
/// compilation, and hand over an in-memory graph with members, attributes
/// and base/interface references already rendered. The core never parses
/// source text itself.
pub trait SymbolSource {
    /// Enumerate the build variants of the workspace.
    fn variants(&self) -> Vec<BuildVariant>;

    /// All types declared in one variant, fully populated.
    fn type_symbols(&self, variant: &BuildVariant) -> Result<Vec<TypeSymbol>, SourceError>;
}
