//! Core data types for the public API surface pipeline.
//!
//! This crate defines the vocabulary the pipeline operates on - build
//! variants, type and member symbols, attributes, constant values - plus the
//! [`SymbolSource`] boundary through which an external adapter supplies the
//! compiled symbol graph. These types are used by:
//! - `surface-filter` for visibility decisions
//! - `surface-dedup` for cross-variant grouping
//! - `surface-render` for text emission
//!
//! Everything here is plain data: symbols are derived once per run from the
//! adapter and never mutated afterwards.

mod member;
mod source;
mod symbol;
mod variant;

pub use member::{ConstValue, MemberKind, MemberSymbol};
pub use source::{SourceError, SymbolSource};
pub use symbol::{
    Accessibility, AttributeRef, CanonicalTypeEntry, TypeKind, TypeRef, TypeSymbol,
};
pub use variant::BuildVariant;
