//! Deterministic public API surface snapshots.
//!
//! `surface` renders the externally visible types and members of a
//! multi-project, multi-targeted workspace as diff-friendly text: symbols
//! observed across several build variants are merged into one canonical
//! entry per type, filtered to the public surface, canonicalized to
//! minimally qualified signatures and emitted in a stable order.
//!
//! The compiled symbol graph comes from an external adapter through the
//! [`SymbolSource`] trait; this crate never parses source text itself.
//!
//! # Example
//!
//! ```ignore
//! use surface::render_public_api_surface;
//!
//! let snapshot = render_public_api_surface(&my_source);
//! print!("{}", snapshot.text);
//! for warning in &snapshot.diagnostics {
//!     eprintln!("warning: {warning}");
//! }
//! ```

use rayon::prelude::*;

// Re-exports: vocabulary
pub use surface_symbols::{
    Accessibility, AttributeRef, BuildVariant, CanonicalTypeEntry, ConstValue, MemberKind,
    MemberSymbol, SourceError, SymbolSource, TypeKind, TypeRef, TypeSymbol,
};

// Re-exports: pipeline stages
pub use surface_dedup::{Diagnostic, dedup_types};
pub use surface_filter::{is_public_surface_member, is_public_surface_type, is_visible_accessor};
pub use surface_render::{render_surface, render_type_block};
pub use surface_signature::{Context, SignatureError, canonicalize};

/// A rendered surface plus the warnings gathered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Gather every variant's types from the adapter.
///
/// Acquisition fans out across variants; the result is an unordered
/// multiset as far as the pipeline is concerned (the deduplicator's
/// explicit tie-break is the only ordering authority). A variant the
/// adapter cannot resolve contributes zero types and a warning, never an
/// abort.
pub fn collect_type_symbols<S>(source: &S) -> (Vec<TypeSymbol>, Vec<Diagnostic>)
where
    S: SymbolSource + Sync,
{
    let variants = source.variants();
    let per_variant: Vec<Result<Vec<TypeSymbol>, (String, SourceError)>> = variants
        .par_iter()
        .map(|variant| {
            source
                .type_symbols(variant)
                .map_err(|err| (variant.to_string(), err))
        })
        .collect();

    let mut types = Vec::new();
    let mut diagnostics = Vec::new();
    for outcome in per_variant {
        match outcome {
            Ok(mut batch) => types.append(&mut batch),
            Err((variant, err)) => {
                let SourceError::Unresolved { reason, .. } = err;
                Diagnostic::VariantUnresolved { variant, reason }.record(&mut diagnostics);
            }
        }
    }
    (types, diagnostics)
}

/// Run the core pipeline over an already collected symbol graph.
pub fn render_symbols(types: Vec<TypeSymbol>) -> Snapshot {
    let (entries, mut diagnostics) = dedup_types(types);
    let (text, mut render_diagnostics) = render_surface(&entries);
    diagnostics.append(&mut render_diagnostics);
    Snapshot { text, diagnostics }
}

/// Render the full public API surface of everything the adapter supplies.
pub fn render_public_api_surface<S>(source: &S) -> Snapshot
where
    S: SymbolSource + Sync,
{
    let (types, mut diagnostics) = collect_type_symbols(source);
    let Snapshot {
        text,
        diagnostics: mut pipeline_diagnostics,
    } = render_symbols(types);
    diagnostics.append(&mut pipeline_diagnostics);
    Snapshot { text, diagnostics }
}
