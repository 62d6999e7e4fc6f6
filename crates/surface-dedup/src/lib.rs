//! Cross-variant deduplication.
//!
//! The same library compiled for several targets declares the same logical
//! types once per variant. This crate groups those symbols by display name,
//! keeps one representative per group and records which variants contributed
//! a publicly visible declaration, so the renderer emits each type exactly
//! once with its provenance.
//!
//! The representative choice is an explicit total order on
//! `(assembly_name, variant_label)`, never arrival order: upstream
//! acquisition may run per-variant in parallel, and repeated runs over the
//! same inputs must pick the same symbol.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use surface_filter::is_public_surface_type;
use surface_symbols::{CanonicalTypeEntry, TypeSymbol};

/// A non-fatal condition observed during a run.
///
/// Diagnostics are returned as values so library callers need no tracing
/// subscriber; each one is also mirrored to `tracing::warn!`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    /// A group's representative carries no variant label (adapter defect);
    /// the entry is rendered with whatever labels the rest of the group had.
    MissingVariantLabel { type_name: String },
    /// The tie-break key could not distinguish candidates; the first
    /// encountered was kept.
    AmbiguousRepresentative { type_name: String },
    /// A display signature did not parse; the fully qualified text was
    /// rendered unsimplified.
    SignatureFallback { symbol: String },
    /// A variant produced no symbols because the adapter failed on it.
    VariantUnresolved { variant: String, reason: String },
}

impl Diagnostic {
    /// Log the warning and hand the diagnostic to the run's sink.
    pub fn record(self, sink: &mut Vec<Diagnostic>) {
        tracing::warn!("{self}");
        sink.push(self);
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingVariantLabel { type_name } => {
                write!(f, "type {type_name}: representative has no variant label")
            }
            Diagnostic::AmbiguousRepresentative { type_name } => {
                write!(
                    f,
                    "type {type_name}: ambiguous representative, keeping first encountered"
                )
            }
            Diagnostic::SignatureFallback { symbol } => {
                write!(
                    f,
                    "signature of {symbol} did not parse, rendered fully qualified"
                )
            }
            Diagnostic::VariantUnresolved { variant, reason } => {
                write!(f, "variant {variant} contributed no symbols: {reason}")
            }
        }
    }
}

/// Group symbols by display name, filter to the public surface and pick one
/// representative per group.
///
/// Entries come back in lexicographic display-name order, ready for the
/// renderer. Groups with no publicly visible member are dropped entirely.
pub fn dedup_types(types: Vec<TypeSymbol>) -> (Vec<CanonicalTypeEntry>, Vec<Diagnostic>) {
    let mut groups: BTreeMap<String, Vec<TypeSymbol>> = BTreeMap::new();
    for symbol in types {
        groups
            .entry(symbol.display_name.clone())
            .or_default()
            .push(symbol);
    }

    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();

    for (type_name, group) in groups {
        let mut visible: Vec<TypeSymbol> =
            group.into_iter().filter(is_public_surface_type).collect();
        if visible.is_empty() {
            continue;
        }

        let key =
            |t: &TypeSymbol| (t.variant.assembly_name.clone(), t.variant.label.clone());

        // First encountered among equal keys, so the fallback is stable too.
        let mut rep_index = 0;
        for i in 1..visible.len() {
            if key(&visible[i]) < key(&visible[rep_index]) {
                rep_index = i;
            }
        }

        let min_key = key(&visible[rep_index]);
        let tied = visible.iter().filter(|t| key(t) == min_key).count();
        if tied > 1 && min_key.1.is_empty() {
            Diagnostic::AmbiguousRepresentative {
                type_name: type_name.clone(),
            }
            .record(&mut diagnostics);
        }

        let contributing_variants: BTreeSet<String> = visible
            .iter()
            .filter(|t| t.variant.has_label())
            .map(|t| t.variant.label.clone())
            .collect();

        let representative = visible.remove(rep_index);
        if !representative.variant.has_label() {
            Diagnostic::MissingVariantLabel {
                type_name: type_name.clone(),
            }
            .record(&mut diagnostics);
        }

        entries.push(CanonicalTypeEntry {
            representative,
            contributing_variants,
        });
    }

    (entries, diagnostics)
}
