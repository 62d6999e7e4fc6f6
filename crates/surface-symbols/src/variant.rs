//! Build variant identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One compiled output of a project, distinguished by target configuration
/// (e.g. a target-framework moniker) and the assembly it produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildVariant {
    /// Variant label, e.g. `net6.0`. Empty when the adapter had no metadata.
    pub label: String,
    /// Output assembly name, e.g. `Acme.Core`.
    pub assembly_name: String,
}

impl BuildVariant {
    pub fn new(label: impl Into<String>, assembly_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            assembly_name: assembly_name.into(),
        }
    }

    /// Whether the adapter supplied a variant label.
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{}", self.assembly_name)
        } else {
            write!(f, "{} ({})", self.assembly_name, self.label)
        }
    }
}
