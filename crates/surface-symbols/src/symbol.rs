//! Type-level symbols.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::member::MemberSymbol;
use crate::variant::BuildVariant;

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Public,
    Protected,
    Internal,
    Private,
}

impl Accessibility {
    /// Keyword form used verbatim in rendered output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Protected => "protected",
            Accessibility::Internal => "internal",
            Accessibility::Private => "private",
        }
    }
}

/// Type declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Declaration keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Delegate => "delegate",
        }
    }
}

/// Lightweight reference to a type by its rendered display name.
///
/// The adapter supplies the graph fully rendered, so references never need
/// resolution; base types, interfaces and member value types all point
/// through this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub display_name: String,
}

impl TypeRef {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// An attribute application, with arguments already rendered by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRef {
    pub name: String,
    /// Rendered argument list without parentheses. Empty = no argument list.
    #[serde(default)]
    pub arguments_text: String,
}

impl AttributeRef {
    pub fn new(name: impl Into<String>, arguments_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments_text: arguments_text.into(),
        }
    }
}

/// A declared type as observed in one build variant.
///
/// `display_name` is the fully qualified, generic-parameter-aware display
/// form and serves as the identity key: two symbols with equal display names
/// are the same logical type regardless of which variant produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSymbol {
    pub display_name: String,
    /// Qualified name of the containing namespace. Empty for the global
    /// namespace. Needed as a stripping context by the canonicalizer.
    pub namespace: String,
    pub kind: TypeKind,
    pub accessibility: Accessibility,
    /// Compiler- or adapter-synthesized declarations are never surfaced.
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub attributes: Vec<AttributeRef>,
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub members: Vec<MemberSymbol>,
    pub variant: BuildVariant,
}

impl TypeSymbol {
    pub fn new(
        display_name: impl Into<String>,
        namespace: impl Into<String>,
        kind: TypeKind,
        accessibility: Accessibility,
        variant: BuildVariant,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            namespace: namespace.into(),
            kind,
            accessibility,
            is_implicit: false,
            attributes: Vec::new(),
            base_type: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            variant,
        }
    }
}

/// The deduplicated, render-ready unit: one representative symbol plus the
/// labels of every variant that contributed an equivalent public type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTypeEntry {
    pub representative: TypeSymbol,
    pub contributing_variants: BTreeSet<String>,
}
