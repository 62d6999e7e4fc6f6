//! Member-level symbols.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::symbol::{Accessibility, AttributeRef, TypeRef};

/// Member declaration kind.
///
/// Property accessor methods get their own kinds so the visibility filter can
/// fold them into the owning property instead of surfacing them standalone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    PropertyGetter,
    PropertySetter,
    Property,
    Field,
    Constructor,
    StaticConstructor,
}

/// A compile-time constant carried by a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstValue {
    Str(String),
    Char(char),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Null,
}

impl fmt::Display for ConstValue {
    /// Literal form: textual constants are quoted, the rest are not.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Str(s) => write!(f, "\"{s}\""),
            ConstValue::Char(c) => write!(f, "'{c}'"),
            ConstValue::Bool(b) => write!(f, "{b}"),
            ConstValue::Int(i) => write!(f, "{i}"),
            ConstValue::UInt(u) => write!(f, "{u}"),
            ConstValue::Float(x) => write!(f, "{x}"),
            ConstValue::Null => write!(f, "null"),
        }
    }
}

/// A method, property or field belonging to a [`TypeSymbol`].
///
/// `display_name` is the fully qualified display form of the member without
/// its return/value type (e.g. `Acme.Widget.Run(int)`); the value type rides
/// separately in `value_type`.
///
/// [`TypeSymbol`]: crate::TypeSymbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSymbol {
    pub display_name: String,
    pub kind: MemberKind,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_implicit: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_sealed: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub is_override: bool,
    /// Return type for methods, value type for properties and fields.
    #[serde(default)]
    pub value_type: Option<TypeRef>,
    #[serde(default)]
    pub constant: Option<ConstValue>,
    /// Accessor accessibility, properties only.
    #[serde(default)]
    pub getter_accessibility: Option<Accessibility>,
    #[serde(default)]
    pub setter_accessibility: Option<Accessibility>,
    #[serde(default)]
    pub attributes: Vec<AttributeRef>,
}

impl MemberSymbol {
    pub fn new(
        display_name: impl Into<String>,
        kind: MemberKind,
        accessibility: Accessibility,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            kind,
            accessibility,
            is_implicit: false,
            is_static: false,
            is_sealed: false,
            is_abstract: false,
            is_virtual: false,
            is_override: false,
            value_type: None,
            constant: None,
            getter_accessibility: None,
            setter_accessibility: None,
            attributes: Vec::new(),
        }
    }

    /// True for kinds whose declaration line carries no return type.
    pub fn is_constructor(&self) -> bool {
        matches!(
            self.kind,
            MemberKind::Constructor | MemberKind::StaticConstructor
        )
    }
}
