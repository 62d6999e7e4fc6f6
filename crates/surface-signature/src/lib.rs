//! Canonical signature rendering.
//!
//! Turns a symbol's fully qualified display signature into the minimal form
//! used in surface snapshots: qualification that is redundant given the
//! rendering context (the entry's own type name and namespace) is stripped.
//!
//! Stripping is a structured operation over a parsed signature tree, never a
//! substring replacement: prefixes match whole qualification segments, so
//! `Acme.WidgetFactory` survives a context of `Acme.Widget` intact, and
//! nested generic arguments and parameter types are simplified the same way
//! as the top-level name.
//!
//! A signature that does not parse is reported as [`SignatureError`]; the
//! caller falls back to the unsimplified text for that one symbol.

mod tree;

pub use tree::{NameChain, Node, Segment, parse, render_nodes, visit_chains};

/// A display signature could not be parsed for prefix stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("unbalanced '{0}' in signature")]
    Unbalanced(char),
    #[error("unexpected '{0}' in signature")]
    Unexpected(char),
}

/// Stripping context: the qualified names whose prefixes are redundant.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Containing type first (the longer prefix), then its namespace.
    prefixes: Vec<NameChain>,
}

impl Context {
    /// Build a context from a type's display name and namespace.
    ///
    /// Either part that is empty or fails to parse as a plain qualified name
    /// simply contributes no prefix; stripping then degrades gracefully
    /// rather than failing the symbol.
    pub fn new(type_name: &str, namespace: &str) -> Self {
        let mut prefixes = Vec::new();
        if let Some(chain) = parse_name(type_name) {
            prefixes.push(chain);
        }
        if let Some(chain) = parse_name(namespace) {
            prefixes.push(chain);
        }
        Self { prefixes }
    }

    fn as_refs(&self) -> Vec<&NameChain> {
        self.prefixes.iter().collect()
    }
}

fn parse_name(text: &str) -> Option<NameChain> {
    if text.is_empty() {
        return None;
    }
    match parse(text).ok()?.as_slice() {
        [Node::Name(chain)] => Some(chain.clone()),
        _ => None,
    }
}

/// Render `signature` with context-redundant qualification removed.
///
/// Each qualified name in the signature loses at most one prefix: the
/// containing type's name is tried first, then the namespace. Nested
/// generic arguments are visited recursively.
pub fn canonicalize(signature: &str, context: &Context) -> Result<String, SignatureError> {
    let mut nodes = parse(signature)?;
    let prefixes = context.as_refs();
    visit_chains(&mut nodes, &mut |chain| chain.strip_prefix(&prefixes));
    Ok(render_nodes(&nodes))
}
