//! Signature trees.
//!
//! A display signature is parsed into a flat sequence of nodes: qualified
//! name chains, bracketed groups and verbatim runs. Parsing preserves every
//! character, so rendering an unmodified tree reproduces the input exactly.

use crate::SignatureError;

/// One node of a parsed signature.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Dot-separated qualified name, e.g. `Acme.Widget<T>.Run`.
    Name(NameChain),
    /// Bracketed group: `(..)` parameter lists, `[..]` array ranks.
    Group {
        open: char,
        close: char,
        items: Vec<Node>,
    },
    /// Verbatim run of whitespace, punctuation and literals.
    Raw(String),
}

/// A qualified name: one segment per qualification level.
#[derive(Debug, Clone, PartialEq)]
pub struct NameChain {
    pub segments: Vec<Segment>,
}

/// One name segment, optionally carrying generic arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub ident: String,
    /// Contents of a `<..>` list attached directly to the identifier.
    pub generics: Option<Vec<Node>>,
}

impl Segment {
    fn matches(&self, other: &Segment) -> bool {
        if self.ident != other.ident {
            return false;
        }
        match (&self.generics, &other.generics) {
            (None, None) => true,
            (Some(a), Some(b)) => render_nodes(a) == render_nodes(b),
            _ => false,
        }
    }
}

impl NameChain {
    /// Drop the leading segments matching the first whole prefix that fits.
    ///
    /// A prefix applies only when every one of its segments matches and at
    /// least one segment of the chain remains; at most one prefix is
    /// stripped per chain. Matching is segment-for-segment, so a prefix
    /// never bites into an identifier that merely starts with its text.
    pub fn strip_prefix(&mut self, prefixes: &[&NameChain]) {
        for prefix in prefixes {
            let n = prefix.segments.len();
            if self.segments.len() > n
                && self
                    .segments
                    .iter()
                    .zip(&prefix.segments)
                    .all(|(a, b)| a.matches(b))
            {
                self.segments.drain(..n);
                return;
            }
        }
    }
}

/// Parse a display signature into nodes.
pub fn parse(input: &str) -> Result<Vec<Node>, SignatureError> {
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let nodes = parse_nodes(&chars, &mut pos, None)?;
    debug_assert_eq!(pos, chars.len());
    Ok(nodes)
}

/// Render nodes back to text.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

/// Walk every name chain in the tree, including nested generic arguments.
pub fn visit_chains(nodes: &mut [Node], f: &mut impl FnMut(&mut NameChain)) {
    for node in nodes {
        match node {
            Node::Name(chain) => {
                f(chain);
                for segment in &mut chain.segments {
                    if let Some(generics) = &mut segment.generics {
                        visit_chains(generics, f);
                    }
                }
            }
            Node::Group { items, .. } => visit_chains(items, f),
            Node::Raw(_) => {}
        }
    }
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Raw(text) => out.push_str(text),
            Node::Group { open, close, items } => {
                out.push(*open);
                write_nodes(items, out);
                out.push(*close);
            }
            Node::Name(chain) => {
                for (i, segment) in chain.segments.iter().enumerate() {
                    if i > 0 {
                        out.push('.');
                    }
                    out.push_str(&segment.ident);
                    if let Some(generics) = &segment.generics {
                        out.push('<');
                        write_nodes(generics, out);
                        out.push('>');
                    }
                }
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '@'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn parse_nodes(
    chars: &[char],
    pos: &mut usize,
    close: Option<char>,
) -> Result<Vec<Node>, SignatureError> {
    let mut nodes = Vec::new();
    let mut raw = String::new();

    while *pos < chars.len() {
        let c = chars[*pos];

        if Some(c) == close {
            flush_raw(&mut nodes, &mut raw);
            return Ok(nodes);
        }

        match c {
            '(' | '[' => {
                flush_raw(&mut nodes, &mut raw);
                let (open, closer) = if c == '(' { ('(', ')') } else { ('[', ']') };
                *pos += 1;
                let items = parse_nodes(chars, pos, Some(closer))?;
                if *pos >= chars.len() || chars[*pos] != closer {
                    return Err(SignatureError::Unbalanced(open));
                }
                *pos += 1;
                nodes.push(Node::Group {
                    open,
                    close: closer,
                    items,
                });
            }
            ')' | ']' => return Err(SignatureError::Unexpected(c)),
            c if is_ident_start(c) => {
                flush_raw(&mut nodes, &mut raw);
                nodes.push(Node::Name(parse_chain(chars, pos)?));
            }
            _ => {
                raw.push(c);
                *pos += 1;
            }
        }
    }

    // Ran out of input inside a bracketed region.
    if let Some(c) = close {
        let open = match c {
            '>' => '<',
            ')' => '(',
            _ => '[',
        };
        return Err(SignatureError::Unbalanced(open));
    }
    flush_raw(&mut nodes, &mut raw);
    Ok(nodes)
}

fn flush_raw(nodes: &mut Vec<Node>, raw: &mut String) {
    if !raw.is_empty() {
        nodes.push(Node::Raw(std::mem::take(raw)));
    }
}

fn parse_chain(chars: &[char], pos: &mut usize) -> Result<NameChain, SignatureError> {
    let mut segments = Vec::new();

    loop {
        let mut ident = String::new();
        ident.push(chars[*pos]);
        *pos += 1;
        while *pos < chars.len() && is_ident_continue(chars[*pos]) {
            ident.push(chars[*pos]);
            *pos += 1;
        }

        // A '<' directly after the identifier opens its generic arguments;
        // anywhere else '<' stays verbatim (comparison operators).
        let mut generics = None;
        if *pos < chars.len() && chars[*pos] == '<' {
            *pos += 1;
            let items = parse_nodes(chars, pos, Some('>'))?;
            if *pos >= chars.len() || chars[*pos] != '>' {
                return Err(SignatureError::Unbalanced('<'));
            }
            *pos += 1;
            generics = Some(items);
        }

        segments.push(Segment { ident, generics });

        let dotted = *pos + 1 < chars.len()
            && chars[*pos] == '.'
            && is_ident_start(chars[*pos + 1]);
        if dotted {
            *pos += 1;
        } else {
            return Ok(NameChain { segments });
        }
    }
}
