//! Surface rendering.
//!
//! Emits one structured text block per canonical type entry: provenance
//! header, attribute lines, declaration, base list and a brace-delimited
//! member block. Given the same entries the output is byte-identical, which
//! is what makes snapshots diffable across runs and revisions.
//!
//! Block shape:
//!
//! ```text
//! // Acme.Core (net6.0, net8.0)
//! [Obsolete("use Gadget")]
//! public class Acme.Widget
//!     : Acme.WidgetBase, System.IDisposable
//! {
//!     public void Run();
//! }
//! ```

use surface_dedup::Diagnostic;
use surface_filter::{is_public_surface_member, is_visible_accessor};
use surface_signature::{Context, canonicalize};
use surface_symbols::{
    AttributeRef, CanonicalTypeEntry, MemberKind, MemberSymbol, TypeKind, TypeRef, TypeSymbol,
};

const INDENT: &str = "    ";

/// Render all entries, blocks separated by one blank line.
///
/// Entries are expected in display-name order (the deduplicator's output
/// order); the renderer does not reorder them.
pub fn render_surface(entries: &[CanonicalTypeEntry]) -> (String, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| render_type_block(entry, &mut diagnostics))
        .collect();
    let mut text = blocks.join("\n\n");
    if !text.is_empty() {
        text.push('\n');
    }
    (text, diagnostics)
}

/// Render one type's block.
pub fn render_type_block(entry: &CanonicalTypeEntry, diagnostics: &mut Vec<Diagnostic>) -> String {
    let ty = &entry.representative;
    let context = Context::new(&ty.display_name, &ty.namespace);
    let mut lines: Vec<String> = Vec::new();

    let labels: Vec<&str> = entry
        .contributing_variants
        .iter()
        .map(String::as_str)
        .collect();
    lines.push(format!(
        "// {} ({})",
        ty.variant.assembly_name,
        labels.join(", ")
    ));

    for attribute in &ty.attributes {
        lines.push(render_attribute(attribute));
    }

    lines.push(format!(
        "{} {} {}",
        ty.accessibility.as_str(),
        ty.kind.keyword(),
        ty.display_name
    ));

    let bases = base_list(ty);
    if !bases.is_empty() {
        let rendered: Vec<String> = bases
            .iter()
            .map(|base| simplify(&base.display_name, &context, &ty.display_name, diagnostics))
            .collect();
        lines.push(format!("{INDENT}: {}", rendered.join(", ")));
    }

    lines.push("{".to_string());
    let mut members: Vec<&MemberSymbol> = ty
        .members
        .iter()
        .filter(|m| is_public_surface_member(m))
        .collect();
    members.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    for member in members {
        for attribute in &member.attributes {
            lines.push(format!("{INDENT}{}", render_attribute(attribute)));
        }
        lines.push(render_member(member, ty, &context, diagnostics));
    }
    lines.push("}".to_string());

    lines.join("\n")
}

fn render_member(
    member: &MemberSymbol,
    owner: &TypeSymbol,
    context: &Context,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let mut parts: Vec<String> = vec![member.accessibility.as_str().to_string()];
    for modifier in modifiers(member, owner.kind == TypeKind::Enum) {
        parts.push(modifier.to_string());
    }

    match member.kind {
        MemberKind::Method | MemberKind::Constructor | MemberKind::StaticConstructor => {
            if !member.is_constructor() {
                if let Some(value_type) = &member.value_type {
                    parts.push(simplify(
                        &value_type.display_name,
                        context,
                        &member.display_name,
                        diagnostics,
                    ));
                }
            }
            parts.push(simplify(
                &member.display_name,
                context,
                &member.display_name,
                diagnostics,
            ));
            format!("{INDENT}{};", parts.join(" "))
        }
        MemberKind::Property => {
            if let Some(value_type) = &member.value_type {
                parts.push(simplify(
                    &value_type.display_name,
                    context,
                    &member.display_name,
                    diagnostics,
                ));
            }
            parts.push(simplify(
                &member.display_name,
                context,
                &member.display_name,
                diagnostics,
            ));
            parts.push(accessor_descriptor(member));
            format!("{INDENT}{}", parts.join(" "))
        }
        MemberKind::Field => {
            if let Some(value_type) = &member.value_type {
                parts.push(simplify(
                    &value_type.display_name,
                    context,
                    &member.display_name,
                    diagnostics,
                ));
            }
            parts.push(simplify(
                &member.display_name,
                context,
                &member.display_name,
                diagnostics,
            ));
            match &member.constant {
                Some(value) => format!("{INDENT}{} = {value};", parts.join(" ")),
                None => format!("{INDENT}{};", parts.join(" ")),
            }
        }
        // Folded into the owning property's descriptor; the member filter
        // never lets these through.
        MemberKind::PropertyGetter | MemberKind::PropertySetter => String::new(),
    }
}

/// Modifier keywords in declaration order. Enum members carry none even when
/// the adapter reports flags on the underlying fields.
fn modifiers(member: &MemberSymbol, owner_is_enum: bool) -> Vec<&'static str> {
    if owner_is_enum {
        return Vec::new();
    }
    let mut keywords = Vec::new();
    if member.is_static {
        keywords.push("static");
    }
    if member.is_sealed {
        keywords.push("sealed");
    }
    if member.is_abstract {
        keywords.push("abstract");
    }
    if member.is_virtual {
        keywords.push("virtual");
    }
    if member.is_override {
        keywords.push("override");
    }
    keywords
}

/// `{ get; set; }`-style descriptor listing only the accessors that are
/// themselves publicly visible.
fn accessor_descriptor(member: &MemberSymbol) -> String {
    let mut accessors = Vec::new();
    if is_visible_accessor(member.getter_accessibility) {
        accessors.push("get;");
    }
    if is_visible_accessor(member.setter_accessibility) {
        accessors.push("set;");
    }
    if accessors.is_empty() {
        "{ }".to_string()
    } else {
        format!("{{ {} }}", accessors.join(" "))
    }
}

/// Base type first, then interfaces in adapter order. The universal root
/// conveys nothing and is dropped; so is the enum base under enums.
fn base_list(ty: &TypeSymbol) -> Vec<&TypeRef> {
    let mut bases = Vec::new();
    if let Some(base) = &ty.base_type {
        if !is_suppressed_base(&base.display_name, ty.kind) {
            bases.push(base);
        }
    }
    bases.extend(ty.interfaces.iter());
    bases
}

fn is_suppressed_base(display_name: &str, kind: TypeKind) -> bool {
    match display_name {
        "object" | "System.Object" => true,
        "Enum" | "System.Enum" => kind == TypeKind::Enum,
        _ => false,
    }
}

/// Attribute line with constructor sugar stripped: `Attribute` suffix off
/// the name, core-runtime qualifiers elided, bare argument list.
fn render_attribute(attribute: &AttributeRef) -> String {
    let mut name = attribute.name.as_str();
    name = name.strip_prefix("System.").unwrap_or(name);
    if name.len() > "Attribute".len() {
        name = name.strip_suffix("Attribute").unwrap_or(name);
    }
    if attribute.arguments_text.is_empty() {
        format!("[{name}]")
    } else {
        format!("[{name}({})]", elide_system(&attribute.arguments_text))
    }
}

/// Remove `System.` qualifiers at genuine qualification boundaries.
fn elide_system(text: &str) -> String {
    let mut out = String::new();
    let mut prev: Option<char> = None;
    let mut rest = text;
    while !rest.is_empty() {
        if rest.starts_with("System.") && !prev.is_some_and(is_qualifier_char) {
            rest = &rest["System.".len()..];
            continue;
        }
        let c = rest.chars().next().expect("non-empty");
        out.push(c);
        prev = Some(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn is_qualifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '.'
}

/// Canonicalize, falling back to the fully qualified text when the
/// signature does not parse.
fn simplify(
    text: &str,
    context: &Context,
    symbol: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    match canonicalize(text, context) {
        Ok(simplified) => simplified,
        Err(_) => {
            Diagnostic::SignatureFallback {
                symbol: symbol.to_string(),
            }
            .record(diagnostics);
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use surface_symbols::{Accessibility, BuildVariant, ConstValue};

    fn entry(ty: TypeSymbol, labels: &[&str]) -> CanonicalTypeEntry {
        CanonicalTypeEntry {
            representative: ty,
            contributing_variants: labels.iter().map(|l| l.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn widget() -> TypeSymbol {
        TypeSymbol::new(
            "Acme.Widget",
            "Acme",
            TypeKind::Class,
            Accessibility::Public,
            BuildVariant::new("net8.0", "Acme.Core"),
        )
    }

    fn block(entry: &CanonicalTypeEntry) -> String {
        let mut diagnostics = Vec::new();
        let text = render_type_block(entry, &mut diagnostics);
        assert!(diagnostics.is_empty(), "unexpected diagnostics");
        text
    }

    #[test]
    fn header_lists_sorted_variants() {
        let text = block(&entry(widget(), &["net8.0", "net6.0"]));
        assert!(text.starts_with("// Acme.Core (net6.0, net8.0)\n"));
    }

    #[test]
    fn empty_variant_list_renders_empty_parentheses() {
        let text = block(&entry(widget(), &[]));
        assert!(text.starts_with("// Acme.Core ()\n"));
    }

    #[test]
    fn object_base_is_suppressed() {
        let mut ty = widget();
        ty.base_type = Some(TypeRef::new("object"));
        let text = block(&entry(ty, &["net8.0"]));
        assert_eq!(
            text,
            "// Acme.Core (net8.0)\npublic class Acme.Widget\n{\n}"
        );
    }

    #[test]
    fn base_and_interfaces_render_base_first() {
        let mut ty = widget();
        ty.base_type = Some(TypeRef::new("Acme.WidgetBase"));
        ty.interfaces = vec![
            TypeRef::new("System.IDisposable"),
            TypeRef::new("Acme.IWidget"),
        ];
        let text = block(&entry(ty, &["net8.0"]));
        assert!(text.contains("\n    : WidgetBase, System.IDisposable, IWidget\n"));
    }

    #[test]
    fn enum_base_is_suppressed_and_members_lose_modifiers() {
        let mut ty = TypeSymbol::new(
            "Acme.Color",
            "Acme",
            TypeKind::Enum,
            Accessibility::Public,
            BuildVariant::new("net8.0", "Acme.Core"),
        );
        ty.base_type = Some(TypeRef::new("System.Enum"));
        let mut red = MemberSymbol::new("Red", MemberKind::Field, Accessibility::Public);
        red.is_static = true;
        ty.members.push(red);
        let text = block(&entry(ty, &["net8.0"]));
        assert_eq!(
            text,
            "// Acme.Core (net8.0)\npublic enum Acme.Color\n{\n    public Red;\n}"
        );
    }

    #[test]
    fn members_sort_lexicographically() {
        let mut ty = widget();
        for name in ["Acme.Widget.Zap()", "Acme.Widget.Arm()"] {
            ty.members.push(MemberSymbol::new(
                name,
                MemberKind::Method,
                Accessibility::Public,
            ));
        }
        let text = block(&entry(ty, &["net8.0"]));
        let arm = text.find("Arm()").unwrap();
        let zap = text.find("Zap()").unwrap();
        assert!(arm < zap);
    }

    #[test]
    fn invisible_members_are_not_rendered() {
        let mut ty = widget();
        ty.members.push(MemberSymbol::new(
            "Acme.Widget.Hidden()",
            MemberKind::Method,
            Accessibility::Internal,
        ));
        ty.members.push(MemberSymbol::new(
            "Acme.Widget.Count.get",
            MemberKind::PropertyGetter,
            Accessibility::Public,
        ));
        let text = block(&entry(ty, &["net8.0"]));
        assert!(!text.contains("Hidden"));
        assert!(!text.contains("Count.get"));
    }

    #[test]
    fn method_line_has_return_type_and_modifiers() {
        let mut ty = widget();
        let mut run = MemberSymbol::new(
            "Acme.Widget.Run(Acme.Widget other)",
            MemberKind::Method,
            Accessibility::Public,
        );
        run.is_static = true;
        run.value_type = Some(TypeRef::new("void"));
        ty.members.push(run);
        let text = block(&entry(ty, &["net8.0"]));
        assert!(text.contains("\n    public static void Run(Widget other);\n"));
    }

    #[test]
    fn constructor_line_has_no_return_type() {
        let mut ty = widget();
        let mut ctor = MemberSymbol::new(
            "Acme.Widget.Widget(int seed)",
            MemberKind::Constructor,
            Accessibility::Public,
        );
        ctor.value_type = Some(TypeRef::new("void"));
        ty.members.push(ctor);
        let text = block(&entry(ty, &["net8.0"]));
        assert!(text.contains("\n    public Widget(int seed);\n"));
    }

    #[test]
    fn property_descriptor_reflects_accessor_visibility() {
        let mut ty = widget();
        let mut count = MemberSymbol::new(
            "Acme.Widget.Count",
            MemberKind::Property,
            Accessibility::Public,
        );
        count.value_type = Some(TypeRef::new("int"));
        count.getter_accessibility = Some(Accessibility::Public);
        count.setter_accessibility = Some(Accessibility::Internal);
        ty.members.push(count);
        let text = block(&entry(ty, &["net8.0"]));
        assert!(text.contains("\n    public int Count { get; }\n"));
    }

    #[test]
    fn constant_fields_append_their_literal() {
        let mut ty = widget();
        let mut name = MemberSymbol::new(
            "Acme.Widget.Name",
            MemberKind::Field,
            Accessibility::Public,
        );
        name.is_static = true;
        name.value_type = Some(TypeRef::new("string"));
        name.constant = Some(ConstValue::Str("abc".into()));
        let mut max = MemberSymbol::new(
            "Acme.Widget.Max",
            MemberKind::Field,
            Accessibility::Public,
        );
        max.is_static = true;
        max.value_type = Some(TypeRef::new("int"));
        max.constant = Some(ConstValue::Int(10));
        ty.members.push(name);
        ty.members.push(max);
        let text = block(&entry(ty, &["net8.0"]));
        assert!(text.contains("\n    public static string Name = \"abc\";\n"));
        assert!(text.contains("\n    public static int Max = 10;\n"));
    }

    #[test]
    fn attribute_sugar_is_stripped() {
        let mut ty = widget();
        ty.attributes = vec![
            AttributeRef::new("System.ObsoleteAttribute", "\"use Gadget\""),
            AttributeRef::new("Acme.Annotations.ExperimentalAttribute", ""),
        ];
        let text = block(&entry(ty, &["net8.0"]));
        assert!(text.contains("\n[Obsolete(\"use Gadget\")]\n"));
        assert!(text.contains("\n[Acme.Annotations.Experimental]\n"));
    }

    #[test]
    fn runtime_namespace_is_elided_at_boundaries_only() {
        assert_eq!(elide_system("System.AttributeTargets.Class"), "AttributeTargets.Class");
        assert_eq!(elide_system("typeof(System.String)"), "typeof(String)");
        assert_eq!(elide_system("Acme.System.Thing"), "Acme.System.Thing");
        assert_eq!(elide_system("MySystem.Thing"), "MySystem.Thing");
    }

    #[test]
    fn malformed_signature_falls_back_to_full_text() {
        let mut ty = widget();
        ty.members.push(MemberSymbol::new(
            "Acme.Widget.Broken(",
            MemberKind::Method,
            Accessibility::Public,
        ));
        let mut diagnostics = Vec::new();
        let text = render_type_block(&entry(ty, &["net8.0"]), &mut diagnostics);
        assert!(text.contains("\n    public Acme.Widget.Broken(;\n"));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::SignatureFallback {
                symbol: "Acme.Widget.Broken(".into()
            }]
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut ty = widget();
        ty.members.push(MemberSymbol::new(
            "Acme.Widget.Run()",
            MemberKind::Method,
            Accessibility::Public,
        ));
        let entries = vec![entry(ty, &["net6.0", "net8.0"])];
        let (first, _) = render_surface(&entries);
        let (second, _) = render_surface(&entries);
        assert_eq!(first, second);
    }
}
