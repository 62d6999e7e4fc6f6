//! Visibility filtering for the public API surface.
//!
//! A symbol belongs to the surface when it is externally observable:
//! `public` or `protected` accessibility and not compiler- or
//! adapter-synthesized. Property accessor methods never appear standalone;
//! the renderer folds them into the owning property's descriptor.
//!
//! Pure predicates, no side effects.

use surface_symbols::{Accessibility, MemberKind, MemberSymbol, TypeSymbol};

/// Accessibility half of the rule, shared by types, members and accessors.
pub fn is_visible_accessibility(accessibility: Accessibility) -> bool {
    matches!(
        accessibility,
        Accessibility::Public | Accessibility::Protected
    )
}

/// Whether a type belongs to the public surface.
pub fn is_public_surface_type(symbol: &TypeSymbol) -> bool {
    is_visible_accessibility(symbol.accessibility) && !symbol.is_implicit
}

/// Whether a member belongs to the public surface.
///
/// Synthetic get/set methods are always excluded here regardless of their
/// accessibility; they surface only through the property descriptor.
pub fn is_public_surface_member(symbol: &MemberSymbol) -> bool {
    if matches!(
        symbol.kind,
        MemberKind::PropertyGetter | MemberKind::PropertySetter
    ) {
        return false;
    }
    is_visible_accessibility(symbol.accessibility) && !symbol.is_implicit
}

/// Whether a property accessor is itself publicly visible.
///
/// Used for the `{ get; set; }` descriptor: an accessor with insufficient
/// accessibility is omitted even when the property itself is public.
pub fn is_visible_accessor(accessibility: Option<Accessibility>) -> bool {
    accessibility.is_some_and(is_visible_accessibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use surface_symbols::{BuildVariant, TypeKind};

    fn variant() -> BuildVariant {
        BuildVariant::new("net8.0", "Acme.Core")
    }

    #[test]
    fn public_and_protected_types_pass() {
        for acc in [Accessibility::Public, Accessibility::Protected] {
            let t = TypeSymbol::new("Acme.Widget", "Acme", TypeKind::Class, acc, variant());
            assert!(is_public_surface_type(&t));
        }
    }

    #[test]
    fn internal_and_private_types_are_excluded() {
        for acc in [Accessibility::Internal, Accessibility::Private] {
            let t = TypeSymbol::new("Acme.Widget", "Acme", TypeKind::Class, acc, variant());
            assert!(!is_public_surface_type(&t));
        }
    }

    #[test]
    fn implicit_types_are_excluded() {
        let mut t = TypeSymbol::new(
            "Acme.Widget",
            "Acme",
            TypeKind::Class,
            Accessibility::Public,
            variant(),
        );
        t.is_implicit = true;
        assert!(!is_public_surface_type(&t));
    }

    #[test]
    fn implicit_members_are_excluded() {
        let mut m = MemberSymbol::new(
            "Acme.Widget.op_Equality(Acme.Widget, Acme.Widget)",
            MemberKind::Method,
            Accessibility::Public,
        );
        m.is_implicit = true;
        assert!(!is_public_surface_member(&m));
    }

    #[test]
    fn accessor_methods_never_surface_standalone() {
        for kind in [MemberKind::PropertyGetter, MemberKind::PropertySetter] {
            let m = MemberSymbol::new("Acme.Widget.Count.get", kind, Accessibility::Public);
            assert!(!is_public_surface_member(&m));
        }
    }

    #[test]
    fn ordinary_members_follow_the_accessibility_rule() {
        let m = MemberSymbol::new("Acme.Widget.Run()", MemberKind::Method, Accessibility::Public);
        assert!(is_public_surface_member(&m));

        let m = MemberSymbol::new(
            "Acme.Widget.Run()",
            MemberKind::Method,
            Accessibility::Internal,
        );
        assert!(!is_public_surface_member(&m));

        let m = MemberSymbol::new(
            "Acme.Widget.Widget()",
            MemberKind::Constructor,
            Accessibility::Protected,
        );
        assert!(is_public_surface_member(&m));
    }

    #[test]
    fn accessor_visibility_for_descriptor() {
        assert!(is_visible_accessor(Some(Accessibility::Public)));
        assert!(is_visible_accessor(Some(Accessibility::Protected)));
        assert!(!is_visible_accessor(Some(Accessibility::Internal)));
        assert!(!is_visible_accessor(Some(Accessibility::Private)));
        assert!(!is_visible_accessor(None));
    }
}
