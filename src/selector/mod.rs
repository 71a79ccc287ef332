//! Member selection rules.
//!
//! Walks a class's declared members and decides, per member, whether and in
//! what shape it appears on the derived interface. Selection never reorders:
//! descriptors come out in declaration order. Ineligible members (static,
//! non-public, fields, constructors, indexers) are filtered silently; this
//! is policy, not an error path.

use crate::model::{
    Accessibility, ClassModel, EventMember, MemberDeclaration, MethodMember, PropertyMember,
};

/// Kind tag for a selected member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Property,
    Method,
    Event,
}

/// A selected member in render-ready form: its signature line with the
/// kind-appropriate terminator, plus the documentation block to copy above
/// it, if any.
#[derive(Debug, Clone)]
pub struct InterfaceMemberDescriptor {
    pub kind: MemberKind,
    pub doc: Option<String>,
    pub signature: String,
}

/// Selection result: descriptors in declaration order plus the namespaces
/// their qualified type spellings rely on (first appearance order, deduped).
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub members: Vec<InterfaceMemberDescriptor>,
    pub required_imports: Vec<String>,
}

/// Decide membership and shape for every declared member of `model`.
pub fn select_members(model: &ClassModel) -> Selection {
    let mut selection = Selection::default();

    for member in &model.members {
        let descriptor = match member {
            MemberDeclaration::Property(p) => select_property(p),
            MemberDeclaration::Method(m) => select_method(m),
            MemberDeclaration::Event(e) => select_event(e),
            // Recognized and discarded: these kinds never become interface
            // members, public or not.
            MemberDeclaration::Field(_)
            | MemberDeclaration::Constructor(_)
            | MemberDeclaration::Indexer(_) => None,
        };

        if let Some(descriptor) = descriptor {
            collect_member_imports(member, &mut selection.required_imports);
            selection.members.push(descriptor);
        }
    }

    selection
}

/// A property is included iff at least one accessor is public; the emitted
/// accessor list carries only the public accessors. Static properties are
/// excluded regardless of accessibility.
fn select_property(property: &PropertyMember) -> Option<InterfaceMemberDescriptor> {
    if property.is_static {
        return None;
    }

    let public_get = is_public_accessor(property.getter);
    let public_set = is_public_accessor(property.setter);
    if !public_get && !public_set {
        return None;
    }

    let mut accessors: Vec<&str> = Vec::new();
    if public_get {
        accessors.push("get;");
    }
    if public_set {
        accessors.push("set;");
    }

    Some(InterfaceMemberDescriptor {
        kind: MemberKind::Property,
        doc: property.doc.clone(),
        signature: format!(
            "{} {} {{ {} }}",
            property.ty.qualified(),
            property.name,
            accessors.join(" ")
        ),
    })
}

/// A method is included iff public and instance. Constructors arrive as a
/// separate variant and never reach this rule.
fn select_method(method: &MethodMember) -> Option<InterfaceMemberDescriptor> {
    if method.is_static || !method.accessibility.is_public() {
        return None;
    }

    let params: Vec<String> = method
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty.qualified(), p.name))
        .collect();

    Some(InterfaceMemberDescriptor {
        kind: MemberKind::Method,
        doc: method.doc.clone(),
        signature: format!(
            "{} {}({});",
            method.returns.qualified(),
            method.name,
            params.join(", ")
        ),
    })
}

/// An event is included iff public and instance.
fn select_event(event: &EventMember) -> Option<InterfaceMemberDescriptor> {
    if event.is_static || !event.accessibility.is_public() {
        return None;
    }

    Some(InterfaceMemberDescriptor {
        kind: MemberKind::Event,
        doc: event.doc.clone(),
        signature: format!("event {} {};", event.handler.qualified(), event.name),
    })
}

fn is_public_accessor(accessor: Option<Accessibility>) -> bool {
    matches!(accessor, Some(Accessibility::Public))
}

/// Record the namespaces a selected member's type references rely on.
fn collect_member_imports(member: &MemberDeclaration, imports: &mut Vec<String>) {
    let mut namespaces = Vec::new();
    for type_ref in member.type_refs() {
        type_ref.collect_namespaces(&mut namespaces);
    }
    for namespace in namespaces {
        if !imports.contains(&namespace) {
            imports.push(namespace);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassModel, FieldMember, IndexerMember, Parameter, TypeRef};

    #[test]
    fn test_property_both_accessors_public() {
        let selection = select_members(&class_with(vec![property(
            Some(Accessibility::Public),
            Some(Accessibility::Public),
        )]));
        assert_eq!(selection.members.len(), 1);
        assert_eq!(selection.members[0].signature, "string Hello { get; set; }");
    }

    #[test]
    fn test_property_private_setter_omitted() {
        let selection = select_members(&class_with(vec![property(
            Some(Accessibility::Public),
            Some(Accessibility::NonPublic),
        )]));
        assert_eq!(selection.members[0].signature, "string Hello { get; }");
    }

    #[test]
    fn test_property_set_only() {
        let selection = select_members(&class_with(vec![property(
            None,
            Some(Accessibility::Public),
        )]));
        assert_eq!(selection.members[0].signature, "string Hello { set; }");
    }

    #[test]
    fn test_property_no_public_accessor_excluded() {
        let selection = select_members(&class_with(vec![property(
            Some(Accessibility::NonPublic),
            Some(Accessibility::NonPublic),
        )]));
        assert!(selection.members.is_empty());
    }

    #[test]
    fn test_static_members_excluded() {
        let mut prop = property(Some(Accessibility::Public), Some(Accessibility::Public));
        if let MemberDeclaration::Property(ref mut p) = prop {
            p.is_static = true;
        }
        let mut method = public_method("StaticMethod");
        if let MemberDeclaration::Method(ref mut m) = method {
            m.is_static = true;
        }
        let selection = select_members(&class_with(vec![prop, method]));
        assert!(selection.members.is_empty());
    }

    #[test]
    fn test_non_public_method_excluded() {
        let mut method = public_method("Hidden");
        if let MemberDeclaration::Method(ref mut m) = method {
            m.accessibility = Accessibility::NonPublic;
        }
        let selection = select_members(&class_with(vec![method]));
        assert!(selection.members.is_empty());
    }

    #[test]
    fn test_field_constructor_indexer_never_selected() {
        let members = vec![
            MemberDeclaration::Field(FieldMember {
                name: "counter".into(),
                accessibility: Accessibility::Public,
                is_static: false,
                doc: None,
                ty: TypeRef::named("int"),
            }),
            MemberDeclaration::Constructor(crate::model::ConstructorMember {
                doc: None,
                params: vec![],
            }),
            MemberDeclaration::Indexer(IndexerMember {
                accessibility: Accessibility::Public,
                doc: None,
                ty: TypeRef::named("int"),
                params: vec![Parameter {
                    name: "index".into(),
                    ty: TypeRef::named("int"),
                }],
                getter: Some(Accessibility::Public),
                setter: Some(Accessibility::Public),
            }),
        ];
        let selection = select_members(&class_with(members));
        assert!(selection.members.is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let selection = select_members(&class_with(vec![
            public_method("First"),
            property(Some(Accessibility::Public), None),
            public_method("Last"),
        ]));
        let kinds: Vec<MemberKind> = selection.members.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MemberKind::Method, MemberKind::Property, MemberKind::Method]
        );
        assert!(selection.members[0].signature.contains("First"));
        assert!(selection.members[2].signature.contains("Last"));
    }

    #[test]
    fn test_method_signature_qualifies_types() {
        let method = MemberDeclaration::Method(MethodMember {
            name: "Hello".into(),
            accessibility: Accessibility::Public,
            is_static: false,
            doc: None,
            params: vec![Parameter {
                name: "x".into(),
                ty: TypeRef::resolved("System.Threading.Tasks", "Task")
                    .with_args(vec![TypeRef::named("string")]),
            }],
            returns: TypeRef::named("string"),
        });
        let selection = select_members(&class_with(vec![method]));
        assert_eq!(
            selection.members[0].signature,
            "string Hello(System.Threading.Tasks.Task<string> x);"
        );
        assert_eq!(
            selection.required_imports,
            vec!["System.Threading.Tasks".to_string()]
        );
    }

    #[test]
    fn test_imports_only_from_selected_members() {
        let mut hidden = public_method("Hidden");
        if let MemberDeclaration::Method(ref mut m) = hidden {
            m.accessibility = Accessibility::NonPublic;
            m.returns = TypeRef::resolved("System.IO", "FileInfo");
        }
        let selection = select_members(&class_with(vec![hidden]));
        assert!(selection.required_imports.is_empty());
    }

    fn property(
        getter: Option<Accessibility>,
        setter: Option<Accessibility>,
    ) -> MemberDeclaration {
        MemberDeclaration::Property(PropertyMember {
            name: "Hello".into(),
            accessibility: Accessibility::Public,
            is_static: false,
            doc: None,
            ty: TypeRef::named("string"),
            getter,
            setter,
        })
    }

    fn public_method(name: &str) -> MemberDeclaration {
        MemberDeclaration::Method(MethodMember {
            name: name.into(),
            accessibility: Accessibility::Public,
            is_static: false,
            doc: None,
            params: vec![],
            returns: TypeRef::named("string"),
        })
    }

    fn class_with(members: Vec<MemberDeclaration>) -> ClassModel {
        ClassModel {
            namespace: vec!["AutomaticInterfaceExample".into()],
            name: "DemoClass".into(),
            markers: vec![],
            doc: None,
            generics: vec![],
            imports: vec![],
            members,
        }
    }
}
