//! Class model types.
//!
//! A `ClassModel` is the read-only snapshot of one class that the pipeline
//! consumes: its namespace, generics, documentation, imports, and member
//! declarations in source order. Models arrive from manifest files and are
//! never mutated; a full artifact is recomputed whenever a model changes.

use serde::{Deserialize, Serialize};

/// Declared accessibility of a member or accessor.
///
/// Anything below `public` (private, protected, internal, ...) is folded
/// into `NonPublic`; the selection rules only distinguish the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessibility {
    Public,
    NonPublic,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        matches!(self, Accessibility::Public)
    }
}

/// A type reference as spelled in source, plus the resolved defining
/// namespace when the collaborator could map it to a known symbol.
///
/// `namespace` is `None` for language builtins (`string`, `int`), generic
/// type parameters, and unresolved references; those render with their
/// literal spelling. Generic arguments nest recursively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// A builtin, type parameter, or unresolved reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            args: Vec::new(),
        }
    }

    /// A reference resolved to a defining namespace.
    pub fn resolved(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
            args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }

    /// Render the fully qualified spelling, falling back to the literal
    /// source spelling when no namespace is known.
    pub fn qualified(&self) -> String {
        let head = match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        };
        if self.args.is_empty() {
            head
        } else {
            let args: Vec<String> = self.args.iter().map(TypeRef::qualified).collect();
            format!("{}<{}>", head, args.join(", "))
        }
    }

    /// Collect every namespace this reference (and its arguments) relies on,
    /// in spelling order.
    pub fn collect_namespaces(&self, out: &mut Vec<String>) {
        if let Some(ns) = self.namespace.as_deref() {
            if !ns.is_empty() {
                out.push(ns.to_string());
            }
        }
        for arg in &self.args {
            arg.collect_namespaces(out);
        }
    }
}

/// A generic type parameter with its free-form constraint texts.
///
/// Constraints are carried verbatim (`class`, `new()`, `IComparable<T>`)
/// and reproduced on the interface without reinterpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericParam {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,
}

/// A method or indexer parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

/// Property declaration. Accessor fields record presence plus effective
/// accessibility: a `private set` arrives as `Some(NonPublic)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMember {
    pub name: String,
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<Accessibility>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<Accessibility>,
}

/// Method declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodMember {
    pub name: String,
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,

    pub returns: TypeRef,
}

/// Event declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMember {
    pub name: String,
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    pub handler: TypeRef,
}

/// Field declaration. Recognized so manifests can carry the full member
/// list; never selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMember {
    pub name: String,
    pub accessibility: Accessibility,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    pub ty: TypeRef,
}

/// Constructor declaration. Never selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,
}

/// Indexer declaration. Never selected, even when public.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerMember {
    pub accessibility: Accessibility,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    pub ty: TypeRef,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Parameter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<Accessibility>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<Accessibility>,
}

/// One member declaration, tagged by kind.
///
/// Selection is a single exhaustive match over this union; the field,
/// constructor, and indexer variants exist so they can be recognized and
/// explicitly discarded rather than rejected at the input boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MemberDeclaration {
    Property(PropertyMember),
    Method(MethodMember),
    Event(EventMember),
    Field(FieldMember),
    Constructor(ConstructorMember),
    Indexer(IndexerMember),
}

impl MemberDeclaration {
    /// Member name where the kind has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            MemberDeclaration::Property(p) => Some(&p.name),
            MemberDeclaration::Method(m) => Some(&m.name),
            MemberDeclaration::Event(e) => Some(&e.name),
            MemberDeclaration::Field(f) => Some(&f.name),
            MemberDeclaration::Constructor(_) | MemberDeclaration::Indexer(_) => None,
        }
    }

    /// The type-reference list used to compute required imports: the
    /// member's own type plus, for methods, parameter and return types.
    pub fn type_refs(&self) -> Vec<&TypeRef> {
        match self {
            MemberDeclaration::Property(p) => vec![&p.ty],
            MemberDeclaration::Method(m) => {
                let mut refs = vec![&m.returns];
                refs.extend(m.params.iter().map(|p| &p.ty));
                refs
            }
            MemberDeclaration::Event(e) => vec![&e.handler],
            MemberDeclaration::Field(f) => vec![&f.ty],
            MemberDeclaration::Constructor(c) => c.params.iter().map(|p| &p.ty).collect(),
            MemberDeclaration::Indexer(i) => {
                let mut refs = vec![&i.ty];
                refs.extend(i.params.iter().map(|p| &p.ty));
                refs
            }
        }
    }
}

/// Snapshot of one class declaration, as supplied by a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassModel {
    /// Enclosing namespace as an ordered identifier sequence.
    pub namespace: Vec<String>,

    pub name: String,

    /// Marker names attached to the class by the collaborator.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,

    /// Raw documentation block, copied opaquely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<GenericParam>,

    /// Using directives already visible in the enclosing scope.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    /// Member declarations in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberDeclaration>,
}

impl ClassModel {
    /// The derived interface name: `I` + class name.
    pub fn interface_name(&self) -> String {
        format!("I{}", self.name)
    }

    pub fn namespace_path(&self) -> String {
        self.namespace.join(".")
    }

    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Generic parameter list reproduced verbatim, e.g. `<T,U>`.
    pub fn generic_suffix(&self) -> String {
        if self.generics.is_empty() {
            return String::new();
        }
        let names: Vec<&str> = self.generics.iter().map(|g| g.name.as_str()).collect();
        format!("<{}>", names.join(","))
    }

    /// Constraint clauses reproduced verbatim, e.g. `where T:class`.
    pub fn constraint_clauses(&self) -> String {
        let clauses: Vec<String> = self
            .generics
            .iter()
            .filter(|g| !g.constraints.is_empty())
            .map(|g| format!("where {}:{}", g.name, g.constraints.join(",")))
            .collect();
        clauses.join(" ")
    }
}
