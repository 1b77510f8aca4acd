//! Type declarations and references.
//!
//! Type kinds are a closed sum: every validator matches exhaustively, so a
//! new declaration kind is a compile-time exercise rather than a runtime
//! probe.

use smol_str::SmolStr;

// ============================================================================
// TYPE REFERENCES
// ============================================================================

/// Predefined scalar kinds an IDL type reference may name directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Boolean,
    String,
    Float,
    Double,
    ByteBuffer,
}

/// A reference to a type: either a predefined primitive or the name of a
/// declared type resolved later against the declaring document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    Named(SmolStr),
}

impl TypeRef {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }
}

// ============================================================================
// TYPE DECLARATIONS
// ============================================================================

/// A named type declared inside a type collection or interface.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDecl {
    Enumeration(EnumerationType),
    Map(MapType),
    Alias(AliasType),
    Struct(StructType),
    Union(UnionType),
    Array(ArrayType),
}

impl TypeDecl {
    pub fn name(&self) -> &SmolStr {
        match self {
            TypeDecl::Enumeration(e) => &e.name,
            TypeDecl::Map(m) => &m.name,
            TypeDecl::Alias(a) => &a.name,
            TypeDecl::Struct(s) => &s.name,
            TypeDecl::Union(u) => &u.name,
            TypeDecl::Array(a) => &a.name,
        }
    }

    /// Type references this declaration points at, used for cycle
    /// detection over the reference graph.
    pub fn referenced_types(&self) -> Vec<&TypeRef> {
        match self {
            TypeDecl::Enumeration(_) => Vec::new(),
            TypeDecl::Map(m) => vec![&m.key, &m.value],
            TypeDecl::Alias(a) => vec![&a.actual],
            TypeDecl::Struct(s) => s.fields.iter().map(|f| &f.type_ref).collect(),
            TypeDecl::Union(u) => u.fields.iter().map(|f| &f.type_ref).collect(),
            TypeDecl::Array(a) => vec![&a.element],
        }
    }
}

/// An enumeration: ordered enumerators, each with an optional literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationType {
    pub name: SmolStr,
    pub enumerators: Vec<Enumerator>,
}

impl EnumerationType {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            enumerators: Vec::new(),
        }
    }

    pub fn with_enumerator(mut self, name: impl Into<SmolStr>, value: Option<&str>) -> Self {
        self.enumerators.push(Enumerator {
            name: name.into(),
            value: value.map(SmolStr::new),
        });
        self
    }
}

/// One enumerator. `value` is the literal text exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumerator {
    pub name: SmolStr,
    pub value: Option<SmolStr>,
}

/// A map from a key type to a value type.
#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    pub name: SmolStr,
    pub key: TypeRef,
    pub value: TypeRef,
}

impl MapType {
    pub fn new(name: impl Into<SmolStr>, key: TypeRef, value: TypeRef) -> Self {
        Self {
            name: name.into(),
            key,
            value,
        }
    }
}

/// A typedef wrapping another type reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasType {
    pub name: SmolStr,
    pub actual: TypeRef,
}

impl AliasType {
    pub fn new(name: impl Into<SmolStr>, actual: TypeRef) -> Self {
        Self {
            name: name.into(),
            actual,
        }
    }
}

/// A struct. Fields are carried for reference-graph traversal; the
/// validators do not inspect them beyond that.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub name: SmolStr,
    pub fields: Vec<Field>,
}

impl StructType {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<SmolStr>, type_ref: TypeRef) -> Self {
        self.fields.push(Field {
            name: name.into(),
            type_ref,
        });
        self
    }
}

/// A union, structurally identical to a struct for this validator.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub name: SmolStr,
    pub fields: Vec<Field>,
}

impl UnionType {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<SmolStr>, type_ref: TypeRef) -> Self {
        self.fields.push(Field {
            name: name.into(),
            type_ref,
        });
        self
    }
}

/// A named field of a struct or union.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: SmolStr,
    pub type_ref: TypeRef,
}

/// An array of some element type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub name: SmolStr,
    pub element: TypeRef,
}

impl ArrayType {
    pub fn new(name: impl Into<SmolStr>, element: TypeRef) -> Self {
        Self {
            name: name.into(),
            element,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_decl_name() {
        let decl = TypeDecl::Alias(AliasType::new("Handle", TypeRef::Primitive(PrimitiveKind::UInt32)));
        assert_eq!(decl.name(), "Handle");
    }

    #[test]
    fn test_referenced_types_for_map() {
        let decl = TypeDecl::Map(MapType::new(
            "Lookup",
            TypeRef::named("Key"),
            TypeRef::Primitive(PrimitiveKind::String),
        ));
        let refs = decl.referenced_types();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0], &TypeRef::named("Key"));
    }

    #[test]
    fn test_referenced_types_for_enumeration_is_empty() {
        let decl = TypeDecl::Enumeration(EnumerationType::new("Color"));
        assert!(decl.referenced_types().is_empty());
    }
}
