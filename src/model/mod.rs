//! Parsed document model.
//!
//! A [`Document`] is one parsed IDL file, produced by an external parser and
//! handed to the validator through a [`crate::project::DocumentLoader`]. The
//! validator never mutates a document; everything here is plain data with
//! value semantics.

mod types;

pub use types::{
    AliasType, ArrayType, EnumerationType, Enumerator, Field, MapType, PrimitiveKind, StructType,
    TypeDecl, TypeRef, UnionType,
};

use smol_str::SmolStr;

use crate::base::paths;

// ============================================================================
// DOCUMENT
// ============================================================================

/// One parsed IDL file: a package declaration, imports, and the type
/// collections and interfaces it defines.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Package identifier, e.g. `commonapi.examples`.
    pub name: SmolStr,
    /// Normalized absolute path of the source file.
    pub source_path: String,
    /// Imports in declaration order, URIs exactly as written.
    pub imports: Vec<ImportRef>,
    pub type_collections: Vec<TypeCollection>,
    pub interfaces: Vec<Interface>,
}

impl Document {
    /// Create an empty document. The source path is normalized on entry so
    /// a document always carries its canonical identity.
    pub fn new(name: impl Into<SmolStr>, source_path: &str) -> Self {
        Self {
            name: name.into(),
            source_path: paths::normalize_absolute(source_path),
            imports: Vec::new(),
            type_collections: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    pub fn with_import(mut self, uri: &str) -> Self {
        self.imports.push(ImportRef::new(uri));
        self
    }

    pub fn with_type_collection(mut self, collection: TypeCollection) -> Self {
        self.type_collections.push(collection);
        self
    }

    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Directory of the source file, used to resolve this document's
    /// relative imports.
    pub fn directory(&self) -> &str {
        paths::parent_dir(&self.source_path)
    }

    /// All type declarations in the document, across collections and
    /// interfaces.
    pub fn all_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.type_collections
            .iter()
            .flat_map(|tc| tc.types.iter())
            .chain(self.interfaces.iter().flat_map(|i| i.types.iter()))
    }
}

/// An import reference as written in the source. It has no identity of its
/// own beyond the absolute path it normalizes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    pub uri: String,
}

impl ImportRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Absolute, normalized form of this import, resolved against the
    /// directory of the declaring document.
    pub fn resolve(&self, base_dir: &str) -> String {
        paths::resolve_import(base_dir, &self.uri)
    }
}

// ============================================================================
// TYPE COLLECTIONS AND INTERFACES
// ============================================================================

/// A named grouping of type declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeCollection {
    pub name: SmolStr,
    pub types: Vec<TypeDecl>,
}

impl TypeCollection {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }
}

/// An interface: a type collection that additionally declares methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: SmolStr,
    pub types: Vec<TypeDecl>,
    pub methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.push(decl);
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
}

// ============================================================================
// METHODS
// ============================================================================

/// A method declared by an interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: SmolStr,
    pub in_args: Vec<Argument>,
    pub out_args: Vec<Argument>,
}

impl Method {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            in_args: Vec::new(),
            out_args: Vec::new(),
        }
    }

    pub fn with_in_arg(mut self, arg: Argument) -> Self {
        self.in_args.push(arg);
        self
    }

    pub fn with_out_arg(mut self, arg: Argument) -> Self {
        self.out_args.push(arg);
        self
    }
}

/// A method argument (input or output).
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: SmolStr,
    pub type_ref: TypeRef,
}

impl Argument {
    pub fn new(name: impl Into<SmolStr>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }
}
