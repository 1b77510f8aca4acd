//! Map key type validation.
//!
//! A map key must resolve, through zero or more typedef indirections, to a
//! primitive type or an enumeration. A reference graph that cycles back on
//! itself is a structural error reported elsewhere; this validator detects
//! the cycle up front and stays silent rather than re-reporting or
//! looping.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::{Document, MapType, TypeDecl, TypeRef};
use crate::semantic::diagnostics::{Diagnostic, DiagnosticSink, codes};

// ============================================================================
// TYPE SCOPE
// ============================================================================

/// Named type declarations visible while resolving references of one
/// document (all collections and interfaces together).
#[derive(Debug)]
pub struct TypeScope<'a> {
    types: FxHashMap<&'a str, &'a TypeDecl>,
}

impl<'a> TypeScope<'a> {
    /// Build the scope of a document.
    pub fn of(document: &'a Document) -> Self {
        let mut types = FxHashMap::default();
        for decl in document.all_types() {
            // First declaration wins on duplicate names; duplicates are a
            // collision problem, not a resolution problem.
            types.entry(decl.name().as_str()).or_insert(decl);
        }
        Self { types }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a TypeDecl> {
        self.types.get(name).copied()
    }
}

// ============================================================================
// CYCLE DETECTION
// ============================================================================

/// Whether the type reference graph reachable from `start` contains a
/// cycle. Walks declared references (alias targets, map key/value, array
/// elements, struct/union fields); unresolved names are leaves.
pub fn has_reference_cycle(start: &TypeRef, scope: &TypeScope<'_>) -> bool {
    let name = match start {
        TypeRef::Primitive(_) => return false,
        TypeRef::Named(name) => name.as_str(),
    };
    let mut on_path = FxHashSet::default();
    let mut done = FxHashSet::default();
    visit(name, scope, &mut on_path, &mut done)
}

fn visit<'a>(
    name: &'a str,
    scope: &TypeScope<'a>,
    on_path: &mut FxHashSet<&'a str>,
    done: &mut FxHashSet<&'a str>,
) -> bool {
    if done.contains(name) {
        return false;
    }
    if !on_path.insert(name) {
        return true;
    }

    if let Some(decl) = scope.lookup(name) {
        for reference in decl.referenced_types() {
            if let TypeRef::Named(next) = reference {
                if visit(next.as_str(), scope, on_path, done) {
                    return true;
                }
            }
        }
    }

    on_path.remove(name);
    done.insert(name);
    false
}

// ============================================================================
// KEY CHECK
// ============================================================================

/// Validate the key type of one map declaration.
pub fn check_map_key(
    map: &MapType,
    scope: &TypeScope<'_>,
    file: &str,
    sink: &mut dyn DiagnosticSink,
) {
    if has_reference_cycle(&map.key, scope) {
        // The cycle is reported as its own structural error; emitting a key
        // diagnostic on top of it would be noise.
        tracing::trace!(map = %map.name, "skipping map key check, reference cycle");
        return;
    }

    let mut key = &map.key;
    loop {
        match key {
            TypeRef::Primitive(_) => return,
            TypeRef::Named(name) => match scope.lookup(name) {
                Some(TypeDecl::Enumeration(_)) => return,
                Some(TypeDecl::Alias(alias)) => {
                    key = &alias.actual;
                }
                // Struct, union, map, array, or an unresolved name: not an
                // acceptable key.
                _ => break,
            },
        }
    }

    sink.accept(
        Diagnostic::error(file, "Key type has to be a primitive type")
            .with_feature(map.name.clone())
            .with_code(codes::INVALID_MAP_KEY),
    );
}
