//! Shared fixtures for integration tests.
#![allow(dead_code)]

use fidlint::model::{Document, TypeCollection, TypeDecl};
use fidlint::project::MemoryProject;
use fidlint::semantic::Diagnostic;

/// Build a document with a package name, path, and import URIs.
pub fn document(name: &str, path: &str, imports: &[&str]) -> Document {
    let mut doc = Document::new(name, path);
    for &uri in imports {
        doc = doc.with_import(uri);
    }
    doc
}

/// Build a document whose single type collection carries the given types.
pub fn document_with_types(name: &str, path: &str, types: Vec<TypeDecl>) -> Document {
    let mut collection = TypeCollection::new("Types");
    collection.types = types;
    Document::new(name, path).with_type_collection(collection)
}

/// A project holding the given documents.
pub fn project_of(documents: Vec<Document>) -> MemoryProject {
    let mut project = MemoryProject::new();
    for doc in documents {
        project.insert(doc);
    }
    project
}

/// Assert the diagnostics carry exactly the expected codes, in order.
pub fn assert_codes(diagnostics: &[Diagnostic], expected: &[&str]) {
    let codes: Vec<_> = diagnostics
        .iter()
        .map(|d| d.code.as_deref().unwrap_or("<none>").to_string())
        .collect();
    assert_eq!(
        codes, expected,
        "unexpected diagnostic codes, diagnostics were:\n{}",
        diagnostics
            .iter()
            .map(|d| format!("  {d}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
