//! Package/name collision detection.
//!
//! A type collection or interface claims the qualified name
//! `package.elementName`. When another file's package nests under that
//! qualified name, generated code for the two files lands in the same
//! namespace and collides. The collision is an error if the other file is
//! actually imported (it participates in the compiled closure) and a
//! warning if it merely exists somewhere in the scanned scope.

use smol_str::SmolStr;

use crate::model::Document;
use crate::semantic::closure::ImportClosure;
use crate::semantic::diagnostics::{Diagnostic, DiagnosticSink, codes};
use crate::semantic::index::{SymbolIndex, SymbolKind};

/// Separator between package segments in qualified names.
pub const PACKAGE_SEPARATOR: char = '.';

/// Check one type collection or interface of `root` against the index.
///
/// Diagnostics come out in index iteration order, which is sorted, so the
/// emission order is reproducible across runs.
pub fn check_collisions(
    root: &Document,
    element_name: &SmolStr,
    kind: SymbolKind,
    index: &SymbolIndex,
    closure: &ImportClosure,
    sink: &mut dyn DiagnosticSink,
) {
    if element_name.contains(PACKAGE_SEPARATOR) {
        sink.accept(
            Diagnostic::error(root.source_path.clone(), "Name may not contain '.'")
                .with_feature(element_name.clone())
                .with_code(codes::NAME_CONTAINS_SEPARATOR),
        );
    }

    let qualified = format!("{}{}{}", root.name, PACKAGE_SEPARATOR, element_name);

    for entry in index.entries() {
        // A document never collides with itself.
        if entry.file == root.source_path {
            continue;
        }
        if !entry.package.starts_with(qualified.as_str()) {
            continue;
        }

        if closure.contains(&entry.file) {
            sink.accept(
                Diagnostic::error(
                    root.source_path.clone(),
                    format!(
                        "Imported file's package {} may not start with package {} + {} '{}'",
                        entry.package,
                        root.name,
                        kind.label(),
                        element_name
                    ),
                )
                .with_feature(element_name.clone())
                .with_code(codes::IMPORTED_PACKAGE_COLLISION),
            );
        } else {
            sink.accept(
                Diagnostic::warning(
                    root.source_path.clone(),
                    format!(
                        "{}. File's package {} starts with package {} + {} '{}'",
                        entry.file,
                        entry.package,
                        root.name,
                        kind.label(),
                        element_name
                    ),
                )
                .with_feature(element_name.clone())
                .with_code(codes::LATENT_PACKAGE_COLLISION),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeCollection;
    use crate::project::MemoryProject;
    use crate::semantic::closure::resolve_closure;
    use crate::semantic::diagnostics::{DiagnosticCollector, Severity};

    #[test]
    fn test_separator_in_name_is_error() {
        let root = Document::new("pkg", "/a.fidl");
        let index = SymbolIndex::build([&root]);
        let closure = resolve_closure(&root, "/", &MemoryProject::new());
        let mut collector = DiagnosticCollector::new();

        check_collisions(
            &root,
            &SmolStr::new("bad.name"),
            SymbolKind::TypeCollection,
            &index,
            &closure,
            &mut collector,
        );

        assert_eq!(collector.error_count(), 1);
        assert_eq!(
            collector.diagnostics()[0].code.as_deref(),
            Some(codes::NAME_CONTAINS_SEPARATOR)
        );
    }

    #[test]
    fn test_imported_collision_is_error() {
        let mut project = MemoryProject::new();
        let root = Document::new("x.y", "/p/A.fidl")
            .with_import("B.fidl")
            .with_type_collection(TypeCollection::new("z"));
        let other = project.insert(
            Document::new("x.y.z", "/p/B.fidl").with_type_collection(TypeCollection::new("Inner")),
        );

        let closure = resolve_closure(&root, "/p", &project);
        let index = SymbolIndex::build([&root, other.as_ref()]);
        let mut collector = DiagnosticCollector::new();

        check_collisions(
            &root,
            &root.type_collections[0].name,
            SymbolKind::TypeCollection,
            &index,
            &closure,
            &mut collector,
        );

        assert_eq!(collector.error_count(), 1);
        assert_eq!(collector.diagnostics()[0].severity, Severity::Error);
    }

    #[test]
    fn test_unimported_collision_is_warning() {
        let project = MemoryProject::new();
        let root =
            Document::new("x.y", "/p/A.fidl").with_type_collection(TypeCollection::new("z"));
        let other =
            Document::new("x.y.z", "/p/B.fidl").with_type_collection(TypeCollection::new("Inner"));

        let closure = resolve_closure(&root, "/p", &project);
        let index = SymbolIndex::build([&root, &other]);
        let mut collector = DiagnosticCollector::new();

        check_collisions(
            &root,
            &root.type_collections[0].name,
            SymbolKind::TypeCollection,
            &index,
            &closure,
            &mut collector,
        );

        assert_eq!(collector.error_count(), 0);
        assert_eq!(collector.warning_count(), 1);
    }

    #[test]
    fn test_own_file_is_excluded() {
        let root =
            Document::new("x.y", "/p/A.fidl").with_type_collection(TypeCollection::new("y"));

        let closure = resolve_closure(&root, "/p", &MemoryProject::new());
        let index = SymbolIndex::build([&root]);
        let mut collector = DiagnosticCollector::new();

        // "x.y" + "." + "y" does not prefix the root's own package anyway,
        // but even an exact nested match in the same file must stay silent.
        check_collisions(
            &root,
            &root.type_collections[0].name,
            SymbolKind::TypeCollection,
            &index,
            &closure,
            &mut collector,
        );

        assert!(collector.diagnostics().is_empty());
    }
}
