//! Validation engine.
//!
//! One [`Validator`] run owns its closure, index, and diagnostics; nothing
//! leaks between runs. The run always completes: loader failures become
//! recorded diagnostics, and validators are independent of one another.

use std::sync::Arc;

use crate::model::{Document, TypeDecl};
use crate::project::{DocumentLoader, ProjectDocuments};
use crate::semantic::cached_index::ProjectIndexCache;
use crate::semantic::closure::{ImportClosure, resolve_closure};
use crate::semantic::diagnostics::{
    Diagnostic, DiagnosticCollector, DiagnosticSink, codes,
};
use crate::semantic::index::{SymbolIndex, SymbolKind};
use crate::semantic::validators::{
    TypeScope, check_collisions, check_enumeration, check_interface_methods, check_map_key,
};

// ============================================================================
// OPTIONS
// ============================================================================

/// Configuration for a validation run.
#[derive(Debug, Clone, Copy)]
pub struct ValidatorOptions {
    /// Run the package/name collision check. An explicit switch, not an
    /// environment probe.
    pub package_collision_check: bool,
    /// Index every document the project enumerator can see instead of just
    /// the import closure. Costs more, catches collisions against files
    /// that are never imported.
    pub project_wide: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            package_collision_check: true,
            project_wide: false,
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Cross-file semantic validator for one root document at a time.
pub struct Validator<'a> {
    loader: &'a dyn DocumentLoader,
    project: Option<&'a dyn ProjectDocuments>,
    cache: Option<&'a ProjectIndexCache>,
    options: ValidatorOptions,
}

impl<'a> Validator<'a> {
    pub fn new(loader: &'a dyn DocumentLoader) -> Self {
        Self {
            loader,
            project: None,
            cache: None,
            options: ValidatorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Provide a project enumerator, enabling project-wide index
    /// construction when [`ValidatorOptions::project_wide`] is set.
    pub fn with_project(mut self, project: &'a dyn ProjectDocuments) -> Self {
        self.project = Some(project);
        self
    }

    /// Share a prebuilt-index cache across runs. Without one, project-wide
    /// mode rebuilds the index per run.
    pub fn with_index_cache(mut self, cache: &'a ProjectIndexCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Validate `root`, returning the accumulated diagnostics.
    pub fn validate(&self, root: &Document) -> Vec<Diagnostic> {
        let mut collector = DiagnosticCollector::new();
        self.validate_into(root, &mut collector);
        collector.take()
    }

    /// Validate `root`, streaming diagnostics into `sink`.
    pub fn validate_into(&self, root: &Document, sink: &mut dyn DiagnosticSink) {
        tracing::debug!(root = %root.source_path, "validating document");

        let closure = resolve_closure(root, root.directory(), self.loader);
        for failed in closure.failed() {
            sink.accept(
                Diagnostic::warning(
                    failed.importer.clone(),
                    format!("Imported file {} could not be loaded: {}", failed.target, failed.reason),
                )
                .with_code(codes::UNRESOLVED_IMPORT),
            );
        }

        let project_index = self.project_index();
        let scoped_index;
        let index: &SymbolIndex = match &project_index {
            Some(index) => index.as_ref(),
            None => {
                scoped_index = SymbolIndex::build(
                    std::iter::once(root).chain(closure.documents().map(Arc::as_ref)),
                );
                &scoped_index
            }
        };

        self.check_elements(root, index, &closure, sink);
    }

    fn project_index(&self) -> Option<Arc<SymbolIndex>> {
        if !self.options.project_wide {
            return None;
        }
        let project = self.project?;
        match self.cache {
            Some(cache) => Some(cache.get_or_build(project)),
            None => {
                let documents = project.documents();
                Some(Arc::new(SymbolIndex::build(
                    documents.iter().map(Arc::as_ref),
                )))
            }
        }
    }

    fn check_elements(
        &self,
        root: &Document,
        index: &SymbolIndex,
        closure: &ImportClosure,
        sink: &mut dyn DiagnosticSink,
    ) {
        let scope = TypeScope::of(root);
        let file = root.source_path.as_str();

        for collection in &root.type_collections {
            if self.options.package_collision_check {
                check_collisions(
                    root,
                    &collection.name,
                    SymbolKind::TypeCollection,
                    index,
                    closure,
                    sink,
                );
            }
            self.check_types(&collection.types, &scope, file, sink);
        }

        for interface in &root.interfaces {
            if self.options.package_collision_check {
                check_collisions(
                    root,
                    &interface.name,
                    SymbolKind::Interface,
                    index,
                    closure,
                    sink,
                );
            }
            self.check_types(&interface.types, &scope, file, sink);
            check_interface_methods(interface, file, sink);
        }
    }

    fn check_types(
        &self,
        types: &[TypeDecl],
        scope: &TypeScope<'_>,
        file: &str,
        sink: &mut dyn DiagnosticSink,
    ) {
        for decl in types {
            match decl {
                TypeDecl::Map(map) => check_map_key(map, scope, file, sink),
                TypeDecl::Enumeration(enumeration) => check_enumeration(enumeration, file, sink),
                TypeDecl::Alias(_)
                | TypeDecl::Struct(_)
                | TypeDecl::Union(_)
                | TypeDecl::Array(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Argument, EnumerationType, Interface, MapType, Method, PrimitiveKind, TypeCollection,
        TypeRef,
    };
    use crate::project::MemoryProject;
    use crate::semantic::diagnostics::Severity;

    #[test]
    fn test_clean_document_yields_nothing() {
        let project = MemoryProject::new();
        let root = Document::new("pkg", "/p/A.fidl").with_type_collection(
            TypeCollection::new("Types").with_type(TypeDecl::Enumeration(
                EnumerationType::new("Color").with_enumerator("RED", Some("1")),
            )),
        );

        let diagnostics = Validator::new(&project).validate(&root);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_failed_import_reported_as_warning() {
        let project = MemoryProject::new();
        let root = Document::new("pkg", "/p/A.fidl").with_import("Gone.fidl");

        let diagnostics = Validator::new(&project).validate(&root);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].code.as_deref(), Some(codes::UNRESOLVED_IMPORT));
        assert!(diagnostics[0].message.contains("/p/Gone.fidl"));
    }

    #[test]
    fn test_collision_check_can_be_disabled() {
        let mut project = MemoryProject::new();
        project.insert(
            Document::new("x.y.z", "/p/B.fidl").with_type_collection(TypeCollection::new("T")),
        );
        let root = Document::new("x.y", "/p/A.fidl")
            .with_import("B.fidl")
            .with_type_collection(TypeCollection::new("z"));

        let with_check = Validator::new(&project).validate(&root);
        assert_eq!(with_check.len(), 1);

        let without_check = Validator::new(&project)
            .with_options(ValidatorOptions {
                package_collision_check: false,
                ..Default::default()
            })
            .validate(&root);
        assert!(without_check.is_empty());
    }

    #[test]
    fn test_interface_runs_element_and_method_checks() {
        let project = MemoryProject::new();
        let root = Document::new("pkg", "/p/A.fidl").with_interface(
            Interface::new("Service")
                .with_type(TypeDecl::Map(MapType::new(
                    "M",
                    TypeRef::named("Nope"),
                    TypeRef::Primitive(PrimitiveKind::String),
                )))
                .with_method(
                    Method::new("ping").with_in_arg(Argument::new(
                        "ping",
                        TypeRef::Primitive(PrimitiveKind::UInt8),
                    )),
                ),
        );

        let diagnostics = Validator::new(&project).validate(&root);

        let codes_seen: Vec<_> = diagnostics.iter().filter_map(|d| d.code.clone()).collect();
        assert!(codes_seen.iter().any(|c| c.as_ref() == codes::INVALID_MAP_KEY));
        assert!(
            codes_seen
                .iter()
                .any(|c| c.as_ref() == codes::ARGUMENT_SHADOWS_METHOD)
        );
    }

    #[test]
    fn test_project_wide_mode_sees_unimported_files() {
        let mut project = MemoryProject::new();
        project.insert(
            Document::new("x.y.z", "/p/Far.fidl").with_type_collection(TypeCollection::new("T")),
        );
        let root =
            Document::new("x.y", "/p/A.fidl").with_type_collection(TypeCollection::new("z"));

        // Scoped: the colliding file is invisible.
        let scoped = Validator::new(&project).validate(&root);
        assert!(scoped.is_empty());

        // Project-wide: visible but unimported, so a warning.
        let wide = Validator::new(&project)
            .with_project(&project)
            .with_options(ValidatorOptions {
                project_wide: true,
                ..Default::default()
            })
            .validate(&root);
        assert_eq!(wide.len(), 1);
        assert_eq!(wide[0].severity, Severity::Warning);
    }
}
