//! Import closure resolution.
//!
//! Starting from a root document, [`resolve_closure`] loads the transitive
//! set of imported files. The traversal is keyed by normalized absolute
//! path with an explicit visited set, so it expands each file exactly once
//! and terminates on cyclic import graphs in at most one step per distinct
//! file. A file whose load fails becomes a recorded failed edge, never a
//! fault: expansion stops along that edge and the rest of the graph is
//! still resolved.

use std::collections::VecDeque;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;

use crate::base::paths;
use crate::model::Document;
use crate::project::DocumentLoader;

// ============================================================================
// CLOSURE RESULT
// ============================================================================

/// An import edge whose target could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedImport {
    /// Normalized path of the document declaring the import.
    pub importer: String,
    /// Normalized path the import resolved to.
    pub target: String,
    /// Why the load failed, as reported by the loader.
    pub reason: String,
}

/// The resolved import closure of one root document.
///
/// `direct` maps every reached file (root included) to the set of absolute
/// paths it directly imports. Every file that was ever observed as an
/// import target is either a key of `direct` or recorded in `failed` —
/// nothing is silently absent.
#[derive(Debug, Clone, Default)]
pub struct ImportClosure {
    direct: IndexMap<String, IndexSet<String>>,
    documents: IndexMap<String, Arc<Document>>,
    failed: Vec<FailedImport>,
}

impl ImportClosure {
    /// Whether `path` was reached and successfully loaded (or is the root).
    pub fn contains(&self, path: &str) -> bool {
        self.direct.contains_key(path)
    }

    /// Files in the closure, in discovery order, root first.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.direct.keys().map(String::as_str)
    }

    /// Direct imports of one file in the closure.
    pub fn direct_imports(&self, path: &str) -> Option<&IndexSet<String>> {
        self.direct.get(path)
    }

    /// The documents loaded during resolution (the root is not among them;
    /// the caller already holds it).
    pub fn documents(&self) -> impl Iterator<Item = &Arc<Document>> {
        self.documents.values()
    }

    /// Import edges whose target could not be loaded.
    pub fn failed(&self) -> &[FailedImport] {
        &self.failed
    }

    /// Number of files in the closure, root included.
    pub fn len(&self) -> usize {
        self.direct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }

    /// Order-independent equality of the direct-import maps. Used to state
    /// that two resolutions of the same root agree.
    pub fn same_graph(&self, other: &ImportClosure) -> bool {
        self.direct == other.direct
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolve the full transitive import closure of `root`.
///
/// `cwd` is the directory against which the root's own relative imports
/// resolve; every transitively loaded file resolves its imports against its
/// own directory. Resolution is idempotent: running it twice over the same
/// inputs yields the same graph.
pub fn resolve_closure(
    root: &Document,
    cwd: &str,
    loader: &dyn DocumentLoader,
) -> ImportClosure {
    let mut closure = ImportClosure::default();
    let mut failed_paths: FxHashSet<String> = FxHashSet::default();
    let mut pending: VecDeque<(String, String)> = VecDeque::new();

    let root_imports: IndexSet<String> = root
        .imports
        .iter()
        .map(|import| import.resolve(cwd))
        .collect();
    for target in &root_imports {
        pending.push_back((root.source_path.clone(), target.clone()));
    }
    closure.direct.insert(root.source_path.clone(), root_imports);

    while let Some((importer, target)) = pending.pop_front() {
        // Visited check: one expansion per distinct file, cycles included.
        if closure.direct.contains_key(&target) || failed_paths.contains(&target) {
            continue;
        }

        match loader.load(&target) {
            Ok(document) => {
                tracing::trace!(file = %target, "expanding import");
                // Resolve against the directory of the file we addressed,
                // not whatever path the loader stamped on the document.
                let base_dir = paths::parent_dir(&target);
                let imports: IndexSet<String> = document
                    .imports
                    .iter()
                    .map(|import| import.resolve(base_dir))
                    .collect();
                for next in &imports {
                    if !closure.direct.contains_key(next) && !failed_paths.contains(next) {
                        pending.push_back((target.clone(), next.clone()));
                    }
                }
                closure.direct.insert(target.clone(), imports);
                closure.documents.insert(target, document);
            }
            Err(error) => {
                tracing::debug!(file = %target, %error, "import failed to load");
                failed_paths.insert(target.clone());
                closure.failed.push(FailedImport {
                    importer,
                    target,
                    reason: error.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        files = closure.len(),
        failed = closure.failed.len(),
        root = %root.source_path,
        "resolved import closure"
    );
    closure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::MemoryProject;

    fn doc(name: &str, path: &str, imports: &[&str]) -> Document {
        let mut document = Document::new(name, path);
        for &uri in imports {
            document = document.with_import(uri);
        }
        document
    }

    #[test]
    fn test_acyclic_closure_is_transitive() {
        let mut project = MemoryProject::new();
        let root = doc("a", "/p/A.fidl", &["B.fidl"]);
        project.insert(doc("b", "/p/B.fidl", &["C.fidl"]));
        project.insert(doc("c", "/p/C.fidl", &[]));

        let closure = resolve_closure(&root, "/p", &project);

        assert_eq!(closure.len(), 3);
        assert!(closure.contains("/p/B.fidl"));
        assert!(closure.contains("/p/C.fidl"));
        assert!(closure.failed().is_empty());
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let mut project = MemoryProject::new();
        let root = doc("a", "/p/A.fidl", &["B.fidl"]);
        project.insert(doc("b", "/p/B.fidl", &["A.fidl"]));
        project.insert(doc("a", "/p/A.fidl", &["B.fidl"]));

        let closure = resolve_closure(&root, "/p", &project);

        assert_eq!(closure.len(), 2);
        assert!(closure.contains("/p/A.fidl"));
        assert!(closure.contains("/p/B.fidl"));
    }

    #[test]
    fn test_self_import_terminates() {
        let project = MemoryProject::new();
        let root = doc("a", "/p/A.fidl", &["A.fidl"]);

        let closure = resolve_closure(&root, "/p", &project);

        // The self edge points at an existing key; nothing to expand.
        assert_eq!(closure.len(), 1);
        assert!(closure.failed().is_empty());
    }

    #[test]
    fn test_failed_import_recorded_at_importer() {
        let mut project = MemoryProject::new();
        let root = doc("a", "/p/A.fidl", &["B.fidl"]);
        project.insert(doc("b", "/p/B.fidl", &["missing/C.fidl"]));

        let closure = resolve_closure(&root, "/p", &project);

        assert_eq!(closure.len(), 2);
        assert_eq!(closure.failed().len(), 1);
        let failed = &closure.failed()[0];
        assert_eq!(failed.importer, "/p/B.fidl");
        assert_eq!(failed.target, "/p/missing/C.fidl");
    }

    #[test]
    fn test_relative_imports_resolve_against_declaring_file() {
        let mut project = MemoryProject::new();
        let root = doc("a", "/p/A.fidl", &["nested/B.fidl"]);
        project.insert(doc("b", "/p/nested/B.fidl", &["../C.fidl"]));
        project.insert(doc("c", "/p/C.fidl", &[]));

        let closure = resolve_closure(&root, "/p", &project);

        assert!(closure.contains("/p/nested/B.fidl"));
        assert!(closure.contains("/p/C.fidl"));
    }

    #[test]
    fn test_idempotent() {
        let mut project = MemoryProject::new();
        let root = doc("a", "/p/A.fidl", &["B.fidl", "C.fidl"]);
        project.insert(doc("b", "/p/B.fidl", &["C.fidl"]));
        project.insert(doc("c", "/p/C.fidl", &["B.fidl"]));

        let first = resolve_closure(&root, "/p", &project);
        let second = resolve_closure(&root, "/p", &project);

        assert!(first.same_graph(&second));
    }
}
