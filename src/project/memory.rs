//! In-memory project: a document store that acts as both loader and
//! project enumerator.
//!
//! The primary consumer is tests, but callers that already hold a fully
//! parsed project (an editor workspace, a batch generator front end) use it
//! the same way: insert documents, hand the project to the validator.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::loader::{DocumentLoader, LoadError, ProjectDocuments};
use crate::model::Document;

/// A set of parsed documents keyed by normalized source path.
#[derive(Debug, Default, Clone)]
pub struct MemoryProject {
    documents: FxHashMap<String, Arc<Document>>,
}

impl MemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, keyed by its (already normalized) source path.
    /// A later insert for the same path replaces the earlier one.
    pub fn insert(&mut self, document: Document) -> Arc<Document> {
        let doc = Arc::new(document);
        self.documents.insert(doc.source_path.clone(), doc.clone());
        doc
    }

    pub fn get(&self, path: &str) -> Option<&Arc<Document>> {
        self.documents.get(path)
    }

    pub fn remove(&mut self, path: &str) -> Option<Arc<Document>> {
        self.documents.remove(path)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentLoader for MemoryProject {
    fn load(&self, path: &str) -> Result<Arc<Document>, LoadError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::NotFound {
                path: path.to_string(),
            })
    }
}

impl ProjectDocuments for MemoryProject {
    fn documents(&self) -> Vec<Arc<Document>> {
        // Sorted by path so downstream consumers see a stable order.
        let mut docs: Vec<_> = self.documents.values().cloned().collect();
        docs.sort_by(|a, b| a.source_path.cmp(&b.source_path));
        docs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_load() {
        let mut project = MemoryProject::new();
        project.insert(Document::new("pkg.a", "/models/A.fidl"));

        let doc = project.load("/models/A.fidl").unwrap();
        assert_eq!(doc.name, "pkg.a");

        let err = project.load("/models/B.fidl").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_documents_sorted_by_path() {
        let mut project = MemoryProject::new();
        project.insert(Document::new("b", "/z.fidl"));
        project.insert(Document::new("a", "/a.fidl"));

        let paths: Vec<_> = project
            .documents()
            .iter()
            .map(|d| d.source_path.clone())
            .collect();
        assert_eq!(paths, ["/a.fidl", "/z.fidl"]);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut project = MemoryProject::new();
        project.insert(Document::new("old", "/a.fidl"));
        project.insert(Document::new("new", "/a.fidl"));

        assert_eq!(project.len(), 1);
        assert_eq!(project.get("/a.fidl").unwrap().name, "new");
    }
}
