//! Cached project-wide symbol index.
//!
//! Project-wide collision detection needs an index over every document the
//! project enumerator can see, which is expensive to rebuild per validated
//! file. The cache builds it once and hands out cheap `Arc` clones until
//! someone invalidates it. Build and invalidate are explicit operations;
//! validators never mutate the cache from inside a run.

use std::sync::Arc;

use parking_lot::RwLock;

use super::index::SymbolIndex;
use crate::project::ProjectDocuments;

/// Process-wide cache for the project-wide [`SymbolIndex`].
#[derive(Debug, Default)]
pub struct ProjectIndexCache {
    inner: RwLock<Option<Arc<SymbolIndex>>>,
}

impl ProjectIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached index, building it from `project` if absent.
    pub fn get_or_build(&self, project: &dyn ProjectDocuments) -> Arc<SymbolIndex> {
        if let Some(index) = self.inner.read().clone() {
            return index;
        }

        let mut guard = self.inner.write();
        // Another caller may have built it between the locks.
        if let Some(index) = guard.as_ref() {
            return index.clone();
        }

        let documents = project.documents();
        let index = Arc::new(SymbolIndex::build(documents.iter().map(Arc::as_ref)));
        tracing::debug!(
            files = documents.len(),
            names = index.len(),
            "built project-wide symbol index"
        );
        *guard = Some(index.clone());
        index
    }

    /// Drop the cached index. Call whenever the underlying project document
    /// set changes; the next [`get_or_build`](Self::get_or_build) rebuilds.
    pub fn invalidate(&self) {
        tracing::debug!("invalidated project-wide symbol index");
        *self.inner.write() = None;
    }

    /// Whether an index is currently cached.
    pub fn is_built(&self) -> bool {
        self.inner.read().is_some()
    }
}
