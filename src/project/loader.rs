//! Document loading capabilities.
//!
//! Loading is the only blocking external operation the engine performs,
//! and every failure is a recoverable, per-file condition: the closure
//! resolver records the failed edge and keeps going.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::model::Document;

/// Why a document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl LoadError {
    /// The path the failure refers to.
    pub fn path(&self) -> &str {
        match self {
            LoadError::NotFound { path } => path,
            LoadError::Io { path, .. } => path,
            LoadError::Parse { path, .. } => path,
        }
    }
}

/// Turns a resolved absolute path into a parsed document.
///
/// Path resolution (relative-to-absolute, drive-prefix stripping) happens
/// in the engine before this is called; implementations only fetch and
/// parse. Injected so the engine can run against an in-memory document set
/// in tests.
pub trait DocumentLoader {
    fn load(&self, path: &str) -> Result<Arc<Document>, LoadError>;
}

/// Enumerates every document of a project, independent of import
/// relationships. Consumed only by project-wide symbol index construction.
pub trait ProjectDocuments {
    fn documents(&self) -> Vec<Arc<Document>>;
}

// ============================================================================
// FILESYSTEM LOADER
// ============================================================================

/// A [`DocumentLoader`] over the real filesystem.
///
/// Parsing stays external: the loader is constructed with a parse function
/// that turns `(path, source text)` into a [`Document`].
pub struct FsLoader<P> {
    parse: P,
}

impl<P> FsLoader<P>
where
    P: Fn(&str, &str) -> Result<Document, String>,
{
    pub fn new(parse: P) -> Self {
        Self { parse }
    }
}

impl<P> DocumentLoader for FsLoader<P>
where
    P: Fn(&str, &str) -> Result<Document, String>,
{
    fn load(&self, path: &str) -> Result<Arc<Document>, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_string(),
                }
            } else {
                LoadError::Io {
                    path: path.to_string(),
                    source,
                }
            }
        })?;

        (self.parse)(path, &text)
            .map(Arc::new)
            .map_err(|message| LoadError::Parse {
                path: path.to_string(),
                message,
            })
    }
}

impl<P> fmt::Debug for FsLoader<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FsLoader").finish_non_exhaustive()
    }
}
