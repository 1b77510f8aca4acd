//! Project management: document loading and enumeration.
//!
//! The validator core never touches the filesystem directly; it consumes
//! the capabilities defined here. [`DocumentLoader`] turns a resolved
//! absolute path into a parsed [`crate::model::Document`];
//! [`ProjectDocuments`] enumerates every document in a project for
//! project-wide index construction.

pub mod collect;
pub mod loader;
pub mod memory;

pub use collect::collect_document_paths;
pub use loader::{DocumentLoader, FsLoader, LoadError, ProjectDocuments};
pub use memory::MemoryProject;
