//! # Semantic Analysis
//!
//! This module provides cross-file semantic validation for IDL projects:
//! import closure resolution, a project-wide symbol index, and the
//! structural validators that consult them.

pub mod cached_index;
pub mod closure;
pub mod diagnostics;
pub mod index;
pub mod validator;
pub mod validators;

pub use cached_index::ProjectIndexCache;
pub use closure::{FailedImport, ImportClosure, resolve_closure};
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticSink, Severity, codes};
pub use index::{SymbolEntry, SymbolIndex, SymbolKind};
pub use validator::{Validator, ValidatorOptions};

pub type QualifiedName = String;
pub type SourceFilePath = String;
