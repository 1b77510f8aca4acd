//! # fidlint-base
//!
//! Core library for cross-file semantic validation of Franca IDL projects.
//!
//! The library sits between an external parser (which turns `.fidl` text
//! into [`model::Document`] values) and a code generator. It resolves the
//! transitive import closure of a root document, indexes the symbols a
//! project declares, and runs structural validators whose diagnostics the
//! caller can use to gate generation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! semantic  → closure resolution, symbol index, validators, diagnostics
//!   ↓
//! project   → document loading, project enumeration, index caching
//!   ↓
//! model     → parsed document model (documents, types, methods)
//!   ↓
//! base      → primitives (path normalization)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → project → semantic)
// ============================================================================

/// Foundation types: path normalization
pub mod base;

/// Parsed document model: documents, type declarations, methods
pub mod model;

/// Project management: document loading, enumeration, index caching
pub mod project;

/// Semantic analysis: import closure, symbol index, validators
pub mod semantic;

// Re-export commonly needed items
pub use model::{Document, Interface, TypeCollection};
pub use project::{DocumentLoader, LoadError, MemoryProject};
pub use semantic::{Diagnostic, DiagnosticCollector, Severity, Validator, ValidatorOptions};
