//! Diagnostics — structured validation findings.
//!
//! Validators never abort a run: every finding becomes a [`Diagnostic`]
//! handed to a [`DiagnosticSink`]. The caller decides whether any
//! Error-severity diagnostic blocks downstream code generation.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Info => write!(f, "Info"),
        }
    }
}

/// A validation finding, attributed to a document and optionally to one of
/// its named features.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Diagnostic code (e.g. "E0002").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
    /// Normalized path of the document the finding belongs to.
    pub file: String,
    /// Name of the offending element, when one exists.
    pub feature: Option<SmolStr>,
    /// Position within the feature (e.g. an enumerator index).
    pub index: Option<usize>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(file: impl Into<String>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Error,
            code: None,
            message: message.into(),
            file: file.into(),
            feature: None,
            index: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(file: impl Into<String>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            code: None,
            message: message.into(),
            file: file.into(),
            feature: None,
            index: None,
        }
    }

    /// Create a new info diagnostic.
    pub fn info(file: impl Into<String>, message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Info,
            code: None,
            message: message.into(),
            file: file.into(),
            feature: None,
            index: None,
        }
    }

    /// Attach the offending feature's name.
    pub fn with_feature(mut self, feature: impl Into<SmolStr>) -> Self {
        self.feature = Some(feature.into());
        self
    }

    /// Attach a position within the feature.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the diagnostic code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.file, self.severity, self.message)?;
        if let Some(feature) = &self.feature {
            write!(f, " ({feature})")?;
        }
        Ok(())
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes for validation findings.
///
/// ## Code Ranges
///
/// - **E0001-E0099**: Errors (expected to block code generation)
/// - **W0001-W0099**: Warnings (non-blocking)
pub mod codes {
    /// Element name contains the package separator.
    pub const NAME_CONTAINS_SEPARATOR: &str = "E0001";
    /// An imported file's package nests under this element's qualified name.
    pub const IMPORTED_PACKAGE_COLLISION: &str = "E0002";
    /// Map key type does not resolve to a primitive or enumeration.
    pub const INVALID_MAP_KEY: &str = "E0003";
    /// Method argument shares its name with the method.
    pub const ARGUMENT_SHADOWS_METHOD: &str = "E0004";

    /// Package collision with a file outside the import closure.
    pub const LATENT_PACKAGE_COLLISION: &str = "W0001";
    /// Enumerator declared with an empty value.
    pub const MISSING_ENUMERATOR_VALUE: &str = "W0002";
    /// Enumerator literal malformed under its inferred base.
    pub const MALFORMED_ENUMERATOR_VALUE: &str = "W0003";
    /// An imported file could not be loaded.
    pub const UNRESOLVED_IMPORT: &str = "W0004";
}

// ============================================================================
// DIAGNOSTIC SINK
// ============================================================================

/// Receives diagnostics as validators produce them.
///
/// The engine only ever calls [`accept`](DiagnosticSink::accept); it never
/// inspects what a sink did with a diagnostic.
pub trait DiagnosticSink {
    fn accept(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics into a vector, in emission order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get diagnostics for a specific file.
    pub fn diagnostics_for_file(&self, file: &str) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.file == file).collect()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Clear all diagnostics.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn accept(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
