//! Symbol index — qualified names across a document set.
//!
//! The index records where every top-level type collection and interface
//! is declared, keyed by qualified name (`package.elementName`). It is
//! built fresh per validation run from either the import closure (scoped
//! mode) or the whole project (project-wide mode), and is never mutated
//! while being read.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::model::Document;

// ============================================================================
// SYMBOL ENTRIES
// ============================================================================

/// Kind of an indexed declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    TypeCollection,
    Interface,
}

impl SymbolKind {
    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            SymbolKind::TypeCollection => "type collection name",
            SymbolKind::Interface => "interface name",
        }
    }
}

/// One declaration site of a qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    /// `package.elementName`.
    pub qualified_name: String,
    /// Package of the declaring document.
    pub package: SmolStr,
    /// Normalized path of the declaring file.
    pub file: String,
    pub kind: SymbolKind,
}

// ============================================================================
// SYMBOL INDEX
// ============================================================================

/// Mapping from qualified name to every location declaring it.
///
/// Entries iterate sorted by qualified name, then file path, so diagnostic
/// emission order is reproducible.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    entries: IndexMap<String, Vec<SymbolEntry>>,
}

impl SymbolIndex {
    /// Build an index over a set of documents.
    pub fn build<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Self {
        let mut entries: IndexMap<String, Vec<SymbolEntry>> = IndexMap::new();

        for document in documents {
            for collection in &document.type_collections {
                insert(
                    &mut entries,
                    document,
                    &collection.name,
                    SymbolKind::TypeCollection,
                );
            }
            for interface in &document.interfaces {
                insert(&mut entries, document, &interface.name, SymbolKind::Interface);
            }
        }

        entries.sort_keys();
        for bucket in entries.values_mut() {
            bucket.sort_by(|a, b| a.file.cmp(&b.file));
        }

        let index = Self { entries };
        tracing::trace!(names = index.len(), "built symbol index");
        index
    }

    /// All declaration sites of one qualified name.
    pub fn lookup(&self, qualified_name: &str) -> &[SymbolEntry] {
        self.entries
            .get(qualified_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every entry, sorted by qualified name then file path.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.values().flatten()
    }

    /// Number of distinct qualified names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn insert(
    entries: &mut IndexMap<String, Vec<SymbolEntry>>,
    document: &Document,
    element_name: &SmolStr,
    kind: SymbolKind,
) {
    let qualified_name = format!("{}.{}", document.name, element_name);
    entries.entry(qualified_name.clone()).or_default().push(SymbolEntry {
        qualified_name,
        package: document.name.clone(),
        file: document.source_path.clone(),
        kind,
    });
}
