//! Recursive discovery of IDL source files under a project directory.

use std::io;
use std::path::{Path, PathBuf};

/// File extension of IDL documents.
pub const DOCUMENT_EXTENSION: &str = "fidl";

/// Collect every `.fidl` file under `dir`, recursively, sorted by path.
pub fn collect_document_paths(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    collect_recursive(dir, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn collect_recursive(dir: &Path, paths: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_recursive(&path, paths)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext == DOCUMENT_EXTENSION)
        {
            paths.push(path);
        }
    }
    Ok(())
}
