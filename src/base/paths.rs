//! Path normalization for consistent import resolution.
//!
//! Import URIs arrive in whatever shape the IDL author wrote them:
//! relative to the importing file, absolute, with backslash separators, or
//! carrying a drive prefix. Every path stored in a closure or index goes
//! through [`normalize_absolute`] first so that one file has exactly one
//! identity, regardless of how it was reached.

/// Check whether an import URI is absolute (rooted or drive-prefixed).
pub fn is_absolute(uri: &str) -> bool {
    uri.starts_with('/') || uri.starts_with('\\') || has_drive_prefix(uri)
}

/// Normalize an absolute path to its canonical string form.
///
/// - backslashes become forward slashes
/// - a drive prefix (`C:`) is stripped
/// - repeated separators collapse
/// - `.` and `..` segments are resolved lexically
///
/// # Examples
///
/// ```
/// use fidlint::base::normalize_absolute;
///
/// assert_eq!(normalize_absolute("C:\\models\\car.fidl"), "/models/car.fidl");
/// assert_eq!(normalize_absolute("/a//b/../c.fidl"), "/a/c.fidl");
/// ```
pub fn normalize_absolute(path: &str) -> String {
    let slashed = path.replace('\\', "/");
    let stripped = strip_drive_prefix(&slashed);

    let mut segments: Vec<&str> = Vec::new();
    for segment in stripped.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut normalized = String::with_capacity(stripped.len());
    for segment in &segments {
        normalized.push('/');
        normalized.push_str(segment);
    }
    if normalized.is_empty() {
        normalized.push('/');
    }
    normalized
}

/// Resolve an import URI against the directory of the importing file.
///
/// Absolute URIs are normalized as-is; relative URIs are joined onto
/// `base_dir` first. `base_dir` is the directory of the *declaring*
/// document, not the root of the validation run.
pub fn resolve_import(base_dir: &str, uri: &str) -> String {
    if is_absolute(uri) {
        normalize_absolute(uri)
    } else {
        normalize_absolute(&format!("{base_dir}/{uri}"))
    }
}

/// Directory portion of a normalized file path.
///
/// `"/a/b/c.fidl"` → `"/a/b"`; a bare filename yields `""`.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

fn has_drive_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

fn strip_drive_prefix(path: &str) -> &str {
    if has_drive_prefix(path) {
        &path[2..]
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize_absolute("\\models\\Car.fidl"), "/models/Car.fidl");
    }

    #[test]
    fn test_normalize_strips_drive() {
        assert_eq!(normalize_absolute("C:/work/Car.fidl"), "/work/Car.fidl");
        assert_eq!(normalize_absolute("d:\\work\\Car.fidl"), "/work/Car.fidl");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_absolute("/a//b///c.fidl"), "/a/b/c.fidl");
    }

    #[test]
    fn test_normalize_resolves_dot_segments() {
        assert_eq!(normalize_absolute("/a/./b/../c.fidl"), "/a/c.fidl");
        assert_eq!(normalize_absolute("/../x.fidl"), "/x.fidl");
    }

    #[test]
    fn test_resolve_relative_against_base() {
        assert_eq!(
            resolve_import("/project/interfaces", "types/Common.fidl"),
            "/project/interfaces/types/Common.fidl"
        );
        assert_eq!(
            resolve_import("/project/interfaces", "../Common.fidl"),
            "/project/Common.fidl"
        );
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        assert_eq!(
            resolve_import("/project", "/other/Common.fidl"),
            "/other/Common.fidl"
        );
        assert_eq!(
            resolve_import("/project", "C:\\other\\Common.fidl"),
            "/other/Common.fidl"
        );
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("/a/b/c.fidl"), "/a/b");
        assert_eq!(parent_dir("c.fidl"), "");
    }
}
