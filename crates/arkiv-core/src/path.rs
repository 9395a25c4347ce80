//! Virtual path handling.
//!
//! Every path this crate hands to the storage capability is in canonical
//! form: exactly one leading `/`, no trailing `/` (except the root itself),
//! no `..` anywhere. [`sanitize`] produces that form from arbitrary caller
//! input and is applied at the public API boundary before any storage call.
//! Interior slashes are left as the caller wrote them; path consumers skip
//! empty segments.

/// Confines a caller-supplied folder or file path to the storage root.
///
/// Every literal `..` substring is stripped (wherever it appears, so simple
/// traversal attempts are defeated regardless of position), leading and
/// trailing `/` are trimmed, and exactly one leading `/` is prefixed.
///
/// The stripped result is additionally resolved segment by segment; a path
/// that would still escape the root collapses to `"/"`. Stripping alone
/// already guarantees that, but the resolution check does not rely on it.
///
/// Never fails: `""`, `"/"` and `"///"` all come back as `"/"`.
///
/// # Examples
///
/// ```
/// use arkiv_core::path::sanitize;
///
/// assert_eq!(sanitize("../../etc/passwd"), "/etc/passwd");
/// assert_eq!(sanitize("docs/reports/"), "/docs/reports");
/// assert_eq!(sanitize("///"), "/");
/// ```
pub fn sanitize(raw: &str) -> String {
    let stripped = raw.replace("..", "");
    let path = format!("/{}", stripped.trim_matches('/'));
    if escapes_root(&path) {
        return "/".to_string();
    }
    path
}

/// Walks `path` segment by segment, treating `..` as "pop one level", and
/// reports whether the walk ever climbs above the root.
fn escapes_root(path: &str) -> bool {
    let mut depth: usize = 0;
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if depth == 0 {
                    return true;
                }
                depth -= 1;
            }
            _ => depth += 1,
        }
    }
    false
}

/// Returns the last segment of `path`; empty for the root.
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Joins a canonical folder path and a child name without doubling slashes.
pub fn join(folder: &str, name: &str) -> String {
    if folder == "/" {
        format!("/{name}")
    } else {
        format!("{folder}/{name}")
    }
}

/// Returns the extension of a file *name* (not a path), without the dot.
/// Names with no dot yield the empty string.
pub fn extension(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// Whether `name` can be used as a single path segment: non-empty, no `/`,
/// and not the `.`/`..` pseudo-entries.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

/// Prefixes one `/` if the storage backend returned a relative path.
pub(crate) fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Non-empty segments of a canonical path, in order. The root has none.
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
