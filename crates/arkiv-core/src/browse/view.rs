//! View values returned by the browser.
//!
//! These are plain serializable snapshots a web layer can hand straight to
//! its JSON responses; they are built on demand and hold no live state.

use serde::Serialize;

use super::entry::FileEntry;

/// One step of the ancestor trail shown above a folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Absolute folder path (`/` for the root crumb).
    pub path: String,
    /// Display label; the root is always labeled `Root`.
    pub label: String,
}

/// An immediate child directory of the browsed folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subfolder {
    /// Absolute path with a leading `/`.
    pub path: String,
    /// Display name (the last path segment).
    pub name: String,
}

/// The result of browsing one folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderView {
    /// Sanitized absolute path of the browsed folder.
    pub folder: String,
    /// Display name of the folder itself; `Root` at the top.
    pub folder_name: String,
    /// Ancestor trail, root first. The browsed folder has no crumb of its
    /// own — its label is `folder_name`.
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Immediate child directories, in backend enumeration order.
    pub subfolders: Vec<Subfolder>,
    /// Immediate child files, hidden entries excluded.
    pub files: Vec<FileEntry>,
    /// `subfolders.len() + files.len()`.
    pub items_count: usize,
}

/// One row of the full directory tree used by move-target pickers.
///
/// The label carries its own indentation (four spaces per path segment) so a
/// flat `<select>` renders as a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    /// Absolute path with a leading `/`.
    pub path: String,
    /// Indented display label.
    pub label: String,
}
