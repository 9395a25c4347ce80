//! Read-only browsing over the storage capability.

use crate::config::Config;
use crate::mime::MimeLookup;
use crate::nfc_string;
use crate::path;
use crate::storage::Storage;

use super::entry::FileEntry;
use super::view::{Breadcrumb, FolderView, Subfolder, TreeEntry};

/// Display label of the storage root.
pub const ROOT_LABEL: &str = "Root";

/// Prefix under which the host publicly serves stored files.
const PUBLIC_PREFIX: &str = "/storage";

/// Derives the public serving path for a stored file.
///
/// Only spaces are percent-encoded; every other character is passed through
/// verbatim. Frontends rely on that exact shape — this is not a general
/// URL-encoder.
pub fn relative_path(full_path: &str) -> String {
    format!(
        "{PUBLIC_PREFIX}/{}",
        full_path.trim_start_matches('/').replace(' ', "%20")
    )
}

/// Folder listing and directory-tree enumeration.
///
/// Browsing never fails: an absent or unreadable folder simply lists as
/// empty. All durable reads go through the [`Storage`] capability, MIME
/// types come from the [`MimeLookup`] collaborator.
pub struct Browser<'a> {
    storage: &'a dyn Storage,
    mime: &'a dyn MimeLookup,
    config: &'a Config,
}

impl<'a> Browser<'a> {
    pub fn new(storage: &'a dyn Storage, mime: &'a dyn MimeLookup, config: &'a Config) -> Self {
        Self {
            storage,
            mime,
            config,
        }
    }

    /// Builds the [`FolderView`] for `folder`.
    ///
    /// The folder argument is sanitized first, so any caller-supplied path is
    /// confined to the storage base. Breadcrumbs cover the ancestors only;
    /// the crumb for the browsed folder itself becomes `folder_name`.
    pub fn folder_info(&self, folder: &str) -> FolderView {
        let folder = path::sanitize(folder);

        let mut crumbs = vec![Breadcrumb {
            path: "/".to_string(),
            label: ROOT_LABEL.to_string(),
        }];
        let mut prefix = String::new();
        for segment in path::segments(&folder) {
            prefix.push('/');
            prefix.push_str(segment);
            crumbs.push(Breadcrumb {
                path: prefix.clone(),
                label: segment.to_string(),
            });
        }
        // The trail always has at least the root crumb; the last one names
        // the browsed folder and is not part of the returned ancestors.
        let folder_name = match crumbs.pop() {
            Some(current) => current.label,
            None => ROOT_LABEL.to_string(),
        };

        let subfolders: Vec<Subfolder> = self
            .storage
            .directories(&folder)
            .iter()
            .map(|raw| {
                let dir = path::ensure_leading_slash(raw);
                Subfolder {
                    name: path::base_name(&dir).to_string(),
                    path: dir,
                }
            })
            .collect();

        let files: Vec<FileEntry> = self
            .storage
            .files(&folder)
            .iter()
            .map(|raw| path::ensure_leading_slash(raw))
            .filter(|file| !path::base_name(file).starts_with('.'))
            .map(|file| self.file_details(&file))
            .collect();

        let items_count = subfolders.len() + files.len();
        FolderView {
            folder,
            folder_name,
            breadcrumbs: crumbs,
            subfolders,
            files,
            items_count,
        }
    }

    /// Enumerates every directory under the root for move-target pickers.
    ///
    /// The root itself is the first entry, labeled `Root` and unindented;
    /// every other label is indented four spaces per path segment. Entries
    /// keep the storage backend's enumeration order — no sorting happens
    /// here, and callers must not assume any.
    pub fn all_directories(&self) -> Vec<TreeEntry> {
        let mut tree = vec![TreeEntry {
            path: "/".to_string(),
            label: ROOT_LABEL.to_string(),
        }];
        for raw in self.storage.all_directories("/") {
            let dir = path::ensure_leading_slash(&raw);
            let depth = path::segments(&dir).count();
            let label = format!("{}{}", "    ".repeat(depth), path::base_name(&dir));
            tree.push(TreeEntry { path: dir, label });
        }
        tree
    }

    /// Expands one file path into its metadata snapshot.
    fn file_details(&self, full_path: &str) -> FileEntry {
        let name = nfc_string(path::base_name(full_path));
        let mime_type = self.mime.find_type(path::extension(&name));
        let relative_path = relative_path(full_path);
        FileEntry {
            web_path: format!("{}{relative_path}", self.config.public_base_url),
            relative_path,
            mime_type,
            size: self.storage.size(full_path),
            modified: self.storage.last_modified(full_path),
            full_path: full_path.to_string(),
            name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mime::ExtensionMime;
    use crate::storage::memory::MemoryStorage;

    fn browser_config() -> Config {
        Config {
            public_base_url: "https://files.example.com".to_string(),
        }
    }

    #[test]
    fn folder_info_of_root() {
        let storage = MemoryStorage::new();
        storage.add_dir("/docs");
        storage.add_file("/readme.txt", b"hello");
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let view = browser.folder_info("/");

        assert_eq!(view.folder, "/");
        assert_eq!(view.folder_name, "Root");
        assert!(view.breadcrumbs.is_empty());
        assert_eq!(view.subfolders.len(), 1);
        assert_eq!(view.subfolders[0].path, "/docs");
        assert_eq!(view.subfolders[0].name, "docs");
        assert_eq!(view.files.len(), 1);
        assert_eq!(view.items_count, 2);
    }

    #[test]
    fn breadcrumbs_cover_ancestors_only() {
        let storage = MemoryStorage::new();
        storage.add_dir("/a/b/c");
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let view = browser.folder_info("/a/b/c");

        assert_eq!(view.folder_name, "c");
        let trail: Vec<(&str, &str)> = view
            .breadcrumbs
            .iter()
            .map(|c| (c.path.as_str(), c.label.as_str()))
            .collect();
        assert_eq!(trail, vec![("/", "Root"), ("/a", "a"), ("/a/b", "b")]);
    }

    #[test]
    fn folder_argument_is_sanitized() {
        let storage = MemoryStorage::new();
        storage.add_dir("/docs");
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let view = browser.folder_info("../../docs/");
        assert_eq!(view.folder, "/docs");
    }

    #[test]
    fn hidden_files_are_excluded() {
        let storage = MemoryStorage::new();
        storage.add_file("/docs/.env", b"secret");
        storage.add_file("/docs/visible.txt", b"ok");
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let view = browser.folder_info("/docs");

        assert_eq!(view.files.len(), 1);
        assert_eq!(view.files[0].name(), "visible.txt");
        assert_eq!(view.items_count, view.subfolders.len() + view.files.len());
    }

    #[test]
    fn absent_folder_lists_empty() {
        let storage = MemoryStorage::new();
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let view = browser.folder_info("/nowhere");

        assert_eq!(view.folder, "/nowhere");
        assert_eq!(view.folder_name, "nowhere");
        assert!(view.subfolders.is_empty());
        assert!(view.files.is_empty());
        assert_eq!(view.items_count, 0);
    }

    #[test]
    fn file_entries_carry_metadata_and_urls() {
        let storage = MemoryStorage::new();
        storage.add_file("/docs/report.pdf", &[1u8; 64]);
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let view = browser.folder_info("/docs");
        let entry = &view.files[0];

        assert_eq!(entry.name(), "report.pdf");
        assert_eq!(entry.full_path(), "/docs/report.pdf");
        assert_eq!(entry.mime_type(), "application/pdf");
        assert_eq!(entry.size(), 64);
        assert!(entry.modified().is_some());
        assert_eq!(entry.relative_path(), "/storage/docs/report.pdf");
        assert_eq!(
            entry.web_path(),
            "https://files.example.com/storage/docs/report.pdf"
        );
    }

    #[test]
    fn relative_path_encodes_spaces_only() {
        assert_eq!(relative_path("/a b.txt"), "/storage/a%20b.txt");
        // Other reserved characters pass through untouched.
        assert_eq!(relative_path("/a&b#c.txt"), "/storage/a&b#c.txt");
        assert_eq!(relative_path("/ä ö.txt"), "/storage/ä%20ö.txt");
    }

    #[test]
    fn all_directories_starts_with_root_sentinel() {
        let storage = MemoryStorage::new();
        storage.add_dir("/b");
        storage.add_dir("/a");
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let tree = browser.all_directories();

        assert_eq!(tree[0].path, "/");
        assert_eq!(tree[0].label, "Root");
        // Backend enumeration order is passed through, not sorted.
        assert_eq!(tree[1].path, "/b");
        assert_eq!(tree[2].path, "/a");
    }

    #[test]
    fn tree_labels_indent_by_depth() {
        let storage = MemoryStorage::new();
        storage.add_dir("/a/b");
        let config = browser_config();
        let browser = Browser::new(&storage, &ExtensionMime, &config);

        let tree = browser.all_directories();

        assert_eq!(tree[1].label, "    a");
        assert_eq!(tree[2].label, "        b");
    }
}
