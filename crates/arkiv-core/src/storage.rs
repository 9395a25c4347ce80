//! The storage capability boundary.
//!
//! All durable state lives behind [`Storage`]; this crate owns no on-disk
//! layout of its own. Implementations are expected to be backed by a single
//! storage base (a local directory, a bucket, ...) and to address entries by
//! the canonical absolute paths produced by [`crate::path::sanitize`], with
//! `"/"` naming the base itself.
//!
//! Mutations report plain success booleans. The capability owns its own I/O
//! error semantics; a failure surfaces to this crate as `false`, never as a
//! panic or an error type. Existence pre-checks made by the callers of this
//! trait and the mutating call that follows them are separate invocations
//! with no atomicity between them — a backend mutated concurrently by
//! another actor can win that race, and this crate does not try to close
//! the window.

use std::time::SystemTime;

/// Filesystem-shaped capability the core delegates every durable
/// operation to.
pub trait Storage {
    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Immediate child directories of `path`, in backend enumeration order.
    fn directories(&self, path: &str) -> Vec<String>;

    /// Immediate child files of `path`, in backend enumeration order.
    fn files(&self, path: &str) -> Vec<String>;

    /// Every directory below `root`, recursively, in backend enumeration
    /// order. No ordering guarantee is implied; callers must not assume one.
    fn all_directories(&self, root: &str) -> Vec<String>;

    /// File size in bytes; `0` when the backend cannot tell.
    fn size(&self, path: &str) -> u64;

    /// Last modification time, if the backend tracks one.
    fn last_modified(&self, path: &str) -> Option<SystemTime>;

    /// Creates a directory (and any missing parents).
    fn make_directory(&self, path: &str) -> bool;

    /// Removes a directory.
    fn delete_directory(&self, path: &str) -> bool;

    /// Removes a file.
    fn delete(&self, path: &str) -> bool;

    /// Renames or moves a file or directory.
    fn rename(&self, from: &str, to: &str) -> bool;

    /// Persists `contents` as `dir/name`.
    fn store(&self, dir: &str, name: &str, contents: &[u8]) -> bool;
}
