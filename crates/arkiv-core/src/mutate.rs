//! Preconditioned mutations of the storage tree.
//!
//! Every operation follows the same shape: sanitize the path where the
//! caller supplied it freehand, check the operation's precondition, then
//! make the storage call. A violated precondition appends one
//! [`OperationError`] to the caller's [`Diagnostics`] and returns `false`
//! without touching storage. A storage call that reports failure also
//! returns `false`, with a generic rejection diagnostic, since the
//! capability gives no further cause.
//!
//! The existence pre-check and the mutating call are two separate storage
//! calls. A backend mutated concurrently by another actor can change state
//! between them; this crate accepts that window rather than locking or
//! retrying (the capability offers no atomic primitive to close it with).

use crate::error::{Diagnostics, OperationError};
use crate::path;
use crate::storage::Storage;

/// Create/delete/rename/move operations, all conflict-checked.
pub struct Mutator<'a> {
    storage: &'a dyn Storage,
}

impl<'a> Mutator<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Creates `folder`, which must not already exist.
    pub fn create_directory(&self, folder: &str, diag: &mut Diagnostics) -> bool {
        let folder = path::sanitize(folder);
        if self.storage.exists(&folder) {
            diag.push(OperationError::AlreadyExists(folder));
            return false;
        }
        self.confirm(self.storage.make_directory(&folder), &folder, diag)
    }

    /// Deletes `folder`, which must contain no files and no subdirectories.
    ///
    /// Deletion is non-recursive: a populated folder is never removed,
    /// whatever the backend would allow.
    pub fn delete_directory(&self, folder: &str, diag: &mut Diagnostics) -> bool {
        let folder = path::sanitize(folder);
        if !self.storage.files(&folder).is_empty() || !self.storage.directories(&folder).is_empty()
        {
            diag.push(OperationError::NotEmpty(folder));
            return false;
        }
        self.confirm(self.storage.delete_directory(&folder), &folder, diag)
    }

    /// Deletes the file at `file`, which must exist.
    pub fn delete_file(&self, file: &str, diag: &mut Diagnostics) -> bool {
        let file = path::sanitize(file);
        if !self.storage.exists(&file) {
            diag.push(OperationError::NotFound(file));
            return false;
        }
        self.confirm(self.storage.delete(&file), &file, diag)
    }

    /// Renames `old_name` to `new_name` within `folder`.
    ///
    /// `new_name` must be a valid single-level name and must not already be
    /// taken in the folder.
    pub fn rename(
        &self,
        folder: &str,
        old_name: &str,
        new_name: &str,
        diag: &mut Diagnostics,
    ) -> bool {
        let folder = path::sanitize(folder);
        if !path::is_valid_name(new_name) {
            diag.push(OperationError::InvalidName(new_name.to_string()));
            return false;
        }
        let target = path::join(&folder, new_name);
        if self.storage.exists(&target) {
            diag.push(OperationError::NameTaken(new_name.to_string()));
            return false;
        }
        let source = path::join(&folder, old_name);
        self.confirm(self.storage.rename(&source, &target), &source, diag)
    }

    /// Moves a file from `current` to `new`, which must not already exist.
    ///
    /// Both arguments are taken verbatim — unlike every other operation they
    /// are **not** sanitized, since they come out of the directory-tree
    /// picker rather than freehand input. Callers passing unvalidated paths
    /// must sanitize first.
    pub fn move_file(&self, current: &str, new: &str, diag: &mut Diagnostics) -> bool {
        if self.storage.exists(new) {
            diag.push(OperationError::AlreadyExists(new.to_string()));
            return false;
        }
        self.confirm(self.storage.rename(current, new), current, diag)
    }

    /// Moves a folder from `current` to `new`.
    ///
    /// Rejects a move to the same path and any destination that starts with
    /// `current` — a folder cannot be placed inside itself. The prefix test
    /// is a plain string comparison, so a sibling whose name extends the
    /// source (`/a` → `/ab`) is also rejected. Arguments are not sanitized
    /// (see [`Self::move_file`]).
    pub fn move_folder(&self, current: &str, new: &str, diag: &mut Diagnostics) -> bool {
        if new == current {
            diag.push(OperationError::SamePath(current.to_string()));
            return false;
        }
        if new.starts_with(current) {
            diag.push(OperationError::NestedMove(current.to_string()));
            return false;
        }
        self.move_file(current, new, diag)
    }

    /// Folds a storage success flag into the diagnostics contract.
    fn confirm(&self, ok: bool, subject: &str, diag: &mut Diagnostics) -> bool {
        if !ok {
            tracing::warn!("storage backend rejected operation: {subject}");
            diag.push(OperationError::StorageRejected(subject.to_string()));
        }
        ok
    }
}
