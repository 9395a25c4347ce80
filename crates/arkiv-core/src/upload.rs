//! Upload batch reconciliation.
//!
//! A batch is processed item by item in arrival order, and a failing item
//! never aborts the rest: collisions and storage rejections are recorded in
//! the caller's [`Diagnostics`] and the loop moves on. Partial success is
//! the normal case.

use crate::error::{Diagnostics, OperationError};
use crate::nfc_string;
use crate::path;
use crate::storage::Storage;

/// One file payload of an upload batch.
///
/// `name` is whatever the client declared for the file; it is hardened
/// before use (see [`save_uploaded_files`]).
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Persists an upload batch into `folder`, returning how many files made it.
///
/// The target name of each payload is the NFC-normalized base name of its
/// declared name — path components a client smuggles into the filename are
/// dropped. A payload is skipped (with a diagnostic) when its name is
/// unusable, when a file of that name already exists in the folder, or when
/// the storage backend refuses the write. Existing files are never
/// overwritten.
pub fn save_uploaded_files(
    storage: &dyn Storage,
    files: &[IncomingFile],
    folder: &str,
    diag: &mut Diagnostics,
) -> usize {
    let folder = path::sanitize(folder);
    let mut saved = 0;

    for file in files {
        let name = nfc_string(path::base_name(&file.name));
        if !path::is_valid_name(&name) {
            diag.push(OperationError::UploadFailed(file.name.clone()));
            continue;
        }
        if storage.exists(&path::join(&folder, &name)) {
            diag.push(OperationError::NameTaken(name));
            continue;
        }
        if storage.store(&folder, &name, &file.contents) {
            saved += 1;
        } else {
            tracing::warn!("failed to store upload: {}", path::join(&folder, &name));
            diag.push(OperationError::UploadFailed(name));
        }
    }

    saved
}
