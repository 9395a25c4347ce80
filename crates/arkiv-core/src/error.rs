//! Error types for `arkiv-core`.
//!
//! Expected failures in this crate are **values, not control flow**: every
//! precondition violation or storage rejection is appended to a
//! [`Diagnostics`] accumulator supplied by the caller, alongside a plain
//! `false` (or a reduced count, for uploads) return. Nothing here is ever
//! propagated as a panic or used like an exception.

/// A single failed precondition or storage rejection.
///
/// Each variant renders to the human-readable message a frontend shows the
/// user; the path or name that triggered the failure is always included.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    /// The target path already exists.
    #[error("{0} already exists")]
    AlreadyExists(String),

    /// A directory still has files or subdirectories in it.
    #[error("{0} must be empty before it can be deleted")]
    NotEmpty(String),

    /// The target path does not exist.
    #[error("{0} does not exist")]
    NotFound(String),

    /// A rename target name is already taken within the same folder.
    #[error("{0} already exists in this folder")]
    NameTaken(String),

    /// A name is not a valid single path segment (empty, contains `/`,
    /// or is `.`/`..`).
    #[error("{0} is not a valid name")]
    InvalidName(String),

    /// A move where source and destination are the same path.
    #[error("{0} is already at that location")]
    SamePath(String),

    /// A folder move that would place the folder inside itself.
    #[error("{0} cannot be moved into one of its own subfolders")]
    NestedMove(String),

    /// The storage backend refused the operation without further detail.
    #[error("the storage backend rejected the operation on {0}")]
    StorageRejected(String),

    /// One file of an upload batch could not be persisted.
    #[error("{0} could not be uploaded")]
    UploadFailed(String),
}

/// Accumulator for the failures of one logical operation.
///
/// A `Diagnostics` value is created by the caller, passed to browse/mutate/
/// upload calls, and inspected afterwards. It is append-only while an
/// operation runs; the caller decides when a new operation cycle starts and
/// calls [`Diagnostics::clear`] (or drops the value) between cycles.
///
/// One value belongs to exactly one logical operation at a time. Sharing it
/// across concurrently running operations is not supported — give each its
/// own instance.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<OperationError>,
}

impl Diagnostics {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one failure.
    pub fn push(&mut self, error: OperationError) {
        self.errors.push(error);
    }

    /// Returns all failures recorded so far, in the order they occurred.
    pub fn errors(&self) -> &[OperationError] {
        &self.errors
    }

    /// Renders every recorded failure to its display message.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    /// Returns `true` if nothing failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Empties the accumulator for the next operation cycle.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}
