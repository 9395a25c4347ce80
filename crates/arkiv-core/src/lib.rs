//! Arkiv core library — storage-facing file manager logic.
//!
//! `arkiv-core` is the conflict-aware browsing and mutation layer of the
//! Arkiv web file manager. It is intentionally decoupled from any HTTP
//! framework: routing, rendering, and authentication live in the host, which
//! talks to this crate through plain values, and all durable state lives
//! behind the [`storage::Storage`] capability.
//!
//! # Modules
//!
//! - [`browse`] — Folder listings ([`FolderView`]), file snapshots
//!   ([`FileEntry`]), and the directory tree for move-target pickers.
//! - [`mutate`] — Preconditioned create/delete/rename/move operations.
//! - [`upload`] — Batch upload reconciliation (skip on collision, never
//!   overwrite).
//! - [`path`] — Path sanitization confining every caller-supplied path to
//!   the storage base.
//! - [`storage`] / [`mime`] — The external capability boundaries.
//! - [`config`] — TOML-based configuration (public base URL).
//! - [`error`] — [`OperationError`] and the per-call [`Diagnostics`]
//!   accumulator.
//!
//! # Error model
//!
//! Expected failures — precondition violations, storage rejections, per-file
//! upload trouble — are never raised as errors in the `Result` sense. Each
//! operation returns a plain success flag (or count) and appends
//! human-readable diagnostics to a caller-owned [`Diagnostics`] value. One
//! `Diagnostics` belongs to one logical operation cycle; concurrent cycles
//! need one each.

pub mod browse;
pub mod config;
pub mod error;
pub mod mime;
pub mod mutate;
pub mod path;
pub mod storage;
pub mod upload;

pub use browse::{
    relative_path, Breadcrumb, Browser, FileEntry, FolderView, Subfolder, TreeEntry, ROOT_LABEL,
};
pub use config::{Config, ConfigError};
pub use error::{Diagnostics, OperationError};
pub use mime::{ExtensionMime, MimeLookup};
pub use mutate::Mutator;
pub use path::sanitize;
pub use storage::Storage;
pub use upload::{save_uploaded_files, IncomingFile};

/// Normalises a string to NFC (composed) form.
///
/// macOS produces NFD (decomposed) filenames, and browsers running there
/// declare upload names the same way, which makes accented characters and
/// Korean Hangul arrive as separate combining marks. This helper re-composes
/// them before names are displayed or persisted.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
