//! File entry representation.

use std::time::SystemTime;

use serde::Serialize;

/// Metadata snapshot of a single file.
///
/// `FileEntry` is immutable — entries are rebuilt from storage on every
/// listing rather than mutated in place, so a held value can go stale but
/// never lie about what it saw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileEntry {
    pub(crate) name: String,
    pub(crate) full_path: String,
    pub(crate) web_path: String,
    pub(crate) mime_type: String,
    pub(crate) size: u64,
    pub(crate) modified: Option<SystemTime>,
    pub(crate) relative_path: String,
}

impl FileEntry {
    /// Base name of the file, NFC-normalized.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path within the storage base, with a leading `/`.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Fully qualified public URL (configured base URL + relative path).
    pub fn web_path(&self) -> &str {
        &self.web_path
    }

    /// MIME type looked up from the extension; empty when unknown.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// File size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Last-modified time, if the backend tracks one.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Public serving path (`/storage/...`), spaces percent-encoded.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileEntry {
        FileEntry {
            name: "report.pdf".to_string(),
            full_path: "/docs/report.pdf".to_string(),
            web_path: "https://cdn.example.com/storage/docs/report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            size: 2048,
            modified: Some(SystemTime::UNIX_EPOCH),
            relative_path: "/storage/docs/report.pdf".to_string(),
        }
    }

    #[test]
    fn accessors_expose_the_snapshot() {
        let entry = sample();
        assert_eq!(entry.name(), "report.pdf");
        assert_eq!(entry.full_path(), "/docs/report.pdf");
        assert_eq!(entry.mime_type(), "application/pdf");
        assert_eq!(entry.size(), 2048);
        assert_eq!(entry.modified(), Some(SystemTime::UNIX_EPOCH));
        assert_eq!(entry.relative_path(), "/storage/docs/report.pdf");
        assert!(entry.web_path().ends_with(entry.relative_path()));
    }

    #[test]
    fn entries_compare_by_value() {
        assert_eq!(sample(), sample());
        let mut other = sample();
        other.size = 1;
        assert_ne!(sample(), other);
    }
}
