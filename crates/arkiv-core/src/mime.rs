//! MIME type lookup capability.
//!
//! The browser never inspects file contents; the type shown for a file is
//! whatever the lookup collaborator derives from its extension. Hosts can
//! plug in their own table, [`ExtensionMime`] is the stock implementation.

/// Extension-keyed MIME lookup.
pub trait MimeLookup {
    /// Returns the MIME type for `extension` (without the leading dot).
    ///
    /// What an unknown extension yields is up to the implementation;
    /// [`ExtensionMime`] returns the empty string.
    fn find_type(&self, extension: &str) -> String;
}

/// [`MimeLookup`] backed by the `mime_guess` registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionMime;

impl MimeLookup for ExtensionMime {
    fn find_type(&self, extension: &str) -> String {
        mime_guess::from_ext(&extension.to_ascii_lowercase())
            .first()
            .map(|mime| mime.to_string())
            .unwrap_or_default()
    }
}
