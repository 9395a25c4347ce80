//! Core configuration loaded from a TOML file.
//!
//! The defaults cover a host that serves uploads from the site's own origin;
//! a deployment that fronts the storage base with a CDN sets
//! `public_base_url`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for path derivation.
///
/// All fields have defaults, so the core works without a config file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL prefixed onto every file's relative path to form its
    /// public `web_path`. Empty means same-origin.
    #[serde(default)]
    pub public_base_url: String,
}

/// Failure to read or parse a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// The TOML is malformed.
    #[error("config parse error: {0}")]
    Parse(String),

    /// Any other I/O failure while reading the file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the file does not exist.
    /// - [`ConfigError::Parse`] if the TOML is malformed.
    /// - [`ConfigError::Io`] for any other read failure.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_base_url_is_empty() {
        let config = Config::default();
        assert_eq!(config.public_base_url, "");
    }

    #[test]
    fn load_reads_base_url() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("arkiv.toml");
        fs::write(&file, "public_base_url = \"https://cdn.example.com\"\n").unwrap();

        let config = Config::load(&file).unwrap();
        assert_eq!(config.public_base_url, "https://cdn.example.com");
    }

    #[test]
    fn load_applies_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("arkiv.toml");
        fs::write(&file, "").unwrap();

        let config = Config::load(&file).unwrap();
        assert_eq!(config.public_base_url, "");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_malformed_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("arkiv.toml");
        fs::write(&file, "public_base_url = [not toml").unwrap();

        let err = Config::load(&file).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
