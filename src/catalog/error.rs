// ABOUTME: Error types for template catalog operations
// ABOUTME: Covers unknown languages, missing template files and malformed manifests

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("language '{0}' is not supported, try `init list` to list supported languages")]
    UnsupportedLanguage(String),

    #[error("invalid language name '{0}': only alphabetic characters are allowed")]
    InvalidLanguageName(String),

    #[error("template file not found: {0}")]
    FileNotFound(String),

    #[error("template file is not valid UTF-8: {0}")]
    NotUtf8(String),

    #[error("failed to parse manifest for '{language}': {source}")]
    ManifestParse {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest for '{language}': {reason}")]
    InvalidManifest { language: String, reason: String },

    #[error("template directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
