// ABOUTME: Template catalog module for the init scaffolding tool
// ABOUTME: Resolves language manifests and template files from embedded or on-disk sources

pub mod error;
pub mod manifest;
pub mod source;

pub use error::{CatalogError, Result};
pub use manifest::{Extra, Manifest};
pub use source::{DirectorySource, EmbeddedSource, TemplateSource};

use std::path::PathBuf;
use tracing::debug;

/// Name of the manifest file inside every language folder
pub const MANIFEST_FILE: &str = "init.json";

/// A set of language templates backed by a [`TemplateSource`]
pub struct Catalog {
    source: Box<dyn TemplateSource>,
}

impl Catalog {
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self { source }
    }

    /// Catalog compiled into the binary
    pub fn embedded() -> Self {
        Self::new(Box::new(EmbeddedSource::new()))
    }

    /// Catalog read from a directory laid out like the embedded one
    pub fn from_directory(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(CatalogError::MissingDirectory(root));
        }
        Ok(Self::new(Box::new(DirectorySource::new(root))))
    }

    /// Human readable description of where templates come from
    pub fn describe(&self) -> String {
        self.source.describe()
    }

    /// Sorted names of all languages with a manifest
    pub async fn languages(&self) -> Result<Vec<String>> {
        self.source.languages().await
    }

    /// Load and validate the manifest for `language`
    pub async fn manifest(&self, language: &str) -> Result<Manifest> {
        if !language.chars().all(char::is_alphabetic) {
            return Err(CatalogError::InvalidLanguageName(language.to_string()));
        }

        let languages = self.languages().await?;
        if !languages.iter().any(|l| l == language) {
            return Err(CatalogError::UnsupportedLanguage(language.to_string()));
        }

        let path = format!("{}/{}", language, MANIFEST_FILE);
        debug!("Loading manifest {} from {}", path, self.describe());
        let json = self.source.read(&path).await?;
        Manifest::parse(language, &json)
    }

    /// Contents of a template file with line endings normalised to LF
    pub async fn template(&self, language: &str, file: &str) -> Result<String> {
        let contents = self
            .source
            .read(&format!("{}/{}", language, file))
            .await?;
        Ok(contents.replace("\r\n", "\n"))
    }
}
