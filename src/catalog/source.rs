// ABOUTME: Template sources backing the catalog
// ABOUTME: Serves template files from the binary's embedded data or from a directory on disk

use async_trait::async_trait;
use include_dir::{include_dir, Dir};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;
use walkdir::WalkDir;

use super::error::{CatalogError, Result};
use super::MANIFEST_FILE;

static EMBEDDED_TEMPLATES: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/data");

#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Sorted names of the language folders holding a manifest
    async fn languages(&self) -> Result<Vec<String>>;

    /// Read a file by its path relative to the catalog root
    async fn read(&self, path: &str) -> Result<String>;

    fn describe(&self) -> String;
}

pub struct EmbeddedSource {
    dir: &'static Dir<'static>,
}

impl EmbeddedSource {
    pub fn new() -> Self {
        Self {
            dir: &EMBEDDED_TEMPLATES,
        }
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateSource for EmbeddedSource {
    async fn languages(&self) -> Result<Vec<String>> {
        let mut languages: Vec<String> = self
            .dir
            .dirs()
            .filter_map(|d| d.path().file_name().and_then(|n| n.to_str()))
            .filter(|name| {
                self.dir
                    .get_file(format!("{}/{}", name, MANIFEST_FILE))
                    .is_some()
            })
            .map(String::from)
            .collect();

        languages.sort();
        Ok(languages)
    }

    async fn read(&self, path: &str) -> Result<String> {
        let file = self
            .dir
            .get_file(path)
            .ok_or_else(|| CatalogError::FileNotFound(path.to_string()))?;

        file.contents_utf8()
            .map(String::from)
            .ok_or_else(|| CatalogError::NotUtf8(path.to_string()))
    }

    fn describe(&self) -> String {
        "embedded templates".to_string()
    }
}

pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateSource for DirectorySource {
    async fn languages(&self) -> Result<Vec<String>> {
        let mut languages = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                CatalogError::IoError(
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("filesystem loop")),
                )
            })?;

            if !entry.file_type().is_dir() || !entry.path().join(MANIFEST_FILE).is_file() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                languages.push(name.to_string());
            }
        }

        languages.sort();
        debug!(
            "Found {} languages in {}",
            languages.len(),
            self.root.display()
        );
        Ok(languages)
    }

    async fn read(&self, path: &str) -> Result<String> {
        let bytes = match tokio::fs::read(self.root.join(path)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CatalogError::FileNotFound(path.to_string()))
            }
            Err(e) => return Err(CatalogError::IoError(e)),
        };

        String::from_utf8(bytes).map_err(|_| CatalogError::NotUtf8(path.to_string()))
    }

    fn describe(&self) -> String {
        format!("templates in {}", self.root.display())
    }
}
