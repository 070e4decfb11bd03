// ABOUTME: Error types for project generation
// ABOUTME: Wraps catalog and template failures and adds filesystem and git errors

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to render '{file}': {source}")]
    Render {
        file: String,
        #[source]
        source: TemplateError,
    },

    #[error(
        "unknown extras for {language}: {} (available: {})",
        .unknown.join(", "),
        list_or_none(.available)
    )]
    UnknownExtras {
        language: String,
        unknown: Vec<String>,
        available: Vec<String>,
    },

    #[error("{} already exists, pass --force to overwrite", .0.display())]
    FileExists(PathBuf),

    #[error("generated path '{0}' would be written outside the project folder")]
    PathEscapesProject(String),

    #[error("two templates would both generate '{0}'")]
    DuplicateDestination(String),

    #[error("project name must not be empty")]
    EmptyName,

    #[error("cannot infer a project name from {}, pass one explicitly", .0.display())]
    UnnamedDirectory(PathBuf),

    #[error("git init failed: {0}. Install git or pass --no-git")]
    Git(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
