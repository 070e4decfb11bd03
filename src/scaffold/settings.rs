// ABOUTME: Resolved settings for a project about to be generated
// ABOUTME: Derives the project name and target folder from the name argument and working directory

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::error::{Result, ScaffoldError};

#[derive(Debug, Clone, Serialize)]
pub struct ProjectSettings {
    pub language: String,
    pub name: String,
    /// Folder name as given on the command line, spaces removed
    pub folder_name: String,
    /// Absolute location the project is generated into
    pub folder: PathBuf,
    pub author: String,
    pub description: String,
    pub extras: Vec<String>,
    pub git: bool,
    pub force: bool,
}

impl ProjectSettings {
    /// Resolve name and folder.
    ///
    /// Without a name, or with `.`, the project is generated into
    /// `working_dir` and named after it. Otherwise the name is used verbatim
    /// and the folder is the name with its spaces removed.
    pub fn resolve(language: &str, name: Option<&str>, working_dir: &Path) -> Result<Self> {
        let explicit = name.filter(|n| *n != ".");

        let project_name = match explicit {
            Some(n) if n.trim().is_empty() => return Err(ScaffoldError::EmptyName),
            Some(n) => n.to_string(),
            None => working_dir
                .file_name()
                .and_then(|n| n.to_str())
                .map(String::from)
                .ok_or_else(|| ScaffoldError::UnnamedDirectory(working_dir.to_path_buf()))?,
        };

        let folder_name = name.unwrap_or(".").replace(' ', "");
        let folder = if folder_name == "." {
            working_dir.to_path_buf()
        } else {
            working_dir.join(&folder_name)
        };

        Ok(Self {
            language: language.to_string(),
            name: project_name,
            folder_name,
            folder,
            author: String::new(),
            description: String::new(),
            extras: Vec::new(),
            git: true,
            force: false,
        })
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Selected extras, duplicates dropped, first occurrence order kept
    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.clear();
        for extra in extras {
            let extra = extra.into();
            if !self.extras.contains(&extra) {
                self.extras.push(extra);
            }
        }
        self
    }

    pub fn with_git(mut self, git: bool) -> Self {
        self.git = git;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}
