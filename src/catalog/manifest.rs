// ABOUTME: Language manifest (init.json) data structures and validation
// ABOUTME: Describes which template files make up a language and its optional extras

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Component, Path};

use super::error::{CatalogError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub language: String,
    pub files: Vec<String>,
    #[serde(default)]
    pub files_containing_extras: Vec<String>,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extra {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<String>,
}

impl Manifest {
    /// Parse and validate the manifest of `language`
    pub fn parse(language: &str, json: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|source| CatalogError::ManifestParse {
                language: language.to_string(),
                source,
            })?;

        manifest.validate(language)?;
        Ok(manifest)
    }

    fn validate(&self, language: &str) -> Result<()> {
        let invalid = |reason: String| CatalogError::InvalidManifest {
            language: language.to_string(),
            reason,
        };

        let mut names = HashSet::new();
        for extra in &self.extras {
            if extra.name.trim().is_empty() {
                return Err(invalid("extra with an empty name".to_string()));
            }
            if !names.insert(extra.name.as_str()) {
                return Err(invalid(format!("duplicate extra '{}'", extra.name)));
            }
        }

        for file in self.all_files() {
            if !is_relative_path(file) {
                return Err(invalid(format!(
                    "template path '{}' must be relative and stay inside the language folder",
                    file
                )));
            }
        }

        let known: HashSet<&str> = self.all_files().collect();
        for file in &self.files_containing_extras {
            if !known.contains(file.as_str()) {
                return Err(invalid(format!(
                    "'{}' is listed in filesContainingExtras but is never generated",
                    file
                )));
            }
        }

        Ok(())
    }

    fn all_files(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .chain(self.extras.iter().flat_map(|e| e.files.iter()))
            .map(String::as_str)
    }

    pub fn extra(&self, name: &str) -> Option<&Extra> {
        self.extras.iter().find(|e| e.name == name)
    }

    pub fn extra_names(&self) -> Vec<&str> {
        self.extras.iter().map(|e| e.name.as_str()).collect()
    }

    /// Whether `file` has to go through extra-block processing
    pub fn contains_extras(&self, file: &str) -> bool {
        self.files_containing_extras.iter().any(|f| f == file)
    }

    /// Base files followed by the files of each selected extra, in manifest order
    pub fn files_for(&self, selected: &[String]) -> Vec<&str> {
        let mut seen = HashSet::new();
        let extra_files = self
            .extras
            .iter()
            .filter(|e| selected.contains(&e.name))
            .flat_map(|e| e.files.iter());

        self.files
            .iter()
            .chain(extra_files)
            .map(String::as_str)
            .filter(|f| seen.insert(*f))
            .collect()
    }
}

/// True when `path` is non-empty, relative and free of parent components
pub fn is_relative_path(path: &str) -> bool {
    let path = Path::new(path);
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "language": "Python",
        "files": ["setup.py", "{{projectNameLower}}/__init__.py"],
        "filesContainingExtras": ["setup.py"],
        "extras": [
            { "name": "pytest", "description": "tests", "files": ["tests/test_x.py"] },
            { "name": "cli", "files": ["{{projectNameLower}}/cli.py", "setup.py"] }
        ]
    }"#;

    #[test]
    fn test_parse_manifest() {
        let manifest = Manifest::parse("python", MANIFEST).unwrap();

        assert_eq!(manifest.language, "Python");
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.extra("pytest").unwrap().description, "tests");
        assert_eq!(manifest.extra("cli").unwrap().description, "");
        assert!(manifest.extra("missing").is_none());
    }

    #[test]
    fn test_optional_fields_default() {
        let manifest =
            Manifest::parse("plain", r#"{ "language": "Plain", "files": ["a.txt"] }"#).unwrap();

        assert!(manifest.extras.is_empty());
        assert!(manifest.files_containing_extras.is_empty());
        assert!(!manifest.contains_extras("a.txt"));
    }

    #[test]
    fn test_files_for_selected_extras() {
        let manifest = Manifest::parse("python", MANIFEST).unwrap();

        assert_eq!(
            manifest.files_for(&[]),
            vec!["setup.py", "{{projectNameLower}}/__init__.py"]
        );

        // setup.py is shared with the cli extra and must only appear once
        let files = manifest.files_for(&["cli".to_string(), "pytest".to_string()]);
        assert_eq!(
            files,
            vec![
                "setup.py",
                "{{projectNameLower}}/__init__.py",
                "tests/test_x.py",
                "{{projectNameLower}}/cli.py",
            ]
        );
    }

    #[test]
    fn test_duplicate_extra_rejected() {
        let json = r#"{
            "language": "X",
            "files": ["a"],
            "extras": [{ "name": "dup" }, { "name": "dup" }]
        }"#;
        let result = Manifest::parse("x", json);
        assert!(matches!(result, Err(CatalogError::InvalidManifest { .. })));
    }

    #[test]
    fn test_escaping_path_rejected() {
        for path in ["../outside.txt", "/etc/passwd", "a/../../b", ""] {
            let json = format!(r#"{{ "language": "X", "files": ["{}"] }}"#, path);
            let result = Manifest::parse("x", &json);
            assert!(
                matches!(result, Err(CatalogError::InvalidManifest { .. })),
                "accepted {:?}",
                path
            );
        }
    }

    #[test]
    fn test_unknown_extras_file_rejected() {
        let json = r#"{
            "language": "X",
            "files": ["a"],
            "filesContainingExtras": ["b"]
        }"#;
        let result = Manifest::parse("x", json);
        assert!(matches!(result, Err(CatalogError::InvalidManifest { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = Manifest::parse("x", "{ not json");
        assert!(matches!(result, Err(CatalogError::ManifestParse { .. })));
    }
}
