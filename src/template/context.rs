// ABOUTME: Placeholder values made available to template files
// ABOUTME: Derives the lowercase project name and exposes the context as JSON for rendering

use chrono::{Datelike, Utc};
use serde::Serialize;

use super::error::{Result, TemplateError};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    pub project_name: String,
    pub project_name_lower: String,
    pub author: String,
    pub project_description: String,
    pub year: String,
    pub extras: Vec<String>,
}

impl TemplateContext {
    pub fn new(project_name: &str, author: &str, project_description: &str) -> Self {
        Self {
            project_name: project_name.to_string(),
            project_name_lower: project_name_lower(project_name),
            author: author.to_string(),
            project_description: project_description.to_string(),
            year: Utc::now().year().to_string(),
            extras: Vec::new(),
        }
    }

    /// Record the selected extras so templates can test for them
    pub fn with_extras(mut self, extras: &[String]) -> Self {
        self.extras = extras.to_vec();
        self
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TemplateError::JsonError)
    }
}

/// ASCII-lowercase `name` with spaces replaced by underscores
pub fn project_name_lower(name: &str) -> String {
    name.to_ascii_lowercase().replace(' ', "_")
}
