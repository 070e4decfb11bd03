// ABOUTME: Project generator tying the catalog, template engine and git together
// ABOUTME: Plans which files a language produces, then renders and writes them into the project folder

use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

use super::error::{Result, ScaffoldError};
use super::git;
use super::settings::ProjectSettings;
use crate::catalog::manifest::is_relative_path;
use crate::catalog::{Catalog, Manifest};
use crate::template::{extra_names, TemplateContext, TemplateEngine};

#[derive(Debug, Clone)]
pub struct PlannedFile {
    /// Path of the template inside the language folder
    pub template: String,
    /// Rendered path relative to the project folder
    pub relative: String,
    pub destination: PathBuf,
    pub has_extras: bool,
}

#[derive(Debug, Clone)]
pub struct Plan {
    pub manifest: Manifest,
    pub context: TemplateContext,
    pub files: Vec<PlannedFile>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub language: String,
    pub folder: PathBuf,
    pub extras: Vec<String>,
    pub files: Vec<String>,
    pub git_initialized: bool,
}

pub struct Scaffolder {
    catalog: Catalog,
    engine: TemplateEngine,
}

impl Scaffolder {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            engine: TemplateEngine::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate the language and extras and work out every file to generate
    pub async fn plan(&self, settings: &ProjectSettings) -> Result<Plan> {
        let manifest = self.catalog.manifest(&settings.language).await?;

        let unknown: Vec<String> = settings
            .extras
            .iter()
            .filter(|e| manifest.extra(e).is_none())
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(ScaffoldError::UnknownExtras {
                language: settings.language.clone(),
                unknown,
                available: manifest.extra_names().into_iter().map(String::from).collect(),
            });
        }

        let context =
            TemplateContext::new(&settings.name, &settings.author, &settings.description)
                .with_extras(&settings.extras);

        let mut files: Vec<PlannedFile> = Vec::new();
        for template in manifest.files_for(&settings.extras) {
            let relative = self
                .engine
                .render_path(template, &context)
                .map_err(|source| ScaffoldError::Render {
                    file: template.to_string(),
                    source,
                })?;

            if !is_relative_path(&relative) {
                return Err(ScaffoldError::PathEscapesProject(relative));
            }
            if files.iter().any(|f| f.relative == relative) {
                return Err(ScaffoldError::DuplicateDestination(relative));
            }

            files.push(PlannedFile {
                template: template.to_string(),
                destination: settings.folder.join(&relative),
                relative,
                has_extras: manifest.contains_extras(template),
            });
        }

        debug!(
            "Planned {} files for {} project '{}'",
            files.len(),
            settings.language,
            settings.name
        );

        Ok(Plan {
            manifest,
            context,
            files,
        })
    }

    /// Generate the project described by `settings`
    pub async fn run(&self, settings: &ProjectSettings) -> Result<ScaffoldReport> {
        let plan = self.plan(settings).await?;

        if !settings.force {
            if let Some(existing) = plan.files.iter().find(|f| f.destination.exists()) {
                return Err(ScaffoldError::FileExists(existing.destination.clone()));
            }
        }

        // Render everything before touching the filesystem
        let mut rendered = Vec::with_capacity(plan.files.len());
        for file in &plan.files {
            rendered.push((file, self.render(&settings.language, file, &plan).await?));
        }

        if settings.git {
            git::init_repository(&settings.folder).await?;
            info!("Initialised git repository in {}", settings.folder.display());
        }

        let mut written = Vec::with_capacity(rendered.len());
        for (file, contents) in rendered {
            if let Some(parent) = file.destination.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&file.destination, contents).await?;

            debug!("Created {}", file.destination.display());
            written.push(file.relative.clone());
        }

        info!(
            "Created {} project '{}' with {} files",
            plan.manifest.language,
            settings.name,
            written.len()
        );

        Ok(ScaffoldReport {
            project_name: settings.name.clone(),
            language: settings.language.clone(),
            folder: settings.folder.clone(),
            extras: settings.extras.clone(),
            files: written,
            git_initialized: settings.git,
        })
    }

    async fn render(&self, language: &str, file: &PlannedFile, plan: &Plan) -> Result<String> {
        let template = self.catalog.template(language, &file.template).await?;

        if file.has_extras {
            for name in extra_names(&template) {
                if plan.manifest.extra(&name).is_none() {
                    warn!(
                        "{} references extra '{}' which {} does not declare",
                        file.template, name, language
                    );
                }
            }
        }

        self.engine
            .render_file(&template, &plan.context, file.has_extras)
            .map_err(|source| ScaffoldError::Render {
                file: file.template.clone(),
                source,
            })
    }
}
