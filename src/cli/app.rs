// ABOUTME: Main application orchestration for the init CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Config};
use crate::catalog::Catalog;
use crate::scaffold::{ProjectSettings, Scaffolder};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create application from parsed arguments, loading the configuration they point at
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) {
        let log_level = if verbose {
            "debug"
        } else {
            self.config.logging.level.as_str()
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        let installed = match self.config.logging.format.as_str() {
            "compact" => tracing_subscriber::fmt()
                .compact()
                .with_env_filter(env_filter)
                .with_ansi(!no_color)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(!no_color)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init(),
        };

        if installed.is_err() {
            debug!("Global subscriber already installed, keeping it");
        }
        debug!("Logging initialized with level: {}", log_level);
    }

    /// Catalog from --templates, the configured template_dir, or the built-in one
    pub fn catalog(&self, templates: Option<PathBuf>) -> Result<Catalog> {
        match templates.or_else(|| self.config.template_dir.clone()) {
            Some(dir) => Ok(Catalog::from_directory(dir)?),
            None => Ok(Catalog::embedded()),
        }
    }

    /// Combine arguments and configuration into the settings of the new project
    pub fn project_settings(&self, args: &Args, working_dir: &Path) -> Result<ProjectSettings> {
        let author = args
            .author
            .clone()
            .or_else(|| self.config.author.clone())
            .unwrap_or_default();

        let extras = if args.extras.is_empty() {
            self.config.default_extras.clone()
        } else {
            args.extras.clone()
        };

        let settings =
            ProjectSettings::resolve(&args.language, args.name.as_deref(), working_dir)?
                .with_author(author)
                .with_description(args.description.clone().unwrap_or_default())
                .with_extras(extras)
                .with_git(!args.no_git && self.config.git)
                .with_force(args.force);

        Ok(settings)
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color);

        info!("Starting init v{}", crate::VERSION);
        debug!("Configuration loaded from: {:?}", args.config);

        let catalog = self.catalog(args.templates.clone())?;
        debug!("Using {}", catalog.describe());

        if args.lists_languages() {
            return commands::list_languages(&catalog).await;
        }

        if args.list_extras {
            return commands::list_extras(&catalog, &args.language).await;
        }

        let working_dir = std::env::current_dir()?;
        let settings = self.project_settings(&args, &working_dir)?;
        debug!("Resolved project settings: {:?}", settings);

        commands::create_project(Scaffolder::new(catalog), &settings, args.json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(list: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("init").chain(list.iter().copied())).unwrap()
    }

    #[test]
    fn test_config_fills_missing_arguments() {
        let config = Config {
            author: Some("Config Author".to_string()),
            default_extras: vec!["pytest".to_string()],
            git: false,
            ..Config::default()
        };
        let app = App::new(config);

        let settings = app
            .project_settings(&args(&["python", "demo"]), Path::new("/work"))
            .unwrap();

        assert_eq!(settings.author, "Config Author");
        assert_eq!(settings.extras, vec!["pytest"]);
        assert!(!settings.git);
    }

    #[test]
    fn test_arguments_override_config() {
        let config = Config {
            author: Some("Config Author".to_string()),
            default_extras: vec!["pytest".to_string()],
            ..Config::default()
        };
        let app = App::new(config);

        let settings = app
            .project_settings(
                &args(&["python", "demo", "-a", "Cli Author", "-e", "cli", "--no-git"]),
                Path::new("/work"),
            )
            .unwrap();

        assert_eq!(settings.author, "Cli Author");
        assert_eq!(settings.extras, vec!["cli"]);
        assert!(!settings.git);
        assert_eq!(settings.folder, Path::new("/work/demo"));
    }

    #[test]
    fn test_catalog_selection() {
        let app = App::new(Config::default());
        assert_eq!(app.catalog(None).unwrap().describe(), "embedded templates");
        assert!(app.catalog(Some(PathBuf::from("/no/such/dir"))).is_err());
    }
}
