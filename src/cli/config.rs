// ABOUTME: Configuration management for the init application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Author used when --author is not given
    #[serde(default)]
    pub author: Option<String>,

    /// Extras selected when --extras is not given
    #[serde(default)]
    pub default_extras: Vec<String>,

    #[serde(default = "default_git")]
    pub git: bool,

    /// Directory replacing the built-in template catalog
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_git() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: None,
            default_extras: Vec::new(),
            git: default_git(),
            template_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => bail!("config file {} does not exist", p.display()),
            Some(p) => Some(p),
            None => Self::find_config_file(),
        };

        let mut config = match config_path {
            Some(p) => {
                let contents = std::fs::read_to_string(&p)?;
                Self::from_yaml(&contents)?
            }
            None => Config::default(),
        };

        config.merge_env();
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let possible_paths = [
            PathBuf::from("init.yaml"),
            PathBuf::from("init.yml"),
            PathBuf::from(".init.yaml"),
            PathBuf::from(".init.yml"),
        ];

        if let Some(path) = possible_paths.into_iter().find(|p| p.exists()) {
            return Some(path);
        }

        dirs::home_dir()
            .map(|home| home.join(".init").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(author) = std::env::var("INIT_AUTHOR") {
            self.author = Some(author);
        }
        if let Ok(dir) = std::env::var("INIT_TEMPLATE_DIR") {
            self.template_dir = Some(PathBuf::from(dir));
        }
        if let Ok(level) = std::env::var("INIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("INIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}
