// ABOUTME: Main library module for the init project scaffolding tool
// ABOUTME: Exports all core modules and provides the public API

pub mod catalog;
pub mod cli;
pub mod scaffold;
pub mod template;

// Re-export commonly used types
pub use catalog::{Catalog, Manifest};
pub use cli::{App, Args, Config};
pub use scaffold::{ProjectSettings, ScaffoldReport, Scaffolder};
pub use template::TemplateEngine;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
