// ABOUTME: Project generation module for the init scaffolding tool
// ABOUTME: Turns a language template and project settings into files on disk

pub mod error;
pub mod git;
pub mod scaffolder;
pub mod settings;

pub use error::{Result, ScaffoldError};
pub use scaffolder::{Plan, PlannedFile, ScaffoldReport, Scaffolder};
pub use settings::ProjectSettings;
