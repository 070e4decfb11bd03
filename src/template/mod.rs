// ABOUTME: Template rendering module for the init scaffolding tool
// ABOUTME: Handles optional extra blocks and placeholder substitution in template files

pub mod context;
pub mod engine;
pub mod error;
pub mod extras;
pub mod helpers;

pub use context::{project_name_lower, TemplateContext};
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
pub use extras::{extra_names, process_extras};
