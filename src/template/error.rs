// ABOUTME: Error types for template engine operations
// ABOUTME: Defines errors for extra-block processing and placeholder rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Template syntax error: {0}")]
    SyntaxError(String),

    #[error("Extra block '{name}' opened on line {line} is never closed")]
    UnterminatedExtra { name: String, line: usize },

    #[error("Unexpected #!endExtra on line {line}")]
    UnexpectedEndExtra { line: usize },

    #[error("Malformed #!startExtra marker on line {line}, expected #!startExtra \"name\"")]
    MalformedMarker { line: usize },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
