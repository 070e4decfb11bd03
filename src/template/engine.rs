// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Renders template files and template paths against a project's placeholder context

use handlebars::Handlebars;
use serde_json::Value as JsonValue;

use super::context::TemplateContext;
use super::error::{Result, TemplateError};
use super::extras::process_extras;
use super::helpers;

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in helpers
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Unknown placeholders render empty
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        // Output is source code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Render a template string with the given context
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let json_context = context.to_json()?;
        self.render_with_json(template, &json_context)
    }

    /// Render a template string with JSON context
    pub fn render_with_json(&self, template: &str, context: &JsonValue) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(TemplateError::RenderError)
    }

    /// Resolve the extra blocks of a template file, then render its placeholders
    pub fn render_file(
        &self,
        template: &str,
        context: &TemplateContext,
        has_extras: bool,
    ) -> Result<String> {
        if has_extras {
            let resolved = process_extras(template, &context.extras)?;
            self.render(&resolved, context)
        } else {
            self.render(template, context)
        }
    }

    /// Render the placeholders inside a template path
    pub fn render_path(&self, path: &str, context: &TemplateContext) -> Result<String> {
        if self.has_templates(path) {
            self.render(path, context)
        } else {
            Ok(path.to_string())
        }
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        match handlebars::Template::compile(template) {
            Ok(_) => Ok(()),
            Err(e) => Err(TemplateError::SyntaxError(e.to_string())),
        }
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
