// ABOUTME: Handlebars helper functions for template rendering
// ABOUTME: Implements case conversion, timestamps and fallback values for template files

use chrono::Utc;
use handlebars::{Context, Handlebars, Helper, Output, RenderContext, RenderError};

/// Timestamp helper - formats current time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d");

    out.write(&Utc::now().format(format).to_string())?;
    Ok(())
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = string_param(h, "upper")?;
    out.write(&input.to_uppercase())?;
    Ok(())
}

/// Lowercase helper
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = string_param(h, "lower")?;
    out.write(&input.to_lowercase())?;
    Ok(())
}

/// Snake case helper - `My Cool-App` becomes `my_cool_app`
pub fn snake_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = string_param(h, "snake")?;
    out.write(&separate_words(input, '_'))?;
    Ok(())
}

/// Kebab case helper - `My Cool_App` becomes `my-cool-app`
pub fn kebab_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = string_param(h, "kebab")?;
    out.write(&separate_words(input, '-'))?;
    Ok(())
}

/// Default helper - provides default value if variable is empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");

    let default_value = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("default helper requires default value parameter"))?;

    let result = if value.is_empty() {
        default_value
    } else {
        value
    };

    out.write(result)?;
    Ok(())
}

fn string_param<'a>(h: &'a Helper, helper: &str) -> std::result::Result<&'a str, RenderError> {
    h.param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new(format!("{} helper requires input parameter", helper)))
}

/// Lowercase `input` and join its alphanumeric runs with `separator`
pub fn separate_words(input: &str, separator: char) -> String {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("snake", Box::new(snake_helper));
    handlebars.register_helper("kebab", Box::new(kebab_helper));
    handlebars.register_helper("default", Box::new(default_helper));
}

#[cfg(test)]
mod tests {
    use super::*;
    use handlebars::Handlebars;

    fn create_test_handlebars() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        register_helpers(&mut handlebars);
        handlebars
    }

    #[test]
    fn test_timestamp_helper() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template("{{timestamp}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result.len(), 10);

        let year = handlebars
            .render_template("{{timestamp \"%Y\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(year.len(), 4);
    }

    #[test]
    fn test_case_helpers() {
        let handlebars = create_test_handlebars();
        let context = serde_json::json!({ "projectName": "My Cool-App" });

        let render = |template: &str| handlebars.render_template(template, &context).unwrap();

        assert_eq!(render("{{upper projectName}}"), "MY COOL-APP");
        assert_eq!(render("{{lower projectName}}"), "my cool-app");
        assert_eq!(render("{{snake projectName}}"), "my_cool_app");
        assert_eq!(render("{{kebab projectName}}"), "my-cool-app");
    }

    #[test]
    fn test_case_helper_requires_string() {
        let handlebars = create_test_handlebars();
        let result = handlebars.render_template("{{snake 42}}", &serde_json::json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_helper() {
        let handlebars = create_test_handlebars();
        let result = handlebars
            .render_template(
                "{{default author \"Anonymous\"}}",
                &serde_json::json!({ "author": "" }),
            )
            .unwrap();
        assert_eq!(result, "Anonymous");

        let result2 = handlebars
            .render_template(
                "{{default author \"Anonymous\"}}",
                &serde_json::json!({ "author": "Ada" }),
            )
            .unwrap();
        assert_eq!(result2, "Ada");
    }

    #[test]
    fn test_separate_words() {
        assert_eq!(separate_words("  Hello   World!! ", '_'), "hello_world");
        assert_eq!(separate_words("already-kebab", '-'), "already-kebab");
        assert_eq!(separate_words("", '-'), "");
    }
}
