// ABOUTME: Command implementations for the init CLI
// ABOUTME: Lists languages and extras and creates projects, printing results to stdout

use anyhow::Result;
use tracing::info;

use crate::catalog::{Catalog, Manifest};
use crate::scaffold::{ProjectSettings, ScaffoldReport, Scaffolder};

/// Print every language in the catalog
pub async fn list_languages(catalog: &Catalog) -> Result<()> {
    let languages = catalog.languages().await?;
    print!("{}", format_languages(&languages));
    Ok(())
}

/// Print the extras a language offers
pub async fn list_extras(catalog: &Catalog, language: &str) -> Result<()> {
    let manifest = catalog.manifest(language).await?;
    print!("{}", format_extras(language, &manifest));
    Ok(())
}

/// Generate a project and print a summary or JSON report
pub async fn create_project(
    scaffolder: Scaffolder,
    settings: &ProjectSettings,
    json: bool,
) -> Result<()> {
    info!(
        "Initialising {} project '{}' in {}",
        settings.language,
        settings.name,
        settings.folder.display()
    );

    let report = scaffolder.run(settings).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_summary(&report));
    }

    Ok(())
}

pub fn format_languages(languages: &[String]) -> String {
    let mut output = String::from("init currently supports the following languages:\n\n");
    for language in languages {
        output.push_str(&format!("  - {}\n", language));
    }
    output
}

pub fn format_extras(language: &str, manifest: &Manifest) -> String {
    let mut output = format!("available extras for {}:\n\n", language);

    let width = manifest
        .extras
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0)
        + 8;

    if manifest.extras.is_empty() {
        output.push_str("  - none\n");
    }
    for extra in &manifest.extras {
        output.push_str(&format!(
            "  - {:width$}{}\n",
            extra.name,
            extra.description,
            width = width
        ));
    }

    output
}

pub fn format_summary(report: &ScaffoldReport) -> String {
    let mut output = format!(
        "Created {} project '{}' in {}\n",
        report.language,
        report.project_name,
        report.folder.display()
    );

    if !report.extras.is_empty() {
        output.push_str(&format!("  Extras: {}\n", report.extras.join(", ")));
    }
    if report.git_initialized {
        output.push_str("  Initialised empty git repository\n");
    }
    for file in &report.files {
        output.push_str(&format!("  + {}\n", file));
    }

    output
}
