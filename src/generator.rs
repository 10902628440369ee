//! Build orchestration: read the source, render, write the page.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::markdown::render_markdown;
use crate::page::render_page;

/// Builds the page described by the configuration.
///
/// Reads the markdown source, renders it to an HTML fragment, wraps the
/// fragment in the page template, and writes the result as `index.html`
/// inside the output directory, creating the directory if needed.
///
/// # Arguments
///
/// * `config`: Source, output, and page metadata settings
///
/// # Returns
///
/// Path of the written page
///
/// # Errors
///
/// Returns error if the source cannot be read or the output cannot be
/// written. Rendering itself never fails.
pub fn generate(config: &Config) -> Result<PathBuf> {
    let markdown = fs::read_to_string(&config.source)
        .with_context(|| format!("Failed to read source file: {}", config.source.display()))?;

    let content = render_markdown(&markdown);
    let html = render_page(&config.title, config.description.as_deref(), &content);

    fs::create_dir_all(&config.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output.display()
        )
    })?;

    let output_path = config.output.join("index.html");
    fs::write(&output_path, html.into_string())
        .with_context(|| format!("Failed to write page to {}", output_path.display()))?;

    Ok(output_path)
}
