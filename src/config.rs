//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for mdpage.
///
/// Every flag has a default, so the tool runs with no arguments: it reads
/// `statement.md` and writes `statement/index.html`.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdpage", version, about, long_about = None)]
pub struct Config {
    /// Markdown source file
    #[arg(default_value = "statement.md")]
    pub source: PathBuf,

    /// Output directory (page is written as index.html inside it)
    #[arg(short, long, default_value = "statement")]
    pub output: PathBuf,

    /// Page title, also shown in the header badge
    #[arg(long, default_value = "Statement")]
    pub title: String,

    /// Page description for head metadata
    #[arg(long)]
    pub description: Option<String>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the source file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.source.exists() {
            bail!("Source file does not exist: {}", self.source.display());
        }

        Ok(())
    }
}
