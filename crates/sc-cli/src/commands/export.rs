//! Export command
//!
//! Export an article's comment thread to JSON or Markdown.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use sc_core::export::ExportManager;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::SourceArgs;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
    /// Nested Markdown blockquotes
    Markdown,
}

impl ExportFormat {
    /// Name of the exporter for this format
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::JsonCompact => "json-compact",
            ExportFormat::Markdown => "markdown",
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Article slug
    pub article: String,

    /// Export format
    #[arg(long, short, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let source = super::open_source(&args.source, config_path)?;
    let thread = source
        .load_article(&args.article)
        .with_context(|| format!("Failed to load comments for '{}'", args.article))?;

    eprintln!(
        "Exporting '{}' ({} comments)...",
        thread.article.cyan(),
        thread.count().to_string().yellow()
    );

    let export_manager = ExportManager::new();

    if let Some(output_path) = args.output {
        let written = export_manager
            .export_to_file(&thread, args.format.name(), &output_path)
            .with_context(|| format!("Failed to write to {}", output_path.display()))?;
        eprintln!("{} Exported to {}", "✓".green(), written.display());
    } else {
        let output = export_manager.export(&thread, args.format.name())?;
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_values() {
        assert!(ExportFormat::from_str("json", true).is_ok());
        assert!(ExportFormat::from_str("json-compact", true).is_ok());
        assert!(ExportFormat::from_str("markdown", true).is_ok());
        assert!(ExportFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_format_names_are_registered() {
        let manager = ExportManager::new();
        for format in ExportFormat::value_variants() {
            assert!(manager.has_format(format.name()));
        }
    }
}
