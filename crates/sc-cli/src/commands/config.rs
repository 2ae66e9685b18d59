//! Config command
//!
//! Show and create static-comments configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use sc_core::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration in effect
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print which configuration file is used
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(json, config_path),
        ConfigCommand::Init { force } => init_config(force, config_path),
        ConfigCommand::Path => show_path(config_path),
    }
}

fn show_config(as_json: bool, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let config = super::load_config(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let origin = super::resolve_config_path(config_path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string());
        println!("{}", "Configuration:".bold().underline());
        println!("{}", origin.dimmed());
        println!();
        println!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(force: bool, config_path: Option<&Path>) -> Result<()> {
    use colored::Colorize;

    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(super::LOCAL_CONFIG_FILE));

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let content = Config::default().to_toml_string()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

fn show_path(config_path: Option<&Path>) -> Result<()> {
    match super::resolve_config_path(config_path) {
        Some(path) => println!("{}", path.display()),
        None => println!("(defaults)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/static-comments.toml");

        init_config(false, Some(path.as_path())).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.comments.source_dir, PathBuf::from("comments"));

        assert!(init_config(false, Some(path.as_path())).is_err());
        assert!(init_config(true, Some(path.as_path())).is_ok());
    }
}
