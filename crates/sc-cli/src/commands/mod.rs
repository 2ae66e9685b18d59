//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod count;
pub mod export;
pub mod slug;
pub mod tree;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sc_core::config::Config;
use sc_storage::FileSystemSource;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "static-comments.toml";

/// static-comments - threaded comments for static sites
#[derive(Debug, Parser)]
#[command(name = "static-comments")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "STATIC_COMMENTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print comment threads as trees
    Tree(tree::TreeArgs),

    /// Count comments per article
    Count(count::CountArgs),

    /// Export one article's thread
    Export(export::ExportArgs),

    /// Show the slug file names would receive
    Slug(slug::SlugArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Comment directory override shared by reading commands
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Comment directory (one subdirectory per article)
    #[arg(long, short)]
    pub source: Option<PathBuf>,
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Tree(args) => tree::execute(args, config_path),
        Commands::Count(args) => count::execute(args, config_path),
        Commands::Export(args) => export::execute(args, config_path),
        Commands::Slug(args) => slug::execute(args, config_path),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Per-user configuration file
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "static-comments", "static-comments")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Configuration file in effect: explicit path, local file, then user file
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    user_config_path().filter(|path| path.exists())
}

/// Load the configuration in effect, falling back to defaults
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match resolve_config_path(explicit) {
        Some(path) => {
            debug!("Loading configuration from {:?}", path);
            Config::load(&path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Open the comment source described by the configuration and overrides
pub fn open_source(args: &SourceArgs, config_path: Option<&Path>) -> Result<FileSystemSource> {
    let mut config = load_config(config_path)?;
    if let Some(source) = &args.source {
        config.comments.source_dir = source.clone();
    }
    FileSystemSource::from_config(&config).context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let path = PathBuf::from("/tmp/custom.toml");
        assert_eq!(resolve_config_path(Some(path.as_path())), Some(path.clone()));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        assert!(load_config(Some(Path::new("/nonexistent/static-comments.toml"))).is_err());
    }
}
