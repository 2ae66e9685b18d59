//! Slug command
//!
//! Show the identifier a comment file would receive under the active configuration.

use anyhow::{Context, Result};
use clap::Args;
use sc_core::CommentFactory;
use std::path::Path;

/// Arguments for the slug command
#[derive(Debug, Args)]
pub struct SlugArgs {
    /// Comment file names (paths are reduced to their file name)
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Execute the slug command
pub fn execute(args: SlugArgs, config_path: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let factory = CommentFactory::from_config(&config).context("Invalid slug configuration")?;

    for name in &args.names {
        let file_name = Path::new(name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        println!("{}\t{}", name, factory.slug_for(&file_name));
    }

    Ok(())
}
