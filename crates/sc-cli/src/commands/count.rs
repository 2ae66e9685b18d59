//! Count command
//!
//! Print the number of comments per article.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use super::SourceArgs;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Article slug (all articles if omitted)
    pub article: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the count command
pub fn execute(args: CountArgs, config_path: Option<&Path>) -> Result<()> {
    let source = super::open_source(&args.source, config_path)?;

    let threads = match &args.article {
        Some(article) => vec![source.load_article(article)?],
        None => source.load_all()?,
    };

    for thread in &threads {
        println!("{}\t{}", thread.article, thread.count());
    }

    Ok(())
}
