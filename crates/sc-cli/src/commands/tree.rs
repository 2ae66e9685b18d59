//! Tree command
//!
//! Print comment threads as indented trees.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sc_core::{CommentNode, CommentThread};
use std::path::Path;

use super::SourceArgs;

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Article slug (all articles if omitted)
    pub article: Option<String>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the tree command
pub fn execute(args: TreeArgs, config_path: Option<&Path>) -> Result<()> {
    let source = super::open_source(&args.source, config_path)?;

    let threads = match &args.article {
        Some(article) => vec![source.load_article(article)?],
        None => source.load_all()?,
    };

    if threads.is_empty() {
        eprintln!(
            "{} No comments found in {}",
            "⚠".yellow(),
            source.root().display()
        );
        return Ok(());
    }

    for thread in &threads {
        print!("{}", render_thread(thread));
    }

    Ok(())
}

/// Render a thread header followed by its comments
pub fn render_thread(thread: &CommentThread) -> String {
    let mut out = format!(
        "{} ({} comments)\n",
        thread.article.bold(),
        thread.count().to_string().yellow()
    );

    for root in &thread.roots {
        render_node(root, 1, &mut out);
    }

    for orphan in &thread.orphans {
        out.push_str(&format!("  {} orphaned reply {}\n", "⚠".yellow(), orphan));
    }

    out
}

fn render_node(node: &CommentNode, depth: usize, out: &mut String) {
    let replies = node.count_replies();
    out.push_str(&format!(
        "{}{} {} {}{}\n",
        "  ".repeat(depth),
        node.author.cyan(),
        node.date.format("%Y-%m-%d %H:%M").to_string().dimmed(),
        format!("[{}]", node.slug).dimmed(),
        match replies {
            0 => String::new(),
            1 => " (1 reply)".to_string(),
            n => format!(" ({} replies)", n),
        }
    ));

    for reply in &node.replies {
        render_node(reply, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::metadata::parse_date;
    use sc_core::CommentBuilder;

    fn comment(slug: &str, author: &str, reply_to: Option<&str>) -> CommentNode {
        let mut builder = CommentBuilder::new(slug)
            .author(author)
            .date(parse_date("2020-01-02 10:00").unwrap());
        if let Some(parent) = reply_to {
            builder = builder.reply_to(parent);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_render_thread() {
        colored::control::set_override(false);
        let mut thread = CommentThread::assemble(
            "hello",
            vec![
                comment("c1md", "Ada", None),
                comment("c2md", "Grace", Some("c1md")),
                comment("c3md", "Ken", Some("gone")),
            ],
        );
        thread.sort();

        let out = render_thread(&thread);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "hello (2 comments)");
        assert_eq!(lines[1], "  Ada 2020-01-02 10:00 [c1md] (1 reply)");
        assert_eq!(lines[2], "    Grace 2020-01-02 10:00 [c2md]");
        assert!(lines[3].contains("orphaned reply c3md"));
    }
}
